use log::{info, warn};

use crate::query::{MutationState, QueryKey};
use crate::router::Route;

use super::state::CreateCommunityState;
use super::tasks;
use super::DevhubApp;

/// Query keys a route observes while it is shown.
pub(super) fn route_queries(route: &Route) -> Vec<QueryKey> {
    match route {
        Route::PostList => vec![QueryKey::posts()],
        Route::Post(post_id) => vec![QueryKey::post(*post_id)],
        Route::Communities => vec![QueryKey::communities()],
        Route::CreateCommunity | Route::NotFound(_) => Vec::new(),
    }
}

impl DevhubApp {
    /// Starts the fetch backing `key`. Callers go through the query cache
    /// first so that the entry is already flagged as fetching.
    pub(super) fn spawn_query(&mut self, key: &QueryKey) {
        let segments: Vec<&str> = key.segments().iter().map(String::as_str).collect();
        match segments.as_slice() {
            ["posts"] => tasks::load_posts(self.api.clone(), self.tx.clone()),
            ["communities"] => tasks::load_communities(self.api.clone(), self.tx.clone()),
            ["post", raw_id] => match raw_id.parse::<i64>() {
                Ok(post_id) => tasks::load_post(self.api.clone(), self.tx.clone(), post_id),
                Err(_) => warn!("no fetcher for query {key}"),
            },
            _ => warn!("no fetcher for query {key}"),
        }
    }

    pub(super) fn invalidate(&mut self, key: &QueryKey) {
        for stale in self.queries.invalidate(key) {
            self.spawn_query(&stale);
        }
    }

    pub(super) fn spawn_create_community(&mut self) {
        if !self.create_community.can_submit() {
            return;
        }
        let payload = match self.create_community.validate() {
            Ok(payload) => payload,
            Err(err) => {
                self.alert = Some(err.to_string());
                return;
            }
        };
        info!("creating community {:?}", payload.name);
        self.create_community.mutation = MutationState::Pending;
        tasks::create_community(self.api.clone(), self.tx.clone(), payload);
    }

    /// Moves to `route`, releasing the queries of the page left behind and
    /// subscribing the ones of the page entered.
    pub(crate) fn navigate(&mut self, route: Route) {
        if let Some(previous) = self.navigator.navigate(route) {
            self.unmount(&previous);
            self.mount_current();
        }
    }

    pub(crate) fn go_back(&mut self) {
        if let Some(previous) = self.navigator.back() {
            self.unmount(&previous);
            self.mount_current();
        }
    }

    pub(super) fn mount_current(&mut self) {
        let route = self.navigator.current().clone();
        if route == Route::CreateCommunity {
            self.create_community = CreateCommunityState::default();
        }
        for key in route_queries(&route) {
            if self.queries.subscribe(&key) {
                self.spawn_query(&key);
            }
        }
    }

    fn unmount(&mut self, route: &Route) {
        for key in route_queries(route) {
            self.queries.unsubscribe(&key);
        }
    }
}
