//! Client-side query cache.
//!
//! Entries are keyed by a [`QueryKey`] and track request status for the
//! views observing them. The cache never talks to the network itself: the
//! methods that may require a fetch report it to the caller, which runs
//! the fetch and hands the outcome back through [`QueryClient::resolve`].

use std::collections::HashMap;
use std::fmt;

use log::{debug, info};

use crate::models::{Community, Post};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    pub fn posts() -> Self {
        Self::new(["posts"])
    }

    pub fn post(post_id: i64) -> Self {
        Self::new(["post".to_string(), post_id.to_string()])
    }

    pub fn communities() -> Self {
        Self::new(["communities"])
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn starts_with(&self, prefix: &QueryKey) -> bool {
        self.0.starts_with(&prefix.0)
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum QueryData {
    Posts(Vec<Post>),
    Post(Option<Post>),
    Communities(Vec<Community>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryStatus {
    Pending,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct QueryState {
    pub status: QueryStatus,
    pub data: Option<QueryData>,
    pub error: Option<String>,
    pub is_fetching: bool,
    observers: usize,
    refetch_on_resolve: bool,
}

impl QueryState {
    fn new() -> Self {
        Self {
            status: QueryStatus::Pending,
            data: None,
            error: None,
            is_fetching: false,
            observers: 0,
            refetch_on_resolve: false,
        }
    }

    /// True only before the first result arrives.
    pub fn is_loading(&self) -> bool {
        self.status == QueryStatus::Pending
    }

    pub fn observers(&self) -> usize {
        self.observers
    }
}

#[derive(Debug, Default)]
pub struct QueryClient {
    entries: HashMap<QueryKey, QueryState>,
    invalidations: HashMap<QueryKey, u32>,
}

impl QueryClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &QueryKey) -> Option<&QueryState> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registers an observer. Returns `true` when the caller has to start a
    /// fetch for `key`, which happens only for a key not yet in the cache.
    pub fn subscribe(&mut self, key: &QueryKey) -> bool {
        let entry = self
            .entries
            .entry(key.clone())
            .or_insert_with(QueryState::new);
        entry.observers += 1;
        let needs_fetch = !entry.is_fetching && entry.status == QueryStatus::Pending;
        if needs_fetch {
            entry.is_fetching = true;
            debug!("query {key} fetching (observers={})", entry.observers);
        }
        needs_fetch
    }

    /// Drops an observer. An entry nobody observes is removed, unless a
    /// fetch is still out, in which case `resolve` removes it.
    pub fn unsubscribe(&mut self, key: &QueryKey) {
        let Some(entry) = self.entries.get_mut(key) else {
            return;
        };
        entry.observers = entry.observers.saturating_sub(1);
        if entry.observers == 0 && !entry.is_fetching {
            self.entries.remove(key);
            debug!("query {key} released");
        }
    }

    /// Stores the outcome of a fetch. Returns `true` when the entry was
    /// invalidated mid-flight and is still observed, so a new fetch has
    /// been started on the caller's behalf.
    pub fn resolve(&mut self, key: &QueryKey, result: Result<QueryData, String>) -> bool {
        let Some(entry) = self.entries.get_mut(key) else {
            debug!("dropping result for released query {key}");
            return false;
        };
        entry.is_fetching = false;
        match result {
            Ok(data) => {
                entry.status = QueryStatus::Success;
                entry.data = Some(data);
                entry.error = None;
            }
            Err(message) => {
                entry.status = QueryStatus::Error;
                entry.error = Some(message);
            }
        }

        if entry.observers == 0 {
            self.entries.remove(key);
            debug!("query {key} released after resolve");
            return false;
        }
        if std::mem::take(&mut entry.refetch_on_resolve) {
            entry.is_fetching = true;
            debug!("query {key} refetching after mid-flight invalidation");
            return true;
        }
        false
    }

    /// Invalidates every entry under `prefix`. Idle entries are returned,
    /// already flagged as fetching, and the caller must fetch each of them.
    /// Entries with a fetch in flight refetch once it resolves. Unobserved
    /// entries never linger, so every idle entry here has an observer.
    pub fn invalidate(&mut self, prefix: &QueryKey) -> Vec<QueryKey> {
        *self.invalidations.entry(prefix.clone()).or_insert(0) += 1;
        let mut refetch = Vec::new();
        for (key, entry) in self.entries.iter_mut() {
            if !key.starts_with(prefix) {
                continue;
            }
            if entry.is_fetching {
                entry.refetch_on_resolve = true;
            } else {
                entry.is_fetching = true;
                refetch.push(key.clone());
            }
        }
        info!("invalidated {prefix}: {} refetch(es)", refetch.len());
        refetch
    }

    pub fn invalidation_count(&self, key: &QueryKey) -> u32 {
        self.invalidations.get(key).copied().unwrap_or(0)
    }

    pub fn is_fetching_any(&self) -> bool {
        self.entries.values().any(|entry| entry.is_fetching)
    }
}

/// Request state of a single user-triggered write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MutationState {
    #[default]
    Idle,
    Pending,
    Success,
    Error(String),
}

impl MutationState {
    pub fn is_pending(&self) -> bool {
        matches!(self, MutationState::Pending)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, MutationState::Success)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            MutationState::Error(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn first_subscriber_triggers_one_fetch() {
        let mut client = QueryClient::new();
        let key = QueryKey::posts();
        assert!(client.subscribe(&key));
        assert!(!client.subscribe(&key));
        let state = client.get(&key).unwrap();
        assert!(state.is_loading());
        assert!(state.is_fetching);
        assert_eq!(state.observers(), 2);
    }

    #[test]
    fn loading_is_never_shown_again_after_resolve() {
        let mut client = QueryClient::new();
        let key = QueryKey::posts();
        client.subscribe(&key);
        assert!(!client.resolve(&key, Err("boom".into())));
        let state = client.get(&key).unwrap();
        assert_eq!(state.status, QueryStatus::Error);
        assert_eq!(state.error.as_deref(), Some("boom"));

        assert_eq!(client.invalidate(&QueryKey::posts()), vec![key.clone()]);
        let state = client.get(&key).unwrap();
        assert!(!state.is_loading());
        assert!(state.is_fetching);

        client.resolve(&key, Ok(QueryData::Posts(Vec::new())));
        let state = client.get(&key).unwrap();
        assert_eq!(state.status, QueryStatus::Success);
        assert_eq!(state.error, None);
        assert!(!state.is_loading());
    }

    #[test]
    fn invalidate_matches_by_prefix() {
        let mut client = QueryClient::new();
        for key in [QueryKey::post(1), QueryKey::post(2), QueryKey::posts()] {
            client.subscribe(&key);
            client.resolve(&key, Ok(QueryData::Post(None)));
        }
        let mut refetch = client.invalidate(&QueryKey::new(["post"]));
        refetch.sort_by_key(|key| key.to_string());
        assert_eq!(refetch, vec![QueryKey::post(1), QueryKey::post(2)]);
        assert!(!client.get(&QueryKey::posts()).unwrap().is_fetching);
    }

    #[test]
    fn invalidation_during_fetch_refetches_after_resolve() {
        let mut client = QueryClient::new();
        let key = QueryKey::communities();
        client.subscribe(&key);
        assert!(client.invalidate(&key).is_empty());
        assert!(client.resolve(&key, Ok(QueryData::Communities(Vec::new()))));
        assert!(client.get(&key).unwrap().is_fetching);
        assert!(!client.resolve(&key, Ok(QueryData::Communities(Vec::new()))));
        assert_eq!(client.invalidation_count(&key), 1);
    }

    #[test]
    fn unobserved_entries_are_released() {
        let mut client = QueryClient::new();
        let key = QueryKey::posts();
        client.subscribe(&key);
        client.unsubscribe(&key);
        assert!(client.get(&key).is_some(), "kept while fetch is in flight");
        assert!(!client.resolve(&key, Ok(QueryData::Posts(Vec::new()))));
        assert!(client.is_empty());

        client.subscribe(&key);
        client.resolve(&key, Ok(QueryData::Posts(Vec::new())));
        client.unsubscribe(&key);
        assert!(client.is_empty());
    }

    #[test]
    fn invalidating_unobserved_key_counts_but_fetches_nothing() {
        let mut client = QueryClient::new();
        assert!(client.invalidate(&QueryKey::communities()).is_empty());
        assert_eq!(client.invalidation_count(&QueryKey::communities()), 1);
        assert_eq!(client.invalidation_count(&QueryKey::posts()), 0);
    }

    #[test]
    fn mutation_state_helpers() {
        assert!(MutationState::Pending.is_pending());
        assert!(MutationState::Success.is_success());
        assert_eq!(MutationState::Error("nope".into()).error(), Some("nope"));
        assert_eq!(MutationState::Idle.error(), None);
    }
}
