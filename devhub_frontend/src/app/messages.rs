use std::time::Instant;

use log::{error, info, warn};

use crate::error::ApiError;
use crate::models::Community;
use crate::query::{MutationState, QueryData, QueryKey};
use crate::router::Route;

use super::DevhubApp;

pub enum AppMessage {
    QueryResolved {
        key: QueryKey,
        result: Result<QueryData, ApiError>,
    },
    CommunityCreated(Result<Vec<Community>, ApiError>),
}

pub(super) fn process_messages(app: &mut DevhubApp) {
    while let Ok(message) = app.rx.try_recv() {
        handle_message(app, message);
    }
}

pub(super) fn handle_message(app: &mut DevhubApp, message: AppMessage) {
    match message {
        AppMessage::QueryResolved { key, result } => {
            let result = result.map_err(|err| {
                warn!("query {key} failed: {err}");
                err.to_string()
            });
            if app.queries.resolve(&key, result) {
                app.spawn_query(&key);
            }
        }
        AppMessage::CommunityCreated(result) => match result {
            Ok(rows) => {
                info!("community created ({} row(s))", rows.len());
                app.create_community.mutation = MutationState::Success;
                app.create_community.name.clear();
                app.create_community.description.clear();
                app.invalidate(&QueryKey::communities());
                let due = Instant::now() + app.config.redirect_delay();
                app.navigator.schedule(Route::Communities, due);
            }
            Err(err) => {
                error!("failed to create community: {err}");
                app.create_community.mutation = MutationState::Error(err.to_string());
            }
        },
    }
}
