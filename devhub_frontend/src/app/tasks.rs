use std::sync::mpsc::Sender;
use std::thread;

use log::error;

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::models::CommunityInput;
use crate::query::{QueryData, QueryKey};

use super::messages::AppMessage;

pub fn load_posts(client: ApiClient, tx: Sender<AppMessage>) {
    thread::spawn(move || {
        let result = client.list_posts().map(QueryData::Posts);
        send_query_result(&tx, QueryKey::posts(), result);
    });
}

pub fn load_post(client: ApiClient, tx: Sender<AppMessage>, post_id: i64) {
    thread::spawn(move || {
        let result = client.get_post(post_id).map(QueryData::Post);
        send_query_result(&tx, QueryKey::post(post_id), result);
    });
}

pub fn load_communities(client: ApiClient, tx: Sender<AppMessage>) {
    thread::spawn(move || {
        let result = client.list_communities().map(QueryData::Communities);
        send_query_result(&tx, QueryKey::communities(), result);
    });
}

pub fn create_community(client: ApiClient, tx: Sender<AppMessage>, payload: CommunityInput) {
    thread::spawn(move || {
        let result = client.create_community(&payload);
        if tx.send(AppMessage::CommunityCreated(result)).is_err() {
            error!("failed to send CommunityCreated message");
        }
    });
}

fn send_query_result(
    tx: &Sender<AppMessage>,
    key: QueryKey,
    result: Result<QueryData, ApiError>,
) {
    let message = AppMessage::QueryResolved { key, result };
    if tx.send(message).is_err() {
        error!("failed to send QueryResolved message");
    }
}
