use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use devhub_frontend::api::{ApiClient, DataStore, SelectQuery};
use devhub_frontend::error::ApiError;
use devhub_frontend::models::CommunityInput;
use devhub_frontend::query::{QueryClient, QueryData, QueryKey};
use devhub_frontend::router::{Navigator, Route};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

/// Keeps inserted community rows so later selects see them.
#[derive(Clone, Default)]
struct MemoryStore {
    communities: Arc<Mutex<Vec<Value>>>,
    inserts: Arc<Mutex<usize>>,
}

impl DataStore for MemoryStore {
    fn insert(&self, table: &str, rows: &[Value]) -> Result<Vec<Value>, ApiError> {
        if table != "Communities" {
            return Err(ApiError::remote(404, format!("relation \"{table}\" does not exist")));
        }
        *self.inserts.lock().unwrap() += 1;
        let mut stored = self.communities.lock().unwrap();
        let mut inserted = Vec::new();
        for row in rows {
            let mut row = row.clone();
            row["id"] = json!(stored.len() as i64 + 1);
            row["created_at"] = json!(format!("2025-01-0{}T00:00:00+00:00", stored.len() + 1));
            stored.insert(0, row.clone());
            inserted.push(row);
        }
        Ok(inserted)
    }

    fn select(&self, query: &SelectQuery) -> Result<Vec<Value>, ApiError> {
        match query.table.as_str() {
            "Communities" => Ok(self.communities.lock().unwrap().clone()),
            "Posts" => Ok(Vec::new()),
            other => Err(ApiError::remote(404, format!("relation \"{other}\" does not exist"))),
        }
    }
}

fn community_names(data: &Option<QueryData>) -> Vec<String> {
    match data {
        Some(QueryData::Communities(rows)) => rows.iter().map(|c| c.name.clone()).collect(),
        other => panic!("expected communities, got {other:?}"),
    }
}

#[test]
fn created_community_shows_up_after_invalidation() {
    let store = MemoryStore::default();
    let api = ApiClient::from_store(store.clone());
    let mut queries = QueryClient::new();
    let key = QueryKey::communities();

    assert!(queries.subscribe(&key));
    queries.resolve(&key, api.list_communities().map(QueryData::Communities).map_err(|e| e.to_string()));
    assert!(community_names(&queries.get(&key).unwrap().data).is_empty());

    let created = api
        .create_community(&CommunityInput {
            name: "React Devs".into(),
            description: "A space for React.".into(),
        })
        .unwrap();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].id, Some(1));
    assert_eq!(*store.inserts.lock().unwrap(), 1);

    let refetch = queries.invalidate(&key);
    assert_eq!(refetch, vec![key.clone()]);
    for stale in refetch {
        let result = api.list_communities().map(QueryData::Communities).map_err(|e| e.to_string());
        assert!(!queries.resolve(&stale, result));
    }
    assert_eq!(
        community_names(&queries.get(&key).unwrap().data),
        vec!["React Devs".to_string()]
    );
    assert_eq!(queries.invalidation_count(&key), 1);
}

#[test]
fn redirect_waits_for_the_configured_delay() {
    let mut navigator = Navigator::new(Route::parse("/create-community"));
    let start = Instant::now();
    navigator.schedule(Route::Communities, start + Duration::from_millis(1500));

    assert_eq!(navigator.take_due(start + Duration::from_millis(500)), None);
    let route = navigator
        .take_due(start + Duration::from_millis(1500))
        .expect("redirect is due");
    navigator.navigate(route);
    assert_eq!(navigator.current().path(), "/communities");
}

#[test]
fn unknown_table_errors_surface_store_message() {
    let store = MemoryStore::default();
    let err = store
        .select(&SelectQuery::all("Missing"))
        .unwrap_err();
    assert_eq!(err.to_string(), "relation \"Missing\" does not exist");
}
