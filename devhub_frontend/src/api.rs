use std::sync::Arc;

use log::debug;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::FrontendConfig;
use crate::error::ApiError;
use crate::models::{Community, CommunityInput, Post};
use crate::supabase::SupabaseStore;

pub const POSTS_TABLE: &str = "Posts";
pub const COMMUNITIES_TABLE: &str = "Communities";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub column: String,
    pub ascending: bool,
}

/// A read against one table of the managed store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectQuery {
    pub table: String,
    pub columns: String,
    pub order: Option<Order>,
    pub filters: Vec<(String, String)>,
    pub limit: Option<usize>,
}

impl SelectQuery {
    pub fn all(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: "*".to_string(),
            order: None,
            filters: Vec::new(),
            limit: None,
        }
    }

    pub fn order_by(mut self, column: impl Into<String>, ascending: bool) -> Self {
        self.order = Some(Order {
            column: column.into(),
            ascending,
        });
        self
    }

    pub fn eq(mut self, column: impl Into<String>, value: impl ToString) -> Self {
        self.filters.push((column.into(), value.to_string()));
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Query-string pairs in PostgREST syntax.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![("select".to_string(), self.columns.clone())];
        for (column, value) in &self.filters {
            pairs.push((column.clone(), format!("eq.{value}")));
        }
        if let Some(order) = &self.order {
            let direction = if order.ascending { "asc" } else { "desc" };
            pairs.push(("order".to_string(), format!("{}.{direction}", order.column)));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        pairs
    }
}

/// Row-level operations offered by the managed store. Implementations block
/// the calling thread, so callers run them off the UI thread.
pub trait DataStore: Send + Sync {
    fn insert(&self, table: &str, rows: &[Value]) -> Result<Vec<Value>, ApiError>;
    fn select(&self, query: &SelectQuery) -> Result<Vec<Value>, ApiError>;
}

#[derive(Clone)]
pub struct ApiClient {
    store: Arc<dyn DataStore>,
}

impl ApiClient {
    pub fn new(config: &FrontendConfig) -> Result<Self, ApiError> {
        let store = SupabaseStore::new(
            &config.supabase_url,
            &config.supabase_anon_key,
            config.request_timeout(),
        )?;
        Ok(Self::from_store(store))
    }

    pub fn from_store(store: impl DataStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        let query = SelectQuery::all(POSTS_TABLE).order_by("created_at", false);
        decode_rows(self.store.select(&query)?)
    }

    pub fn get_post(&self, post_id: i64) -> Result<Option<Post>, ApiError> {
        let query = SelectQuery::all(POSTS_TABLE).eq("id", post_id).limit(1);
        let mut posts: Vec<Post> = decode_rows(self.store.select(&query)?)?;
        Ok(if posts.is_empty() {
            None
        } else {
            Some(posts.swap_remove(0))
        })
    }

    pub fn list_communities(&self) -> Result<Vec<Community>, ApiError> {
        let query = SelectQuery::all(COMMUNITIES_TABLE).order_by("created_at", false);
        decode_rows(self.store.select(&query)?)
    }

    pub fn create_community(&self, input: &CommunityInput) -> Result<Vec<Community>, ApiError> {
        let row = serde_json::to_value(input)?;
        let inserted = self.store.insert(COMMUNITIES_TABLE, &[row])?;
        debug!("inserted {} community row(s)", inserted.len());
        decode_rows(inserted)
    }
}

fn decode_rows<T: DeserializeOwned>(rows: Vec<Value>) -> Result<Vec<T>, ApiError> {
    rows.into_iter()
        .map(|row| serde_json::from_value(row).map_err(ApiError::from))
        .collect()
}


#[cfg(test)]
mod tests {
    use super::testing::{Call, FakeStore};
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn select_query_renders_postgrest_pairs() {
        let query = SelectQuery::all("Posts")
            .eq("id", 5)
            .order_by("created_at", false)
            .limit(1);
        assert_eq!(
            query.to_query_pairs(),
            pairs(&[
                ("select", "*"),
                ("id", "eq.5"),
                ("order", "created_at.desc"),
                ("limit", "1"),
            ])
        );
    }

    #[test]
    fn list_posts_requests_newest_first() {
        let store = FakeStore::default();
        let client = ApiClient::from_store(store.clone());
        client.list_posts().unwrap();
        assert_eq!(
            store.calls(),
            vec![Call::Select(
                SelectQuery::all("Posts").order_by("created_at", false)
            )]
        );
    }

    #[test]
    fn create_community_inserts_exactly_one_row() {
        let store = FakeStore::default();
        let client = ApiClient::from_store(store.clone());
        let input = CommunityInput {
            name: "React Devs".into(),
            description: "A space for React.".into(),
        };
        let created = client.create_community(&input).unwrap();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].name, "React Devs");
        assert_eq!(
            store.calls(),
            vec![Call::Insert {
                table: "Communities".into(),
                rows: vec![json!({"name": "React Devs", "description": "A space for React."})],
            }]
        );
    }

    #[test]
    fn rows_with_null_columns_still_decode() {
        let store = FakeStore::with_rows(vec![json!({
            "id": 4,
            "title": null,
            "content": null,
            "image_url": null,
            "created_at": "2025-01-02T03:04:05+00:00",
            "avatar_url": null,
            "likes": null
        })]);
        let posts = ApiClient::from_store(store).list_posts().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, 4);
        assert_eq!(posts[0].likes, 0);
    }

    #[test]
    fn get_post_returns_none_when_no_row_matches() {
        let client = ApiClient::from_store(FakeStore::default());
        assert_eq!(client.get_post(42).unwrap(), None);
    }

    #[test]
    fn remote_failures_keep_the_store_message() {
        let store = FakeStore::default();
        store.fail_with("permission denied for table Posts");
        let client = ApiClient::from_store(store);
        let err = client.list_posts().unwrap_err();
        assert_eq!(err.to_string(), "permission denied for table Posts");
    }
}
