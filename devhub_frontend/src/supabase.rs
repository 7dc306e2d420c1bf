use std::time::Duration;

use log::debug;
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::{StatusCode, Url};
use serde_json::Value;

use crate::api::{DataStore, SelectQuery};
use crate::error::ApiError;

/// `DataStore` backed by a Supabase project's PostgREST endpoint.
pub struct SupabaseStore {
    base_url: String,
    anon_key: String,
    client: Client,
}

impl SupabaseStore {
    pub fn new(base_url: &str, anon_key: &str, timeout: Duration) -> Result<Self, ApiError> {
        let base_url = sanitize_base_url(base_url)?;
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url,
            anon_key: anon_key.to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn table_url(&self, table: &str) -> Result<Url, ApiError> {
        table_url(&self.base_url, table)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
    }
}

impl DataStore for SupabaseStore {
    fn insert(&self, table: &str, rows: &[Value]) -> Result<Vec<Value>, ApiError> {
        let url = self.table_url(table)?;
        debug!("POST {url} ({} row(s))", rows.len());
        let response = self
            .authorize(self.client.post(url))
            .header("Prefer", "return=representation")
            .json(rows)
            .send()?;
        read_rows(response)
    }

    fn select(&self, query: &SelectQuery) -> Result<Vec<Value>, ApiError> {
        let mut url = self.table_url(&query.table)?;
        url.query_pairs_mut().extend_pairs(query.to_query_pairs());
        debug!("GET {url}");
        let response = self.authorize(self.client.get(url)).send()?;
        read_rows(response)
    }
}

fn read_rows(response: Response) -> Result<Vec<Value>, ApiError> {
    let status = response.status();
    let body = response.text()?;
    if !status.is_success() {
        return Err(remote_error(status, &body));
    }
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    match serde_json::from_str::<Value>(&body)? {
        Value::Array(rows) => Ok(rows),
        other => Ok(vec![other]),
    }
}

/// Builds the error for a failed call, preferring the message the store
/// put in the body.
pub(crate) fn remote_error(status: StatusCode, body: &str) -> ApiError {
    let parsed = serde_json::from_str::<Value>(body).ok();
    let field = |name: &str| {
        parsed
            .as_ref()
            .and_then(|value| value.get(name))
            .and_then(Value::as_str)
            .map(str::to_string)
    };
    let code = field("code");
    let message = field("message")
        .or_else(|| field("error_description"))
        .or_else(|| field("error"))
        .or_else(|| {
            let trimmed = body.trim();
            (!trimmed.is_empty() && parsed.is_none()).then(|| trimmed.to_string())
        })
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        });
    ApiError::Remote {
        status: status.as_u16(),
        code,
        message,
    }
}

pub(crate) fn table_url(base_url: &str, table: &str) -> Result<Url, ApiError> {
    Url::parse(&format!("{base_url}/rest/v1/{table}"))
        .map_err(|err| ApiError::InvalidConfig(format!("invalid store URL: {err}")))
}

pub(crate) fn sanitize_base_url(raw: &str) -> Result<String, ApiError> {
    let mut base = raw.trim().to_string();
    if base.is_empty() {
        return Err(ApiError::InvalidConfig("store URL is empty".into()));
    }
    if !base.starts_with("http://") && !base.starts_with("https://") {
        base = format!("https://{base}");
    }
    while base.ends_with('/') {
        base.pop();
    }
    Url::parse(&base).map_err(|err| ApiError::InvalidConfig(format!("invalid store URL: {err}")))?;
    Ok(base)
}
