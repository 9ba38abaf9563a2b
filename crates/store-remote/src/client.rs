//! HTTP client for the hosted row store.
//!
//! The store speaks a PostgREST-style API: rows are selected with column
//! filters in the query string, writes go through POST/PATCH with upsert
//! semantics controlled by the `Prefer` header.

use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{Result, StoreError};

/// Default timeout for API requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Error response body from the row store API.
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    message: String,
    #[serde(default)]
    code: Option<String>,
}

/// Client for the hosted row store REST API.
///
/// This client handles all communication with the remote store: row
/// selection, idempotent upserts, updates, and deletes.
#[derive(Debug, Clone)]
pub struct RowStoreClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RowStoreClient {
    /// Create a new row store client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The base URL of the store (e.g., "https://abc.supabase.co")
    /// * `api_key` - The project API key, sent as both apikey and bearer token
    pub fn new(base_url: &str, api_key: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Create headers for an API request.
    fn headers(&self, prefer: Option<&str>) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let key_value = HeaderValue::from_str(&self.api_key)
            .map_err(|_| StoreError::InvalidRequest("Invalid API key format".to_string()))?;
        headers.insert("apikey", key_value);

        let auth_value = HeaderValue::from_str(&format!("Bearer {}", self.api_key))
            .map_err(|_| StoreError::InvalidRequest("Invalid API key format".to_string()))?;
        headers.insert(AUTHORIZATION, auth_value);

        if let Some(prefer) = prefer {
            headers.insert(
                "Prefer",
                HeaderValue::from_str(prefer)
                    .map_err(|_| StoreError::InvalidRequest("Invalid Prefer header".to_string()))?,
            );
        }

        Ok(headers)
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    /// Parse a JSON row-set response body.
    async fn parse_rows<T: DeserializeOwned>(response: reqwest::Response) -> Result<Vec<T>> {
        let status = response.status();
        let body = response.text().await?;
        debug!("Store response ({}): {}", status, body);

        if !status.is_success() {
            if let Ok(error) = serde_json::from_str::<ApiErrorResponse>(&body) {
                let code = error.code.unwrap_or_default();
                return Err(StoreError::api(
                    status.as_u16(),
                    format!("{}: {}", code, error.message),
                ));
            }
            return Err(StoreError::api(
                status.as_u16(),
                format!("Request failed: {}", body),
            ));
        }

        serde_json::from_str(&body).map_err(|e| {
            log::error!(
                "Failed to deserialize store response. Body: {}, Error: {}",
                body,
                e
            );
            StoreError::api(status.as_u16(), format!("Failed to parse response: {}", e))
        })
    }

    /// Selects a single row by id. Returns `None` when no row matches.
    ///
    /// GET /rest/v1/{table}?id=eq.{id}
    pub async fn select_by_id<T: DeserializeOwned>(
        &self,
        table: &str,
        id: &str,
    ) -> Result<Option<T>> {
        let response = self
            .client
            .get(self.table_url(table))
            .headers(self.headers(None)?)
            .query(&[("id", format!("eq.{}", id).as_str()), ("select", "*")])
            .send()
            .await?;

        let rows: Vec<T> = Self::parse_rows(response).await?;
        Ok(rows.into_iter().next())
    }

    /// Lists rows with the given query-string filters.
    ///
    /// GET /rest/v1/{table}?{query}
    pub async fn list<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>> {
        let response = self
            .client
            .get(self.table_url(table))
            .headers(self.headers(None)?)
            .query(&[("select", "*")])
            .query(query)
            .send()
            .await?;

        Self::parse_rows(response).await
    }

    /// Inserts a row and returns the stored representation.
    ///
    /// POST /rest/v1/{table}
    pub async fn insert<In: Serialize, Out: DeserializeOwned>(
        &self,
        table: &str,
        row: &In,
    ) -> Result<Out> {
        let response = self
            .client
            .post(self.table_url(table))
            .headers(self.headers(Some("return=representation"))?)
            .json(row)
            .send()
            .await?;

        let rows: Vec<Out> = Self::parse_rows(response).await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| StoreError::api(500, "Insert returned no representation"))
    }

    /// Upserts a row keyed by its primary key and returns the stored
    /// representation. Replaying the same row is harmless.
    ///
    /// POST /rest/v1/{table} with merge-duplicates resolution
    pub async fn upsert<In: Serialize, Out: DeserializeOwned>(
        &self,
        table: &str,
        row: &In,
    ) -> Result<Out> {
        let response = self
            .client
            .post(self.table_url(table))
            .headers(self.headers(Some(
                "resolution=merge-duplicates,return=representation",
            ))?)
            .json(row)
            .send()
            .await?;

        let rows: Vec<Out> = Self::parse_rows(response).await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| StoreError::api(500, "Upsert returned no representation"))
    }

    /// Updates the row with the given id and returns the stored
    /// representation.
    ///
    /// PATCH /rest/v1/{table}?id=eq.{id}
    pub async fn update_by_id<In: Serialize, Out: DeserializeOwned>(
        &self,
        table: &str,
        id: &str,
        row: &In,
    ) -> Result<Out> {
        let response = self
            .client
            .patch(self.table_url(table))
            .headers(self.headers(Some("return=representation"))?)
            .query(&[("id", format!("eq.{}", id).as_str())])
            .json(row)
            .send()
            .await?;

        let rows: Vec<Out> = Self::parse_rows(response).await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| StoreError::api(404, format!("No row with id {}", id)))
    }

    /// Deletes the row with the given id. Returns the number of deleted rows.
    ///
    /// DELETE /rest/v1/{table}?id=eq.{id}
    pub async fn delete_by_id(&self, table: &str, id: &str) -> Result<usize> {
        let response = self
            .client
            .delete(self.table_url(table))
            .headers(self.headers(Some("return=representation"))?)
            .query(&[("id", format!("eq.{}", id).as_str())])
            .send()
            .await?;

        let rows: Vec<serde_json::Value> = Self::parse_rows(response).await?;
        Ok(rows.len())
    }
}
