//! REST client for the hosted data-table service.
//!
//! Talks to PostgREST-style endpoints:
//!
//! ```text
//! GET    {base}/rest/v1/{table}?select=*&col=eq.value&order=col.desc
//! POST   {base}/rest/v1/{table}                (Prefer: return=representation)
//! PATCH  {base}/rest/v1/{table}?id=eq.{id}     (Prefer: return=representation)
//! DELETE {base}/rest/v1/{table}?id=eq.{id}     (Prefer: return=representation)
//! POST   {base}/rest/v1/rpc/{name}
//! ```

use async_trait::async_trait;
use digitalpro_core::types::RowId;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde_json::Value;

use crate::client::{SelectQuery, StoreError, TableClient};

const PREFER_REPRESENTATION: &str = "return=representation";

/// HTTP client for one hosted project.
pub struct RestTableClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RestTableClient {
    /// * `base_url` - Project URL, e.g. `https://xyz.example.co`.
    /// * `api_key` - Key sent as both `apikey` and bearer token.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, api_key)
    }

    /// Reuse an existing [`reqwest::Client`] (shared connection pool).
    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            api_key: api_key.into(),
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.base_url)
    }

    fn request(&self, method: Method, url: String) -> RequestBuilder {
        self.client
            .request(method, url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    /// Turn a non-2xx response into a [`StoreError`].
    async fn check_status(response: Response) -> Result<Response, StoreError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(StoreError::Unauthorized {
                status: status.as_u16(),
            });
        }
        let body = response.text().await.unwrap_or_default();
        Err(StoreError::Remote {
            status: status.as_u16(),
            body,
        })
    }

    async fn parse_rows(response: Response) -> Result<Vec<Value>, StoreError> {
        let response = Self::check_status(response).await?;
        Ok(response.json::<Vec<Value>>().await?)
    }

    /// Mutations return the affected rows; none means the id matched nothing.
    async fn single_row(response: Response, table: &str, id: RowId) -> Result<Value, StoreError> {
        Self::parse_rows(response)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::NotFound {
                table: table.to_string(),
                id,
            })
    }
}

#[async_trait]
impl TableClient for RestTableClient {
    async fn select(&self, table: &str, query: &SelectQuery) -> Result<Vec<Value>, StoreError> {
        let mut params: Vec<(String, String)> = vec![("select".into(), "*".into())];
        params.extend(
            query
                .filters
                .iter()
                .map(|(column, value)| (column.clone(), format!("eq.{value}"))),
        );
        if let Some(order) = &query.order {
            let direction = if order.descending { "desc" } else { "asc" };
            params.push(("order".into(), format!("{}.{direction}", order.column)));
        }

        let response = self
            .request(Method::GET, self.table_url(table))
            .query(&params)
            .send()
            .await?;

        Self::parse_rows(response).await
    }

    async fn insert(&self, table: &str, row: Value) -> Result<Value, StoreError> {
        let response = self
            .request(Method::POST, self.table_url(table))
            .header("Prefer", PREFER_REPRESENTATION)
            .json(&row)
            .send()
            .await?;

        Self::parse_rows(response)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::Remote {
                status: 200,
                body: format!("insert into {table} returned no row"),
            })
    }

    async fn update(&self, table: &str, id: RowId, patch: Value) -> Result<Value, StoreError> {
        let response = self
            .request(Method::PATCH, self.table_url(table))
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", PREFER_REPRESENTATION)
            .json(&patch)
            .send()
            .await?;

        Self::single_row(response, table, id).await
    }

    async fn delete(&self, table: &str, id: RowId) -> Result<(), StoreError> {
        let response = self
            .request(Method::DELETE, self.table_url(table))
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", PREFER_REPRESENTATION)
            .send()
            .await?;

        Self::single_row(response, table, id).await.map(|_| ())
    }

    async fn call_procedure(&self, name: &str, args: Value) -> Result<Value, StoreError> {
        let response = self
            .request(Method::POST, format!("{}/rest/v1/rpc/{name}", self.base_url))
            .json(&args)
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        Ok(response.json::<Value>().await?)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        let response = self
            .request(Method::GET, format!("{}/rest/v1/", self.base_url))
            .send()
            .await?;

        Self::check_status(response).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed_from_base_url() {
        let client = RestTableClient::new("https://project.example.co/", "key");
        assert_eq!(
            client.table_url("proposals"),
            "https://project.example.co/rest/v1/proposals"
        );
    }
}
