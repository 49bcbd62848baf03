use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

use crate::shared::config::StoreConfig;
use crate::shared::error::DatasetError;

/// The fixed query issued by every dashboard render. No page-side filtering
/// is pushed to the store; all filtering happens in-process after fetch.
pub const SALES_QUERY: &str = "SELECT * FROM SalesTxs LIMIT 4000";

/// Boundary to the SQL-speaking analytical store: one operation.
#[async_trait]
pub trait SqlStore: Sync {
    async fn execute(&self, query: &str) -> Result<Vec<Vec<Value>>, DatasetError>;
}

/// HTTP client for the Pinot broker SQL endpoint.
///
/// Constructed fresh for each render and dropped on every exit path; there
/// is no pooling and no caching of results.
pub struct PinotClient {
    client: reqwest::Client,
    endpoint: String,
}

#[derive(Debug, Serialize)]
struct SqlRequest<'a> {
    sql: &'a str,
}

#[derive(Debug, Deserialize)]
struct SqlResponse {
    #[serde(rename = "resultTable")]
    result_table: Option<ResultTable>,
    #[serde(default)]
    exceptions: Vec<BrokerException>,
}

#[derive(Debug, Deserialize)]
struct ResultTable {
    rows: Vec<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
struct BrokerException {
    #[serde(rename = "errorCode")]
    error_code: i64,
    message: Option<String>,
}

impl PinotClient {
    pub fn new(config: &StoreConfig) -> Result<Self, DatasetError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.query_timeout_secs))
            .build()
            .map_err(|e| DatasetError::Connection(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            endpoint: config.endpoint(),
        })
    }
}

#[async_trait]
impl SqlStore for PinotClient {
    async fn execute(&self, query: &str) -> Result<Vec<Vec<Value>>, DatasetError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&SqlRequest { sql: query })
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DatasetError::Connection(format!("query timed out: {e}"))
                } else {
                    DatasetError::Connection(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Pinot query failed with status {}: {}", status, body);
            return Err(DatasetError::Connection(format!(
                "broker returned {status}: {body}"
            )));
        }

        let body: SqlResponse = response
            .json()
            .await
            .map_err(|e| DatasetError::Connection(format!("invalid broker response: {e}")))?;

        if let Some(ex) = body.exceptions.first() {
            return Err(DatasetError::Connection(format!(
                "broker exception {}: {}",
                ex.error_code,
                ex.message.clone().unwrap_or_default()
            )));
        }

        let table = body.result_table.ok_or_else(|| {
            DatasetError::Connection("broker response missing resultTable".to_string())
        })?;
        Ok(table.rows)
    }
}
