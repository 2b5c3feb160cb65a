use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info};

use super::types::RecallRecord;
use crate::errors::ReporterError;

/// The FDA caps a single device-recall query at 1000 records.
pub const MAX_LIMIT: usize = 1000;

pub struct FdaClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl FdaClient {
    pub fn new(api_key: &str, base_url: Option<&str>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.to_string(),
            base_url: base_url.unwrap_or("https://api.fda.gov").to_string(),
        }
    }

    /// Fetch device recalls initiated in the inclusive date range.
    /// One request, one page, no retries: any failure aborts the run.
    pub async fn fetch_recalls(
        &self,
        start: &str,
        end: &str,
        limit: usize,
    ) -> Result<Vec<RecallRecord>, ReporterError> {
        let limit = limit.min(MAX_LIMIT).to_string();
        let search = format!("event_date_initiated:[{} TO {}]", start, end);
        debug!(search = %search, limit = %limit, "Querying FDA device recall endpoint");

        let resp = self
            .client
            .get(format!("{}/device/recall.json", self.base_url))
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("search", search.as_str()),
                ("limit", limit.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                ReporterError::SourceUnavailable(format!("FDA API request failed: {}", e))
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ReporterError::SourceUnavailable(format!(
                "FDA API request failed with status {}: {}",
                status.as_u16(),
                body
            )));
        }

        let data: Value = resp.json().await.map_err(|e| {
            ReporterError::SourceUnavailable(format!("Failed to parse FDA response: {}", e))
        })?;

        let records = parse_results(&data)?;
        info!(records = records.len(), "Fetched recall records");
        Ok(records)
    }
}

/// Extract the `results` array from a search response body.
pub fn parse_results(data: &Value) -> Result<Vec<RecallRecord>, ReporterError> {
    let results = data
        .get("results")
        .and_then(|r| r.as_array())
        .ok_or_else(|| {
            ReporterError::SourceUnavailable("FDA response has no 'results' array".into())
        })?;

    results
        .iter()
        .map(|v| {
            serde_json::from_value(v.clone()).map_err(|e| {
                ReporterError::SourceUnavailable(format!("Malformed recall record: {}", e))
            })
        })
        .collect()
}
