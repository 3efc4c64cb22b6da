use std::time::Duration;

use crate::config::SearchConfig;
use crate::error::{ReportError, ReportResult};

use super::types::{QueryHit, SearchRequest, SearchResponse};

const QUERY_TIMEOUT: Duration = Duration::from_secs(30);

pub struct SearchClient {
    client: reqwest::Client,
    base_url: String,
    username: String,
    password: String,
    index: String,
}

impl SearchClient {
    pub fn new(config: &SearchConfig) -> ReportResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(QUERY_TIMEOUT)
            .build()
            .map_err(|e| ReportError::BackendUnavailable(e.to_string()))?;

        Ok(Self {
            client,
            base_url: format!("http://{}:{}", config.host, config.port),
            username: config.username.clone(),
            password: config.password.clone(),
            index: config.index.clone(),
        })
    }

    /// Runs the single (branch, date) query and returns the raw hit list in
    /// backend order. Mapping hits to report rows is the pipeline's job.
    #[tracing::instrument(
        name = "search query",
        skip(self),
        fields(search.index = %self.index, search.hits = tracing::field::Empty)
    )]
    pub async fn query(&self, branch: &str, date: &str) -> ReportResult<Vec<QueryHit>> {
        let body = SearchRequest::for_branch_and_date(branch, date);
        let url = format!("{}/{}/_search", self.base_url, self.index);

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.username, Some(&self.password))
            .json(&body)
            .send()
            .await
            .map_err(|e| ReportError::BackendUnavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(ReportError::BackendUnavailable(format!(
                "search returned {status}: {error_body}"
            )));
        }

        let parsed: SearchResponse = response
            .json()
            .await
            .map_err(|e| ReportError::BackendUnavailable(e.to_string()))?;

        let hits = parsed.hits.hits;
        tracing::Span::current().record("search.hits", hits.len());
        tracing::debug!(hits = hits.len(), "query complete");

        Ok(hits)
    }
}
