//! HTTP client for the Jobicy remote-jobs API.

use std::time::Duration;

use reqwest::Client;

use crate::error::SourceError;
use crate::github::check_status;
use crate::retry::retry_with_backoff;
use crate::types::{JobListing, JobsResponse};

const DEFAULT_BASE_URL: &str = "https://jobicy.com";

/// Listings requested (and kept) per search. The API caps pages at 50.
const MAX_LISTINGS: usize = 50;

/// Client for Jobicy's public `/api/v2/remote-jobs` endpoint.
///
/// Returns raw job listings; grouping listings into companies is the
/// orchestrator's concern. Transient errors are retried with exponential
/// backoff, mirroring [`crate::github::GithubSearchClient`].
pub struct JobicyClient {
    client: Client,
    base_url: String,
    max_retries: u32,
    backoff_base_secs: u64,
}

impl JobicyClient {
    /// Creates a client pointed at the production Jobicy API.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        user_agent: &str,
        timeout_secs: u64,
        max_retries: u32,
        backoff_base_secs: u64,
    ) -> Result<Self, SourceError> {
        Self::with_base_url(
            user_agent,
            timeout_secs,
            max_retries,
            backoff_base_secs,
            DEFAULT_BASE_URL,
        )
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn with_base_url(
        user_agent: &str,
        timeout_secs: u64,
        max_retries: u32,
        backoff_base_secs: u64,
        base_url: &str,
    ) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
            max_retries,
            backoff_base_secs,
        })
    }

    /// Fetches remote job listings tagged with `keyword`, at most 50.
    ///
    /// # Errors
    ///
    /// - [`SourceError::RateLimited`] — HTTP 429 after all retries exhausted.
    /// - [`SourceError::UnexpectedStatus`] — any other non-2xx status.
    /// - [`SourceError::Http`] — network failure after all retries exhausted.
    /// - [`SourceError::Deserialize`] — response body is not the expected JSON.
    pub async fn fetch_jobs(&self, keyword: &str) -> Result<Vec<JobListing>, SourceError> {
        let url = self.jobs_url(keyword)?;

        let body = retry_with_backoff(self.max_retries, self.backoff_base_secs, || {
            let url = url.clone();
            async move {
                let response = self.client.get(&url).send().await?;
                check_status(response, &url).await
            }
        })
        .await?;

        let parsed =
            serde_json::from_str::<JobsResponse>(&body).map_err(|e| SourceError::Deserialize {
                context: format!("job listings for tag \"{keyword}\""),
                source: e,
            })?;

        let listings: Vec<JobListing> = parsed
            .jobs
            .into_iter()
            .take(MAX_LISTINGS)
            .map(JobListing::from)
            .collect();

        tracing::debug!(keyword, count = listings.len(), "job listing fetch done");
        Ok(listings)
    }

    fn jobs_url(&self, keyword: &str) -> Result<String, SourceError> {
        let base = format!("{}/api/v2/remote-jobs", self.base_url);
        let mut url = reqwest::Url::parse(&base).map_err(|e| SourceError::InvalidBaseUrl {
            base_url: self.base_url.clone(),
            reason: e.to_string(),
        })?;

        url.query_pairs_mut()
            .append_pair("count", &MAX_LISTINGS.to_string())
            .append_pair("tag", keyword);

        Ok(url.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jobs_url_carries_count_and_tag() {
        let client = JobicyClient::with_base_url("test-agent", 10, 0, 0, "https://jobs.example.com")
            .expect("client construction should not fail");
        let url = client.jobs_url("python").unwrap();
        assert!(url.contains("count=50"));
        assert!(url.contains("tag=python"));
    }
}
