//! HTTP client for the GitHub user search API.

use std::time::Duration;

use reqwest::Client;

use crate::error::SourceError;
use crate::retry::retry_with_backoff;
use crate::types::{UserHit, UserSearchResponse};

const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Client for GitHub's `/search/users` endpoint.
///
/// Handles rate limiting (429) and other non-2xx responses as typed errors.
/// Transient errors (429, network failures) are automatically retried with
/// exponential backoff up to `max_retries` additional attempts.
///
/// A failed user search fails the whole discovery request: without a seed
/// list there is nothing to enrich or rank.
pub struct GithubSearchClient {
    client: Client,
    base_url: String,
    max_retries: u32,
    backoff_base_secs: u64,
}

impl GithubSearchClient {
    /// Creates a client pointed at the production GitHub API.
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

    /// Searches users by keyword and location, returning at most `per_page` hits.
    ///
    /// Issues one GET to `/search/users?q={keyword} location:{location}`.
    /// Location qualification is part of the search query itself; validating
    /// that a location is present is the caller's concern.
    ///
    /// # Errors
    ///
    /// - [`SourceError::RateLimited`] — HTTP 429 after all retries exhausted.
    /// - [`SourceError::UnexpectedStatus`] — any other non-2xx status.
    /// - [`SourceError::Http`] — network failure after all retries exhausted.
    /// - [`SourceError::Deserialize`] — response body is not the expected JSON.
    pub async fn search_users(
        &self,
        keyword: &str,
        location: &str,
        per_page: u32,
    ) -> Result<Vec<UserHit>, SourceError> {
        let url = self.search_url(keyword, location, per_page)?;

        let response = retry_with_backoff(self.max_retries, self.backoff_base_secs, || {
            let url = url.clone();
            async move {
                let response = self
                    .client
                    .get(&url)
                    .header(reqwest::header::ACCEPT, "application/vnd.github+json")
                    .send()
                    .await?;
                check_status(response, &url).await
            }
        })
        .await?;

        let parsed = serde_json::from_str::<UserSearchResponse>(&response).map_err(|e| {
            SourceError::Deserialize {
                context: format!("user search for \"{keyword}\""),
                source: e,
            }
        })?;

        let hits: Vec<UserHit> = parsed
            .items
            .into_iter()
            .map(|item| UserHit {
                username: item.login,
                profile_url: item.html_url,
            })
            .collect();

        tracing::debug!(keyword, location, count = hits.len(), "user search done");
        Ok(hits)
    }

    fn search_url(
        &self,
        keyword: &str,
        location: &str,
        per_page: u32,
    ) -> Result<String, SourceError> {
        let base = format!("{}/search/users", self.base_url);
        let mut url = reqwest::Url::parse(&base).map_err(|e| SourceError::InvalidBaseUrl {
            base_url: self.base_url.clone(),
            reason: e.to_string(),
        })?;

        url.query_pairs_mut()
            .append_pair("q", &format!("{keyword} location:{location}"))
            .append_pair("per_page", &per_page.to_string());

        Ok(url.to_string())
    }
}

/// Maps a response to its body text, converting 429 and other non-2xx
/// statuses into typed errors. Shared by both source clients.
pub(crate) async fn check_status(
    response: reqwest::Response,
    url: &str,
) -> Result<String, SourceError> {
    let status = response.status();

    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        let retry_after_secs = response
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(60);

        return Err(SourceError::RateLimited {
            url: url.to_owned(),
            retry_after_secs,
        });
    }

    if !status.is_success() {
        return Err(SourceError::UnexpectedStatus {
            status: status.as_u16(),
            url: url.to_owned(),
        });
    }

    Ok(response.text().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> GithubSearchClient {
        GithubSearchClient::with_base_url("test-agent", 10, 0, 0, "https://api.example.com/")
            .expect("client construction should not fail")
    }

    #[test]
    fn search_url_includes_location_qualifier() {
        let url = test_client().search_url("rust", "Berlin", 10).unwrap();
        assert!(url.starts_with("https://api.example.com/search/users?"));
        assert!(url.contains("rust+location%3ABerlin") || url.contains("rust%20location%3ABerlin"));
        assert!(url.contains("per_page=10"));
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let url = test_client().search_url("go", "Oslo", 5).unwrap();
        assert!(!url.contains("com//search"));
    }
}
