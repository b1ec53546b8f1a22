//! LinkedIn company-page discovery via an HTML web-search proxy.

use std::time::Duration;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::Client;

use crate::html::anchor_hrefs;
use crate::types::EnrichConfig;

/// Best-effort web search for public company pages.
pub struct WebSearchClient {
    client: Client,
    base_url: String,
}

impl WebSearchClient {
    /// # Errors
    ///
    /// Returns `reqwest::Error` if the underlying client cannot be built.
    pub fn new(config: &EnrichConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.quick_timeout_secs))
            .connect_timeout(Duration::from_secs(5))
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: config.search_base.trim_end_matches('/').to_owned(),
        })
    }

    /// Searches for the company's LinkedIn page and returns the first result
    /// that looks like a company profile URL.
    ///
    /// Placeholder names and any fetch failure yield `None`; LinkedIn
    /// discovery is decorative and never blocks enrichment.
    pub async fn find_company_linkedin_url(&self, company_name: &str) -> Option<String> {
        let name = company_name.trim();
        if name.is_empty() || name.eq_ignore_ascii_case("unknown") || name == "N/A" {
            return None;
        }

        let query = format!("\"{name}\" LinkedIn company profile");
        let url = format!(
            "{}/html/?q={}",
            self.base_url,
            utf8_percent_encode(&query, NON_ALPHANUMERIC)
        );

        let html = match self.client.get(&url).send().await {
            Ok(resp) if resp.status().is_success() => resp.text().await.ok()?,
            Ok(resp) => {
                tracing::debug!(company = name, status = %resp.status(), "web search returned unexpected status");
                return None;
            }
            Err(e) => {
                tracing::debug!(company = name, error = %e, "web search failed");
                return None;
            }
        };

        pick_linkedin_url(&anchor_hrefs(&html))
    }
}

/// First href pointing at a LinkedIn company page, with tracking query
/// parameters stripped. Post and job links are not company profiles.
fn pick_linkedin_url(hrefs: &[String]) -> Option<String> {
    hrefs
        .iter()
        .find(|href| {
            href.contains("linkedin.com/company/")
                && !href.contains("/posts/")
                && !href.contains("/jobs/")
        })
        .map(|href| href.split('?').next().unwrap_or(href).to_string())
}
