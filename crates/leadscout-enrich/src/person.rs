//! Person-profile enrichment: follower/repository metrics and a short
//! summary of the person's top public project.

use std::time::Duration;

use leadscout_nlp::InsightModels;
use reqwest::Client;

use crate::html::{extract_og_description, extract_repo_entries, extract_tab_counter};
use crate::parse::parse_count;
use crate::types::{EnrichConfig, PersonMetrics};

/// Sentinel when the repository listing contained no repositories.
pub const NO_TOP_PROJECT: &str = "No standout public project found.";
/// Sentinel when any enrichment sub-fetch for the summary failed.
pub const SUMMARY_FAILED: &str = "Could not summarize top project.";

/// READMEs shorter than this carry no summarizable signal.
const README_MIN_LEN: usize = 100;
/// Characters of README text submitted to the summarizer.
const SUMMARY_INPUT_CAP: usize = 1000;
/// Excerpt length used when the summarizer is unavailable.
const EXCERPT_LEN: usize = 150;

/// Enriches one person at a time from their public profile pages.
///
/// Every method degrades on failure — zeroed metrics or a sentinel string —
/// and never aborts enrichment of the entity.
pub struct PersonEnricher {
    client: Client,
    quick_client: Client,
    web_base: String,
    raw_base: String,
}

impl PersonEnricher {
    /// # Errors
    ///
    /// Returns `reqwest::Error` if either underlying client cannot be built.
    pub fn new(config: &EnrichConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(&config.user_agent)
            .build()?;
        let quick_client = Client::builder()
            .timeout(Duration::from_secs(config.quick_timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            client,
            quick_client,
            web_base: config.web_base.trim_end_matches('/').to_owned(),
            raw_base: config.raw_base.trim_end_matches('/').to_owned(),
        })
    }

    /// Scrapes follower count, repository count, and bio from the profile page.
    ///
    /// A failed fetch yields all-neutral metrics (0 / 0 / empty bio).
    pub async fn profile_metrics(&self, profile_url: &str) -> PersonMetrics {
        let Some(html) = self.fetch_page(&self.client, profile_url).await else {
            return PersonMetrics::default();
        };

        let followers = extract_tab_counter(&html, "followers")
            .map(|raw| parse_count(&raw))
            .unwrap_or(0);
        let repositories = extract_tab_counter(&html, "repositories")
            .map(|raw| parse_count(&raw))
            .unwrap_or(0);
        let bio = extract_og_description(&html);

        PersonMetrics {
            followers,
            repositories,
            bio,
        }
    }

    /// Summarizes the person's top public project (highest star count,
    /// ties broken by listing order).
    ///
    /// Prefers the abstractive summarizer when available, else a truncated
    /// README excerpt. Each failure mode has its own documented sentinel.
    pub async fn top_project_summary(&self, models: &InsightModels, username: &str) -> String {
        let repos_url = format!("{}/{username}?tab=repositories", self.web_base);
        let Some(html) = self.fetch_page(&self.client, &repos_url).await else {
            return SUMMARY_FAILED.to_string();
        };

        let Some(top_repo) = pick_top_repo(&extract_repo_entries(&html)) else {
            return NO_TOP_PROJECT.to_string();
        };

        let readme_url = format!("{}/{username}/{top_repo}/main/README.md", self.raw_base);
        let readme = match self.quick_client.get(&readme_url).send().await {
            Ok(resp) if resp.status().is_success() => match resp.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::warn!(username, url = %readme_url, error = %e, "failed reading README");
                    return SUMMARY_FAILED.to_string();
                }
            },
            Ok(_) => return format!("{top_repo}: No detailed README available."),
            Err(e) => {
                tracing::warn!(username, url = %readme_url, error = %e, "failed fetching README");
                return SUMMARY_FAILED.to_string();
            }
        };

        if readme.len() < README_MIN_LEN {
            return format!("{top_repo}: No detailed README available.");
        }

        let capped: String = readme.chars().take(SUMMARY_INPUT_CAP).collect();
        if let Some(summary) = models.summarize(&capped).await {
            return format!("{top_repo}: {summary}");
        }

        let excerpt: String = readme.chars().take(EXCERPT_LEN).collect();
        format!("{top_repo}: {excerpt}...")
    }

    async fn fetch_page(&self, client: &Client, url: &str) -> Option<String> {
        match client.get(url).send().await {
            Ok(resp) if resp.status().is_success() => match resp.text().await {
                Ok(body) => Some(body),
                Err(e) => {
                    tracing::warn!(url, error = %e, "failed reading page body");
                    None
                }
            },
            Ok(resp) => {
                tracing::warn!(url, status = %resp.status(), "unexpected status fetching page");
                None
            }
            Err(e) => {
                tracing::warn!(url, error = %e, "failed fetching page");
                None
            }
        }
    }
}

/// Picks the repository with the highest star count; strict-greater
/// comparison keeps the first-encountered entry on ties.
fn pick_top_repo(entries: &[(String, String)]) -> Option<String> {
    let mut top: Option<(&str, u64)> = None;
    for (name, stars_text) in entries {
        let stars = parse_count(stars_text);
        if top.is_none_or(|(_, best)| stars > best) {
            top = Some((name.as_str(), stars));
        }
    }
    top.map(|(name, _)| name.to_string())
}
