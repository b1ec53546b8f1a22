//! Lead-discovery orchestration: fetch candidates, enrich them, score them,
//! and return ranked records.

use std::sync::Arc;

use leadscout_core::AppConfig;
use leadscout_enrich::types::EnrichConfig;
use leadscout_enrich::{CompanyEnricher, PersonEnricher, WebSearchClient};
use leadscout_nlp::InsightModels;
use leadscout_sources::{GithubSearchClient, JobicyClient};

pub mod companies;
pub mod error;
mod group;
pub mod people;
pub mod types;

pub use companies::run_company_search;
pub use error::PipelineError;
pub use people::run_people_search;
pub use types::{CandidateRecord, CompanyRecord};

/// Everything a search run needs, built once at startup and shared.
///
/// Clients are constructed from [`AppConfig`] origins, so tests can point
/// every upstream at a mock server.
pub struct PipelineDeps {
    pub github: GithubSearchClient,
    pub jobicy: JobicyClient,
    pub person_enricher: PersonEnricher,
    pub company_enricher: CompanyEnricher,
    pub web_search: WebSearchClient,
    pub models: Arc<InsightModels>,
    /// Maximum people records returned; 0 means unbounded.
    pub people_result_cap: usize,
    pub search_per_page: u32,
}

impl PipelineDeps {
    /// # Errors
    ///
    /// Returns [`PipelineError::Init`] if any HTTP client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, PipelineError> {
        let github = GithubSearchClient::with_base_url(
            &config.http_user_agent,
            config.request_timeout_secs,
            config.max_retries,
            config.retry_backoff_base_secs,
            &config.github_api_url,
        )
        .map_err(|e| PipelineError::Init(e.to_string()))?;

        let jobicy = JobicyClient::with_base_url(
            &config.http_user_agent,
            config.request_timeout_secs,
            config.max_retries,
            config.retry_backoff_base_secs,
            &config.jobicy_api_url,
        )
        .map_err(|e| PipelineError::Init(e.to_string()))?;

        let enrich_config = EnrichConfig {
            user_agent: config.http_user_agent.clone(),
            timeout_secs: config.request_timeout_secs,
            quick_timeout_secs: config.news_timeout_secs,
            web_base: config.github_web_url.clone(),
            raw_base: config.github_raw_url.clone(),
            search_base: config.web_search_url.clone(),
            website_template: config.website_template.clone(),
        };

        let person_enricher = PersonEnricher::new(&enrich_config)
            .map_err(|e| PipelineError::Init(e.to_string()))?;
        let company_enricher = CompanyEnricher::new(&enrich_config)
            .map_err(|e| PipelineError::Init(e.to_string()))?;
        let web_search =
            WebSearchClient::new(&enrich_config).map_err(|e| PipelineError::Init(e.to_string()))?;

        let models = InsightModels::init(
            config.nlp_url.as_deref(),
            config.nlp_api_token.as_deref(),
            config.request_timeout_secs,
        );

        Ok(Self {
            github,
            jobicy,
            person_enricher,
            company_enricher,
            web_search,
            models,
            people_result_cap: config.people_result_cap,
            search_per_page: config.search_per_page,
        })
    }
}
