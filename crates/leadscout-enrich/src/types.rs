/// Shared configuration for the enrichers, derived from app config by the
/// pipeline so this crate stays decoupled from env handling.
#[derive(Debug, Clone)]
pub struct EnrichConfig {
    pub user_agent: String,
    /// Timeout for profile and repository-listing fetches.
    pub timeout_secs: u64,
    /// Shorter timeout for speculative fetches (READMEs, news pages, web search).
    pub quick_timeout_secs: u64,
    /// GitHub web origin (profile and repository pages).
    pub web_base: String,
    /// Raw-content origin for README fetches.
    pub raw_base: String,
    /// Web-search proxy origin.
    pub search_base: String,
    /// Guessed-website template; `{slug}` is replaced per company.
    pub website_template: String,
}

/// Structured metrics scraped from a person's profile page.
///
/// Every field has a neutral default; a failed profile fetch yields
/// [`PersonMetrics::default`] rather than an error.
#[derive(Debug, Clone, Default)]
pub struct PersonMetrics {
    pub followers: u64,
    pub repositories: u64,
    pub bio: String,
}

/// Headline text scraped from a company's news page, or a sentinel.
#[derive(Debug, Clone)]
pub struct CompanyNews {
    pub text: String,
    pub url: String,
}

/// Sentinel when the company site loaded but no news-like link was found.
pub const NO_NEWS_PAGE: &str = "No news page found";
/// Sentinel when the company site (or its news page) could not be fetched.
pub const SITE_UNREACHABLE: &str = "Could not access website";

impl CompanyNews {
    /// Whether this is a degradation sentinel rather than scraped headline text.
    #[must_use]
    pub fn is_sentinel(&self) -> bool {
        self.text == NO_NEWS_PAGE || self.text == SITE_UNREACHABLE
    }
}
