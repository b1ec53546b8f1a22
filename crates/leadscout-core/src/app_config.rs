use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// GitHub REST API origin (user search).
    pub github_api_url: String,
    /// GitHub web origin (profile and repository pages).
    pub github_web_url: String,
    /// Raw-content origin for README fetches.
    pub github_raw_url: String,
    /// Jobicy remote-jobs API origin.
    pub jobicy_api_url: String,
    /// HTML web-search proxy origin (LinkedIn URL resolution).
    pub web_search_url: String,
    /// Template for guessed company websites; `{slug}` is replaced with the
    /// lowercased, non-alphanumeric-stripped company name.
    pub website_template: String,
    /// Hosted NLP inference origin. `None` disables all text insights.
    pub nlp_url: Option<String>,
    pub nlp_api_token: Option<String>,
    pub http_user_agent: String,
    pub request_timeout_secs: u64,
    /// Shorter timeout for speculative fetches (news pages, READMEs).
    pub news_timeout_secs: u64,
    pub max_retries: u32,
    pub retry_backoff_base_secs: u64,
    /// Maximum people records returned per request; 0 means unbounded.
    pub people_result_cap: usize,
    /// Page size requested from the user search API.
    pub search_per_page: u32,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("github_api_url", &self.github_api_url)
            .field("github_web_url", &self.github_web_url)
            .field("github_raw_url", &self.github_raw_url)
            .field("jobicy_api_url", &self.jobicy_api_url)
            .field("web_search_url", &self.web_search_url)
            .field("website_template", &self.website_template)
            .field("nlp_url", &self.nlp_url)
            .field(
                "nlp_api_token",
                &self.nlp_api_token.as_ref().map(|_| "[redacted]"),
            )
            .field("http_user_agent", &self.http_user_agent)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("news_timeout_secs", &self.news_timeout_secs)
            .field("max_retries", &self.max_retries)
            .field("retry_backoff_base_secs", &self.retry_backoff_base_secs)
            .field("people_result_cap", &self.people_result_cap)
            .field("search_per_page", &self.search_per_page)
            .finish()
    }
}
