use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if values are present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if values are present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
///
/// Every upstream origin has a production default, so an empty environment yields a
/// working config; the NLP origin has no default and stays `None` until configured.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let env = parse_environment(&or_default("LEADSCOUT_ENV", "development"));

    let bind_addr = parse_addr("LEADSCOUT_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("LEADSCOUT_LOG_LEVEL", "info");

    let github_api_url = or_default("LEADSCOUT_GITHUB_API_URL", "https://api.github.com");
    let github_web_url = or_default("LEADSCOUT_GITHUB_WEB_URL", "https://github.com");
    let github_raw_url = or_default(
        "LEADSCOUT_GITHUB_RAW_URL",
        "https://raw.githubusercontent.com",
    );
    let jobicy_api_url = or_default("LEADSCOUT_JOBICY_API_URL", "https://jobicy.com");
    let web_search_url = or_default("LEADSCOUT_WEB_SEARCH_URL", "https://html.duckduckgo.com");
    let website_template = or_default("LEADSCOUT_WEBSITE_TEMPLATE", "https://www.{slug}.com");
    let nlp_url = lookup("LEADSCOUT_NLP_URL").ok();
    let nlp_api_token = lookup("LEADSCOUT_NLP_API_TOKEN").ok();

    let http_user_agent = or_default("LEADSCOUT_HTTP_USER_AGENT", "leadscout/0.1 (lead-discovery)");
    let request_timeout_secs = parse_u64("LEADSCOUT_REQUEST_TIMEOUT_SECS", "10")?;
    let news_timeout_secs = parse_u64("LEADSCOUT_NEWS_TIMEOUT_SECS", "5")?;
    let max_retries = parse_u32("LEADSCOUT_MAX_RETRIES", "2")?;
    let retry_backoff_base_secs = parse_u64("LEADSCOUT_RETRY_BACKOFF_BASE_SECS", "1")?;
    let people_result_cap = parse_usize("LEADSCOUT_PEOPLE_RESULT_CAP", "0")?;
    let search_per_page = parse_u32("LEADSCOUT_SEARCH_PER_PAGE", "10")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        github_api_url,
        github_web_url,
        github_raw_url,
        jobicy_api_url,
        web_search_url,
        website_template,
        nlp_url,
        nlp_api_token,
        http_user_agent,
        request_timeout_secs,
        news_timeout_secs,
        max_retries,
        retry_backoff_base_secs,
        people_result_cap,
        search_per_page,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn parse_environment_development() {
        assert_eq!(parse_environment("development"), Environment::Development);
    }

    #[test]
    fn parse_environment_production() {
        assert_eq!(parse_environment("production"), Environment::Production);
    }

    #[test]
    fn parse_environment_unknown_defaults_to_development() {
        assert_eq!(parse_environment("unknown"), Environment::Development);
    }

    #[test]
    fn build_app_config_succeeds_on_empty_environment() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).expect("empty env should succeed");
        assert_eq!(cfg.env, Environment::Development);
        assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
        assert_eq!(cfg.github_api_url, "https://api.github.com");
        assert_eq!(cfg.jobicy_api_url, "https://jobicy.com");
        assert_eq!(cfg.website_template, "https://www.{slug}.com");
        assert!(cfg.nlp_url.is_none());
        assert_eq!(cfg.request_timeout_secs, 10);
        assert_eq!(cfg.news_timeout_secs, 5);
        assert_eq!(cfg.max_retries, 2);
        assert_eq!(cfg.people_result_cap, 0);
        assert_eq!(cfg.search_per_page, 10);
    }

    #[test]
    fn build_app_config_fails_with_invalid_bind_addr() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("LEADSCOUT_BIND_ADDR", "not-a-socket-addr");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "LEADSCOUT_BIND_ADDR"),
            "expected InvalidEnvVar(LEADSCOUT_BIND_ADDR), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_fails_with_invalid_timeout() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("LEADSCOUT_REQUEST_TIMEOUT_SECS", "not-a-number");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "LEADSCOUT_REQUEST_TIMEOUT_SECS"),
            "expected InvalidEnvVar(LEADSCOUT_REQUEST_TIMEOUT_SECS), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_reads_nlp_origin_when_set() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("LEADSCOUT_NLP_URL", "http://localhost:8080");
        map.insert("LEADSCOUT_NLP_API_TOKEN", "secret");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.nlp_url.as_deref(), Some("http://localhost:8080"));
        assert_eq!(cfg.nlp_api_token.as_deref(), Some("secret"));
    }

    #[test]
    fn build_app_config_people_cap_override() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("LEADSCOUT_PEOPLE_RESULT_CAP", "25");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.people_result_cap, 25);
    }

    #[test]
    fn build_app_config_retry_overrides() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("LEADSCOUT_MAX_RETRIES", "5");
        map.insert("LEADSCOUT_RETRY_BACKOFF_BASE_SECS", "3");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.max_retries, 5);
        assert_eq!(cfg.retry_backoff_base_secs, 3);
    }
}
