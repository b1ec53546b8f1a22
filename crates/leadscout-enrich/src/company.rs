//! Company enrichment: website guessing and news-page headline scraping.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::html::{anchor_hrefs, extract_headings};
use crate::types::{CompanyNews, EnrichConfig, NO_NEWS_PAGE, SITE_UNREACHABLE};

/// Link keywords probed in priority order; the first keyword with any
/// matching anchor on the homepage wins.
const NEWS_KEYWORDS: [&str; 5] = ["news", "blog", "press", "insights", "media"];

/// Headlines collected from the news page.
const MAX_HEADLINES: usize = 5;

/// Scrapes public company websites for recent-news signal.
pub struct CompanyEnricher {
    client: Client,
    website_template: String,
}

impl CompanyEnricher {
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
            website_template: config.website_template.clone(),
        })
    }

    /// Guesses the company website from its name: lowercase, strip everything
    /// non-alphanumeric, substitute into the configured template.
    #[must_use]
    pub fn guess_website(&self, company_name: &str) -> String {
        let slug: String = company_name
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .collect::<String>()
            .to_lowercase();
        self.website_template.replace("{slug}", &slug)
    }

    /// Fetches the company homepage, follows its first news-like link, and
    /// returns joined headline text.
    ///
    /// Degrades to the documented sentinels instead of erroring: an
    /// unreachable site or news page yields [`SITE_UNREACHABLE`], a reachable
    /// homepage with no news-like link yields [`NO_NEWS_PAGE`].
    pub async fn company_news(&self, website: &str) -> CompanyNews {
        let Some(homepage) = self.fetch_page(website).await else {
            return CompanyNews {
                text: SITE_UNREACHABLE.to_string(),
                url: website.to_string(),
            };
        };

        let Some(news_url) = find_news_url(website, &anchor_hrefs(&homepage)) else {
            return CompanyNews {
                text: NO_NEWS_PAGE.to_string(),
                url: website.to_string(),
            };
        };

        let Some(news_page) = self.fetch_page(&news_url).await else {
            return CompanyNews {
                text: SITE_UNREACHABLE.to_string(),
                url: news_url,
            };
        };

        let headlines = extract_headings(&news_page, MAX_HEADLINES);
        if headlines.is_empty() {
            return CompanyNews {
                text: NO_NEWS_PAGE.to_string(),
                url: news_url,
            };
        }

        CompanyNews {
            text: headlines.join(". "),
            url: news_url,
        }
    }

    async fn fetch_page(&self, url: &str) -> Option<String> {
        match self.client.get(url).send().await {
            Ok(resp) if resp.status().is_success() => match resp.text().await {
                Ok(body) => Some(body),
                Err(e) => {
                    tracing::debug!(url, error = %e, "failed reading company page body");
                    None
                }
            },
            Ok(resp) => {
                tracing::debug!(url, status = %resp.status(), "unexpected status fetching company page");
                None
            }
            Err(e) => {
                tracing::debug!(url, error = %e, "failed fetching company page");
                None
            }
        }
    }
}

/// Picks the news-page URL: keywords are tried in priority order, and within
/// a keyword the first matching anchor wins. Relative links resolve against
/// the homepage URL.
fn find_news_url(base: &str, hrefs: &[String]) -> Option<String> {
    let base_url = Url::parse(base).ok();

    for keyword in NEWS_KEYWORDS {
        for href in hrefs {
            if !href.to_lowercase().contains(keyword) {
                continue;
            }
            if href.starts_with("http://") || href.starts_with("https://") {
                return Some(href.clone());
            }
            if let Some(resolved) = base_url.as_ref().and_then(|b| b.join(href).ok()) {
                return Some(resolved.to_string());
            }
        }
    }
    None
}
