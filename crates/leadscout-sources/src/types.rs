use serde::{Deserialize, Serialize};

/// One person candidate from the user search API. Immutable once created;
/// enrichment happens downstream against `profile_url`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserHit {
    pub username: String,
    pub profile_url: String,
}

/// One raw job listing from the remote-jobs API.
///
/// Absent fields deserialize to their neutral defaults so a sparse listing
/// never fails the whole page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobListing {
    pub title: String,
    pub company_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub logo_url: String,
}

/// Wire shape of the GitHub `/search/users` response.
#[derive(Debug, Deserialize)]
pub(crate) struct UserSearchResponse {
    #[serde(default)]
    pub(crate) items: Vec<UserSearchItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserSearchItem {
    pub(crate) login: String,
    pub(crate) html_url: String,
}

/// Wire shape of the Jobicy `/api/v2/remote-jobs` response.
#[derive(Debug, Deserialize)]
pub(crate) struct JobsResponse {
    #[serde(default)]
    pub(crate) jobs: Vec<JobsItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct JobsItem {
    #[serde(rename = "jobTitle", default = "not_available")]
    pub(crate) job_title: String,
    #[serde(rename = "companyName", default = "not_available")]
    pub(crate) company_name: String,
    #[serde(default)]
    pub(crate) description: String,
    #[serde(default)]
    pub(crate) url: String,
    #[serde(rename = "companyLogo", default)]
    pub(crate) company_logo: String,
}

fn not_available() -> String {
    "N/A".to_string()
}

impl From<JobsItem> for JobListing {
    fn from(item: JobsItem) -> Self {
        JobListing {
            title: item.job_title,
            company_name: item.company_name,
            description: item.description,
            url: item.url,
            logo_url: item.company_logo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_jobs_item_uses_defaults() {
        let item: JobsItem = serde_json::from_str("{}").expect("empty object should parse");
        let listing = JobListing::from(item);
        assert_eq!(listing.title, "N/A");
        assert_eq!(listing.company_name, "N/A");
        assert_eq!(listing.description, "");
        assert_eq!(listing.url, "");
        assert_eq!(listing.logo_url, "");
    }

    #[test]
    fn jobs_item_maps_camel_case_fields() {
        let raw = serde_json::json!({
            "jobTitle": "Senior Rust Engineer",
            "companyName": "Acme",
            "description": "Build services",
            "url": "https://jobicy.com/jobs/1",
            "companyLogo": "https://jobicy.com/logo.png"
        });
        let item: JobsItem = serde_json::from_value(raw).expect("should parse");
        let listing = JobListing::from(item);
        assert_eq!(listing.title, "Senior Rust Engineer");
        assert_eq!(listing.company_name, "Acme");
        assert_eq!(listing.logo_url, "https://jobicy.com/logo.png");
    }
}
