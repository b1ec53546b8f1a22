use serde::Serialize;

/// A scored person lead, ready for ranking and presentation.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateRecord {
    pub username: String,
    pub profile_url: String,
    pub followers: u64,
    pub repositories: u64,
    pub bio: String,
    /// Summary of the person's top public project, or a sentinel string.
    pub top_project: String,
    pub candidate_score: u8,
}

/// A scored company lead aggregated from its job listings.
#[derive(Debug, Clone, Serialize)]
pub struct CompanyRecord {
    pub company: String,
    pub logo_url: String,
    /// Best-guess company website, derived from the company name.
    pub website: String,
    pub linkedin_url: Option<String>,
    /// Human-readable open-role count, e.g. `"3 open role(s)"`.
    pub hiring_velocity: String,
    pub sample_job_title: String,
    pub job_url: String,
    /// Top news-insight category, or a degradation sentinel.
    pub key_insight: String,
    pub open_roles: usize,
    pub momentum_score: u8,
    pub likelihood_to_hire: u8,
}
