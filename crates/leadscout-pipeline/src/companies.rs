//! Company-search run: seed from job listings, group, enrich, score, rank.

use leadscout_nlp::{Insight, InsightLabel};
use leadscout_scoring::{
    likelihood_to_hire, listing_momentum_score, momentum_score, ROLE_TOPIC_LABELS,
};

use crate::error::PipelineError;
use crate::group::{group_by_company, CompanyGroup};
use crate::types::CompanyRecord;
use crate::PipelineDeps;

/// Companies returned per search.
const MAX_COMPANIES: usize = 20;

/// Runs a full company search for `keyword`.
///
/// Listings are grouped by company name in first-seen order. Enrichment is
/// best-effort per company: scrape failures degrade to sentinels and neutral
/// scores, never abort the run. Results are sorted by descending likelihood
/// to hire (stable, so ties keep listing order) and truncated to 20.
///
/// # Errors
///
/// - [`PipelineError::Validation`] — empty keyword.
/// - [`PipelineError::Source`] — the job listing fetch itself failed.
pub async fn run_company_search(
    deps: &PipelineDeps,
    keyword: &str,
) -> Result<Vec<CompanyRecord>, PipelineError> {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return Err(PipelineError::Validation(
            "search keyword must not be empty".to_string(),
        ));
    }

    let listings = deps.jobicy.fetch_jobs(keyword).await?;
    let groups = group_by_company(listings);
    tracing::info!(keyword, companies = groups.len(), "company search seeded");

    let mut records = Vec::with_capacity(groups.len());
    for group in groups {
        records.push(build_record(deps, group).await);
    }

    records.sort_by(|a, b| b.likelihood_to_hire.cmp(&a.likelihood_to_hire));
    records.truncate(MAX_COMPANIES);

    Ok(records)
}

async fn build_record(deps: &PipelineDeps, group: CompanyGroup) -> CompanyRecord {
    let website = deps.company_enricher.guess_website(&group.name);
    let linkedin_url = deps.web_search.find_company_linkedin_url(&group.name).await;
    let news = deps.company_enricher.company_news(&website).await;

    // Sentinel text is a degradation marker, not classifiable signal.
    let insight = if news.is_sentinel() {
        Insight::not_available()
    } else {
        deps.models.classify_insight(&news.text).await
    };

    let open_roles = group.open_roles();
    let mut momentum = momentum_score(&insight, open_roles);

    // Without a usable news insight, fall back to classifying the listings
    // themselves when the models are up.
    if insight.label == InsightLabel::NotAvailable && deps.models.available() {
        let text = group.aggregated_text();
        let topics = deps.models.topic_probabilities(&text, &ROLE_TOPIC_LABELS).await;
        let sentiment = deps.models.sentiment(&text).await;
        if let (Some(topics), Some(sentiment)) = (topics, sentiment) {
            momentum = listing_momentum_score(&topics, &sentiment);
        }
    }

    let likelihood = likelihood_to_hire(momentum, open_roles);

    let key_insight = if insight.label == InsightLabel::NotAvailable {
        news.text.clone()
    } else {
        insight.label.to_string()
    };

    CompanyRecord {
        company: group.name,
        logo_url: group.logo_url,
        website,
        linkedin_url,
        hiring_velocity: format!("{open_roles} open role(s)"),
        sample_job_title: group.titles.first().cloned().unwrap_or_default(),
        job_url: group.urls.first().cloned().unwrap_or_default(),
        key_insight,
        open_roles,
        momentum_score: momentum,
        likelihood_to_hire: likelihood,
    }
}
