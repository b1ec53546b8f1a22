//! People-search run: seed from user search, enrich, score, rank.

use leadscout_scoring::candidate_score;

use crate::error::PipelineError;
use crate::types::CandidateRecord;
use crate::PipelineDeps;

/// Runs a full people search for `keyword` in `location`.
///
/// Validation happens before any upstream call. Enrichment is best-effort
/// per person: a profile that cannot be fetched scores from neutral metrics
/// and the run continues. Results are sorted by descending candidate score;
/// the sort is stable, so equal scores keep search-result order.
///
/// # Errors
///
/// - [`PipelineError::Validation`] — empty keyword or location.
/// - [`PipelineError::Source`] — the user search itself failed.
pub async fn run_people_search(
    deps: &PipelineDeps,
    keyword: &str,
    location: &str,
) -> Result<Vec<CandidateRecord>, PipelineError> {
    let keyword = keyword.trim();
    let location = location.trim();
    if keyword.is_empty() {
        return Err(PipelineError::Validation(
            "search keyword must not be empty".to_string(),
        ));
    }
    if location.is_empty() {
        return Err(PipelineError::Validation(
            "location must not be empty".to_string(),
        ));
    }

    let hits = deps
        .github
        .search_users(keyword, location, deps.search_per_page)
        .await?;
    tracing::info!(keyword, location, candidates = hits.len(), "people search seeded");

    let mut records = Vec::with_capacity(hits.len());
    for hit in hits {
        let metrics = deps.person_enricher.profile_metrics(&hit.profile_url).await;

        let sentiment = if metrics.bio.trim().is_empty() {
            None
        } else {
            deps.models.sentiment(&metrics.bio).await
        };

        let score = candidate_score(
            metrics.followers,
            metrics.repositories,
            &metrics.bio,
            sentiment.as_ref(),
        );

        let top_project = deps
            .person_enricher
            .top_project_summary(&deps.models, &hit.username)
            .await;

        records.push(CandidateRecord {
            username: hit.username,
            profile_url: hit.profile_url,
            followers: metrics.followers,
            repositories: metrics.repositories,
            bio: metrics.bio,
            top_project,
            candidate_score: score,
        });
    }

    records.sort_by(|a, b| b.candidate_score.cmp(&a.candidate_score));

    if deps.people_result_cap > 0 {
        records.truncate(deps.people_result_cap);
    }

    Ok(records)
}
