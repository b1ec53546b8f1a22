use axum::{extract::State, Extension, Json};
use leadscout_pipeline::{run_people_search, CandidateRecord};
use serde::Deserialize;

use super::{map_pipeline_error, ApiError, ApiResponse, AppState, ResponseMeta};
use crate::middleware::RequestId;

/// Missing fields deserialize to `None`; the pipeline rejects empty values
/// with a validation error, so handlers never pre-validate.
#[derive(Debug, Deserialize)]
pub(super) struct PeopleSearchRequest {
    #[serde(default)]
    keyword: Option<String>,
    #[serde(default)]
    location: Option<String>,
    /// Per-request cap on returned records, applied after ranking.
    #[serde(default)]
    limit: Option<usize>,
}

pub(super) async fn search_people(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<PeopleSearchRequest>,
) -> Result<Json<ApiResponse<Vec<CandidateRecord>>>, ApiError> {
    let keyword = body.keyword.unwrap_or_default();
    let location = body.location.unwrap_or_default();

    let mut records = run_people_search(&state.deps, &keyword, &location)
        .await
        .map_err(|e| map_pipeline_error(req_id.0.clone(), &e))?;

    if let Some(limit) = body.limit {
        if limit > 0 {
            records.truncate(limit);
        }
    }

    Ok(Json(ApiResponse {
        data: records,
        meta: ResponseMeta::new(req_id.0),
    }))
}
