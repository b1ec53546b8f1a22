use axum::{extract::State, Extension, Json};
use leadscout_pipeline::{run_company_search, CompanyRecord};
use serde::Deserialize;

use super::{map_pipeline_error, ApiError, ApiResponse, AppState, ResponseMeta};
use crate::middleware::RequestId;

#[derive(Debug, Deserialize)]
pub(super) struct CompanySearchRequest {
    #[serde(default)]
    keyword: Option<String>,
}

pub(super) async fn search_companies(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<CompanySearchRequest>,
) -> Result<Json<ApiResponse<Vec<CompanyRecord>>>, ApiError> {
    let keyword = body.keyword.unwrap_or_default();

    let records = run_company_search(&state.deps, &keyword)
        .await
        .map_err(|e| map_pipeline_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: records,
        meta: ResponseMeta::new(req_id.0),
    }))
}
