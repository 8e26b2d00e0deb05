use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use glowcheck_core::domain::analysis::{entities::SavedAnalysis, ports::AnalysisService};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GetSavedAnalysisResponse {
    pub data: SavedAnalysis,
}

#[utoipa::path(
    get,
    path = "/users/{user_id}/analysis/saved/{analysis_id}",
    tag = "analysis",
    summary = "Fetch one saved analysis",
    params(
        ("user_id" = Uuid, Path, description = "User id"),
        ("analysis_id" = Uuid, Path, description = "Saved analysis id"),
    ),
    responses(
        (status = 200, body = GetSavedAnalysisResponse),
        (status = 404, description = "Unknown analysis id for this user")
    )
)]
pub async fn get_saved_analysis(
    Path((user_id, analysis_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
) -> Result<Response<GetSavedAnalysisResponse>, ApiError> {
    let analysis = state
        .service
        .get_saved_analysis(analysis_id, user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetSavedAnalysisResponse { data: analysis }))
}
