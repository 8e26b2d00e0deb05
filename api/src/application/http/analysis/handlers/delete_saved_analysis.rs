use axum::extract::{Path, State};
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use glowcheck_core::domain::analysis::ports::AnalysisService;

#[utoipa::path(
    delete,
    path = "/users/{user_id}/analysis/saved/{analysis_id}",
    tag = "analysis",
    summary = "Delete a saved analysis",
    params(
        ("user_id" = Uuid, Path, description = "User id"),
        ("analysis_id" = Uuid, Path, description = "Saved analysis id"),
    ),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Unknown analysis id for this user")
    )
)]
pub async fn delete_saved_analysis(
    Path((user_id, analysis_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .delete_saved_analysis(analysis_id, user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
