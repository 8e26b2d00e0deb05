use axum::extract::{Path, Query, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::{
    analysis::validators::GetSavedAnalysesParams,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use glowcheck_core::domain::analysis::{
    entities::SavedAnalysis, ports::AnalysisService, value_objects::GetSavedAnalysesFilter,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GetSavedAnalysesResponse {
    pub data: Vec<SavedAnalysis>,
}

#[utoipa::path(
    get,
    path = "/users/{user_id}/analysis/saved",
    tag = "analysis",
    summary = "List saved analyses",
    params(
        ("user_id" = Uuid, Path, description = "User id"),
        GetSavedAnalysesParams,
    ),
    responses(
        (status = 200, body = GetSavedAnalysesResponse)
    )
)]
pub async fn get_saved_analyses(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
    Query(params): Query<GetSavedAnalysesParams>,
) -> Result<Response<GetSavedAnalysesResponse>, ApiError> {
    let analyses = state
        .service
        .get_saved_analyses(
            user_id,
            GetSavedAnalysesFilter {
                offset: params.offset,
                limit: params.limit,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetSavedAnalysesResponse { data: analyses }))
}
