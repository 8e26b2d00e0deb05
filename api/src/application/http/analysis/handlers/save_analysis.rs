use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::{
    analysis::validators::SaveAnalysisRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};
use glowcheck_core::domain::analysis::{
    entities::SavedAnalysis, ports::AnalysisService, value_objects::SaveAnalysisInput,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SaveAnalysisResponse {
    pub data: SavedAnalysis,
}

#[utoipa::path(
    post,
    path = "/users/{user_id}/analysis/saved",
    tag = "analysis",
    summary = "Save an analysis result",
    params(
        ("user_id" = Uuid, Path, description = "User id"),
    ),
    request_body = SaveAnalysisRequest,
    responses(
        (status = 201, body = SaveAnalysisResponse)
    )
)]
pub async fn save_analysis(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SaveAnalysisRequest>,
) -> Result<Response<SaveAnalysisResponse>, ApiError> {
    let saved = state
        .service
        .save_analysis(SaveAnalysisInput {
            user_id,
            product_name: payload.product_name,
            category: payload.category,
            raw_ingredients: payload.raw_ingredients,
            result: payload.result,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(SaveAnalysisResponse { data: saved }))
}
