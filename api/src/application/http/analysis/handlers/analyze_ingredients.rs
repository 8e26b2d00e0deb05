use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::{
    analysis::validators::AnalyzeIngredientsRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};
use glowcheck_core::domain::analysis::{
    entities::AnalysisResult, ports::AnalysisService, value_objects::AnalyzeRequest,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeIngredientsResponse {
    pub data: AnalysisResult,
}

#[utoipa::path(
    post,
    path = "/users/{user_id}/analysis",
    tag = "analysis",
    summary = "Analyze an ingredient list",
    description = "Resolves each ingredient against the catalog and scores safety for the user's profile",
    params(
        ("user_id" = Uuid, Path, description = "User id"),
    ),
    request_body = AnalyzeIngredientsRequest,
    responses(
        (status = 200, body = AnalyzeIngredientsResponse)
    )
)]
pub async fn analyze_ingredients(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AnalyzeIngredientsRequest>,
) -> Result<Response<AnalyzeIngredientsResponse>, ApiError> {
    let result = state
        .service
        .analyze_for_user(
            user_id,
            AnalyzeRequest {
                raw_list: payload.ingredients,
                category: payload.category,
                is_home_remedy: payload.is_home_remedy,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AnalyzeIngredientsResponse { data: result }))
}
