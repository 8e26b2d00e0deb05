use axum::extract::{Path, Query, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::{
    recommendation::validators::GetRecommendationsParams,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use glowcheck_core::domain::recommendation::{
    entities::ProductRecord, ports::RecommendationService, value_objects::RecommendRequest,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GetRecommendationsResponse {
    pub data: Vec<ProductRecord>,
}

#[utoipa::path(
    get,
    path = "/users/{user_id}/recommendations",
    tag = "recommendation",
    summary = "Recommend products",
    description = "Progressively narrows the product catalog by category, concern, preferred ingredient and user type; returns at most five records",
    params(
        ("user_id" = Uuid, Path, description = "User id"),
        GetRecommendationsParams,
    ),
    responses(
        (status = 200, body = GetRecommendationsResponse)
    )
)]
pub async fn get_recommendations(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
    Query(params): Query<GetRecommendationsParams>,
) -> Result<Response<GetRecommendationsResponse>, ApiError> {
    let products = state
        .service
        .recommend_for_user(
            user_id,
            RecommendRequest {
                product_type: params.product_type,
                concern: params.concern,
                preferred_ingredient: params.preferred_ingredient,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetRecommendationsResponse { data: products }))
}
