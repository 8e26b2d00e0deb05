use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::{
    profile::validators::UpsertProfileRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};
use glowcheck_core::domain::profile::{
    entities::UserProfile, ports::ProfileService, value_objects::UpsertProfileInput,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpsertProfileResponse {
    pub data: UserProfile,
}

#[utoipa::path(
    put,
    path = "/users/{user_id}/profile",
    tag = "profile",
    summary = "Create or update a user profile",
    description = "Stores the skin and hair type used to personalize analyses and recommendations",
    params(
        ("user_id" = Uuid, Path, description = "User id"),
    ),
    request_body = UpsertProfileRequest,
    responses(
        (status = 200, body = UpsertProfileResponse)
    )
)]
pub async fn upsert_profile(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpsertProfileRequest>,
) -> Result<Response<UpsertProfileResponse>, ApiError> {
    let profile = state
        .service
        .upsert_profile(UpsertProfileInput {
            user_id,
            skin_type: payload.skin_type,
            hair_type: payload.hair_type,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpsertProfileResponse { data: profile }))
}
