use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpsertProfileRequest {
    /// Free-form skin type, e.g. "oily", "dry", "sensitive".
    #[validate(length(min = 1, max = 50, message = "skin_type is required"))]
    #[schema(example = "oily")]
    pub skin_type: String,
    /// Free-form hair type, e.g. "curly", "fine", "color-treated".
    #[validate(length(min = 1, max = 50, message = "hair_type is required"))]
    #[schema(example = "curly")]
    pub hair_type: String,
}
