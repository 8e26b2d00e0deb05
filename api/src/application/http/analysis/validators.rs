use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use glowcheck_core::domain::analysis::entities::{AnalysisResult, ProductCategory};

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct AnalyzeIngredientsRequest {
    /// Comma-separated ingredient list, as printed on the product.
    #[validate(length(
        min = 1,
        max = 5000,
        message = "ingredients must be between 1 and 5000 characters"
    ))]
    pub ingredients: String,
    pub category: ProductCategory,
    #[serde(default)]
    pub is_home_remedy: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct SaveAnalysisRequest {
    #[validate(length(
        min = 1,
        max = 200,
        message = "product_name must be between 1 and 200 characters"
    ))]
    pub product_name: String,
    pub category: ProductCategory,
    #[validate(length(
        min = 1,
        max = 5000,
        message = "raw_ingredients must be between 1 and 5000 characters"
    ))]
    pub raw_ingredients: String,
    pub result: AnalysisResult,
}

#[derive(Debug, Serialize, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct GetSavedAnalysesParams {
    #[schema(example = 0)]
    pub offset: Option<u32>,
    #[schema(example = 20)]
    pub limit: Option<u32>,
}
