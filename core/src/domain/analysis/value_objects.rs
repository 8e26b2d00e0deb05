use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::analysis::entities::{AnalysisResult, ProductCategory};

/// How unmatched ingredients are scored. The original product behavior is
/// fail-open (`AssumeSafe`); `FlagForReview` flips the per-finding `is_safe`
/// to `false` without touching the `unknown` tally. This is a product-risk
/// decision, so it is configuration rather than a hard-coded default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum UnknownIngredientPolicy {
    #[default]
    AssumeSafe,
    FlagForReview,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalyzerOptions {
    pub unknown_policy: UnknownIngredientPolicy,
}

/// Full input to the pure analyzer. Skin and hair types are opaque labels;
/// no vocabulary validation happens at this layer.
#[derive(Debug, Clone)]
pub struct AnalyzeIngredientsInput {
    pub raw_list: String,
    pub category: ProductCategory,
    pub skin_type: String,
    pub hair_type: String,
    pub is_home_remedy: bool,
}

/// Service-level analyze request; skin and hair types come from the user's
/// stored profile.
#[derive(Debug, Clone)]
pub struct AnalyzeRequest {
    pub raw_list: String,
    pub category: ProductCategory,
    pub is_home_remedy: bool,
}

#[derive(Debug, Clone)]
pub struct SaveAnalysisInput {
    pub user_id: Uuid,
    pub product_name: String,
    pub category: ProductCategory,
    pub raw_ingredients: String,
    pub result: AnalysisResult,
}

#[derive(Debug, Clone, Default)]
pub struct GetSavedAnalysesFilter {
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}
