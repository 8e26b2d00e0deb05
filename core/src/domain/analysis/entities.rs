use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Skin,
    Hair,
}

/// One finding per input token, in input order. `name` is the canonical
/// catalog name when the token matched, the raw token otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IngredientFinding {
    pub name: String,
    pub purpose: Vec<String>,
    pub is_safe: bool,
    pub caution: Vec<String>,
    pub notes: String,
    pub home_remedy: bool,
}

/// A combination rule that fired for the analyzed list, with member names as
/// authored in the rule set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TriggeredCombination {
    pub ingredients: Vec<String>,
    pub synergy: String,
    pub caution: String,
}

/// Aggregate safety counts. Always sums to the number of findings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SafetyTally {
    pub safe: u32,
    pub caution: u32,
    pub unknown: u32,
}

impl SafetyTally {
    pub fn total(&self) -> u32 {
        self.safe + self.caution + self.unknown
    }
}

/// Result of one analysis call. Immutable once returned; safe to persist or
/// serialize verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalysisResult {
    pub findings: Vec<IngredientFinding>,
    pub combinations: Vec<TriggeredCombination>,
    pub tally: SafetyTally,
}

/// A persisted analysis, as stored by the saved-analysis collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SavedAnalysis {
    pub id: Uuid,
    pub user_id: Uuid,
    pub product_name: String,
    pub category: ProductCategory,
    pub raw_ingredients: String,
    pub result: AnalysisResult,
    pub created_at: DateTime<Utc>,
}

impl SavedAnalysis {
    pub fn new(
        user_id: Uuid,
        product_name: String,
        category: ProductCategory,
        raw_ingredients: String,
        result: AnalysisResult,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id,
            product_name,
            category,
            raw_ingredients,
            result,
            created_at: now,
        }
    }
}
