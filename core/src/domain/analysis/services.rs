use uuid::Uuid;

use crate::domain::{
    analysis::{
        entities::{
            AnalysisResult, IngredientFinding, ProductCategory, SafetyTally, SavedAnalysis,
            TriggeredCombination,
        },
        helpers::tokenize_ingredient_list,
        ports::{AnalysisService, SavedAnalysisRepository},
        value_objects::{
            AnalyzeIngredientsInput, AnalyzeRequest, AnalyzerOptions, GetSavedAnalysesFilter,
            SaveAnalysisInput, UnknownIngredientPolicy,
        },
    },
    common::{entities::app_errors::CoreError, services::Service},
    ingredient::entities::{CombinationRuleSet, IngredientCatalog},
    profile::ports::UserProfileRepository,
};

/// Note attached to findings for tokens missing from the catalog.
pub const NOT_IN_DATABASE_NOTE: &str = "This ingredient is not in our database yet.";

/// Skin/hair type used when the user has no stored profile.
pub const DEFAULT_PROFILE_TYPE: &str = "normal";

/// Pure ingredient analysis over the immutable knowledge tables. No I/O, no
/// failure modes: unmatched tokens are a first-class outcome, and empty input
/// yields an empty result.
pub fn analyze_ingredient_list(
    catalog: &IngredientCatalog,
    rule_set: &CombinationRuleSet,
    options: &AnalyzerOptions,
    input: &AnalyzeIngredientsInput,
) -> AnalysisResult {
    let tokens = tokenize_ingredient_list(&input.raw_list);

    let mut findings = Vec::with_capacity(tokens.len());
    let mut tally = SafetyTally::default();

    for token in &tokens {
        match catalog.resolve(token) {
            Some(ingredient) => {
                // Caution conditions are exact labels against the user's own
                // type, per product category.
                let is_safe = match input.category {
                    ProductCategory::Skin => {
                        ingredient.skin_safe && !ingredient.caution_for.contains(&input.skin_type)
                    }
                    ProductCategory::Hair => {
                        ingredient.hair_safe && !ingredient.caution_for.contains(&input.hair_type)
                    }
                };

                if is_safe {
                    tally.safe += 1;
                } else {
                    tally.caution += 1;
                }

                findings.push(IngredientFinding {
                    name: ingredient.name.clone(),
                    purpose: ingredient.uses.clone(),
                    is_safe,
                    caution: ingredient.caution_for.clone(),
                    notes: ingredient.notes.clone(),
                    home_remedy: ingredient.home_remedy,
                });
            }
            None => {
                let is_safe = match options.unknown_policy {
                    UnknownIngredientPolicy::AssumeSafe => true,
                    UnknownIngredientPolicy::FlagForReview => false,
                };

                tally.unknown += 1;

                findings.push(IngredientFinding {
                    name: token.clone(),
                    purpose: vec!["unknown".to_string()],
                    is_safe,
                    caution: vec![],
                    notes: NOT_IN_DATABASE_NOTE.to_string(),
                    home_remedy: false,
                });
            }
        }
    }

    // Membership is tested against the raw token set, not resolved entries:
    // a rule may fire even when some of its members resolve as unknown.
    let combinations = rule_set
        .iter()
        .filter(|rule| {
            rule.combo
                .iter()
                .all(|member| tokens.contains(&member.to_lowercase()))
        })
        .map(|rule| TriggeredCombination {
            ingredients: rule.combo.clone(),
            synergy: rule.synergy.clone(),
            caution: rule.caution.clone(),
        })
        .collect();

    AnalysisResult {
        findings,
        combinations,
        tally,
    }
}

impl<SA, UP> AnalysisService for Service<SA, UP>
where
    SA: SavedAnalysisRepository,
    UP: UserProfileRepository,
{
    async fn analyze_for_user(
        &self,
        user_id: Uuid,
        request: AnalyzeRequest,
    ) -> Result<AnalysisResult, CoreError> {
        let profile = self.profile_repository.get_by_user_id(user_id).await?;

        let (skin_type, hair_type) = match profile {
            Some(profile) => (profile.skin_type, profile.hair_type),
            None => (
                DEFAULT_PROFILE_TYPE.to_string(),
                DEFAULT_PROFILE_TYPE.to_string(),
            ),
        };

        Ok(analyze_ingredient_list(
            &self.catalog,
            &self.rule_set,
            &self.analyzer_options,
            &AnalyzeIngredientsInput {
                raw_list: request.raw_list,
                category: request.category,
                skin_type,
                hair_type,
                is_home_remedy: request.is_home_remedy,
            },
        ))
    }

    async fn save_analysis(&self, input: SaveAnalysisInput) -> Result<SavedAnalysis, CoreError> {
        let analysis = SavedAnalysis::new(
            input.user_id,
            input.product_name,
            input.category,
            input.raw_ingredients,
            input.result,
        );

        self.saved_analysis_repository.create(analysis).await
    }

    async fn get_saved_analyses(
        &self,
        user_id: Uuid,
        filter: GetSavedAnalysesFilter,
    ) -> Result<Vec<SavedAnalysis>, CoreError> {
        self.saved_analysis_repository
            .get_by_user(user_id, filter)
            .await
    }

    async fn get_saved_analysis(
        &self,
        analysis_id: Uuid,
        user_id: Uuid,
    ) -> Result<SavedAnalysis, CoreError> {
        self.saved_analysis_repository
            .get_by_id(analysis_id, user_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn delete_saved_analysis(
        &self,
        analysis_id: Uuid,
        user_id: Uuid,
    ) -> Result<(), CoreError> {
        let deleted = self
            .saved_analysis_repository
            .delete(analysis_id, user_id)
            .await?;

        if deleted { Ok(()) } else { Err(CoreError::NotFound) }
    }
}
