use crate::domain::{
    analysis::{ports::SavedAnalysisRepository, value_objects::AnalyzerOptions},
    ingredient::entities::{CombinationRuleSet, IngredientCatalog},
    profile::ports::UserProfileRepository,
    recommendation::entities::ProductCatalog,
};

/// Aggregate service over the immutable knowledge tables and the external
/// collaborator ports. The analyzer and recommender themselves are pure
/// functions; this type wires them to profile lookup and persistence.
#[derive(Debug, Clone)]
pub struct Service<SA, UP>
where
    SA: SavedAnalysisRepository,
    UP: UserProfileRepository,
{
    pub(crate) catalog: IngredientCatalog,
    pub(crate) rule_set: CombinationRuleSet,
    pub(crate) products: ProductCatalog,
    pub(crate) analyzer_options: AnalyzerOptions,
    pub(crate) saved_analysis_repository: SA,
    pub(crate) profile_repository: UP,
}

impl<SA, UP> Service<SA, UP>
where
    SA: SavedAnalysisRepository,
    UP: UserProfileRepository,
{
    pub fn new(
        catalog: IngredientCatalog,
        rule_set: CombinationRuleSet,
        products: ProductCatalog,
        analyzer_options: AnalyzerOptions,
        saved_analysis_repository: SA,
        profile_repository: UP,
    ) -> Self {
        Self {
            catalog,
            rule_set,
            products,
            analyzer_options,
            saved_analysis_repository,
            profile_repository,
        }
    }

    pub fn ingredient_catalog(&self) -> &IngredientCatalog {
        &self.catalog
    }

    pub fn product_catalog(&self) -> &ProductCatalog {
        &self.products
    }
}
