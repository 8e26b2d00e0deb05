use tracing::info;

use crate::{
    domain::{
        analysis::value_objects::AnalyzerOptions,
        common::{GlowcheckConfig, entities::app_errors::CoreError, services::Service},
        ingredient::{
            data::{builtin_combination_rules, builtin_ingredients},
            entities::{CombinationRuleSet, IngredientCatalog},
        },
        recommendation::{data::builtin_products, entities::ProductCatalog},
    },
    infrastructure::{
        analysis::repositories::InMemorySavedAnalysisRepository,
        ingredient::catalog_loader::{
            load_combination_rules, load_ingredient_catalog, load_product_catalog,
        },
        profile::repositories::InMemoryUserProfileRepository,
    },
};

/// The default service assembly over the in-memory collaborator adapters.
pub type GlowcheckService = Service<InMemorySavedAnalysisRepository, InMemoryUserProfileRepository>;

/// Loads and validates the knowledge tables (built-in datasets unless file
/// overrides are configured) and assembles the service. Tables are immutable
/// for the lifetime of the process.
pub fn create_service(config: GlowcheckConfig) -> Result<GlowcheckService, CoreError> {
    let catalog = match &config.catalog.ingredients_file {
        Some(path) => load_ingredient_catalog(path)?,
        None => IngredientCatalog::new(builtin_ingredients())?,
    };

    let rule_set = match &config.catalog.combination_rules_file {
        Some(path) => load_combination_rules(path)?,
        None => CombinationRuleSet::new(builtin_combination_rules())?,
    };

    let products = match &config.catalog.products_file {
        Some(path) => load_product_catalog(path)?,
        None => ProductCatalog::new(builtin_products()),
    };

    info!(
        ingredients = catalog.len(),
        rules = rule_set.len(),
        products = products.len(),
        "knowledge tables loaded"
    );

    Ok(Service::new(
        catalog,
        rule_set,
        products,
        AnalyzerOptions::default(),
        InMemorySavedAnalysisRepository::new(),
        InMemoryUserProfileRepository::new(),
    ))
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::domain::{
        analysis::{
            entities::ProductCategory,
            ports::AnalysisService,
            value_objects::{AnalyzeRequest, GetSavedAnalysesFilter, SaveAnalysisInput},
        },
        profile::{entities::UserProfile, ports::UserProfileRepository},
        recommendation::{ports::RecommendationService, value_objects::RecommendRequest},
    };

    fn service() -> GlowcheckService {
        create_service(GlowcheckConfig::default()).expect("service")
    }

    fn analyze_request(raw: &str) -> AnalyzeRequest {
        AnalyzeRequest {
            raw_list: raw.to_string(),
            category: ProductCategory::Skin,
            is_home_remedy: false,
        }
    }

    #[tokio::test]
    async fn analyze_defaults_to_normal_types_without_a_profile() {
        let service = service();

        // Retinol cautions sensitive skin; the default "normal" passes.
        let result = service
            .analyze_for_user(Uuid::new_v4(), analyze_request("Retinol"))
            .await
            .expect("analyze");
        assert!(result.findings[0].is_safe);
    }

    #[tokio::test]
    async fn analyze_uses_the_stored_profile() {
        let service = service();
        let user_id = Uuid::new_v4();

        service
            .profile_repository
            .upsert(UserProfile::new(
                user_id,
                "sensitive skin".to_string(),
                "curly".to_string(),
            ))
            .await
            .expect("upsert");

        let result = service
            .analyze_for_user(user_id, analyze_request("Retinol"))
            .await
            .expect("analyze");
        assert!(!result.findings[0].is_safe);
        assert_eq!(result.tally.caution, 1);
    }

    #[tokio::test]
    async fn saved_analyses_round_trip_and_delete() {
        let service = service();
        let user_id = Uuid::new_v4();

        let result = service
            .analyze_for_user(user_id, analyze_request("Turmeric, Curd"))
            .await
            .expect("analyze");

        let saved = service
            .save_analysis(SaveAnalysisInput {
                user_id,
                product_name: "Ubtan Mix".to_string(),
                category: ProductCategory::Skin,
                raw_ingredients: "Turmeric, Curd".to_string(),
                result: result.clone(),
            })
            .await
            .expect("save");

        let listed = service
            .get_saved_analyses(user_id, GetSavedAnalysesFilter::default())
            .await
            .expect("list");
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].result, result);

        let fetched = service
            .get_saved_analysis(saved.id, user_id)
            .await
            .expect("get");
        assert_eq!(fetched, saved);

        service
            .delete_saved_analysis(saved.id, user_id)
            .await
            .expect("delete");
        let missing = service.get_saved_analysis(saved.id, user_id).await;
        assert_eq!(missing, Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn deleting_a_foreign_analysis_is_not_found() {
        let service = service();
        let result = service
            .delete_saved_analysis(Uuid::new_v4(), Uuid::new_v4())
            .await;
        assert_eq!(result, Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn recommendation_uses_the_stored_profile() {
        let service = service();
        let user_id = Uuid::new_v4();

        service
            .profile_repository
            .upsert(UserProfile::new(
                user_id,
                "dry".to_string(),
                "dry".to_string(),
            ))
            .await
            .expect("upsert");

        let results = service
            .recommend_for_user(
                user_id,
                RecommendRequest {
                    product_type: "shampoo".to_string(),
                    concern: "dryness".to_string(),
                    ..RecommendRequest::default()
                },
            )
            .await
            .expect("recommend");

        assert!(!results.is_empty());
        assert!(results.len() <= 5);
        assert!(results.iter().any(|r| r.name == "Hydrating Shampoo"));
    }
}
