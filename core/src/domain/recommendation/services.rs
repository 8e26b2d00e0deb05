use uuid::Uuid;

use crate::domain::{
    analysis::{ports::SavedAnalysisRepository, services::DEFAULT_PROFILE_TYPE},
    common::{entities::app_errors::CoreError, services::Service},
    profile::ports::UserProfileRepository,
    recommendation::{
        entities::{CategoryHint, ProductCatalog, ProductRecord},
        ports::RecommendationService,
        value_objects::{RecommendProductsInput, RecommendRequest},
    },
};

/// Upper bound on returned recommendations.
pub const MAX_RECOMMENDATIONS: usize = 5;

const SKIN_PRODUCT_TYPES: [&str; 3] = ["serum", "moisturizer", "cleanser"];
const HAIR_PRODUCT_TYPES: [&str; 4] = ["shampoo", "conditioner", "mask", "oil"];

/// Classifies a requested product type as skin- or hair-oriented. The two
/// heuristics are evaluated independently; a string satisfying both is
/// reported as `Ambiguous` rather than silently resolved to one side.
pub fn infer_category(product_type: &str) -> CategoryHint {
    let lowered = product_type.to_lowercase();

    let skin = lowered.contains("face")
        || lowered.contains("skin")
        || SKIN_PRODUCT_TYPES.contains(&lowered.as_str());
    let hair = lowered.contains("hair") || HAIR_PRODUCT_TYPES.contains(&lowered.as_str());

    match (skin, hair) {
        (true, true) => CategoryHint::Ambiguous,
        (true, false) => CategoryHint::Skin,
        (false, true) => CategoryHint::Hair,
        (false, false) => CategoryHint::Unknown,
    }
}

/// The soft-filter combinator: applies `predicate` as a narrowing step, but
/// keeps the prior candidate set whenever narrowing would empty it.
fn narrow_if_non_empty<'a, F>(
    candidates: Vec<&'a ProductRecord>,
    predicate: F,
) -> Vec<&'a ProductRecord>
where
    F: Fn(&ProductRecord) -> bool,
{
    let narrowed: Vec<&ProductRecord> = candidates
        .iter()
        .copied()
        .filter(|record| predicate(record))
        .collect();

    if narrowed.is_empty() { candidates } else { narrowed }
}

fn suits_type(applicability: &[String], user_type: &str) -> bool {
    applicability
        .iter()
        .any(|entry| entry == "all" || entry == user_type)
}

/// Pure progressive-refinement pipeline over the product catalog. Stages run
/// in a fixed order and each one is soft: a stage that would eliminate every
/// candidate is skipped. Survivors keep catalog declaration order; the first
/// [`MAX_RECOMMENDATIONS`] are returned.
pub fn recommend_products(
    products: &ProductCatalog,
    input: &RecommendProductsInput,
) -> Vec<ProductRecord> {
    let hint = infer_category(&input.product_type);
    if hint == CategoryHint::Ambiguous {
        tracing::warn!(
            product_type = %input.product_type,
            "product type matches both skin and hair heuristics; applying both"
        );
    }

    let product_type = input.product_type.to_lowercase();
    let concern = input.concern.to_lowercase();
    let preferred = input.preferred_ingredient.to_lowercase();

    let mut candidates: Vec<&ProductRecord> = products.iter().collect();

    // Stage 1: category applicability, with a product-type equality fallback.
    candidates = narrow_if_non_empty(candidates, |record| {
        let applicable = (hint.covers_skin() && !record.for_skin_types.is_empty())
            || (hint.covers_hair() && !record.for_hair_types.is_empty());
        applicable || record.product_type.to_lowercase() == product_type
    });

    // Stage 2: concern substring match over concern tags.
    if !concern.is_empty() {
        candidates = narrow_if_non_empty(candidates, |record| {
            record
                .concerns
                .iter()
                .any(|tag| tag.to_lowercase().contains(&concern))
        });
    }

    // Stage 3: preferred ingredient, only when supplied.
    if !preferred.is_empty() {
        candidates = narrow_if_non_empty(candidates, |record| {
            record
                .key_ingredients
                .iter()
                .any(|ingredient| ingredient.to_lowercase().contains(&preferred))
        });
    }

    // Stage 4: user type suitability, per covered category.
    if hint.covers_skin() && !input.skin_type.is_empty() {
        candidates = narrow_if_non_empty(candidates, |record| {
            suits_type(&record.for_skin_types, &input.skin_type)
        });
    }
    if hint.covers_hair() && !input.hair_type.is_empty() {
        candidates = narrow_if_non_empty(candidates, |record| {
            suits_type(&record.for_hair_types, &input.hair_type)
        });
    }

    candidates
        .into_iter()
        .take(MAX_RECOMMENDATIONS)
        .cloned()
        .collect()
}

impl<SA, UP> RecommendationService for Service<SA, UP>
where
    SA: SavedAnalysisRepository,
    UP: UserProfileRepository,
{
    async fn recommend_for_user(
        &self,
        user_id: Uuid,
        request: RecommendRequest,
    ) -> Result<Vec<ProductRecord>, CoreError> {
        let profile = self.profile_repository.get_by_user_id(user_id).await?;

        let (skin_type, hair_type) = match profile {
            Some(profile) => (profile.skin_type, profile.hair_type),
            None => (
                DEFAULT_PROFILE_TYPE.to_string(),
                DEFAULT_PROFILE_TYPE.to_string(),
            ),
        };

        Ok(recommend_products(
            &self.products,
            &RecommendProductsInput {
                product_type: request.product_type,
                concern: request.concern,
                preferred_ingredient: request.preferred_ingredient,
                skin_type,
                hair_type,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recommendation::data::builtin_products;

    fn products() -> ProductCatalog {
        ProductCatalog::new(builtin_products())
    }

    fn input(product_type: &str, concern: &str) -> RecommendProductsInput {
        RecommendProductsInput {
            product_type: product_type.to_string(),
            concern: concern.to_string(),
            ..RecommendProductsInput::default()
        }
    }

    #[test]
    fn infers_skin_from_keywords_and_known_types() {
        assert_eq!(infer_category("face wash"), CategoryHint::Skin);
        assert_eq!(infer_category("Moisturizer"), CategoryHint::Skin);
        assert_eq!(infer_category("skin tonic"), CategoryHint::Skin);
    }

    #[test]
    fn infers_hair_from_keywords_and_known_types() {
        assert_eq!(infer_category("shampoo"), CategoryHint::Hair);
        assert_eq!(infer_category("hair serum"), CategoryHint::Hair);
        assert_eq!(infer_category("OIL"), CategoryHint::Hair);
    }

    #[test]
    fn both_heuristics_true_is_ambiguous_neither_is_unknown() {
        assert_eq!(infer_category("skin and hair gel"), CategoryHint::Ambiguous);
        assert_eq!(infer_category("toothpaste"), CategoryHint::Unknown);
    }

    #[test]
    fn shampoo_dandruff_returns_the_anti_dandruff_record_and_no_skin_products() {
        let results = recommend_products(&products(), &input("shampoo", "dandruff"));

        assert!(results.len() <= MAX_RECOMMENDATIONS);
        assert!(results.iter().any(|r| r.name == "Anti-Dandruff Shampoo"));
        assert!(results.iter().all(|r| r.for_skin_types.is_empty()));
    }

    #[test]
    fn results_are_capped_at_five() {
        // A bare skin request matches every skin record; cap still holds.
        let results = recommend_products(&products(), &input("skin", ""));
        assert!(results.len() <= MAX_RECOMMENDATIONS);
    }

    #[test]
    fn preferred_ingredient_narrows_when_it_matches() {
        let request = RecommendProductsInput {
            preferred_ingredient: "Neem".to_string(),
            ..input("cleanser", "acne")
        };
        let results = recommend_products(&products(), &request);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Neem Face Wash");
    }

    #[test]
    fn unmatched_preferred_ingredient_keeps_prior_stage_results() {
        let baseline = recommend_products(&products(), &input("cleanser", "acne"));
        let request = RecommendProductsInput {
            preferred_ingredient: "Unicorn Dust".to_string(),
            ..input("cleanser", "acne")
        };
        let results = recommend_products(&products(), &request);

        assert_eq!(results, baseline);
        assert!(!results.is_empty());
    }

    #[test]
    fn skin_type_suitability_prefers_matching_records() {
        let request = RecommendProductsInput {
            skin_type: "dry".to_string(),
            ..input("moisturizer", "dryness")
        };
        let results = recommend_products(&products(), &request);

        assert!(!results.is_empty());
        assert!(
            results
                .iter()
                .all(|r| suits_type(&r.for_skin_types, "dry"))
        );
    }

    #[test]
    fn unsuitable_user_type_falls_back_instead_of_emptying() {
        let request = RecommendProductsInput {
            hair_type: "braided".to_string(),
            ..input("shampoo", "dandruff")
        };
        let results = recommend_products(&products(), &request);

        // "braided" appears in no applicability list, but the anti-dandruff
        // record's "all" wildcard admits it, so the stage narrows to that.
        assert!(results.iter().any(|r| r.name == "Anti-Dandruff Shampoo"));
        assert!(!results.is_empty());
    }

    #[test]
    fn survivors_keep_catalog_declaration_order() {
        let results = recommend_products(&products(), &input("shampoo", ""));

        let ids: Vec<&str> = results.iter().map(|r| r.id.as_str()).collect();
        let mut sorted = ids.clone();
        sorted.sort_by_key(|id| {
            products()
                .iter()
                .position(|r| r.id == *id)
                .unwrap_or(usize::MAX)
        });
        assert_eq!(ids, sorted);
    }

    #[test]
    fn recommendation_is_deterministic_for_identical_inputs() {
        let first = recommend_products(&products(), &input("shampoo", "dandruff"));
        let second = recommend_products(&products(), &input("shampoo", "dandruff"));
        assert_eq!(first, second);
    }
}
