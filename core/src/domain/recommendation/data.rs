//! Built-in product catalog, used whenever no external products file is
//! configured. Declaration order is ranking order.

use crate::domain::recommendation::entities::ProductRecord;

#[allow(clippy::too_many_arguments)]
fn record(
    id: &str,
    name: &str,
    brand: &str,
    product_type: &str,
    concerns: &[&str],
    key_ingredients: &[&str],
    description: &str,
    for_skin_types: &[&str],
    for_hair_types: &[&str],
) -> ProductRecord {
    ProductRecord {
        id: id.to_string(),
        name: name.to_string(),
        brand: brand.to_string(),
        product_type: product_type.to_string(),
        concerns: concerns.iter().map(ToString::to_string).collect(),
        key_ingredients: key_ingredients.iter().map(ToString::to_string).collect(),
        description: description.to_string(),
        image_url: None,
        link: None,
        for_skin_types: for_skin_types.iter().map(ToString::to_string).collect(),
        for_hair_types: for_hair_types.iter().map(ToString::to_string).collect(),
    }
}

/// The curated built-in product records.
pub fn builtin_products() -> Vec<ProductRecord> {
    vec![
        record(
            "s1",
            "Vitamin C Brightening Serum",
            "Aqualogica",
            "serum",
            &["dullness", "dark spots", "uneven tone"],
            &["Vitamin C", "Hyaluronic Acid", "Niacinamide"],
            "Lightweight serum that brightens and evens skin tone while hydrating.",
            &["all", "normal", "combination", "oily"],
            &[],
        ),
        record(
            "s2",
            "Hydrating Gel Moisturizer",
            "Dot&Key",
            "moisturizer",
            &["dryness", "dehydration"],
            &["Hyaluronic Acid", "Aloe Vera", "Ceramides"],
            "Oil-free gel moisturizer that deeply hydrates without clogging pores.",
            &["all", "oily", "combination", "sensitive"],
            &[],
        ),
        record(
            "s3",
            "Salicylic Acid Cleanser",
            "Dermaco",
            "cleanser",
            &["acne", "oiliness", "breakouts"],
            &["Salicylic Acid", "Tea Tree Oil", "Glycerin"],
            "Gentle foaming cleanser that removes excess oil and treats breakouts.",
            &["oily", "acne-prone", "combination"],
            &[],
        ),
        record(
            "s4",
            "Barrier Repair Cream",
            "Bioderma",
            "moisturizer",
            &["sensitivity", "dryness", "irritation"],
            &["Ceramides", "Hyaluronic Acid", "Niacinamide"],
            "Rich but non-greasy cream that restores the skin's protective barrier.",
            &["dry", "sensitive", "normal"],
            &[],
        ),
        record(
            "s5",
            "Neem Face Wash",
            "Himalaya",
            "cleanser",
            &["acne", "oiliness", "pimples"],
            &["Neem", "Turmeric"],
            "Ayurvedic face wash that fights acne-causing bacteria and purifies skin.",
            &["oily", "acne-prone", "combination"],
            &[],
        ),
        record(
            "h1",
            "Protein Hair Mask",
            "Soulflower",
            "mask",
            &["damage", "breakage", "dryness"],
            &["Keratin", "Argan Oil", "Vitamin E"],
            "Intensive repair mask that strengthens damaged hair and prevents breakage.",
            &[],
            &["dry", "damaged", "frizzy"],
        ),
        record(
            "h2",
            "Anti-Dandruff Shampoo",
            "WOW",
            "shampoo",
            &["dandruff", "flaking", "itchy scalp"],
            &["Tea Tree Oil", "Apple Cider Vinegar", "Zinc Pyrithione"],
            "Clarifying shampoo that eliminates dandruff and soothes an itchy scalp.",
            &[],
            &["all", "oily"],
        ),
        record(
            "h3",
            "Frizz Control Serum",
            "L'Oreal",
            "serum",
            &["frizz", "dryness", "flyaways"],
            &["Argan Oil", "Vitamin E", "Silicones"],
            "Lightweight serum that tames frizz and adds shine without weighing hair down.",
            &[],
            &["curly", "frizzy", "dry"],
        ),
        record(
            "h4",
            "Hydrating Shampoo",
            "Dove",
            "shampoo",
            &["dryness", "dullness"],
            &["Glycerin", "Coconut Oil", "Aloe Vera"],
            "Gentle cleansing shampoo that adds moisture while cleaning.",
            &[],
            &["dry", "normal", "frizzy"],
        ),
        record(
            "h5",
            "Amla Hair Oil",
            "Mamaearth",
            "oil",
            &["hair fall", "thinning", "dryness"],
            &["Amla", "Coconut Oil", "Brahmi"],
            "Traditional ayurvedic hair oil that strengthens roots and promotes growth.",
            &[],
            &["all", "dry", "normal"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_products_have_unique_ids() {
        let products = builtin_products();
        let mut ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), products.len());
    }

    #[test]
    fn every_builtin_product_serves_exactly_one_category() {
        for product in builtin_products() {
            assert_ne!(
                product.for_skin_types.is_empty(),
                product.for_hair_types.is_empty(),
                "{} must serve skin or hair",
                product.id
            );
        }
    }
}
