//! Built-in ingredient knowledge tables. These ship with the library and are
//! used whenever no external catalog files are configured.

use crate::domain::ingredient::entities::{CombinationRule, Ingredient, IngredientKind};

#[allow(clippy::too_many_arguments)]
fn entry(
    name: &str,
    aliases: &[&str],
    uses: &[&str],
    skin_safe: bool,
    hair_safe: bool,
    caution_for: &[&str],
    kind: IngredientKind,
    home_remedy: bool,
    notes: &str,
) -> Ingredient {
    Ingredient {
        name: name.to_string(),
        aliases: aliases.iter().map(ToString::to_string).collect(),
        uses: uses.iter().map(ToString::to_string).collect(),
        skin_safe,
        hair_safe,
        caution_for: caution_for.iter().map(ToString::to_string).collect(),
        kind,
        home_remedy,
        notes: notes.to_string(),
    }
}

fn rule(combo: &[&str], synergy: &str, caution: &str) -> CombinationRule {
    CombinationRule {
        combo: combo.iter().map(ToString::to_string).collect(),
        synergy: synergy.to_string(),
        caution: caution.to_string(),
    }
}

/// The curated built-in ingredient entries. Validated into an
/// [`IngredientCatalog`](crate::domain::ingredient::entities::IngredientCatalog)
/// at service construction.
pub fn builtin_ingredients() -> Vec<Ingredient> {
    use IngredientKind::{Natural, Synthetic};

    vec![
        entry(
            "Niacinamide",
            &["Nicotinamide", "Vitamin B3"],
            &["brightening", "pore-refining", "anti-inflammatory"],
            true,
            true,
            &["very sensitive skin"],
            Synthetic,
            false,
            "Works well with most ingredients. May cause flushing when used with Vitamin C.",
        ),
        entry(
            "Hyaluronic Acid",
            &["Sodium Hyaluronate"],
            &["hydrating", "plumping", "moisture-binding"],
            true,
            true,
            &[],
            Synthetic,
            false,
            "Best applied to damp skin. Multiple molecular weights provide deeper hydration.",
        ),
        entry(
            "Retinol",
            &["Vitamin A"],
            &["anti-aging", "acne-treatment", "cell-turnover"],
            true,
            false,
            &["sensitive skin", "dry skin", "pregnancy"],
            Synthetic,
            false,
            "Use at night. Start with low concentration. Always use sunscreen during day.",
        ),
        entry(
            "Salicylic Acid",
            &["BHA", "Beta Hydroxy Acid"],
            &["exfoliating", "anti-acne", "oil-control"],
            true,
            true,
            &["very dry skin", "sensitive skin"],
            Synthetic,
            false,
            "Oil-soluble acid that penetrates pores. Can be drying.",
        ),
        entry(
            "Glycolic Acid",
            &["AHA", "Alpha Hydroxy Acid"],
            &["exfoliating", "brightening", "anti-aging"],
            true,
            true,
            &["sensitive skin"],
            Synthetic,
            false,
            "Water-soluble acid that works on skin surface. Increases sun sensitivity.",
        ),
        entry(
            "Vitamin C",
            &["Ascorbic Acid", "L-Ascorbic Acid", "Sodium Ascorbyl Phosphate"],
            &["antioxidant", "brightening", "collagen-boosting"],
            true,
            true,
            &["very sensitive skin"],
            Synthetic,
            false,
            "Unstable ingredient. Best used in morning. Look for stabilized formulations.",
        ),
        entry(
            "Turmeric",
            &["Haldi", "Curcuma longa"],
            &["anti-inflammatory", "brightening", "antioxidant"],
            true,
            true,
            &[],
            Natural,
            true,
            "Can stain skin temporarily. Mix with other ingredients to reduce staining.",
        ),
        entry(
            "Aloe Vera",
            &["Aloe Barbadensis"],
            &["soothing", "hydrating", "healing"],
            true,
            true,
            &["aloe allergies"],
            Natural,
            true,
            "Calming for sunburns and irritation. Good for all skin types.",
        ),
        entry(
            "Coconut Oil",
            &["Cocos Nucifera Oil"],
            &["moisturizing", "conditioning", "strengthening"],
            false,
            true,
            &["acne-prone skin", "oily skin"],
            Natural,
            true,
            "Highly comedogenic for facial use. Excellent for hair conditioning.",
        ),
        entry(
            "Tea Tree Oil",
            &["Melaleuca Alternifolia"],
            &["anti-bacterial", "anti-acne", "purifying"],
            true,
            true,
            &["sensitive skin", "dry skin"],
            Natural,
            true,
            "Always dilute before use. Potent anti-bacterial properties.",
        ),
        entry(
            "Curd",
            &["Yogurt", "Dahi"],
            &["exfoliating", "moisturizing", "soothing"],
            true,
            true,
            &["dairy allergies"],
            Natural,
            true,
            "Contains lactic acid for gentle exfoliation. Good protein source for hair.",
        ),
        entry(
            "Honey",
            &["Mel"],
            &["humectant", "anti-bacterial", "soothing"],
            true,
            true,
            &[],
            Natural,
            true,
            "Natural humectant that draws moisture into skin.",
        ),
        entry(
            "Neem",
            &["Azadirachta Indica"],
            &["anti-bacterial", "anti-fungal", "purifying"],
            true,
            true,
            &["very sensitive skin"],
            Natural,
            true,
            "Bitter smell but excellent for acne and scalp issues.",
        ),
        entry(
            "Amla",
            &["Indian Gooseberry", "Phyllanthus Emblica"],
            &["vitamin C source", "strengthening", "conditioning"],
            true,
            true,
            &[],
            Natural,
            true,
            "High vitamin C content. Traditional remedy for hair growth and strength.",
        ),
        entry(
            "Lemon",
            &["Citrus Limon"],
            &["brightening", "oil-control", "astringent"],
            false,
            true,
            &["sensitive skin", "dry skin"],
            Natural,
            true,
            "Very acidic and can cause irritation. Always dilute. Increases sun sensitivity.",
        ),
        entry(
            "Apple Cider Vinegar",
            &["ACV"],
            &["balancing pH", "clarifying", "dandruff-control"],
            false,
            true,
            &["sensitive skin", "color-treated hair"],
            Natural,
            true,
            "Always dilute before use. Can help balance scalp pH.",
        ),
        entry(
            "Curry Leaves",
            &["Murraya Koenigii"],
            &["strengthening", "anti-hair fall", "conditioning"],
            false,
            true,
            &[],
            Natural,
            true,
            "Traditional remedy for hair fall. Usually used with coconut oil.",
        ),
        entry(
            "Saffron",
            &["Kesar", "Crocus Sativus"],
            &["brightening", "even-toning", "anti-inflammatory"],
            true,
            false,
            &["pregnancy"],
            Natural,
            true,
            "Expensive but potent brightening agent. Often paired with milk.",
        ),
        entry(
            "Multani Mitti",
            &["Fuller's Earth", "Clay"],
            &["oil-absorbing", "detoxifying", "pore-cleansing"],
            true,
            true,
            &["dry skin"],
            Natural,
            true,
            "Excellent for oily skin. Can be drying, so follow with moisturizer.",
        ),
        entry(
            "Rosehip Oil",
            &["Rosa Canina Fruit Oil"],
            &["moisturizing", "anti-aging", "brightening"],
            true,
            true,
            &["very oily skin"],
            Natural,
            false,
            "Rich in vitamins A and C. Good for scars and hyperpigmentation.",
        ),
    ]
}

/// The curated built-in combination rules, in firing order.
pub fn builtin_combination_rules() -> Vec<CombinationRule> {
    vec![
        rule(
            &["Turmeric", "Curd"],
            "Brightening, anti-inflammatory, moisturizing",
            "May stain skin, patch test advised",
        ),
        rule(
            &["Turmeric", "Honey"],
            "Anti-bacterial, soothing, brightening",
            "May stain skin",
        ),
        rule(
            &["Neem", "Turmeric"],
            "Powerful anti-acne, purifying, anti-bacterial",
            "Can be drying, use moisturizer after",
        ),
        rule(
            &["Coconut Oil", "Curry Leaves"],
            "Hair strengthening, anti-hair fall",
            "Not suitable for oily scalps without thorough rinsing",
        ),
        rule(
            &["Aloe Vera", "Honey"],
            "Hydrating, soothing, healing",
            "None significant",
        ),
        rule(
            &["Multani Mitti", "Rose Water"],
            "Cooling, oil-control, pore-refining",
            "Can be very drying for already dry skin",
        ),
        rule(
            &["Vitamin C", "Niacinamide"],
            "None - these ingredients can inactivate each other",
            "May cause flushing, better to use separately",
        ),
        rule(
            &["Retinol", "Acids"],
            "None",
            "Increased irritation risk, use on alternate days",
        ),
        rule(
            &["Hyaluronic Acid", "Vitamin C"],
            "Hydrating and brightening, collagen-boosting",
            "None significant",
        ),
        rule(
            &["Amla", "Coconut Oil"],
            "Hair strengthening, nourishing, promotes growth",
            "None significant",
        ),
    ]
}
