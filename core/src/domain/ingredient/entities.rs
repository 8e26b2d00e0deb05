use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum IngredientKind {
    Synthetic,
    Natural,
}

/// A curated catalog entry. `name` is the canonical, display-cased name;
/// `aliases` are alternative names matched case-insensitively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Ingredient {
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    pub uses: Vec<String>,
    pub skin_safe: bool,
    pub hair_safe: bool,
    pub caution_for: Vec<String>,
    pub kind: IngredientKind,
    pub home_remedy: bool,
    pub notes: String,
}

/// A static association between a set of canonical ingredient names and a
/// known synergy/caution narrative. Fires only when every member is present
/// in the analyzed list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CombinationRule {
    pub combo: Vec<String>,
    pub synergy: String,
    pub caution: String,
}

/// Immutable ingredient knowledge table, validated on construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IngredientCatalog {
    entries: Vec<Ingredient>,
}

impl IngredientCatalog {
    /// Builds a catalog, enforcing the table invariants: canonical names are
    /// unique case-insensitively, and no alias collides with another entry's
    /// canonical name.
    pub fn new(entries: Vec<Ingredient>) -> Result<Self, CoreError> {
        let mut seen: Vec<String> = Vec::with_capacity(entries.len());
        for entry in &entries {
            let lowered = entry.name.to_lowercase();
            if seen.contains(&lowered) {
                return Err(CoreError::InvalidCatalog(format!(
                    "duplicate canonical name: {}",
                    entry.name
                )));
            }
            seen.push(lowered);
        }

        for entry in &entries {
            for alias in &entry.aliases {
                let lowered = alias.to_lowercase();
                let collides = entries.iter().any(|other| {
                    other.name != entry.name && other.name.to_lowercase() == lowered
                });
                if collides {
                    return Err(CoreError::InvalidCatalog(format!(
                        "alias {} of {} collides with another canonical name",
                        alias, entry.name
                    )));
                }
            }
        }

        Ok(Self { entries })
    }

    /// Resolves a token against canonical names and aliases, case-insensitively.
    /// First match in declaration order wins.
    pub fn resolve(&self, token: &str) -> Option<&Ingredient> {
        let lowered = token.to_lowercase();
        self.entries.iter().find(|entry| {
            entry.name.to_lowercase() == lowered
                || entry
                    .aliases
                    .iter()
                    .any(|alias| alias.to_lowercase() == lowered)
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ingredient> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Immutable combination rule table. Rule order is firing order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CombinationRuleSet {
    rules: Vec<CombinationRule>,
}

impl CombinationRuleSet {
    /// Builds a rule set, rejecting rules with fewer than two members.
    pub fn new(rules: Vec<CombinationRule>) -> Result<Self, CoreError> {
        for rule in &rules {
            if rule.combo.len() < 2 {
                return Err(CoreError::InvalidCatalog(format!(
                    "combination rule needs at least two members, got {:?}",
                    rule.combo
                )));
            }
        }
        Ok(Self { rules })
    }

    pub fn iter(&self) -> impl Iterator<Item = &CombinationRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, aliases: &[&str]) -> Ingredient {
        Ingredient {
            name: name.to_string(),
            aliases: aliases.iter().map(ToString::to_string).collect(),
            uses: vec!["hydrating".to_string()],
            skin_safe: true,
            hair_safe: true,
            caution_for: vec![],
            kind: IngredientKind::Natural,
            home_remedy: false,
            notes: String::new(),
        }
    }

    #[test]
    fn resolves_canonical_name_case_insensitively() {
        let catalog = IngredientCatalog::new(vec![entry("Niacinamide", &["Vitamin B3"])])
            .expect("valid catalog");

        let resolved = catalog.resolve("NIACINAMIDE").expect("match");
        assert_eq!(resolved.name, "Niacinamide");
    }

    #[test]
    fn resolves_alias_to_same_entry_as_canonical_name() {
        let catalog =
            IngredientCatalog::new(vec![entry("Niacinamide", &["Nicotinamide", "Vitamin B3"])])
                .expect("valid catalog");

        let by_alias = catalog.resolve("vitamin b3").expect("alias match");
        let by_name = catalog.resolve("niacinamide").expect("name match");
        assert_eq!(by_alias, by_name);
    }

    #[test]
    fn rejects_duplicate_canonical_names() {
        let result = IngredientCatalog::new(vec![entry("Honey", &[]), entry("HONEY", &[])]);
        assert!(matches!(result, Err(CoreError::InvalidCatalog(_))));
    }

    #[test]
    fn rejects_alias_colliding_with_another_canonical_name() {
        let result =
            IngredientCatalog::new(vec![entry("Honey", &[]), entry("Mel", &["honey"])]);
        assert!(matches!(result, Err(CoreError::InvalidCatalog(_))));
    }

    #[test]
    fn first_declared_entry_wins_on_alias_overlap() {
        let catalog = IngredientCatalog::new(vec![
            entry("Curd", &["Dahi"]),
            entry("Yogurt", &["Dahi"]),
        ])
        .expect("valid catalog");

        assert_eq!(catalog.resolve("dahi").expect("match").name, "Curd");
    }

    #[test]
    fn rule_set_rejects_single_member_rules() {
        let result = CombinationRuleSet::new(vec![CombinationRule {
            combo: vec!["Turmeric".to_string()],
            synergy: String::new(),
            caution: String::new(),
        }]);
        assert!(matches!(result, Err(CoreError::InvalidCatalog(_))));
    }
}
