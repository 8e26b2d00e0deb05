//! JSON file loaders for the three knowledge tables. Tables are loaded once
//! at process start and injected into the service; nothing here is touched on
//! the analysis or recommendation paths.

use std::path::Path;

use tracing::debug;

use crate::domain::{
    common::entities::app_errors::CoreError,
    ingredient::entities::{CombinationRule, CombinationRuleSet, Ingredient, IngredientCatalog},
    recommendation::entities::{ProductCatalog, ProductRecord},
};

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, CoreError> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        CoreError::InvalidCatalog(format!("failed to read {}: {}", path.display(), e))
    })?;

    serde_json::from_str(&raw).map_err(|e| {
        CoreError::InvalidCatalog(format!("failed to parse {}: {}", path.display(), e))
    })
}

pub fn load_ingredient_catalog(path: &Path) -> Result<IngredientCatalog, CoreError> {
    let entries: Vec<Ingredient> = read_json(path)?;
    debug!(path = %path.display(), count = entries.len(), "loaded ingredient catalog");
    IngredientCatalog::new(entries)
}

pub fn load_combination_rules(path: &Path) -> Result<CombinationRuleSet, CoreError> {
    let rules: Vec<CombinationRule> = read_json(path)?;
    debug!(path = %path.display(), count = rules.len(), "loaded combination rules");
    CombinationRuleSet::new(rules)
}

pub fn load_product_catalog(path: &Path) -> Result<ProductCatalog, CoreError> {
    let records: Vec<ProductRecord> = read_json(path)?;
    debug!(path = %path.display(), count = records.len(), "loaded product catalog");
    Ok(ProductCatalog::new(records))
}
