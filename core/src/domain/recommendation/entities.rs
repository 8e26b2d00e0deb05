use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A product catalog record. Applicability lists use `"all"` as a wildcard;
/// an empty list means the product does not serve that category at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductRecord {
    pub id: String,
    pub name: String,
    pub brand: String,
    #[serde(rename = "type")]
    pub product_type: String,
    pub concerns: Vec<String>,
    pub key_ingredients: Vec<String>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub for_skin_types: Vec<String>,
    pub for_hair_types: Vec<String>,
}

/// Immutable product table. Declaration order is ranking order: the pipeline
/// never reorders candidates, it only narrows them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductCatalog {
    records: Vec<ProductRecord>,
}

impl ProductCatalog {
    pub fn new(records: Vec<ProductRecord>) -> Self {
        Self { records }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProductRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Category read off the requested product type. The two heuristics are
/// independent, so a request can legitimately satisfy both (`Ambiguous`) or
/// neither (`Unknown`); neither case is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CategoryHint {
    Skin,
    Hair,
    Ambiguous,
    Unknown,
}

impl CategoryHint {
    pub fn covers_skin(self) -> bool {
        matches!(self, Self::Skin | Self::Ambiguous)
    }

    pub fn covers_hair(self) -> bool {
        matches!(self, Self::Hair | Self::Ambiguous)
    }
}
