use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

fn default_string() -> String {
    String::new()
}

#[derive(Debug, Serialize, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct GetRecommendationsParams {
    /// Desired product type, e.g. "shampoo" or "face serum".
    #[schema(example = "shampoo")]
    pub product_type: String,
    /// Concern to address, matched against product concern tags.
    #[serde(default = "default_string")]
    #[schema(example = "dandruff")]
    pub concern: String,
    /// Optional ingredient the user wants in the product.
    #[serde(default = "default_string")]
    pub preferred_ingredient: String,
}
