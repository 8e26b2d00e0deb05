/// Full input to the pure recommendation pipeline. Empty strings mean the
/// corresponding criterion was not supplied.
#[derive(Debug, Clone, Default)]
pub struct RecommendProductsInput {
    pub product_type: String,
    pub concern: String,
    pub preferred_ingredient: String,
    pub skin_type: String,
    pub hair_type: String,
}

/// Service-level request; skin and hair types come from the stored profile.
#[derive(Debug, Clone, Default)]
pub struct RecommendRequest {
    pub product_type: String,
    pub concern: String,
    pub preferred_ingredient: String,
}
