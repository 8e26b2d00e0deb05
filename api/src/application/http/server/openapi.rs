use crate::application::http::{
    analysis::router::AnalysisApiDoc, profile::router::ProfileApiDoc,
    recommendation::router::RecommendationApiDoc,
};
use utoipa::OpenApi;

// utoipa rejects a literal empty nest path; an expression with the same value is accepted
// and nests the sub-docs without prefixing their paths.
const ROOT: &str = "";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "GlowCheck API",
        description = "Ingredient safety analysis and product recommendations for skin and hair care"
    ),
    paths(crate::application::http::health::health),
    nest(
        (path = ROOT, api = AnalysisApiDoc),
        (path = ROOT, api = RecommendationApiDoc),
        (path = ROOT, api = ProfileApiDoc),
    )
)]
pub struct ApiDoc;
