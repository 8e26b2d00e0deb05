use super::handlers::{
    analyze_ingredients::{__path_analyze_ingredients, analyze_ingredients},
    delete_saved_analysis::{__path_delete_saved_analysis, delete_saved_analysis},
    get_saved_analyses::{__path_get_saved_analyses, get_saved_analyses},
    get_saved_analysis::{__path_get_saved_analysis, get_saved_analysis},
    save_analysis::{__path_save_analysis, save_analysis},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    analyze_ingredients,
    save_analysis,
    get_saved_analyses,
    get_saved_analysis,
    delete_saved_analysis
))]
pub struct AnalysisApiDoc;

pub fn analysis_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!(
                "{}/users/{{user_id}}/analysis",
                state.args.server.root_path
            ),
            post(analyze_ingredients),
        )
        .route(
            &format!(
                "{}/users/{{user_id}}/analysis/saved",
                state.args.server.root_path
            ),
            post(save_analysis).get(get_saved_analyses),
        )
        .route(
            &format!(
                "{}/users/{{user_id}}/analysis/saved/{{analysis_id}}",
                state.args.server.root_path
            ),
            get(get_saved_analysis).delete(delete_saved_analysis),
        )
}
