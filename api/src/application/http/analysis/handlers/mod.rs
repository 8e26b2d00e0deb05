pub mod analyze_ingredients;
pub mod delete_saved_analysis;
pub mod get_saved_analyses;
pub mod get_saved_analysis;
pub mod save_analysis;
