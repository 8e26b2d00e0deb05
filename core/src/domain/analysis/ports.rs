use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    analysis::{
        entities::{AnalysisResult, SavedAnalysis},
        value_objects::{AnalyzeRequest, GetSavedAnalysesFilter, SaveAnalysisInput},
    },
    common::entities::app_errors::CoreError,
};

/// Repository trait for the saved-analysis persistence collaborator. CRUD
/// only; all scoring logic lives in the analyzer.
#[cfg_attr(test, mockall::automock)]
pub trait SavedAnalysisRepository: Send + Sync {
    fn create(
        &self,
        analysis: SavedAnalysis,
    ) -> impl Future<Output = Result<SavedAnalysis, CoreError>> + Send;

    fn get_by_id(
        &self,
        analysis_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<SavedAnalysis>, CoreError>> + Send;

    fn get_by_user(
        &self,
        user_id: Uuid,
        filter: GetSavedAnalysesFilter,
    ) -> impl Future<Output = Result<Vec<SavedAnalysis>, CoreError>> + Send;

    /// Returns `true` when a record was removed.
    fn delete(
        &self,
        analysis_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}

/// Service trait for ingredient analysis business logic.
pub trait AnalysisService: Send + Sync {
    fn analyze_for_user(
        &self,
        user_id: Uuid,
        request: AnalyzeRequest,
    ) -> impl Future<Output = Result<AnalysisResult, CoreError>> + Send;

    fn save_analysis(
        &self,
        input: SaveAnalysisInput,
    ) -> impl Future<Output = Result<SavedAnalysis, CoreError>> + Send;

    fn get_saved_analyses(
        &self,
        user_id: Uuid,
        filter: GetSavedAnalysesFilter,
    ) -> impl Future<Output = Result<Vec<SavedAnalysis>, CoreError>> + Send;

    fn get_saved_analysis(
        &self,
        analysis_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<SavedAnalysis, CoreError>> + Send;

    fn delete_saved_analysis(
        &self,
        analysis_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
