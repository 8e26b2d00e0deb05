use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{
    analysis::{
        entities::SavedAnalysis,
        ports::SavedAnalysisRepository,
        value_objects::GetSavedAnalysesFilter,
    },
    common::entities::app_errors::CoreError,
};

/// In-memory stand-in for the external persistence collaborator. Records are
/// kept in insertion order per user.
#[derive(Debug, Clone, Default)]
pub struct InMemorySavedAnalysisRepository {
    records: Arc<RwLock<Vec<SavedAnalysis>>>,
}

impl InMemorySavedAnalysisRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SavedAnalysisRepository for InMemorySavedAnalysisRepository {
    async fn create(&self, analysis: SavedAnalysis) -> Result<SavedAnalysis, CoreError> {
        let mut records = self.records.write().await;
        records.push(analysis.clone());
        Ok(analysis)
    }

    async fn get_by_id(
        &self,
        analysis_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<SavedAnalysis>, CoreError> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .find(|record| record.id == analysis_id && record.user_id == user_id)
            .cloned())
    }

    async fn get_by_user(
        &self,
        user_id: Uuid,
        filter: GetSavedAnalysesFilter,
    ) -> Result<Vec<SavedAnalysis>, CoreError> {
        let records = self.records.read().await;
        let offset = filter.offset.unwrap_or(0) as usize;
        let limit = filter.limit.map_or(usize::MAX, |limit| limit as usize);

        Ok(records
            .iter()
            .filter(|record| record.user_id == user_id)
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn delete(&self, analysis_id: Uuid, user_id: Uuid) -> Result<bool, CoreError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|record| !(record.id == analysis_id && record.user_id == user_id));
        Ok(records.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::entities::{AnalysisResult, ProductCategory, SafetyTally};

    fn saved(user_id: Uuid) -> SavedAnalysis {
        SavedAnalysis::new(
            user_id,
            "Night Serum".to_string(),
            ProductCategory::Skin,
            "niacinamide, honey".to_string(),
            AnalysisResult {
                findings: vec![],
                combinations: vec![],
                tally: SafetyTally::default(),
            },
        )
    }

    #[tokio::test]
    async fn create_then_fetch_round_trips() {
        let repo = InMemorySavedAnalysisRepository::new();
        let user_id = Uuid::new_v4();

        let created = repo.create(saved(user_id)).await.expect("create");
        let fetched = repo
            .get_by_id(created.id, user_id)
            .await
            .expect("get")
            .expect("present");
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn listing_is_scoped_to_the_user_and_respects_offset_limit() {
        let repo = InMemorySavedAnalysisRepository::new();
        let user_id = Uuid::new_v4();
        let other = Uuid::new_v4();

        for _ in 0..3 {
            repo.create(saved(user_id)).await.expect("create");
        }
        repo.create(saved(other)).await.expect("create");

        let all = repo
            .get_by_user(user_id, GetSavedAnalysesFilter::default())
            .await
            .expect("list");
        assert_eq!(all.len(), 3);

        let page = repo
            .get_by_user(
                user_id,
                GetSavedAnalysesFilter {
                    offset: Some(1),
                    limit: Some(1),
                },
            )
            .await
            .expect("list");
        assert_eq!(page.len(), 1);
        assert_eq!(page[0], all[1]);
    }

    #[tokio::test]
    async fn delete_is_scoped_to_the_owner() {
        let repo = InMemorySavedAnalysisRepository::new();
        let user_id = Uuid::new_v4();
        let created = repo.create(saved(user_id)).await.expect("create");

        let foreign = repo.delete(created.id, Uuid::new_v4()).await.expect("del");
        assert!(!foreign);

        let owned = repo.delete(created.id, user_id).await.expect("del");
        assert!(owned);
        assert!(
            repo.get_by_id(created.id, user_id)
                .await
                .expect("get")
                .is_none()
        );
    }
}
