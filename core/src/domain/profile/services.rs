use uuid::Uuid;

use crate::domain::{
    analysis::ports::SavedAnalysisRepository,
    common::{entities::app_errors::CoreError, services::Service},
    profile::{
        entities::UserProfile,
        ports::{ProfileService, UserProfileRepository},
        value_objects::UpsertProfileInput,
    },
};

impl<SA, UP> ProfileService for Service<SA, UP>
where
    SA: SavedAnalysisRepository,
    UP: UserProfileRepository,
{
    async fn get_profile(&self, user_id: Uuid) -> Result<UserProfile, CoreError> {
        self.profile_repository
            .get_by_user_id(user_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn upsert_profile(&self, input: UpsertProfileInput) -> Result<UserProfile, CoreError> {
        let profile = match self.profile_repository.get_by_user_id(input.user_id).await? {
            Some(mut existing) => {
                existing.skin_type = input.skin_type;
                existing.hair_type = input.hair_type;
                existing.updated_at = chrono::Utc::now();
                existing
            }
            None => UserProfile::new(input.user_id, input.skin_type, input.hair_type),
        };

        self.profile_repository.upsert(profile).await
    }
}
