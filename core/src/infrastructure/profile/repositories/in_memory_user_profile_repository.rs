use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    profile::{entities::UserProfile, ports::UserProfileRepository},
};

/// In-memory stand-in for the external user-profile store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserProfileRepository {
    profiles: Arc<RwLock<HashMap<Uuid, UserProfile>>>,
}

impl InMemoryUserProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserProfileRepository for InMemoryUserProfileRepository {
    async fn get_by_user_id(&self, user_id: Uuid) -> Result<Option<UserProfile>, CoreError> {
        let profiles = self.profiles.read().await;
        Ok(profiles.get(&user_id).cloned())
    }

    async fn upsert(&self, profile: UserProfile) -> Result<UserProfile, CoreError> {
        let mut profiles = self.profiles.write().await;
        profiles.insert(profile.user_id, profile.clone());
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn upsert_overwrites_the_previous_profile() {
        let repo = InMemoryUserProfileRepository::new();
        let user_id = Uuid::new_v4();

        repo.upsert(UserProfile::new(
            user_id,
            "oily".to_string(),
            "curly".to_string(),
        ))
        .await
        .expect("upsert");
        repo.upsert(UserProfile::new(
            user_id,
            "dry".to_string(),
            "straight".to_string(),
        ))
        .await
        .expect("upsert");

        let profile = repo
            .get_by_user_id(user_id)
            .await
            .expect("get")
            .expect("present");
        assert_eq!(profile.skin_type, "dry");
        assert_eq!(profile.hair_type, "straight");
    }

    #[tokio::test]
    async fn missing_profile_is_none() {
        let repo = InMemoryUserProfileRepository::new();
        assert!(
            repo.get_by_user_id(Uuid::new_v4())
                .await
                .expect("get")
                .is_none()
        );
    }
}
