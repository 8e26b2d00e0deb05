use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    profile::{entities::UserProfile, value_objects::UpsertProfileInput},
};

/// Repository trait for the user-profile store collaborator.
#[cfg_attr(test, mockall::automock)]
pub trait UserProfileRepository: Send + Sync {
    fn get_by_user_id(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<UserProfile>, CoreError>> + Send;

    fn upsert(
        &self,
        profile: UserProfile,
    ) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;
}

/// Service trait for profile access.
pub trait ProfileService: Send + Sync {
    fn get_profile(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;

    fn upsert_profile(
        &self,
        input: UpsertProfileInput,
    ) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;
}
