use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recommendation::{entities::ProductRecord, value_objects::RecommendRequest},
};

/// Service trait for product recommendation.
pub trait RecommendationService: Send + Sync {
    fn recommend_for_user(
        &self,
        user_id: Uuid,
        request: RecommendRequest,
    ) -> impl Future<Output = Result<Vec<ProductRecord>, CoreError>> + Send;
}
