use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A user's stored skin and hair type. Both are opaque labels from the
/// product vocabulary; the core performs no validation against it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserProfile {
    pub user_id: Uuid,
    pub skin_type: String,
    pub hair_type: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    pub fn new(user_id: Uuid, skin_type: String, hair_type: String) -> Self {
        let now = Utc::now();

        Self {
            user_id,
            skin_type,
            hair_type,
            created_at: now,
            updated_at: now,
        }
    }
}
