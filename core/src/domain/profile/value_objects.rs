use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct UpsertProfileInput {
    pub user_id: Uuid,
    pub skin_type: String,
    pub hair_type: String,
}
