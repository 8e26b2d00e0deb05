use std::path::PathBuf;

use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

pub mod entities;
pub mod services;

#[derive(Clone, Debug, Default)]
pub struct GlowcheckConfig {
    pub catalog: CatalogConfig,
}

/// File overrides for the three static knowledge tables. When a path is
/// `None` the built-in dataset is used.
#[derive(Clone, Debug, Default)]
pub struct CatalogConfig {
    pub ingredients_file: Option<PathBuf>,
    pub combination_rules_file: Option<PathBuf>,
    pub products_file: Option<PathBuf>,
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}
