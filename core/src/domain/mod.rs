pub mod analysis;
pub mod common;
pub mod ingredient;
pub mod profile;
pub mod recommendation;
