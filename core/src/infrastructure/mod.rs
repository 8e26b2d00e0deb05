pub mod analysis;
pub mod ingredient;
pub mod profile;
