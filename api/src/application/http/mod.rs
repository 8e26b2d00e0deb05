pub mod analysis;
pub mod health;
pub mod profile;
pub mod recommendation;
pub mod server;
