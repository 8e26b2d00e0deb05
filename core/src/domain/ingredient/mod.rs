pub mod data;
pub mod entities;
