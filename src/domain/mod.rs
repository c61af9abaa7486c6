pub mod models;
pub mod platform;
