pub mod app_state;
pub mod config;
pub mod health;
pub mod routes;
pub mod summarizer;
pub mod summary;
pub mod transcript;
