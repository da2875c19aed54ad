pub mod analyzer;
pub mod app;
pub mod auth;
pub mod capture;
pub mod config;
pub mod llm_config;
pub mod services;
pub mod store;
pub mod timeline;
