pub mod auth;
pub mod journal;
pub mod mood;
pub mod status;
pub mod timeline;
