//! Shared utilities: errors and configuration

pub mod config;
pub mod error;

pub use config::EmbedParams;
pub use error::PlayerError;
