//! Shared domain types and configuration for TrendScript.

pub mod app_config;
pub mod catalog;
pub mod config;
pub mod content;
pub mod trends;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use catalog::{content_templates, tone_options, ContentTemplate, ToneOption};
pub use config::{load_app_config, load_app_config_from_env};
pub use content::{
    ContentSection, GeneratedContentDocument, GenerationRequest, TemplateId, Tone,
};
pub use trends::{Platform, PlatformEngagement, TrendEngagement, TrendRecord};

/// Pseudo-user every request is attributed to.
pub const ANONYMOUS_USER_ID: &str = "anonymous_user";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
