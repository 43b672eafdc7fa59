//! Core domain types and configuration for brandpulse.
//!
//! Defines the brand roster (one owner plus its competitors), the immutable
//! `ResponseText` values produced by external language models, and the
//! env-driven application configuration shared by the CLI and the analytics
//! engine.

mod app_config;
mod config;
mod error;
mod responses;
mod roster;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use responses::{ModelKey, ResponseText};
pub use roster::{load_roster, BrandEntity, BrandRole, Roster};
