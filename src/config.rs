//! Configuration management for the account service
//!
//! Loads settings from:
//! 1. Environment variables
//! 2. .env file (local development)
//!
//! # Example
//!
//! ```no_run
//! use account_service::config::Settings;
//!
//! fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     println!("recovery TTL: {}s", settings.recovery.token_ttl_secs);
//!     Ok(())
//! }
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::info;

/// Application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    pub recovery: RecoverySettings,
}

impl Settings {
    /// Load settings from environment variables
    pub fn load() -> Result<Self> {
        // Load .env file in development
        if cfg!(debug_assertions) {
            dotenvy::dotenv().ok();
            info!("Loaded .env file for development");
        }

        Ok(Settings {
            recovery: RecoverySettings::from_env()?,
        })
    }
}

/// Recovery token settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecoverySettings {
    /// Token lifetime in seconds (default: 3600 = 1 hour)
    pub token_ttl_secs: i64,
}

impl RecoverySettings {
    fn from_env() -> Result<Self> {
        Ok(Self {
            token_ttl_secs: env::var("RECOVERY_TOKEN_TTL_SECS")
                .unwrap_or_else(|_| "3600".to_string())
                .parse()
                .context("Invalid RECOVERY_TOKEN_TTL_SECS")?,
        })
    }
}

impl Default for RecoverySettings {
    fn default() -> Self {
        Self {
            token_ttl_secs: 3600,
        }
    }
}
