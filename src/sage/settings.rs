// SPDX-License-Identifier: MIT

//! Runtime settings read from the environment (and `.env` via dotenv)

use crate::adk::error::SageError;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TEMPERATURE: f32 = 0.3;
pub const DEFAULT_MAX_TOKENS: u32 = 150;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub model_name: String,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Override files for the embedded tables
    pub rules_file: Option<PathBuf>,
    pub badges_file: Option<PathBuf>,
    pub questions_file: Option<PathBuf>,
    /// Used when RUST_LOG is not set
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            model_name: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            rules_file: None,
            badges_file: None,
            questions_file: None,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Read `SAGE_*` variables from the process environment
    pub fn from_env() -> Result<Self, SageError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from any key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SageError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(model) = lookup("SAGE_MODEL") {
            settings.model_name = model;
        }
        if let Some(raw) = lookup("SAGE_TEMPERATURE") {
            settings.temperature = raw
                .parse()
                .map_err(|_| SageError::config(format!("SAGE_TEMPERATURE is not a number: {}", raw)))?;
        }
        if let Some(raw) = lookup("SAGE_MAX_TOKENS") {
            settings.max_tokens = raw.parse().map_err(|_| {
                SageError::config(format!("SAGE_MAX_TOKENS is not an integer: {}", raw))
            })?;
        }
        settings.rules_file = lookup("SAGE_RULES_FILE").map(PathBuf::from);
        settings.badges_file = lookup("SAGE_BADGES_FILE").map(PathBuf::from);
        settings.questions_file = lookup("SAGE_QUESTIONS_FILE").map(PathBuf::from);
        if let Some(level) = lookup("SAGE_LOG_LEVEL") {
            settings.log_level = level;
        }

        Ok(settings)
    }
}
