use crate::i18n::Locale;
use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub port: u16,

    // Content
    /// Directory to load content documents from instead of the embedded ones
    pub content_dir: Option<PathBuf>,
    pub default_locale: Locale,

    /// Report copy and placeholder misses as errors instead of empty strings
    pub strict_copy: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let default_locale = match std::env::var("DEFAULT_LOCALE") {
            Ok(code) => Locale::from_code(code.trim()).context("Invalid DEFAULT_LOCALE")?,
            Err(_) => Locale::default(),
        };

        Ok(Self {
            port: match std::env::var("PORT") {
                Ok(port) => port.parse().context("PORT must be a valid port number")?,
                Err(_) => 8080,
            },

            content_dir: std::env::var("CONTENT_DIR")
                .ok()
                .filter(|dir| !dir.trim().is_empty())
                .map(PathBuf::from),
            default_locale,

            strict_copy: std::env::var("STRICT_COPY")
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            content_dir: None,
            default_locale: Locale::default(),
            strict_copy: false,
        }
    }
}
