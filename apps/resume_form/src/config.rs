use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::layout::PageFormat;

/// Host configuration loaded from environment variables.
/// Every variable is optional; defaults produce A4 exports into the working directory.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub export_dir: PathBuf,
    pub page_format: PageFormat,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            export_dir: PathBuf::from("."),
            page_format: PageFormat::A4,
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        let page_format = match lookup("RESUME_PAGE_FORMAT") {
            Some(raw) => raw
                .parse::<PageFormat>()
                .with_context(|| format!("RESUME_PAGE_FORMAT must be 'a4' or 'letter', got '{raw}'"))?,
            None => defaults.page_format,
        };

        Ok(Config {
            export_dir: lookup("RESUME_EXPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.export_dir),
            page_format,
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
        })
    }
}
