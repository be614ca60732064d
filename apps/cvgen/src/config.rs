use std::path::PathBuf;

use anyhow::Result;

/// File written when `CV_OUTPUT_PATH` is not set, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "Joseph_Santur_CV.pdf";

/// Generator configuration loaded from environment variables.
/// Every variable is optional; the defaults reproduce the fixed behaviour.
#[derive(Debug, Clone)]
pub struct Config {
    pub output_path: PathBuf,
    /// JSON file replacing the compiled-in CV content.
    pub content_path: Option<PathBuf>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable lookup. Blank values count as unset.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Config {
            output_path: var("CV_OUTPUT_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH)),
            content_path: var("CV_CONTENT_PATH").map(PathBuf::from),
            rust_log: var("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}
