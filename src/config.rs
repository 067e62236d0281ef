use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::BuilderResult;

/// Where and how exports are written
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // missing fields keep their defaults
pub struct ExportConfig {
    pub file_name: String,
    pub mime: String,
    pub output_dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_name: "my-website.html".to_owned(),
            mime: "text/html".to_owned(),
            output_dir: PathBuf::from("."),
        }
    }
}

/// Settings for the desktop builder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    pub export: ExportConfig,
    pub window_title: String,
    pub window_size: [f32; 2],
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            export: ExportConfig::default(),
            window_title: "Page Builder".to_owned(),
            window_size: [1200.0, 800.0],
        }
    }
}

impl BuilderConfig {
    /// Load overrides from a JSON file
    pub fn load(path: impl AsRef<Path>) -> BuilderResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let config = serde_json::from_str(&text)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load from `path` if given, falling back to defaults on any failure
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        Self::load(path).unwrap_or_else(|err| {
            log::warn!("Ignoring config {}: {}", path.display(), err);
            Self::default()
        })
    }
}
