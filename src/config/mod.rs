use crate::error::{FoodLensError, Result};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Optional YAML config file. CLI flags and environment variables override
/// anything set here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    pub database_url: Option<String>,
    pub listen: Option<SocketAddr>,
}

impl AppConfig {
    /// Load from an explicit path, or from the default location if one
    /// exists, or fall back to an empty config.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("foodlens").join("config.yaml"))
    }

    /// Resolve the database URL: flag/env first, then config file.
    pub fn resolve_database_url(&self, flag: Option<String>) -> Result<String> {
        flag.or_else(|| self.database_url.clone()).ok_or_else(|| {
            FoodLensError::Config(
                "no database URL (use --database-url, FOODLENS_DATABASE_URL, or the config file)"
                    .to_string(),
            )
        })
    }
}
