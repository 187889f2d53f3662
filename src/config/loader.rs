use super::Config;
use crate::error::{ErrorCode, PpiError, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Loads the optional TOML configuration file.
///
/// Without a file every value falls back to the built-in defaults.
pub struct ConfigLoader {
    path: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    pub async fn load(&self) -> Result<Config> {
        let config = match &self.path {
            Some(path) => Self::load_file(path).await?,
            None => {
                debug!("No configuration file given, using defaults");
                Config::new()
            }
        };
        config.validate()?;
        Ok(config)
    }

    async fn load_file(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Err(PpiError::config_with_code(
                ErrorCode::CONFIG_NOT_FOUND,
                format!("{} does not exist", path.display()),
                None,
            ));
        }

        let content = fs::read_to_string(path).await.map_err(|e| {
            PpiError::config_with_code(
                ErrorCode::CONFIG_NOT_FOUND,
                format!("failed to read {}", path.display()),
                None,
            )
            .with_source(e)
        })?;

        let config = Self::parse(&content).map_err(|e| e.with_context(path.display()))?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Config> {
        toml::from_str(content).map_err(|e| {
            PpiError::config_with_code(ErrorCode::CONFIG_PARSE_ERROR, "invalid TOML", None)
                .with_source(e)
        })
    }
}
