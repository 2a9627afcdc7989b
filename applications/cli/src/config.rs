//! CLI configuration
use crate::error::{CliError, Result};
use cadence_playback::PlaybackConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "cadence.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CliConfig {
    #[serde(default)]
    pub playback: PlaybackConfig,

    #[serde(default)]
    pub user: UserSettings,

    #[serde(default)]
    pub catalog: CatalogSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UserSettings {
    /// Opaque ID recorded as the owner of created playlists
    #[serde(default = "default_user_id")]
    pub id: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CatalogSettings {
    /// JSON catalog; the built-in sample is used when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            id: default_user_id(),
        }
    }
}

fn default_user_id() -> String {
    "user".to_string()
}

impl CliConfig {
    /// Load configuration from file and environment
    ///
    /// Environment variables are prefixed with `CADENCE_` and use `__` to
    /// separate sections, e.g. `CADENCE_PLAYBACK__VOLUME=60`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with(path, Self::environment())
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix("CADENCE")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn load_with(path: Option<&Path>, environment: config::Environment) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path).required(true));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        settings = settings.add_source(environment);

        let config = settings
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| CliError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.user.id.trim().is_empty() {
            return Err(CliError::Config("user.id must not be empty".to_string()));
        }

        if self.playback.volume > 100 {
            return Err(CliError::Config(format!(
                "playback.volume must be 0-100, got {}",
                self.playback.volume
            )));
        }

        if self.playback.tick_interval_ms == 0 {
            return Err(CliError::Config(
                "playback.tick_interval_ms must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}
