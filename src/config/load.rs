use std::{env, path::PathBuf};

use super::schema::Settings;
use crate::catalog::Catalog;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("playback.tick_ms must be >= 1")]
    ZeroTick,
    #[error("playback.start_index {index} is out of range (catalog has {len} tracks)")]
    StartIndexOutOfRange { index: usize, len: usize },
    #[error("catalog.tracks[{0}] has an empty title")]
    EmptyTitle(usize),
}

/// Configuration loading helpers.
///
/// `Settings::load` tries environment variables first (prefix `PLAYDECK__`), then an
/// optional config file and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("PLAYDECK")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.playback.tick_ms == 0 {
            return Err(ValidationError::ZeroTick);
        }
        if let Some(i) = self
            .catalog
            .tracks
            .iter()
            .position(|t| t.title.trim().is_empty())
        {
            return Err(ValidationError::EmptyTitle(i));
        }

        let len = Catalog::from_settings(&self.catalog.tracks).len();
        if self.playback.start_index >= len {
            return Err(ValidationError::StartIndexOutOfRange {
                index: self.playback.start_index,
                len,
            });
        }
        Ok(())
    }
}

/// Resolve the config path from `PLAYDECK_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("PLAYDECK_CONFIG_PATH") {
        let p = PathBuf::from(p);
        return Some(p);
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/playdeck/config.toml`
/// or `~/.config/playdeck/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else if let Some(home) = env::var_os("HOME") {
        Some(PathBuf::from(home).join(".config"))
    } else {
        None
    };

    config_home.map(|d| d.join("playdeck").join("config.toml"))
}
