//! Configuration paths and settings for qrmenu
//!
//! All paths are under ~/.qrmenu/ (override with `QRMENU_HOME`).
//! An optional config.toml tunes how product cards are rendered.

use qrmenu_catalog::DisplaySettings;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use qrmenu_logging::{logs_dir, qrmenu_home};

/// Errors loading config.toml.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Contents of config.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub display: DisplaySettings,
}

impl Settings {
    /// Load settings from `path`; a missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load settings from the default location.
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load(&config_path())
    }
}

/// Get config file path: ~/.qrmenu/config.toml
pub fn config_path() -> PathBuf {
    qrmenu_home().join("config.toml")
}

/// Arguments for the config command
#[derive(Debug, clap::Args)]
pub struct ConfigArgs {
    /// Show resolved paths in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Run the config command - shows current paths and effective settings
pub fn run(args: ConfigArgs) -> anyhow::Result<()> {
    let home = qrmenu_home();
    let config = config_path();
    let logs = logs_dir();
    let settings = super::load_settings()?;

    if args.json {
        let value = serde_json::json!({
            "home": home.to_string_lossy(),
            "config": {
                "path": config.to_string_lossy(),
                "exists": config.exists(),
            },
            "logs": {
                "path": logs.to_string_lossy(),
                "exists": logs.exists(),
            },
            "display": {
                "placeholder_image": settings.display.placeholder_image,
                "currency_suffix": settings.display.currency_suffix,
            },
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("QR MENU CONFIGURATION");
    println!();
    println!("Home:    {}", home.display());
    println!(
        "Config:  {}{}",
        config.display(),
        if config.exists() { "" } else { " (not found, using defaults)" }
    );
    println!("Logs:    {}", logs.display());
    println!();
    println!("Placeholder image: {}", settings.display.placeholder_image);
    println!("Currency suffix:   {}", settings.display.currency_suffix);
    Ok(())
}
