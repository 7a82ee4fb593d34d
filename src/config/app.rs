use super::defaults::*;
use crate::consts::CONFIG_ENV_VAR;
use crate::error::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::{debug, warn};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dates: Dates,
    pub masking: Masking,
    pub formatting: Formatting,
    pub markdown: Markdown,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Dates {
    pub format: String,
    pub utc_offset_seconds: i32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Masking {
    pub symbol: char,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Formatting {
    pub block_separator: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Markdown {
    pub escaping_chars: Vec<String>,
}

impl Default for Dates {
    fn default() -> Self {
        Self {
            format: default_date_format(),
            utc_offset_seconds: default_utc_offset_seconds(),
        }
    }
}

impl Default for Masking {
    fn default() -> Self {
        Self {
            symbol: default_mask_symbol(),
        }
    }
}

impl Default for Formatting {
    fn default() -> Self {
        Self {
            block_separator: default_block_separator(),
        }
    }
}

impl Default for Markdown {
    fn default() -> Self {
        Self {
            escaping_chars: default_escaping_chars(),
        }
    }
}

impl Config {
    /// Parse a config from TOML text; missing sections and fields take their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

fn config_path() -> Option<PathBuf> {
    if let Ok(explicit) = std::env::var(CONFIG_ENV_VAR) {
        return Some(PathBuf::from(explicit));
    }
    dirs::config_dir()
        .map(|dir| dir.join("cheatsheet").join("config.toml"))
        .filter(|path| path.exists())
}

pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let Some(path) = config_path() else {
            debug!("no config file found, using built-in defaults");
            return Config::default();
        };

        match Config::from_path(&path) {
            Ok(conf) => {
                debug!(path = %path.display(), "loaded config");
                conf
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "unusable config, using built-in defaults");
                Config::default()
            }
        }
    })
}
