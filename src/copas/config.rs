//! # Configuration
//!
//! Settings live in `config.json` inside the data directory, next to the snippet data.
//! A missing file means defaults; missing keys fall back to their defaults individually.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `preview-chars` | `100` | Characters of content shown per card before `…` |
//! | `color` | `auto` | Terminal colors: `auto`, `always` or `never` |
//!
//! ## CLI Usage
//!
//! - `copas config` — Show all settings.
//! - `copas config <key>` — Show one setting.
//! - `copas config <key> <value>` — Change a setting.

use crate::error::Result;
use crate::store::fs::FsBlobStore;
use crate::store::BlobStore;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Blob key of the settings file, stored next to the snippets as `config.json`.
const CONFIG_KEY: &str = "config";
const DEFAULT_PREVIEW_CHARS: usize = 100;

pub const KEYS: &[&str] = &["preview-chars", "color"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColorMode::Auto => "auto",
            ColorMode::Always => "always",
            ColorMode::Never => "never",
        };
        f.write_str(name)
    }
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" | "on" | "true" => Ok(ColorMode::Always),
            "never" | "off" | "false" => Ok(ColorMode::Never),
            other => Err(format!(
                "Invalid color mode '{}': expected auto, always or never",
                other
            )),
        }
    }
}

/// Configuration for copas, stored in `<data dir>/config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct CopasConfig {
    /// Characters of content shown per card in listings
    #[serde(default = "default_preview_chars")]
    pub preview_chars: usize,

    #[serde(default)]
    pub color: ColorMode,
}

fn default_preview_chars() -> usize {
    DEFAULT_PREVIEW_CHARS
}

impl Default for CopasConfig {
    fn default() -> Self {
        Self {
            preview_chars: DEFAULT_PREVIEW_CHARS,
            color: ColorMode::Auto,
        }
    }
}

impl CopasConfig {
    /// Reads `config.json` from `config_dir`. A missing file gives the defaults; a file
    /// that does not parse is an error.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        match FsBlobStore::new(config_dir.as_ref()).get(CONFIG_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Self::default()),
        }
    }

    /// Writes `config.json` atomically, creating `config_dir` when needed.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let raw = serde_json::to_string_pretty(self)?;
        FsBlobStore::new(config_dir.as_ref()).set(CONFIG_KEY, &raw)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "preview-chars" => Some(self.preview_chars.to_string()),
            "color" => Some(self.color.to_string()),
            _ => None,
        }
    }

    /// `(key, value)` for every known setting, in [`KEYS`] order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        KEYS.iter()
            .filter_map(|key| self.get(key).map(|value| (*key, value)))
            .collect()
    }

    /// Parses and applies `value`, returning it in its normalized form (`on` becomes
    /// `always`, ` 40 ` becomes `40`).
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<String, String> {
        match key {
            "preview-chars" => {
                let n: usize = value
                    .trim()
                    .parse()
                    .map_err(|_| format!("preview-chars must be a number, got '{}'", value))?;
                if n == 0 {
                    return Err("preview-chars must be at least 1".to_string());
                }
                self.preview_chars = n;
                Ok(n.to_string())
            }
            "color" => {
                self.color = value.parse()?;
                Ok(self.color.to_string())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }
}
