//! Configuration loading and parsing.
//!
//! Parses `amountfmt.toml` (or an override path provided by the binary):
//!
//! ```toml
//! [locale]
//! tag = "en-GB"
//! currency = "GBP"
//! maximum_fraction_digits = 2
//!
//! [display]
//! debounce_ms = 50
//! ```
//!
//! Every field is optional. A missing file or a parse error yields defaults
//! (the parse error is logged). `debounce_ms` is clamped to
//! `MAX_DEBOUNCE_MS`; the raw value is kept alongside the effective one.
//! Unknown fields are ignored.

use anyhow::{Context, Result};
use core_locale::{LocaleFormat, LocaleOptions};
use serde::Deserialize;
use std::time::Duration;
use std::{fs, path::PathBuf};
use tracing::{info, warn};

pub const CONFIG_FILE_NAME: &str = "amountfmt.toml";
pub const MAX_DEBOUNCE_MS: u64 = 1000;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LocaleConfig {
    #[serde(default = "LocaleConfig::default_tag")]
    pub tag: String,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub maximum_fraction_digits: Option<u8>,
    #[serde(default = "LocaleConfig::default_use_grouping")]
    pub use_grouping: bool,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            tag: Self::default_tag(),
            currency: None,
            maximum_fraction_digits: None,
            use_grouping: Self::default_use_grouping(),
        }
    }
}

impl LocaleConfig {
    fn default_tag() -> String {
        "en-US".to_string()
    }
    const fn default_use_grouping() -> bool {
        true
    }

    pub fn options(&self) -> LocaleOptions {
        let mut opts = LocaleOptions::new(self.tag.clone()).use_grouping(self.use_grouping);
        if let Some(code) = &self.currency {
            opts = opts.currency(code.clone());
        }
        if let Some(digits) = self.maximum_fraction_digits {
            opts = opts.maximum_fraction_digits(digits);
        }
        opts
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    #[serde(default = "DisplayConfig::default_debounce_ms")] // one frame
    pub debounce_ms: u64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            debounce_ms: Self::default_debounce_ms(),
        }
    }
}

impl DisplayConfig {
    const fn default_debounce_ms() -> u64 {
        50
    }
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    #[serde(default)]
    pub locale: LocaleConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub raw: Option<String>,        // original file string (optional)
    pub file: ConfigFile,           // parsed (or default) data
    pub effective_debounce_ms: u64, // clamped
}

impl Default for Config {
    fn default() -> Self {
        Self::from_file(None, ConfigFile::default())
    }
}

/// Best-effort config path: working directory first, then the platform
/// config dir (XDG / AppData Roaming).
pub fn discover() -> PathBuf {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("amountfmt").join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    let Ok(content) = fs::read_to_string(&path) else {
        return Ok(Config::default());
    };
    match toml::from_str::<ConfigFile>(&content) {
        Ok(file) => Ok(Config::from_file(Some(content), file)),
        Err(e) => {
            warn!(target: "config", path = %path.display(), error = %e, "config_parse_failed");
            Ok(Config::default())
        }
    }
}

impl Config {
    fn from_file(raw: Option<String>, file: ConfigFile) -> Self {
        let requested = file.display.debounce_ms;
        let effective_debounce_ms = requested.min(MAX_DEBOUNCE_MS);
        if effective_debounce_ms != requested {
            info!(
                target: "config",
                requested,
                clamped = effective_debounce_ms,
                max = MAX_DEBOUNCE_MS,
                "debounce_ms_clamped"
            );
        }
        Self {
            raw,
            file,
            effective_debounce_ms,
        }
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.effective_debounce_ms)
    }

    /// Build the configured locale format. Unknown currencies or out-of-range
    /// digits are errors here; unknown locale tags fall back.
    pub fn locale_format(&self) -> Result<LocaleFormat> {
        self.file
            .locale
            .options()
            .build()
            .with_context(|| format!("invalid [locale] section for tag `{}`", self.file.locale.tag))
    }
}
