//! Configuration types for adash.
//!
//! [`Config::load`] reads `~/.config/adash/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[ui]
show_dates         = true
date_format        = "%Y-%m-%d"
nav_pane_width_pct = 24
default_view       = "orders"

[export]
pretty       = true
default_path = "adash-export.json"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/adash/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

/// `[ui]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_show_dates")]
    pub show_dates: bool,
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_nav_pane_width_pct")]
    pub nav_pane_width_pct: u16,
    /// View shown at startup: `orders`, `users`, `documents`, or
    /// `notifications`. Unknown names fall back to orders.
    #[serde(default = "default_view")]
    pub default_view: String,
}

fn default_show_dates() -> bool { true }
fn default_date_format() -> String { "%Y-%m-%d".to_string() }
fn default_nav_pane_width_pct() -> u16 { 24 }
fn default_view() -> String { "orders".to_string() }

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_dates: default_show_dates(),
            date_format: default_date_format(),
            nav_pane_width_pct: default_nav_pane_width_pct(),
            default_view: default_view(),
        }
    }
}

/// `[export]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_pretty")]
    pub pretty: bool,
    /// Path used by `:export` when none is given.
    #[serde(default = "default_export_path")]
    pub default_path: String,
}

fn default_pretty() -> bool { true }
fn default_export_path() -> String { "adash-export.json".to_string() }

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
            default_path: default_export_path(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/adash/config.toml`, layered on top of the built-in
    /// defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path.as_path()).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("adash")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
