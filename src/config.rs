use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Embedded default configuration.
const DEFAULT_CONFIG: &str = include_str!("../config.default.toml");

/// User overlay location, relative to `$HOME`.
const OVERLAY_PATH: &str = ".config/git-safety-guard/config.toml";

// ── Final (merged) config types ──

#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    /// A `log::LevelFilter` name; unknown values fall back to `info`.
    #[serde(default)]
    pub level: String,
    /// Log file path; `~` is expanded.
    #[serde(default)]
    pub file: String,
}

impl LoggingConfig {
    /// The log file path with a leading `~` expanded.
    pub fn file_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.file).into_owned())
    }
}

// ── Overlay types (user config that merges with defaults) ──

#[derive(Debug, Deserialize, Default)]
struct ConfigOverlay {
    #[serde(default)]
    logging: LoggingOverlay,
}

#[derive(Debug, Deserialize, Default)]
struct LoggingOverlay {
    enabled: Option<bool>,
    level: Option<String>,
    file: Option<String>,
}

impl Config {
    /// Load the default embedded configuration.
    pub fn default_config() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("embedded default config must parse")
    }

    /// Load configuration with resolution order:
    /// 1. Start with embedded defaults
    /// 2. Merge user overlay from ~/.config/git-safety-guard/config.toml (if exists)
    ///
    /// Keys present in the overlay replace the default; omitted keys are kept.
    pub fn load() -> Self {
        let mut config = Self::default_config();
        if let Some(overlay) = Self::load_overlay() {
            config.apply_overlay(overlay);
        }
        config
    }

    /// Try to load user overlay from ~/.config/git-safety-guard/config.toml.
    fn load_overlay() -> Option<ConfigOverlay> {
        let home = std::env::var_os("HOME")?;
        let path = std::path::Path::new(&home).join(OVERLAY_PATH);
        let content = std::fs::read_to_string(path).ok()?;
        match toml::from_str(&content) {
            Ok(overlay) => Some(overlay),
            Err(e) => {
                eprintln!("git-safety-guard: config parse error: {e}");
                None
            }
        }
    }

    /// Apply an overlay on top of this config (scalar overrides).
    fn apply_overlay(&mut self, overlay: ConfigOverlay) {
        let l = overlay.logging;
        if let Some(v) = l.enabled {
            self.logging.enabled = v;
        }
        if let Some(v) = l.level {
            self.logging.level = v;
        }
        if let Some(v) = l.file {
            self.logging.file = v;
        }
    }

    /// Apply an overlay from a TOML string. Used for testing.
    #[cfg(test)]
    fn apply_overlay_str(&mut self, toml_str: &str) {
        let overlay: ConfigOverlay = toml::from_str(toml_str).unwrap();
        self.apply_overlay(overlay);
    }
}
