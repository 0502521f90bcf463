//! Configuration management for LegalTUI
//!
//! Handles config file loading/saving and environment overrides.
//! Config is stored at ~/.config/legaltui/config.toml

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::navigation::{Section, SectionError, SidebarState};
use crate::theme::{SystemScheme, ThemeMode, ThemeModeError, ThemeStore};

/// Environment variable that overrides the configured theme
pub const THEME_ENV: &str = "LEGALTUI_THEME";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid {THEME_ENV}: {0}")]
    Theme(#[from] ThemeModeError),

    #[error("Invalid expanded_sections entry: {0}")]
    Section(#[from] SectionError),
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Initial theme mode
    pub theme: ThemeMode,
    /// Host color scheme; probed from the terminal when unset
    pub system_scheme: Option<SystemScheme>,
    /// Whether the sidebar starts expanded
    pub sidebar_expanded: bool,
    /// Sidebar sections that start expanded
    pub expanded_sections: Vec<String>,
    /// Log file for TUI mode
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeMode::System,
            system_scheme: None,
            sidebar_expanded: true,
            expanded_sections: Section::ALL.iter().map(|s| s.id().to_string()).collect(),
            log_file: None,
        }
    }
}

impl Config {
    /// Get config file path (~/.config/legaltui/config.toml)
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("legaltui").join("config.toml"))
    }

    /// Load config from the default path, or return default if missing or invalid
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        Self::load_from(&path).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "ignoring unreadable config");
            Self::default()
        })
    }

    /// Load config from an explicit file, reporting every failure
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save config to the default path
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)
    }

    /// Save config to a file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };

        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }

        let toml = toml::to_string_pretty(self)?;
        std::fs::write(path, toml).map_err(write_err)?;
        Ok(())
    }

    /// Apply `LEGALTUI_THEME` from the environment
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        let theme = std::env::var(THEME_ENV).ok();
        self.with_theme_override(theme.as_deref())
    }

    /// Replace the theme when an override is present
    pub fn with_theme_override(mut self, theme: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(value) = theme {
            self.theme = value.parse()?;
        }
        Ok(self)
    }

    /// Theme store for the configured mode and host scheme
    pub fn theme_store(&self) -> ThemeStore {
        let system = self.system_scheme.unwrap_or_else(SystemScheme::detect);
        ThemeStore::new(self.theme, system)
    }

    /// Initial sidebar state
    pub fn sidebar_state(&self) -> Result<SidebarState, ConfigError> {
        let sections = self
            .expanded_sections
            .iter()
            .map(|s| s.parse::<Section>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SidebarState::new(self.sidebar_expanded, sections))
    }

    /// Where TUI mode writes its log
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file
            .clone()
            .or_else(|| dirs::data_dir().map(|p| p.join("legaltui").join("legaltui.log")))
    }
}
