//! Theme store
//!
//! Holds the user's theme preference, resolves it against the host's color
//! scheme, and hands out the matching palette.

use std::fmt;
use std::str::FromStr;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::icons::Icon;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown theme mode '{0}' (expected light, dark or system)")]
pub struct ThemeModeError(pub String);

// =============================================================================
// Modes
// =============================================================================

/// User theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follow the host color scheme
    #[default]
    System,
}

impl ThemeMode {
    /// light -> dark -> system -> light
    pub fn next(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::System,
            ThemeMode::System => ThemeMode::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }

    /// Icon shown on the theme toggle
    pub fn icon(&self) -> Icon {
        match self {
            ThemeMode::Light => Icon::Sun,
            ThemeMode::Dark => Icon::Moon,
            ThemeMode::System => Icon::Laptop,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = ThemeModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            _ => Err(ThemeModeError(s.to_string())),
        }
    }
}

/// Color scheme reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemScheme {
    Light,
    Dark,
    #[default]
    Unknown,
}

impl SystemScheme {
    /// Probe the terminal through `COLORFGBG`
    pub fn detect() -> Self {
        std::env::var("COLORFGBG")
            .map(|v| Self::from_colorfgbg(&v))
            .unwrap_or_default()
    }

    /// Parse a `COLORFGBG` value (`fg;bg` or `fg;default;bg`).
    ///
    /// The last field is the background palette index: 0-6 and 8 are dark,
    /// 7 and 9-15 are light.
    pub fn from_colorfgbg(value: &str) -> Self {
        let Some(bg) = value.rsplit(';').next() else {
            return SystemScheme::Unknown;
        };
        match bg.trim().parse::<u8>() {
            Ok(0..=6 | 8) => SystemScheme::Dark,
            Ok(7 | 9..=15) => SystemScheme::Light,
            _ => SystemScheme::Unknown,
        }
    }
}

// =============================================================================
// Palettes
// =============================================================================

/// Semantic colors for one lighting mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub background: Color,
    pub card: Color,
    pub text: Color,
    pub text_secondary: Color,
    pub border: Color,
    pub notification: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        primary: Color::Rgb(0x0f, 0x34, 0x60),
        secondary: Color::Rgb(0x9a, 0x17, 0x50),
        accent: Color::Rgb(0xe9, 0x45, 0x60),
        background: Color::Rgb(0xf5, 0xf5, 0xf5),
        card: Color::Rgb(0xff, 0xff, 0xff),
        text: Color::Rgb(0x21, 0x21, 0x21),
        text_secondary: Color::Rgb(0x75, 0x75, 0x75),
        border: Color::Rgb(0xdd, 0xdd, 0xdd),
        notification: Color::Rgb(0x0f, 0x34, 0x60),
        success: Color::Rgb(0x4c, 0xaf, 0x50),
        warning: Color::Rgb(0xff, 0xc1, 0x07),
        error: Color::Rgb(0xe5, 0x39, 0x35),
    };

    pub const DARK: Palette = Palette {
        primary: Color::Rgb(0x4c, 0x83, 0xc2),
        secondary: Color::Rgb(0xc7, 0x4b, 0x7b),
        accent: Color::Rgb(0xff, 0x6b, 0x8b),
        background: Color::Rgb(0x12, 0x12, 0x12),
        card: Color::Rgb(0x1e, 0x1e, 0x1e),
        text: Color::Rgb(0xf5, 0xf5, 0xf5),
        text_secondary: Color::Rgb(0xbb, 0xbb, 0xbb),
        border: Color::Rgb(0x33, 0x33, 0x33),
        notification: Color::Rgb(0x4c, 0x83, 0xc2),
        success: Color::Rgb(0x66, 0xbb, 0x6a),
        warning: Color::Rgb(0xff, 0xca, 0x28),
        error: Color::Rgb(0xef, 0x53, 0x50),
    };

    /// Named entries, in a stable order
    pub fn entries(&self) -> [(&'static str, Color); 12] {
        [
            ("primary", self.primary),
            ("secondary", self.secondary),
            ("accent", self.accent),
            ("background", self.background),
            ("card", self.card),
            ("text", self.text),
            ("textSecondary", self.text_secondary),
            ("border", self.border),
            ("notification", self.notification),
            ("success", self.success),
            ("warning", self.warning),
            ("error", self.error),
        ]
    }
}

/// Format an RGB color as `#RRGGBB`
pub fn hex(color: Color) -> Option<String> {
    match color {
        Color::Rgb(r, g, b) => Some(format!("#{:02X}{:02X}{:02X}", r, g, b)),
        _ => None,
    }
}

// =============================================================================
// Store
// =============================================================================

/// Current theme preference plus the host scheme it resolves against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeStore {
    mode: ThemeMode,
    system: SystemScheme,
}

impl ThemeStore {
    pub fn new(mode: ThemeMode, system: SystemScheme) -> Self {
        Self { mode, system }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn system_scheme(&self) -> SystemScheme {
        self.system
    }

    pub fn set_mode(&mut self, mode: ThemeMode) {
        self.mode = mode;
    }

    pub fn set_system_scheme(&mut self, scheme: SystemScheme) {
        self.system = scheme;
    }

    /// Advance light -> dark -> system -> light
    pub fn cycle(&mut self) -> ThemeMode {
        self.mode = self.mode.next();
        tracing::debug!(mode = %self.mode, "theme cycled");
        self.mode
    }

    /// Effective dark flag. An unknown host scheme resolves to light.
    pub fn is_dark(&self) -> bool {
        match self.mode {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => self.system == SystemScheme::Dark,
        }
    }

    pub fn colors(&self) -> &'static Palette {
        if self.is_dark() {
            &Palette::DARK
        } else {
            &Palette::LIGHT
        }
    }
}
