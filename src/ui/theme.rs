//! Style helpers for the TUI
//!
//! [`Styles`] turns the active [`Palette`] into ratatui styles, so renderers
//! never pick raw colors themselves.

use ratatui::style::{Color, Modifier, Style};

use crate::models::{ProcessStatus, TrackingStatus};
use crate::theme::{Palette, ThemeStore};

/// Styles derived from one palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Styles {
    pub palette: Palette,
}

impl Styles {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    /// Styles for the store's effective mode
    pub fn for_store(store: &ThemeStore) -> Self {
        Self::new(*store.colors())
    }

    // ═══════════════════════════════════════════════════════════════════════
    // BASE STYLES
    // ═══════════════════════════════════════════════════════════════════════

    /// Screen background
    pub fn background(&self) -> Style {
        Style::default().bg(self.palette.background)
    }

    /// Default text style
    pub fn text(&self) -> Style {
        Style::default().fg(self.palette.text)
    }

    /// Dimmed/muted text
    pub fn dimmed(&self) -> Style {
        Style::default().fg(self.palette.text_secondary)
    }

    /// Title/header style
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn secondary(&self) -> Style {
        Style::default().fg(self.palette.secondary)
    }

    pub fn accent(&self) -> Style {
        Style::default()
            .fg(self.palette.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error(&self) -> Style {
        Style::default()
            .fg(self.palette.error)
            .add_modifier(Modifier::BOLD)
    }

    pub fn success(&self) -> Style {
        Style::default().fg(self.palette.success)
    }

    pub fn warning(&self) -> Style {
        Style::default().fg(self.palette.warning)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // COMPONENT STYLES
    // ═══════════════════════════════════════════════════════════════════════

    /// Panels and cards
    pub fn card(&self) -> Style {
        Style::default().fg(self.palette.text).bg(self.palette.card)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.palette.border)
    }

    pub fn border_focused(&self) -> Style {
        Style::default()
            .fg(self.palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Selected list row
    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.palette.card)
            .bg(self.palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn input(&self) -> Style {
        Style::default().fg(self.palette.text).bg(self.palette.card)
    }

    pub fn placeholder(&self) -> Style {
        Style::default()
            .fg(self.palette.text_secondary)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn tab_active(&self) -> Style {
        Style::default()
            .fg(self.palette.primary)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    pub fn tab_inactive(&self) -> Style {
        Style::default().fg(self.palette.text_secondary)
    }

    /// Count badge in the sidebar
    pub fn badge(&self) -> Style {
        Style::default()
            .fg(self.palette.card)
            .bg(self.palette.notification)
    }

    /// Keybinding hint style
    pub fn keybind(&self) -> Style {
        Style::default()
            .fg(self.palette.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn keybind_desc(&self) -> Style {
        Style::default().fg(self.palette.text_secondary)
    }

    pub fn status_bar(&self) -> Style {
        Style::default().fg(self.palette.text).bg(self.palette.card)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // STATUS COLORS
    // ═══════════════════════════════════════════════════════════════════════

    pub fn process_status_color(&self, status: ProcessStatus) -> Color {
        match status {
            ProcessStatus::Active => self.palette.success,
            ProcessStatus::OnHold => self.palette.warning,
            ProcessStatus::Urgent => self.palette.error,
            ProcessStatus::Archived => self.palette.text_secondary,
        }
    }

    pub fn tracking_status_color(&self, status: TrackingStatus) -> Color {
        match status {
            TrackingStatus::Pending => self.palette.warning,
            TrackingStatus::Urgent => self.palette.error,
            TrackingStatus::Completed => self.palette.success,
        }
    }

    /// Status chip: status color on the card background
    pub fn chip(&self, color: Color) -> Style {
        Style::default()
            .fg(self.palette.card)
            .bg(color)
            .add_modifier(Modifier::BOLD)
    }
}

impl Default for Styles {
    fn default() -> Self {
        Self::new(Palette::LIGHT)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// COLOR UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Calculate relative luminance for a color (used in contrast ratio)
/// Formula: https://www.w3.org/TR/WCAG20/#relativeluminancedef
pub fn relative_luminance(r: u8, g: u8, b: u8) -> f64 {
    fn channel_luminance(c: u8) -> f64 {
        let c = c as f64 / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }

    0.2126 * channel_luminance(r) + 0.7152 * channel_luminance(g) + 0.0722 * channel_luminance(b)
}

/// Calculate contrast ratio between two colors
/// Returns a value between 1 (same color) and 21 (black/white)
/// WCAG AA requires >= 4.5:1 for normal text, >= 3:1 for large text
pub fn contrast_ratio(fg: (u8, u8, u8), bg: (u8, u8, u8)) -> f64 {
    let l1 = relative_luminance(fg.0, fg.1, fg.2);
    let l2 = relative_luminance(bg.0, bg.1, bg.2);

    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };

    (lighter + 0.05) / (darker + 0.05)
}

/// Check if a foreground/background pair meets WCAG AA for normal text
pub fn meets_wcag_aa(fg: (u8, u8, u8), bg: (u8, u8, u8)) -> bool {
    contrast_ratio(fg, bg) >= 4.5
}

/// Check if a foreground/background pair meets WCAG AA for large text
pub fn meets_wcag_aa_large(fg: (u8, u8, u8), bg: (u8, u8, u8)) -> bool {
    contrast_ratio(fg, bg) >= 3.0
}

/// Extract RGB tuple from ratatui Color (only works for Rgb variant)
pub fn color_to_rgb(color: Color) -> Option<(u8, u8, u8)> {
    match color {
        Color::Rgb(r, g, b) => Some((r, g, b)),
        _ => None,
    }
}
