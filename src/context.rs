//! Provider scope
//!
//! Screens and renderers receive an explicit [`AppContext`] instead of
//! reaching for globals. Asking for a provider the context was built without
//! is a configuration error.

use thiserror::Error;

use crate::navigation::SidebarState;
use crate::theme::ThemeStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContextError {
    #[error("{0} requested outside of an initialized provider scope")]
    MissingProvider(&'static str),
}

/// Shared UI state handed to every screen
#[derive(Debug, Clone, Default)]
pub struct AppContext {
    theme: Option<ThemeStore>,
    sidebar: Option<SidebarState>,
}

impl AppContext {
    /// Context with every provider installed
    pub fn new(theme: ThemeStore, sidebar: SidebarState) -> Self {
        Self {
            theme: Some(theme),
            sidebar: Some(sidebar),
        }
    }

    /// Empty scope; providers are added with the `with_*` builders
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_theme(mut self, theme: ThemeStore) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn with_sidebar(mut self, sidebar: SidebarState) -> Self {
        self.sidebar = Some(sidebar);
        self
    }

    pub fn theme(&self) -> Result<&ThemeStore, ContextError> {
        self.theme
            .as_ref()
            .ok_or(ContextError::MissingProvider("ThemeStore"))
    }

    pub fn theme_mut(&mut self) -> Result<&mut ThemeStore, ContextError> {
        self.theme
            .as_mut()
            .ok_or(ContextError::MissingProvider("ThemeStore"))
    }

    pub fn sidebar(&self) -> Result<&SidebarState, ContextError> {
        self.sidebar
            .as_ref()
            .ok_or(ContextError::MissingProvider("SidebarState"))
    }

    pub fn sidebar_mut(&mut self) -> Result<&mut SidebarState, ContextError> {
        self.sidebar
            .as_mut()
            .ok_or(ContextError::MissingProvider("SidebarState"))
    }
}
