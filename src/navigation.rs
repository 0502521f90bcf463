//! Navigation state
//!
//! Sidebar expand/collapse flags and the route stack that decides which
//! screen is showing.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::icons::Icon;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown sidebar section: '{0}'")]
pub struct SectionError(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("No screen registered for path '{0}'")]
    UnknownPath(String),
}

// =============================================================================
// Sidebar
// =============================================================================

/// Collapsible group of sidebar entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Clients,
    Processes,
}

impl Section {
    pub const ALL: [Section; 2] = [Section::Clients, Section::Processes];

    pub fn id(&self) -> &'static str {
        match self {
            Section::Clients => "clients",
            Section::Processes => "processes",
        }
    }

    /// Header text
    pub fn title(&self) -> &'static str {
        match self {
            Section::Clients => "CLIENTES",
            Section::Processes => "PROCESOS",
        }
    }

    /// Routes listed under this section
    pub fn routes(&self) -> &'static [Route] {
        match self {
            Section::Clients => &[Route::Clients],
            Section::Processes => &[Route::LegalProcesses, Route::Tracking, Route::JudicialHouses],
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = SectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.id() == s.trim())
            .ok_or_else(|| SectionError(s.to_string()))
    }
}

/// Sidebar expand/collapse state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarState {
    expanded: bool,
    sections: HashSet<Section>,
}

impl Default for SidebarState {
    fn default() -> Self {
        Self::new(true, Section::ALL)
    }
}

impl SidebarState {
    pub fn new(expanded: bool, sections: impl IntoIterator<Item = Section>) -> Self {
        Self {
            expanded,
            sections: sections.into_iter().collect(),
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
        tracing::debug!(expanded = self.expanded, "sidebar toggled");
    }

    pub fn is_section_expanded(&self, section: Section) -> bool {
        self.sections.contains(&section)
    }

    /// Add the section if absent, remove it if present
    pub fn toggle_section(&mut self, section: Section) {
        if !self.sections.remove(&section) {
            self.sections.insert(section);
        }
        tracing::debug!(%section, expanded = self.is_section_expanded(section), "section toggled");
    }

    /// A collapsed sidebar shows every entry as an icon
    pub fn is_section_visible(&self, section: Section) -> bool {
        !self.expanded || self.is_section_expanded(section)
    }

    pub fn expanded_sections(&self) -> impl Iterator<Item = Section> + '_ {
        Section::ALL.into_iter().filter(|s| self.sections.contains(s))
    }
}

// =============================================================================
// Routes
// =============================================================================

/// Screens reachable from the tab bar and sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Clients,
    LegalProcesses,
    Tracking,
    JudicialHouses,
}

impl Route {
    pub const ALL: [Route; 4] = [
        Route::Clients,
        Route::LegalProcesses,
        Route::Tracking,
        Route::JudicialHouses,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Clients => "/",
            Route::LegalProcesses => "/legalProcesses",
            Route::Tracking => "/tracking",
            Route::JudicialHouses => "/judicialHouses",
        }
    }

    pub fn from_path(path: &str) -> Result<Route, RouteError> {
        Route::ALL
            .into_iter()
            .find(|r| r.path() == path)
            .ok_or_else(|| RouteError::UnknownPath(path.to_string()))
    }

    /// Tab bar label
    pub fn tab_title(&self) -> &'static str {
        match self {
            Route::Clients => "Clientes",
            Route::LegalProcesses => "Procesos",
            Route::Tracking => "Seguimiento",
            Route::JudicialHouses => "Casas",
        }
    }

    /// Sidebar entry label
    pub fn menu_title(&self) -> &'static str {
        match self {
            Route::Clients => "Todos los clientes",
            Route::LegalProcesses => "Procesos legales",
            Route::Tracking => "Seguimiento",
            Route::JudicialHouses => "Casas judiciales",
        }
    }

    pub fn icon(&self) -> Icon {
        match self {
            Route::Clients => Icon::Users,
            Route::LegalProcesses => Icon::ClipboardList,
            Route::Tracking => Icon::Clock,
            Route::JudicialHouses => Icon::Building,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Route::Clients => 0,
            Route::LegalProcesses => 1,
            Route::Tracking => 2,
            Route::JudicialHouses => 3,
        }
    }

    pub fn next(&self) -> Route {
        Route::ALL[(self.index() + 1) % Route::ALL.len()]
    }

    pub fn prev(&self) -> Route {
        Route::ALL[(self.index() + Route::ALL.len() - 1) % Route::ALL.len()]
    }
}

/// Current route plus history
#[derive(Debug, Clone, Default)]
pub struct Router {
    current: Route,
    stack: Vec<Route>,
}

impl Router {
    pub fn new(start: Route) -> Self {
        Self {
            current: start,
            stack: Vec::new(),
        }
    }

    pub fn current(&self) -> Route {
        self.current
    }

    pub fn current_path(&self) -> &'static str {
        self.current.path()
    }

    pub fn is_active(&self, route: Route) -> bool {
        self.current == route
    }

    /// Navigate to a path string
    pub fn push(&mut self, path: &str) -> Result<Route, RouteError> {
        let route = Route::from_path(path)?;
        self.navigate(route);
        Ok(route)
    }

    /// Navigate to a route, pushing the current one on the stack.
    ///
    /// Revisiting a route already in the history unwinds back to it, so the
    /// stack never holds a route twice.
    pub fn navigate(&mut self, route: Route) {
        // Don't push if going to same route
        if self.current == route {
            return;
        }
        match self.stack.iter().position(|r| *r == route) {
            Some(idx) => self.stack.truncate(idx),
            None => self.stack.push(self.current),
        }
        self.current = route;
        tracing::info!(path = route.path(), depth = self.stack.len(), "navigated");
    }

    /// Replace the current route without pushing it (tab bar)
    pub fn switch_to(&mut self, path: &str) -> Result<Route, RouteError> {
        let route = Route::from_path(path)?;
        if self.current != route {
            if let Some(idx) = self.stack.iter().position(|r| *r == route) {
                self.stack.truncate(idx);
            }
            self.current = route;
            tracing::info!(path, "switched tab");
        }
        Ok(route)
    }

    /// Go back to previous route
    pub fn back(&mut self) -> bool {
        if let Some(prev) = self.stack.pop() {
            self.current = prev;
            true
        } else {
            false
        }
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}
