//! LegalTUI - terminal client for legal practice management
//!
//! Clients, legal processes, tracking tasks and judicial houses over a
//! static dataset, with live search, category tabs and light/dark themes.
//!
//! # Modules
//!
//! - `models` / `data` - Record types and the mock dataset
//! - `filter` - Category pre-filter and case-insensitive search
//! - `theme` - Theme store and palettes
//! - `navigation` - Sidebar state and router
//! - `context` - Provider scope handed to screens
//! - `screen` - Generic searchable list screen
//! - `app` - Application state and key handling
//! - `ui` - TUI components
//! - `cli` / `commands` - Scriptable CLI mode

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod data;
pub mod filter;
pub mod icons;
pub mod logging;
pub mod models;
pub mod navigation;
pub mod screen;
pub mod theme;
pub mod ui;

// Re-export commonly used types
pub use models::{
    Client, JudicialHouse, LegalProcess, ProcessStatus, StatusParseError, TrackingItem,
    TrackingStatus,
};

pub use app::{App, HouseView, InputMode};
pub use config::{Config, ConfigError};
pub use context::{AppContext, ContextError};
pub use data::{DataError, Dataset};
pub use filter::{filter, filter_records, AllRecords, CategoryFilter, ProcessTab, Searchable};
pub use icons::{Icon, IconError};
pub use navigation::{Route, RouteError, Router, Section, SectionError, SidebarState};
pub use screen::{EmptyState, ListScreen, Listing};
pub use theme::{Palette, SystemScheme, ThemeMode, ThemeStore};
