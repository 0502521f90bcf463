//! App state and core application logic
//!
//! Owns the provider context, the router and one list screen per route, and
//! turns key events into state changes.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::context::{AppContext, ContextError};
use crate::data::Dataset;
use crate::models::{Client, JudicialHouse, LegalProcess, TrackingItem, TrackingStatus};
use crate::navigation::{Route, Router, Section, SidebarState};
use crate::screen::{ListScreen, ScreenControl};
use crate::theme::ThemeStore;

/// Rows moved by PageUp/PageDown
const PAGE_SIZE: usize = 10;

// =============================================================================
// Input Mode
// =============================================================================

/// Current input mode for keyboard handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Normal navigation mode
    #[default]
    Normal,
    /// Text input mode (search box focused)
    Editing,
}

/// How the judicial houses screen presents its results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HouseView {
    #[default]
    List,
    Map,
}

impl HouseView {
    pub fn toggle(self) -> Self {
        match self {
            HouseView::List => HouseView::Map,
            HouseView::Map => HouseView::List,
        }
    }
}

// =============================================================================
// Main Application State
// =============================================================================

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Theme and sidebar providers
    pub ctx: AppContext,
    pub router: Router,
    /// Whether the app is running
    pub running: bool,
    /// Current input mode
    pub input_mode: InputMode,
    /// Global error message
    pub error: Option<String>,
    pub dataset: &'static Dataset,

    // Screens
    pub clients: ListScreen<Client>,
    pub processes: ListScreen<LegalProcess>,
    pub tracking: ListScreen<TrackingItem>,
    pub houses: ListScreen<JudicialHouse>,
    pub house_view: HouseView,
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppContext::new(ThemeStore::default(), SidebarState::default()))
    }
}

impl App {
    /// App over the built-in mock dataset
    pub fn new(ctx: AppContext) -> Self {
        Self::with_dataset(ctx, Dataset::mock())
    }

    pub fn with_dataset(ctx: AppContext, dataset: &'static Dataset) -> Self {
        Self {
            ctx,
            router: Router::default(),
            running: true,
            input_mode: InputMode::Normal,
            error: None,
            dataset,
            clients: ListScreen::new(&dataset.clients),
            processes: ListScreen::new(&dataset.processes),
            tracking: ListScreen::new(&dataset.tracking),
            houses: ListScreen::new(&dataset.houses),
            house_view: HouseView::List,
        }
    }

    pub fn route(&self) -> Route {
        self.router.current()
    }

    pub fn theme(&self) -> Result<&ThemeStore, ContextError> {
        self.ctx.theme()
    }

    pub fn sidebar(&self) -> Result<&SidebarState, ContextError> {
        self.ctx.sidebar()
    }

    /// Open a screen by path, as a sidebar entry does. Adds to the history.
    pub fn open(&mut self, path: &str) {
        match self.router.push(path) {
            Ok(_) => self.input_mode = InputMode::Normal,
            Err(e) => self.set_error(e.to_string()),
        }
    }

    /// Navigate to a route, leaving editing mode
    pub fn navigate(&mut self, route: Route) {
        self.open(route.path());
    }

    /// Switch screens from the tab bar. The history is left alone.
    pub fn switch_screen(&mut self, route: Route) {
        match self.router.switch_to(route.path()) {
            Ok(_) => self.input_mode = InputMode::Normal,
            Err(e) => self.set_error(e.to_string()),
        }
    }

    /// Go back to previous route
    pub fn back(&mut self) -> bool {
        // If in editing mode, exit editing first
        if self.input_mode == InputMode::Editing {
            self.input_mode = InputMode::Normal;
            return true;
        }
        self.router.back()
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Set error message
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error = Some(msg.into());
    }

    /// Clear error message
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Focus search input
    pub fn focus_search(&mut self) {
        self.input_mode = InputMode::Editing;
    }

    /// Screen behind the current route
    pub fn active_screen_mut(&mut self) -> &mut dyn ScreenControl {
        match self.router.current() {
            Route::Clients => &mut self.clients,
            Route::LegalProcesses => &mut self.processes,
            Route::Tracking => &mut self.tracking,
            Route::JudicialHouses => &mut self.houses,
        }
    }

    /// Count badge for a sidebar entry
    pub fn badge(&self, route: Route) -> Option<usize> {
        match route {
            Route::Clients => Some(self.dataset.clients.len()),
            Route::LegalProcesses => Some(self.dataset.active_process_count()),
            Route::Tracking => Some(self.dataset.tracking_count(TrackingStatus::Pending)),
            Route::JudicialHouses => None,
        }
    }

    pub fn cycle_theme(&mut self) {
        if let Err(e) = self.ctx.theme_mut().map(|theme| theme.cycle()) {
            self.set_error(e.to_string());
        }
    }

    pub fn toggle_sidebar(&mut self) {
        if let Err(e) = self.ctx.sidebar_mut().map(SidebarState::toggle) {
            self.set_error(e.to_string());
        }
    }

    pub fn toggle_section(&mut self, section: Section) {
        if let Err(e) = self
            .ctx
            .sidebar_mut()
            .map(|sidebar| sidebar.toggle_section(section))
        {
            self.set_error(e.to_string());
        }
    }

    // -------------------------------------------------------------------------
    // Keyboard Event Handling
    // -------------------------------------------------------------------------

    /// Handle keyboard event, returns true if event was consumed
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Clear error on any keypress
        self.error = None;

        // Global quit shortcut (Ctrl+C or q in normal mode)
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return true;
        }

        if self.input_mode == InputMode::Editing {
            self.handle_editing_key(key)
        } else {
            self.handle_normal_key(key)
        }
    }

    /// Handle keys in editing (text input) mode
    fn handle_editing_key(&mut self, key: KeyEvent) -> bool {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
            self.input_mode = InputMode::Normal;
            return true;
        }

        let screen = self.active_screen_mut();
        match key.code {
            KeyCode::Char(c) => screen.insert(c),
            KeyCode::Backspace => screen.backspace(),
            KeyCode::Delete => screen.delete(),
            KeyCode::Left => screen.cursor_left(),
            KeyCode::Right => screen.cursor_right(),
            KeyCode::Home => screen.cursor_home(),
            KeyCode::End => screen.cursor_end(),
            _ => return false,
        }
        true
    }

    /// Handle keys in normal navigation mode
    fn handle_normal_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char('/') => self.focus_search(),
            KeyCode::Esc => return self.back(),
            KeyCode::Tab => self.switch_screen(self.route().next()),
            KeyCode::BackTab => self.switch_screen(self.route().prev()),
            KeyCode::Char(c @ '1'..='4') => {
                let idx = (c as usize) - ('1' as usize);
                self.navigate(Route::ALL[idx]);
            }
            KeyCode::Char('t') => self.cycle_theme(),
            KeyCode::Char('m') => self.toggle_sidebar(),
            KeyCode::Char('c') => self.toggle_section(Section::Clients),
            KeyCode::Char('p') => self.toggle_section(Section::Processes),
            KeyCode::Char('v') if self.route() == Route::JudicialHouses => {
                self.house_view = self.house_view.toggle();
            }
            _ => return self.handle_list_key(key),
        }
        true
    }

    fn handle_list_key(&mut self, key: KeyEvent) -> bool {
        let screen = self.active_screen_mut();
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => screen.prev_category(),
            KeyCode::Right | KeyCode::Char('l') => screen.next_category(),
            KeyCode::Up | KeyCode::Char('k') => screen.list_mut().up(),
            KeyCode::Down | KeyCode::Char('j') => screen.list_mut().down(),
            KeyCode::PageUp => screen.list_mut().page_up(PAGE_SIZE),
            KeyCode::PageDown => screen.list_mut().page_down(PAGE_SIZE),
            KeyCode::Home => screen.list_mut().first(),
            KeyCode::End => screen.list_mut().last(),
            _ => return false,
        }
        true
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::ProcessTab;
    use crate::theme::ThemeMode;

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_key(KeyEvent::new(code, KeyModifiers::empty()))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    // -------------------------------------------------------------------------
    // App Navigation Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_app_navigation() {
        let mut app = App::default();
        assert_eq!(app.route(), Route::Clients);

        app.navigate(Route::Tracking);
        assert_eq!(app.route(), Route::Tracking);
        assert_eq!(app.router.depth(), 1);

        // Navigating to same route shouldn't push to stack
        app.navigate(Route::Tracking);
        assert_eq!(app.router.depth(), 1);

        assert!(app.back());
        assert_eq!(app.route(), Route::Clients);

        // Can't go back from the first screen
        assert!(!app.back());
    }

    #[test]
    fn test_tab_and_number_keys() {
        let mut app = App::default();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.route(), Route::LegalProcesses);

        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.route(), Route::JudicialHouses);

        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.route(), Route::Tracking);
    }

    #[test]
    fn test_tab_switching_keeps_history_bounded() {
        let mut app = App::default();
        for _ in 0..400 {
            press(&mut app, KeyCode::Tab);
        }
        assert_eq!(app.route(), Route::Clients);
        assert_eq!(app.router.depth(), 0);

        for key in "1234".chars().cycle().take(400) {
            press(&mut app, KeyCode::Char(key));
        }
        assert_eq!(app.route(), Route::JudicialHouses);
        assert!(app.router.depth() < Route::ALL.len());

        // Esc walks back once per distinct screen
        let mut steps = 0;
        while app.back() {
            steps += 1;
        }
        assert_eq!(steps, 3);
        assert_eq!(app.route(), Route::Clients);
    }

    #[test]
    fn test_open_unknown_path_sets_error() {
        let mut app = App::default();
        app.open("/settings");
        assert_eq!(app.route(), Route::Clients);
        assert!(app.error.as_deref().is_some_and(|e| e.contains("/settings")));
    }

    // -------------------------------------------------------------------------
    // App Key Handling Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_app_quit_key() {
        let mut app = App::default();
        assert!(app.running);

        press(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }

    #[test]
    fn test_app_quit_ctrl_c() {
        let mut app = App::default();
        app.focus_search();

        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!app.running);
    }

    #[test]
    fn test_app_editing_mode_filters_live() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.input_mode, InputMode::Editing);

        // 'q' is text while editing
        type_text(&mut app, "garcia");
        assert!(app.running);
        assert_eq!(app.clients.query(), "garcia");
        assert_eq!(app.clients.visible().len(), 1);

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.clients.query(), "garci");

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.clients.query(), "garci");
    }

    #[test]
    fn test_app_escape_from_editing_first() {
        let mut app = App::default();
        app.navigate(Route::LegalProcesses);
        app.focus_search();

        // First escape exits editing mode
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.route(), Route::LegalProcesses);

        // Second escape goes back
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.route(), Route::Clients);
    }

    #[test]
    fn test_category_keys_clear_query() {
        let mut app = App::default();
        app.navigate(Route::LegalProcesses);
        app.processes.set_query("laboral");

        press(&mut app, KeyCode::Right);
        assert_eq!(app.processes.category(), ProcessTab::Archived);
        assert_eq!(app.processes.query(), "");

        press(&mut app, KeyCode::Char('h'));
        assert_eq!(app.processes.category(), ProcessTab::Active);
    }

    #[test]
    fn test_list_keys_move_selection() {
        let mut app = App::default();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.clients.list.selected, 2);

        press(&mut app, KeyCode::End);
        assert_eq!(app.clients.list.selected, app.dataset.clients.len() - 1);

        press(&mut app, KeyCode::PageUp);
        assert_eq!(app.clients.list.selected, 1);

        press(&mut app, KeyCode::Home);
        assert_eq!(app.clients.list.selected, 0);
    }

    #[test]
    fn test_theme_and_sidebar_keys() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.theme().unwrap().mode(), ThemeMode::Light);

        press(&mut app, KeyCode::Char('m'));
        assert!(!app.sidebar().unwrap().is_expanded());

        press(&mut app, KeyCode::Char('p'));
        assert!(!app.sidebar().unwrap().is_section_expanded(Section::Processes));
    }

    #[test]
    fn test_missing_provider_surfaces_error() {
        let mut app = App::new(AppContext::empty().with_sidebar(SidebarState::default()));
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(
            app.error.as_deref(),
            Some("ThemeStore requested outside of an initialized provider scope")
        );

        // Any key clears it
        press(&mut app, KeyCode::Down);
        assert!(app.error.is_none());
    }

    #[test]
    fn test_house_view_toggle_only_on_houses() {
        let mut app = App::default();
        assert!(!press(&mut app, KeyCode::Char('v')));
        assert_eq!(app.house_view, HouseView::List);

        app.navigate(Route::JudicialHouses);
        press(&mut app, KeyCode::Char('v'));
        assert_eq!(app.house_view, HouseView::Map);
        press(&mut app, KeyCode::Char('v'));
        assert_eq!(app.house_view, HouseView::List);
    }

    #[test]
    fn test_badges() {
        let app = App::default();
        assert_eq!(app.badge(Route::Clients), Some(12));
        assert_eq!(app.badge(Route::LegalProcesses), Some(7));
        assert_eq!(app.badge(Route::JudicialHouses), None);
    }
}
