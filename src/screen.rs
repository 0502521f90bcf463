//! Searchable list screens
//!
//! One generic screen drives all four record lists. The record type decides
//! its search fields ([`Searchable`]), its category tabs and its copy
//! ([`Listing`]); the screen owns the query, the active tab and the selection.

use std::fmt::Debug;

use crate::filter::{filter_records, AllRecords, CategoryFilter, ProcessTab, Searchable};
use crate::icons::Icon;
use crate::models::{Client, JudicialHouse, LegalProcess, TrackingItem, TrackingStatus};

// =============================================================================
// Listing descriptors
// =============================================================================

/// Placeholder shown when a list has nothing to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyState {
    pub icon: Icon,
    pub title: &'static str,
    pub message: &'static str,
}

/// Record types that get their own list screen
pub trait Listing: Searchable + Debug + Sized + 'static {
    /// Category pre-filter (tabs)
    type Category: CategoryFilter<Self> + Copy + PartialEq + Debug + Default;

    const TITLE: &'static str;
    const SUBTITLE: &'static str;
    const PLACEHOLDER: &'static str;

    /// Tabs in display order. A single entry means no tab bar.
    fn categories() -> &'static [Self::Category];

    fn category_label(category: Self::Category) -> &'static str;

    fn section_title(category: Self::Category) -> &'static str;

    fn empty_state(category: Self::Category) -> EmptyState;

    fn id(&self) -> &str;
}

impl Listing for Client {
    type Category = AllRecords;

    const TITLE: &'static str = "Clientes";
    const SUBTITLE: &'static str = "Gestione todos sus clientes en un solo lugar";
    const PLACEHOLDER: &'static str = "Buscar cliente...";

    fn categories() -> &'static [AllRecords] {
        &[AllRecords]
    }

    fn category_label(_: AllRecords) -> &'static str {
        "Todos"
    }

    fn section_title(_: AllRecords) -> &'static str {
        "Clientes recientes"
    }

    fn empty_state(_: AllRecords) -> EmptyState {
        EmptyState {
            icon: Icon::Users,
            title: "No se encontraron clientes",
            message: "Intente con un término de búsqueda diferente o añada un nuevo cliente.",
        }
    }

    fn id(&self) -> &str {
        &self.id
    }
}

impl Listing for LegalProcess {
    type Category = ProcessTab;

    const TITLE: &'static str = "Procesos Legales";
    const SUBTITLE: &'static str = "Administre todos sus procesos activos y archivados";
    const PLACEHOLDER: &'static str = "Buscar proceso...";

    fn categories() -> &'static [ProcessTab] {
        &ProcessTab::ALL
    }

    fn category_label(tab: ProcessTab) -> &'static str {
        tab.label()
    }

    fn section_title(tab: ProcessTab) -> &'static str {
        match tab {
            ProcessTab::Active => "Procesos activos",
            ProcessTab::Archived => "Procesos archivados",
        }
    }

    fn empty_state(tab: ProcessTab) -> EmptyState {
        match tab {
            ProcessTab::Active => EmptyState {
                icon: Icon::ClipboardList,
                title: "No hay procesos activos",
                message: "Añada un nuevo proceso legal para comenzar",
            },
            ProcessTab::Archived => EmptyState {
                icon: Icon::ClipboardList,
                title: "No hay procesos archivados",
                message: "No hay procesos archivados en este momento",
            },
        }
    }

    fn id(&self) -> &str {
        &self.id
    }
}

impl Listing for TrackingItem {
    type Category = TrackingStatus;

    const TITLE: &'static str = "Seguimiento";
    const SUBTITLE: &'static str = "Seguimiento detallado de todos sus procesos legales";
    const PLACEHOLDER: &'static str = "Buscar seguimiento...";

    fn categories() -> &'static [TrackingStatus] {
        &TrackingStatus::ALL
    }

    fn category_label(status: TrackingStatus) -> &'static str {
        status.label()
    }

    fn section_title(status: TrackingStatus) -> &'static str {
        match status {
            TrackingStatus::Pending => "Tareas pendientes",
            TrackingStatus::Urgent => "Tareas urgentes",
            TrackingStatus::Completed => "Tareas completadas",
        }
    }

    fn empty_state(status: TrackingStatus) -> EmptyState {
        let title = match status {
            TrackingStatus::Pending => "No hay tareas pendientes",
            TrackingStatus::Urgent => "No hay tareas urgentes",
            TrackingStatus::Completed => "No hay tareas completadas",
        };
        let message = if status == TrackingStatus::Completed {
            "No hay tareas completadas en este momento"
        } else {
            "No hay tareas que coincidan con su búsqueda"
        };
        EmptyState {
            icon: Icon::FileClock,
            title,
            message,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }
}

impl Listing for JudicialHouse {
    type Category = AllRecords;

    const TITLE: &'static str = "Casas Judiciales";
    const SUBTITLE: &'static str = "Encuentre información sobre casas judiciales";
    const PLACEHOLDER: &'static str = "Buscar casa judicial...";

    fn categories() -> &'static [AllRecords] {
        &[AllRecords]
    }

    fn category_label(_: AllRecords) -> &'static str {
        "Todas"
    }

    fn section_title(_: AllRecords) -> &'static str {
        "Todas las Casas Judiciales"
    }

    fn empty_state(_: AllRecords) -> EmptyState {
        EmptyState {
            icon: Icon::Building,
            title: "No se encontraron casas judiciales",
            message: "Intente con un término de búsqueda diferente.",
        }
    }

    fn id(&self) -> &str {
        &self.id
    }
}

// =============================================================================
// Selection State
// =============================================================================

/// Selection state for list views
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListState {
    /// Currently selected index
    pub selected: usize,
    /// Scroll offset for viewport
    pub offset: usize,
    /// Total number of items
    pub len: usize,
}

impl ListState {
    pub fn new(len: usize) -> Self {
        Self {
            selected: 0,
            offset: 0,
            len,
        }
    }

    pub fn up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            if self.selected < self.offset {
                self.offset = self.selected;
            }
        }
    }

    pub fn down(&mut self) {
        if self.len > 0 && self.selected < self.len - 1 {
            self.selected += 1;
        }
    }

    pub fn page_up(&mut self, page_size: usize) {
        self.selected = self.selected.saturating_sub(page_size);
        if self.selected < self.offset {
            self.offset = self.selected;
        }
    }

    pub fn page_down(&mut self, page_size: usize) {
        if self.len > 0 {
            self.selected = (self.selected + page_size).min(self.len - 1);
        }
    }

    pub fn first(&mut self) {
        self.selected = 0;
        self.offset = 0;
    }

    pub fn last(&mut self) {
        if self.len > 0 {
            self.selected = self.len - 1;
        }
    }

    /// Update offset to keep selected item visible
    pub fn scroll_into_view(&mut self, visible_height: usize) {
        if visible_height == 0 {
            return;
        }
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + visible_height {
            self.offset = self.selected + 1 - visible_height;
        }
    }

    /// Replace the item count, clamping the selection
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if len == 0 {
            self.selected = 0;
            self.offset = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
        self.offset = self.offset.min(self.selected);
    }
}

// =============================================================================
// Search Input
// =============================================================================

/// Single-line text input. The cursor counts characters, not bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchInput {
    query: String,
    cursor: usize,
}

impl SearchInput {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn char_count(&self) -> usize {
        self.query.chars().count()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.query
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.query.len())
    }

    /// Text before and after the cursor
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.query.split_at(self.byte_index(self.cursor))
    }

    pub fn set(&mut self, query: &str) {
        self.query = query.to_string();
        self.cursor = self.char_count();
    }

    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.query.insert(at, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.query.remove(at);
        true
    }

    /// Delete character at cursor
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.char_count() {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.query.remove(at);
        true
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.char_count();
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.cursor = 0;
    }
}

// =============================================================================
// List Screen
// =============================================================================

/// A filtered, selectable view over a static record list
#[derive(Debug, Clone)]
pub struct ListScreen<R: Listing> {
    records: &'static [R],
    category: R::Category,
    search: SearchInput,
    visible: Vec<&'static R>,
    pub list: ListState,
}

impl<R: Listing> ListScreen<R> {
    pub fn new(records: &'static [R]) -> Self {
        let mut screen = Self {
            records,
            category: R::Category::default(),
            search: SearchInput::default(),
            visible: Vec::new(),
            list: ListState::default(),
        };
        screen.refresh();
        screen
    }

    fn refresh(&mut self) {
        self.visible = filter_records(self.records, &self.category, self.search.query());
        self.list.set_len(self.visible.len());
    }

    pub fn records(&self) -> &'static [R] {
        self.records
    }

    pub fn visible(&self) -> &[&'static R] {
        &self.visible
    }

    pub fn selected(&self) -> Option<&'static R> {
        self.visible.get(self.list.selected).copied()
    }

    pub fn search(&self) -> &SearchInput {
        &self.search
    }

    pub fn query(&self) -> &str {
        self.search.query()
    }

    pub fn category(&self) -> R::Category {
        self.category
    }

    pub fn has_tabs(&self) -> bool {
        R::categories().len() > 1
    }

    /// Switch tab. Clears the query, like tapping a tab does.
    pub fn set_category(&mut self, category: R::Category) {
        self.category = category;
        self.search.clear();
        self.list.first();
        self.refresh();
    }

    pub fn set_query(&mut self, query: &str) {
        self.search.set(query);
        self.refresh();
    }

    pub fn section_title(&self) -> &'static str {
        R::section_title(self.category)
    }

    /// Empty-state copy when nothing matches
    pub fn empty_state(&self) -> Option<EmptyState> {
        self.visible
            .is_empty()
            .then(|| R::empty_state(self.category))
    }

    fn category_index(&self) -> usize {
        R::categories()
            .iter()
            .position(|c| *c == self.category)
            .unwrap_or(0)
    }

    fn step_category(&mut self, forward: bool) {
        let tabs = R::categories();
        if tabs.len() < 2 {
            return;
        }
        let idx = self.category_index();
        let next = if forward {
            (idx + 1) % tabs.len()
        } else {
            (idx + tabs.len() - 1) % tabs.len()
        };
        self.set_category(tabs[next]);
    }
}

/// Type-erased screen controls, so key handling can target whichever
/// screen is active
pub trait ScreenControl {
    fn insert(&mut self, c: char);
    fn backspace(&mut self);
    fn delete(&mut self);
    fn cursor_left(&mut self);
    fn cursor_right(&mut self);
    fn cursor_home(&mut self);
    fn cursor_end(&mut self);
    fn clear_query(&mut self);
    fn next_category(&mut self);
    fn prev_category(&mut self);
    fn list_mut(&mut self) -> &mut ListState;
}

impl<R: Listing> ScreenControl for ListScreen<R> {
    fn insert(&mut self, c: char) {
        self.search.insert(c);
        self.refresh();
    }

    fn backspace(&mut self) {
        if self.search.backspace() {
            self.refresh();
        }
    }

    fn delete(&mut self) {
        if self.search.delete() {
            self.refresh();
        }
    }

    fn cursor_left(&mut self) {
        self.search.cursor_left();
    }

    fn cursor_right(&mut self) {
        self.search.cursor_right();
    }

    fn cursor_home(&mut self) {
        self.search.cursor_home();
    }

    fn cursor_end(&mut self) {
        self.search.cursor_end();
    }

    fn clear_query(&mut self) {
        self.search.clear();
        self.refresh();
    }

    fn next_category(&mut self) {
        self.step_category(true);
    }

    fn prev_category(&mut self) {
        self.step_category(false);
    }

    fn list_mut(&mut self) -> &mut ListState {
        &mut self.list
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Dataset;

    // -------------------------------------------------------------------------
    // ListState Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_list_state_navigation() {
        let mut list = ListState::new(5);
        assert_eq!(list.selected, 0);

        list.down();
        list.down();
        list.down();
        list.down();
        assert_eq!(list.selected, 4);

        // Can't go past end
        list.down();
        assert_eq!(list.selected, 4);

        list.up();
        assert_eq!(list.selected, 3);

        list.first();
        assert_eq!(list.selected, 0);

        list.last();
        assert_eq!(list.selected, 4);
    }

    #[test]
    fn test_list_state_empty() {
        let mut list = ListState::new(0);
        list.down();
        list.page_down(5);
        list.last();
        assert_eq!(list.selected, 0);
    }

    #[test]
    fn test_list_state_set_len_clamps() {
        let mut list = ListState::new(10);
        list.selected = 8;
        list.offset = 6;

        list.set_len(5);
        assert_eq!(list.selected, 4);
        assert!(list.offset <= list.selected);

        list.set_len(0);
        assert_eq!(list.selected, 0);
        assert_eq!(list.offset, 0);
    }

    #[test]
    fn test_scroll_into_view() {
        let mut list = ListState::new(20);
        list.selected = 12;
        list.scroll_into_view(5);
        assert_eq!(list.offset, 8);

        list.selected = 3;
        list.scroll_into_view(5);
        assert_eq!(list.offset, 3);
    }

    // -------------------------------------------------------------------------
    // SearchInput Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_search_input_editing() {
        let mut input = SearchInput::default();
        for c in "hello".chars() {
            input.insert(c);
        }
        assert_eq!(input.query(), "hello");
        assert_eq!(input.cursor(), 5);

        input.cursor_left();
        input.cursor_left();
        input.insert('X');
        assert_eq!(input.query(), "helXlo");

        assert!(input.backspace());
        assert_eq!(input.query(), "hello");

        input.cursor_home();
        assert!(!input.backspace());
        assert!(input.delete());
        assert_eq!(input.query(), "ello");

        input.cursor_end();
        assert!(!input.delete());
        assert_eq!(input.cursor(), 4);
    }

    #[test]
    fn test_search_input_multibyte() {
        let mut input = SearchInput::default();
        input.set("Nuñez");
        assert_eq!(input.cursor(), 5);

        input.cursor_left();
        input.cursor_left();
        assert_eq!(input.split_at_cursor(), ("Nuñ", "ez"));

        input.backspace();
        assert_eq!(input.query(), "Nuez");
        input.insert('ñ');
        assert_eq!(input.query(), "Nuñez");
    }

    // -------------------------------------------------------------------------
    // ListScreen Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_client_screen_filters_live() {
        let mut screen = ListScreen::new(&Dataset::mock().clients[..]);
        assert_eq!(screen.visible().len(), 12);
        assert!(!screen.has_tabs());

        for c in "garcia".chars() {
            screen.insert(c);
        }
        assert_eq!(screen.visible().len(), 1);
        assert_eq!(screen.selected().unwrap().name, "Maria Garcia");

        screen.clear_query();
        assert_eq!(screen.visible().len(), 12);
    }

    #[test]
    fn test_tracking_tabs_reset_query() {
        let mut screen = ListScreen::new(&Dataset::mock().tracking[..]);
        assert_eq!(screen.category(), TrackingStatus::Pending);
        assert!(screen.visible().iter().all(|t| t.status == TrackingStatus::Pending));

        screen.set_query("convenio");
        assert_eq!(screen.visible().len(), 1);

        screen.next_category();
        assert_eq!(screen.category(), TrackingStatus::Urgent);
        assert_eq!(screen.query(), "");
        assert!(screen.visible().iter().all(|t| t.status == TrackingStatus::Urgent));

        screen.prev_category();
        screen.prev_category();
        assert_eq!(screen.category(), TrackingStatus::Completed);
    }

    #[test]
    fn test_empty_state_copy() {
        let mut screen = ListScreen::new(&Dataset::mock().processes[..]);
        assert!(screen.empty_state().is_none());

        screen.set_query("no existe");
        let empty = screen.empty_state().unwrap();
        assert_eq!(empty.title, "No hay procesos activos");
        assert_eq!(empty.icon, Icon::ClipboardList);

        screen.set_category(ProcessTab::Archived);
        screen.set_query("zzz");
        assert_eq!(screen.empty_state().unwrap().title, "No hay procesos archivados");
    }

    fn unfiltered_len<R: Listing>(records: &'static [R]) -> usize {
        let screen = ListScreen::new(records);
        assert_eq!(screen.category(), R::Category::default());
        screen.visible().len()
    }

    #[test]
    fn test_every_listing_builds_a_screen() {
        let data = Dataset::mock();
        assert_eq!(unfiltered_len(&data.clients[..]), 12);
        assert_eq!(unfiltered_len(&data.processes[..]), 7);
        assert_eq!(unfiltered_len(&data.tracking[..]), 4);
        assert_eq!(unfiltered_len(&data.houses[..]), 6);
    }

    #[test]
    fn test_selection_clamped_when_list_shrinks() {
        let mut screen = ListScreen::new(&Dataset::mock().clients[..]);
        screen.list.last();
        assert_eq!(screen.list.selected, 11);

        screen.set_query("lopez");
        assert_eq!(screen.list.selected, 0);
        assert_eq!(screen.selected().unwrap().name, "Juan Lopez");
    }
}
