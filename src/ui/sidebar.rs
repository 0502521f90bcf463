//! Navigation sidebar
//!
//! Expanded: collapsible sections with labeled entries and count badges.
//! Collapsed: one icon per route.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::icons::Icon;
use crate::navigation::{Route, Section, SidebarState};
use crate::ui::theme::Styles;

pub const EXPANDED_WIDTH: u16 = 30;
pub const COLLAPSED_WIDTH: u16 = 6;

pub fn width(sidebar: &SidebarState) -> u16 {
    if sidebar.is_expanded() {
        EXPANDED_WIDTH
    } else {
        COLLAPSED_WIDTH
    }
}

/// Sidebar lines for the current state
pub fn sidebar_lines(app: &App, sidebar: &SidebarState, styles: &Styles) -> Vec<Line<'static>> {
    let current = app.route();

    if !sidebar.is_expanded() {
        return Route::ALL
            .iter()
            .map(|route| {
                let style = if *route == current {
                    styles.selected()
                } else {
                    styles.text()
                };
                Line::from(Span::styled(format!(" {} ", route.icon().glyph()), style))
            })
            .collect();
    }

    let mut lines = Vec::new();
    for section in Section::ALL {
        let chevron = if sidebar.is_section_expanded(section) {
            Icon::ChevronDown
        } else {
            Icon::ChevronRight
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", chevron.glyph()), styles.dimmed()),
            Span::styled(section.title(), styles.dimmed()),
        ]));

        if !sidebar.is_section_visible(section) {
            continue;
        }
        for route in section.routes() {
            lines.push(menu_item(app, *route, *route == current, styles));
        }
        lines.push(Line::from(""));
    }
    lines
}

fn menu_item(app: &App, route: Route, active: bool, styles: &Styles) -> Line<'static> {
    let style = if active {
        styles.selected()
    } else {
        styles.text()
    };
    let mut spans = vec![
        Span::raw("  "),
        Span::styled(format!("{} {}", route.icon().glyph(), route.menu_title()), style),
    ];
    if let Some(count) = app.badge(route) {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(format!(" {} ", count), styles.badge()));
    }
    Line::from(spans)
}

pub fn render_sidebar(frame: &mut Frame, area: Rect, app: &App, sidebar: &SidebarState, styles: &Styles) {
    let title = if sidebar.is_expanded() {
        Span::styled(" LegalTech Pro ", styles.title())
    } else {
        Span::styled(format!(" {} ", Icon::Menu.glyph()), styles.title())
    };

    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_type(BorderType::Plain)
        .border_style(styles.border())
        .title(title)
        .style(styles.card());

    let content = Paragraph::new(sidebar_lines(app, sidebar, styles)).block(block);
    frame.render_widget(content, area);
}
