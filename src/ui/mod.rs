//! Terminal UI components
//!
//! Built with ratatui. Keyboard-first navigation throughout; every color
//! comes from the active theme palette.

pub mod cards;
pub mod list;
pub mod sidebar;
pub mod theme;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, HouseView, InputMode};
use crate::navigation::Route;

pub use theme::Styles;

/// Main render function - dispatches to view-specific renderers
pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // A missing provider still draws, with default styles and an error popup
    let (styles, provider_error) = match app.theme() {
        Ok(store) => (Styles::for_store(store), None),
        Err(e) => (Styles::default(), Some(e.to_string())),
    };

    frame.render_widget(Clear, area);
    frame.render_widget(Block::default().style(styles.background()), area);

    // Main layout: header, content, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    render_header(frame, chunks[0], app, &styles);

    let provider_error = match app.sidebar().cloned() {
        Ok(sidebar) => {
            let body = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(sidebar::width(&sidebar)), Constraint::Min(1)])
                .split(chunks[1]);
            sidebar::render_sidebar(frame, body[0], app, &sidebar, &styles);
            render_content(frame, body[1], app, &styles);
            provider_error
        }
        Err(e) => {
            render_content(frame, chunks[1], app, &styles);
            provider_error.or(Some(e.to_string()))
        }
    };

    render_status_bar(frame, chunks[2], app, &styles);

    if let Some(error) = app.error.as_deref().or(provider_error.as_deref()) {
        render_error_popup(frame, area, error, &styles);
    }
}

/// Render the header with logo, current screen and theme toggle
fn render_header(frame: &mut Frame, area: Rect, app: &App, styles: &Styles) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(20), // Logo
            Constraint::Min(1),     // Screen tabs
            Constraint::Length(14), // Theme toggle
        ])
        .split(area);

    let logo = Paragraph::new(Line::from(vec![
        Span::styled("LegalTech", styles.title()),
        Span::styled(" Pro", styles.accent()),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(styles.border()),
    );
    frame.render_widget(logo, header_chunks[0]);

    let mut spans = Vec::new();
    for (i, route) in Route::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", styles.border()));
        }
        let style = if app.router.is_active(*route) {
            styles.tab_active()
        } else {
            styles.tab_inactive()
        };
        spans.push(Span::styled(
            format!("{} {}", route.icon().glyph(), route.tab_title()),
            style,
        ));
    }
    let tabs = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(styles.border()),
    );
    frame.render_widget(tabs, header_chunks[1]);

    let toggle_text = match app.theme() {
        Ok(store) => format!("{} {}", store.mode().icon().glyph(), store.mode()),
        Err(_) => "?".to_string(),
    };
    let toggle = Paragraph::new(Span::styled(toggle_text, styles.text()))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(styles.border()),
        );
    frame.render_widget(toggle, header_chunks[2]);
}

/// Render the main content area based on current route
fn render_content(frame: &mut Frame, area: Rect, app: &mut App, styles: &Styles) {
    let area = Rect {
        x: area.x + 1,
        width: area.width.saturating_sub(2),
        ..area
    };
    let editing = app.input_mode == InputMode::Editing;

    match app.route() {
        Route::Clients => list::render_screen(frame, area, &mut app.clients, styles, editing),
        Route::LegalProcesses => {
            list::render_screen(frame, area, &mut app.processes, styles, editing)
        }
        Route::Tracking => list::render_screen(frame, area, &mut app.tracking, styles, editing),
        Route::JudicialHouses => match app.house_view {
            HouseView::List => list::render_screen(frame, area, &mut app.houses, styles, editing),
            HouseView::Map => {
                let body = list::render_chrome(frame, area, &app.houses, styles, editing);
                list::render_map_placeholder(frame, body, styles);
            }
        },
    }
}

/// Render status bar at bottom
fn render_status_bar(frame: &mut Frame, area: Rect, app: &App, styles: &Styles) {
    let mode_indicator = match app.input_mode {
        InputMode::Normal => Span::styled(" NORMAL ", styles.selected()),
        InputMode::Editing => Span::styled(" BUSCAR ", styles.chip(styles.palette.accent)),
    };

    let route_indicator = Span::styled(format!(" {} ", app.router.current_path()), styles.dimmed());

    let mut help = vec![
        Span::styled(" q", styles.keybind()),
        Span::styled(":salir ", styles.keybind_desc()),
        Span::styled("/", styles.keybind()),
        Span::styled(":buscar ", styles.keybind_desc()),
        Span::styled("tab", styles.keybind()),
        Span::styled(":pantalla ", styles.keybind_desc()),
        Span::styled("←→", styles.keybind()),
        Span::styled(":pestaña ", styles.keybind_desc()),
        Span::styled("t", styles.keybind()),
        Span::styled(":tema ", styles.keybind_desc()),
        Span::styled("m", styles.keybind()),
        Span::styled(":menú ", styles.keybind_desc()),
    ];
    if app.route() == Route::JudicialHouses {
        help.push(Span::styled("v", styles.keybind()));
        help.push(Span::styled(":mapa ", styles.keybind_desc()));
    }

    let mut spans = vec![mode_indicator, route_indicator, Span::raw("│")];
    spans.extend(help);

    let status = Paragraph::new(Line::from(spans)).style(styles.status_bar());
    frame.render_widget(status, area);
}

/// Render error popup overlay
fn render_error_popup(frame: &mut Frame, area: Rect, error: &str, styles: &Styles) {
    // Calculate centered popup
    let popup_width = 60.min(area.width.saturating_sub(4));
    let popup_height = 6.min(area.height);

    let popup_area = Rect {
        x: area.x + (area.width.saturating_sub(popup_width)) / 2,
        y: area.y + (area.height.saturating_sub(popup_height)) / 2,
        width: popup_width,
        height: popup_height,
    };

    frame.render_widget(Clear, popup_area);

    let error_block = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(error.to_string(), styles.error())),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(styles.error())
            .title(Span::styled(
                format!(" {} ERROR ", crate::icons::Icon::AlertCircle.glyph()),
                styles.error(),
            ))
            .style(styles.card()),
    );

    frame.render_widget(error_block, popup_area);
}
