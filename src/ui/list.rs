//! List screen view
//!
//! Title, search box, category tabs, section title, then either the result
//! list with a detail card or the empty state.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::icons::Icon;
use crate::screen::{EmptyState, ListScreen, Listing};
use crate::ui::cards::Card;
use crate::ui::theme::Styles;

pub const MAP_PLACEHOLDER: &str =
    "Visualización de mapa no disponible en esta versión de previsualización.";

/// Render a list screen. `editing` draws the search box focused.
pub fn render_screen<R: Listing + Card>(
    frame: &mut Frame,
    area: Rect,
    screen: &mut ListScreen<R>,
    styles: &Styles,
    editing: bool,
) {
    let body = render_chrome(frame, area, screen, styles, editing);
    render_results(frame, body, screen, styles);
}

/// Title, search box, tabs and section title. Returns the area left for
/// the body.
pub fn render_chrome<R: Listing>(
    frame: &mut Frame,
    area: Rect,
    screen: &ListScreen<R>,
    styles: &Styles,
    editing: bool,
) -> Rect {
    let tabs_height = if screen.has_tabs() { 1 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),           // Title + subtitle
            Constraint::Length(3),           // Search box
            Constraint::Length(tabs_height), // Tabs
            Constraint::Length(1),           // Section title
            Constraint::Min(1),              // Body
        ])
        .split(area);

    let heading = Paragraph::new(vec![
        Line::from(Span::styled(R::TITLE, styles.title())),
        Line::from(Span::styled(R::SUBTITLE, styles.dimmed())),
    ]);
    frame.render_widget(heading, chunks[0]);

    render_search_box(frame, chunks[1], screen, styles, editing);

    if screen.has_tabs() {
        render_tabs(frame, chunks[2], screen, styles);
    }

    let section = Paragraph::new(Line::from(vec![
        Span::styled(screen.section_title(), styles.text()),
        Span::styled(format!("  ({})", screen.visible().len()), styles.dimmed()),
    ]));
    frame.render_widget(section, chunks[3]);

    chunks[4]
}

fn render_search_box<R: Listing>(
    frame: &mut Frame,
    area: Rect,
    screen: &ListScreen<R>,
    styles: &Styles,
    editing: bool,
) {
    let search = screen.search();
    let glyph = Icon::Search.glyph();

    let line = if editing {
        let (before, after) = search.split_at_cursor();
        Line::from(vec![
            Span::styled(format!("{} {}", glyph, before), styles.input()),
            Span::styled("│", styles.accent()),
            Span::styled(after.to_string(), styles.input()),
        ])
    } else if search.query().is_empty() {
        Line::from(vec![
            Span::styled(format!("{} ", glyph), styles.dimmed()),
            Span::styled(R::PLACEHOLDER, styles.placeholder()),
        ])
    } else {
        Line::from(Span::styled(
            format!("{} {}", glyph, search.query()),
            styles.input(),
        ))
    };

    let border = if editing {
        styles.border_focused()
    } else {
        styles.border()
    };

    let search_box = Paragraph::new(line).style(styles.input()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border),
    );
    frame.render_widget(search_box, area);
}

fn render_tabs<R: Listing>(frame: &mut Frame, area: Rect, screen: &ListScreen<R>, styles: &Styles) {
    let mut spans = Vec::new();
    for (i, category) in R::categories().iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", styles.border()));
        }
        let style = if *category == screen.category() {
            styles.tab_active()
        } else {
            styles.tab_inactive()
        };
        spans.push(Span::styled(R::category_label(*category), style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Result list plus detail card, or the empty state
pub fn render_results<R: Listing + Card>(
    frame: &mut Frame,
    area: Rect,
    screen: &mut ListScreen<R>,
    styles: &Styles,
) {
    if let Some(empty) = screen.empty_state() {
        render_empty_state(frame, area, &empty, styles);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(styles.border());
    let inner = block.inner(chunks[0]);
    frame.render_widget(block, chunks[0]);

    // The viewport only moves when the selection leaves it
    let height = inner.height as usize;
    screen.list.scroll_into_view(height);
    let selected = screen.list.selected;
    let offset = screen.list.offset;

    let items: Vec<ListItem> = screen
        .visible()
        .iter()
        .enumerate()
        .skip(offset)
        .take(height)
        .map(|(i, record)| {
            let is_selected = i == selected;
            let marker = if is_selected { "▸ " } else { "  " };
            let mut line = record.row(styles);
            line.spans.insert(
                0,
                Span::styled(
                    marker,
                    if is_selected {
                        styles.accent()
                    } else {
                        styles.dimmed()
                    },
                ),
            );
            let item = ListItem::new(line);
            if is_selected {
                item.style(styles.selected())
            } else {
                item
            }
        })
        .collect();

    frame.render_widget(List::new(items).style(styles.text()), inner);

    if let Some(record) = screen.selected() {
        let card = Paragraph::new(record.details(styles))
            .wrap(Wrap { trim: true })
            .style(styles.card())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(styles.border_focused()),
            );
        frame.render_widget(card, chunks[1]);
    }
}

pub fn render_empty_state(frame: &mut Frame, area: Rect, empty: &EmptyState, styles: &Styles) {
    let content = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(empty.icon.glyph(), styles.dimmed())),
        Line::from(""),
        Line::from(Span::styled(empty.title, styles.text())),
        Line::from(Span::styled(empty.message, styles.dimmed())),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(content, area);
}

/// Placeholder body for the map view
pub fn render_map_placeholder(frame: &mut Frame, area: Rect, styles: &Styles) {
    let content = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(Icon::MapPin.glyph(), styles.dimmed())),
        Line::from(""),
        Line::from(Span::styled(MAP_PLACEHOLDER, styles.dimmed())),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(styles.border()),
    );
    frame.render_widget(content, area);
}
