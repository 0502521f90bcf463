//! Record cards
//!
//! Every record renders two ways: a one-line row for the result list and a
//! multi-line card for the detail pane.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::icons::Icon;
use crate::models::{Client, JudicialHouse, LegalProcess, TrackingItem};
use crate::ui::theme::Styles;

/// Records that can be drawn in a list screen
pub trait Card {
    /// Compact list row (without the selection marker)
    fn row(&self, styles: &Styles) -> Line<'static>;

    /// Full card for the detail pane
    fn details(&self, styles: &Styles) -> Vec<Line<'static>>;
}

fn labeled(icon: Icon, label: &str, value: &str, styles: &Styles) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{} ", icon.glyph()), styles.dimmed()),
        Span::styled(format!("{} ", label), styles.dimmed()),
        Span::styled(value.to_string(), styles.text()),
    ])
}

fn heading(text: &str, styles: &Styles) -> Line<'static> {
    Line::from(Span::styled(text.to_string(), styles.title()))
}

impl Card for Client {
    fn row(&self, styles: &Styles) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("({}) ", self.initial()), styles.accent()),
            Span::styled(self.name.clone(), styles.text()),
            Span::raw("  "),
            Span::styled(self.email.clone(), styles.dimmed()),
        ])
    }

    fn details(&self, styles: &Styles) -> Vec<Line<'static>> {
        vec![
            heading(&self.name, styles),
            Line::from(Span::styled(format!("ID: {}", self.short_id()), styles.dimmed())),
            Line::from(""),
            labeled(Icon::Phone, "", &self.phone, styles),
            labeled(Icon::Mail, "", &self.email, styles),
            Line::from(""),
            Line::from(vec![
                Span::styled(format!("{} ", Icon::Briefcase.glyph()), styles.dimmed()),
                Span::styled(self.case_count.to_string(), styles.title()),
                Span::styled(" Casos asociados", styles.dimmed()),
            ]),
            labeled(Icon::Calendar, "Último contacto:", &self.last_contact, styles),
        ]
    }
}

impl Card for LegalProcess {
    fn row(&self, styles: &Styles) -> Line<'static> {
        let color = styles.process_status_color(self.status);
        Line::from(vec![
            Span::styled(format!(" {} ", self.status.label()), styles.chip(color)),
            Span::raw(" "),
            Span::styled(self.title.clone(), styles.text()),
            Span::raw("  "),
            Span::styled(self.case_number.clone(), styles.dimmed()),
        ])
    }

    fn details(&self, styles: &Styles) -> Vec<Line<'static>> {
        let color = styles.process_status_color(self.status);
        let mut lines = vec![
            heading(&self.title, styles),
            Line::from(vec![
                Span::styled(format!(" {} ", self.status.label()), styles.chip(color)),
                Span::raw(" "),
                Span::styled(self.kind.clone(), styles.secondary()),
            ]),
            Line::from(""),
            labeled(Icon::ClipboardList, "", &self.case_number, styles),
            labeled(Icon::User, "", &self.client, styles),
            Line::from(""),
            labeled(Icon::Calendar, "Inicio:", &self.start_date, styles),
        ];
        if let Some(hearing) = &self.next_hearing {
            lines.push(Line::from(vec![
                Span::styled(format!("{} ", Icon::Clock.glyph()), styles.dimmed()),
                Span::styled("Próxima audiencia: ", styles.dimmed()),
                Span::styled(hearing.clone(), styles.title()),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Última actualización: {}", self.last_update),
            styles.dimmed(),
        )));
        lines
    }
}

impl Card for TrackingItem {
    fn row(&self, styles: &Styles) -> Line<'static> {
        let color = styles.tracking_status_color(self.status);
        Line::from(vec![
            Span::styled("▌", Style::default().fg(color)),
            Span::raw(" "),
            Span::styled(self.title.clone(), styles.text()),
            Span::raw("  "),
            Span::styled(self.due_date.clone(), styles.dimmed()),
        ])
    }

    fn details(&self, styles: &Styles) -> Vec<Line<'static>> {
        let color = styles.tracking_status_color(self.status);
        vec![
            heading(&self.title, styles),
            Line::from(vec![
                Span::styled(format!(" {} ", self.status.label()), styles.chip(color)),
                Span::raw(" "),
                Span::styled(self.case_number.clone(), styles.dimmed()),
            ]),
            Line::from(""),
            Line::from(Span::styled(self.description.clone(), styles.text())),
            Line::from(""),
            labeled(Icon::Calendar, "Vence:", &self.due_date, styles),
        ]
    }
}

impl Card for JudicialHouse {
    fn row(&self, styles: &Styles) -> Line<'static> {
        Line::from(vec![
            Span::styled(self.name.clone(), styles.text()),
            Span::raw("  "),
            Span::styled(self.city.clone(), styles.dimmed()),
        ])
    }

    fn details(&self, styles: &Styles) -> Vec<Line<'static>> {
        vec![
            heading(&self.name, styles),
            Line::from(Span::styled(
                self.kind.clone(),
                styles.secondary().add_modifier(Modifier::ITALIC),
            )),
            Line::from(""),
            labeled(Icon::MapPin, "", &format!("{}, {}", self.address, self.city), styles),
            labeled(Icon::Phone, "", &self.phone, styles),
            labeled(Icon::Clock, "", &self.hours, styles),
            labeled(Icon::Globe, "", &self.website, styles),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Dataset;

    fn text(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_client_card() {
        let client = &Dataset::mock().clients[0];
        let out = text(&client.details(&Styles::default()));
        assert!(out.contains("Maria Garcia"));
        assert!(out.contains("ID: 3f1a9c2e"));
        assert!(out.contains("3 Casos asociados"));
        assert!(out.contains("Último contacto: 12/05/2024"));
    }

    #[test]
    fn test_process_card_hearing_is_optional() {
        let data = Dataset::mock();
        let with = text(&data.processes[0].details(&Styles::default()));
        assert!(with.contains("Próxima audiencia: 20/06/2024"));

        let without = text(&data.processes[2].details(&Styles::default()));
        assert!(!without.contains("Próxima audiencia"));
        assert!(without.contains("Inicio: 20/02/2024"));
    }

    #[test]
    fn test_row_uses_status_color() {
        let styles = Styles::default();
        let urgent = &Dataset::mock().processes[1];
        let row = urgent.row(&styles);
        assert_eq!(row.spans[0].style.bg, Some(styles.palette.error));
        assert_eq!(row.spans[0].content, " Urgente ");
    }
}
