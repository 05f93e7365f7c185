//! Client authorization status page

use ploader_app::state::SettingsState;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

use super::Spinner;

pub const LOADING_MESSAGE: &str = "Caricamento stato clienti...";

pub struct SettingsView<'a> {
    settings: &'a SettingsState,
    spinner_frame: usize,
}

impl<'a> SettingsView<'a> {
    pub fn new(settings: &'a SettingsState, spinner_frame: usize) -> Self {
        Self {
            settings,
            spinner_frame,
        }
    }
}

impl Widget for SettingsView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let warning_height = if self.settings.warning.is_some() { 1 } else { 0 };
        let [title, warning, list] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(warning_height),
            Constraint::Min(3),
        ])
        .areas(area);

        Paragraph::new(vec![
            Line::from(Span::styled(" Settings", styles::accent_bold())),
            Line::from(Span::styled(
                " Stato di autorizzazione dei clienti",
                styles::text_muted(),
            )),
        ])
        .render(title, buf);

        if let Some(message) = &self.settings.warning {
            Paragraph::new(Span::styled(format!(" ⚠ {message}"), styles::status_yellow()))
                .render(warning, buf);
        }

        let Some(statuses) = &self.settings.statuses else {
            let [spinner_area, _] =
                Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(list);
            Spinner::new(LOADING_MESSAGE, self.spinner_frame).render(spinner_area, buf);
            return;
        };

        let block = styles::glass_block(false).title(Span::styled(" Clienti collegati ", styles::label()));
        let name_width = statuses
            .iter()
            .map(|s| s.name.chars().count())
            .max()
            .unwrap_or(0);
        let lines: Vec<Line> = statuses
            .iter()
            .map(|status| {
                let (icon, label, style) = styles::connection_indicator(status.connected);
                Line::from(vec![
                    Span::styled(format!(" {:<name_width$}  ", status.name), styles::text_primary()),
                    Span::styled(icon, style),
                    Span::raw(" "),
                    Span::styled(label, style),
                ])
            })
            .collect();

        Paragraph::new(lines).block(block).render(list, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use ploader_core::{client_statuses_all_disconnected, ClientStatus};

    fn render(settings: &SettingsState) -> TestTerminal {
        let mut term = TestTerminal::tall();
        let area = term.area();
        term.render_widget(SettingsView::new(settings, 0), area);
        term
    }

    #[test]
    fn test_loading_message() {
        let term = render(&SettingsState::default());
        assert!(term.buffer_contains("Caricamento stato clienti..."));
    }

    #[test]
    fn test_statuses_listed() {
        let settings = SettingsState {
            statuses: Some(vec![
                ClientStatus {
                    name: "PURANOVA".to_string(),
                    connected: true,
                },
                ClientStatus {
                    name: "VINO COM".to_string(),
                    connected: false,
                },
            ]),
            ..Default::default()
        };
        let term = render(&settings);

        let connected = term.find_line("PURANOVA").expect("PURANOVA row");
        assert!(term.line_contains(connected, "● Collegato"));
        let disconnected = term.find_line("VINO COM").expect("VINO COM row");
        assert!(term.line_contains(disconnected, "○ Non collegato"));
        assert!(!term.buffer_contains("Caricamento stato clienti..."));
    }

    #[test]
    fn test_fallback_with_warning() {
        let settings = SettingsState {
            statuses: Some(client_statuses_all_disconnected()),
            warning: Some("Impossibile recuperare lo stato dei clienti".to_string()),
            ..Default::default()
        };
        let term = render(&settings);

        assert!(term.buffer_contains("Impossibile recuperare lo stato dei clienti"));
        assert!(term.buffer_contains("A.T.S. GRAFICA"));
        assert!(term.buffer_contains("VINO COM"));
        assert!(!term.buffer_contains("● Collegato"));
    }
}
