//! Analyze form: client, marketplace, description and image

use ploader_app::state::{HomeFocus, HomeState};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::styles;

use super::{ImageUpload, SelectField, SelectPopup, Spinner, TextInput};

const PROMPT_PLACEHOLDER: &str = "Incolla qui le informazioni sul prodotto in modo discorsivo. \
Includi nome, codice EAN o ASIN, prezzo e la categoria desiderata.";

pub struct HomeView<'a> {
    home: &'a HomeState,
    spinner_frame: usize,
    show_flags: bool,
}

impl<'a> HomeView<'a> {
    pub fn new(home: &'a HomeState, spinner_frame: usize) -> Self {
        Self {
            home,
            spinner_frame,
            show_flags: true,
        }
    }

    pub fn show_flags(mut self, show_flags: bool) -> Self {
        self.show_flags = show_flags;
        self
    }
}

impl Widget for HomeView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let home = self.home;
        let error_height = if home.error.is_some() { 3 } else { 0 };
        let [title, selects, prompt, image, error, submit] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(5),
            Constraint::Length(error_height),
            Constraint::Length(3),
        ])
        .areas(area);

        Paragraph::new(Span::styled(" Carica un nuovo prodotto", styles::accent_bold()))
            .render(title, buf);

        let [client_area, marketplace_area] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(selects);

        SelectField::new("Cliente", &home.client)
            .focused(home.focus == HomeFocus::Client)
            .render(client_area, buf);
        SelectField::new("Mercato di destinazione", &home.marketplace)
            .focused(home.focus == HomeFocus::Marketplace)
            .show_flags(self.show_flags)
            .render(marketplace_area, buf);

        TextInput::new("Descrizione del prodotto", &home.prompt)
            .placeholder(PROMPT_PLACEHOLDER)
            .focused(home.focus == HomeFocus::Prompt)
            .render(prompt, buf);

        ImageUpload::new(&home.image_path, home.image.as_ref())
            .loading(home.image_request.is_some())
            .focused(home.focus == HomeFocus::Image)
            .render(image, buf);

        if let Some(message) = &home.error {
            render_error(message, error, buf);
        }

        if home.is_loading() {
            let message = super::spinner::analyzing_message(home.analyzing_marketplace().country);
            Spinner::new(&message, self.spinner_frame).render(submit, buf);
        } else {
            render_button(
                "Analizza Prodotto →",
                home.can_submit(),
                home.focus == HomeFocus::Submit,
                submit,
                buf,
            );
        }

        // Open lists overlay the fields below them
        if home.client.is_open() {
            let popup = SelectPopup::new(&home.client);
            let popup_area = popup.area_below(client_area, area);
            popup.render(popup_area, buf);
        } else if home.marketplace.is_open() {
            let popup = SelectPopup::new(&home.marketplace).show_flags(self.show_flags);
            let popup_area = popup.area_below(marketplace_area, area);
            popup.render(popup_area, buf);
        }
    }
}

/// Error box with the dismiss key.
pub fn render_error(message: &str, area: Rect, buf: &mut Buffer) {
    let block = styles::glass_block(false)
        .border_style(styles::status_red())
        .title_bottom(
            Line::from(vec![
                Span::styled(" Esc", styles::keybinding()),
                Span::styled(" chiudi ", styles::text_muted()),
            ])
            .right_aligned(),
        );
    Paragraph::new(Span::styled(format!(" {message}"), styles::status_red()))
        .wrap(Wrap { trim: true })
        .block(block)
        .render(area, buf);
}

/// Full-width button; disabled buttons are dimmed.
pub fn render_button(label: &str, enabled: bool, focused: bool, area: Rect, buf: &mut Buffer) {
    let style = styles::button(enabled, focused);
    Paragraph::new(Span::styled(label, style))
        .style(style)
        .alignment(Alignment::Center)
        .block(styles::glass_block(focused))
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_image, TestTerminal};
    use ploader_app::state::{PendingAnalyze, RequestId};
    use ploader_core::find_marketplace;

    fn render(home: &HomeState) -> TestTerminal {
        let mut term = TestTerminal::new();
        term.render_widget(HomeView::new(home, 0), Rect::new(0, 0, 80, 22));
        term
    }

    #[test]
    fn test_default_form() {
        let home = HomeState::default();
        let term = render(&home);

        assert!(term.buffer_contains("Carica un nuovo prodotto"));
        assert!(term.buffer_contains("Cliente"));
        assert!(term.buffer_contains("A.T.S. GRAFICA"));
        assert!(term.buffer_contains("Mercato di destinazione"));
        assert!(term.buffer_contains("Italia (amazon.it)"));
        assert!(term.buffer_contains("Descrizione del prodotto"));
        assert!(term.buffer_contains("Analizza Prodotto"));
    }

    #[test]
    fn test_spinner_replaces_button_while_analyzing() {
        let mut home = HomeState::default();
        home.prompt = "Mouse".to_string();
        home.image = Some(test_image());
        home.pending = Some(PendingAnalyze {
            request_id: RequestId(1),
            client: home.selected_client().to_string(),
            marketplace: home.selected_marketplace(),
            image: test_image(),
        });
        let term = render(&home);

        assert!(term.buffer_contains("Claude sta analizzando il prodotto per il mercato Italia..."));
        assert!(!term.buffer_contains("Analizza Prodotto"));
    }

    #[test]
    fn test_spinner_names_submitted_marketplace() {
        let mut home = HomeState::default();
        home.prompt = "Mouse".to_string();
        home.image = Some(test_image());
        home.pending = Some(PendingAnalyze {
            request_id: RequestId(1),
            client: home.selected_client().to_string(),
            marketplace: find_marketplace("Germania").expect("known marketplace"),
            image: test_image(),
        });
        let term = render(&home);

        assert!(term.buffer_contains("mercato Germania..."));
    }

    #[test]
    fn test_error_is_shown() {
        let mut home = HomeState::default();
        home.error = Some("Errore durante l'analisi: 500".to_string());
        let term = render(&home);

        assert!(term.buffer_contains("Errore durante l'analisi: 500"));
        assert!(term.buffer_contains("Esc chiudi"));
    }

    #[test]
    fn test_open_client_list_overlays_form() {
        let mut home = HomeState::default();
        home.client.open();
        let term = render(&home);

        assert!(term.buffer_contains("✓ A.T.S. GRAFICA"));
        assert!(term.buffer_contains("Calzificiopiemonte"));
    }

    #[test]
    fn test_prompt_text_rendered() {
        let mut home = HomeState::default();
        home.prompt = "Mouse wireless ergonomico".to_string();
        let term = render(&home);

        assert!(term.buffer_contains("Mouse wireless ergonomico"));
        assert!(!term.buffer_contains("Incolla qui"));
    }
}
