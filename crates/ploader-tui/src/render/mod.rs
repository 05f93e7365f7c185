//! Main render/view function (View in TEA pattern)


use ploader_app::state::{AppState, HomeFocus, Page, PreviewFocus, PreviewField};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::palette;

/// Render the complete UI (View function in TEA)
///
/// Pure: what is drawn depends only on `state`.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);
    let show_flags = state.settings.ui.show_flags;

    let nav = match state.page {
        Page::Settings(_) => widgets::NavTarget::Settings,
        _ => widgets::NavTarget::Home,
    };
    frame.render_widget(widgets::MainHeader::new(nav), areas.header);

    match &state.page {
        Page::Home(home) => frame.render_widget(
            widgets::HomeView::new(home, state.spinner_frame).show_flags(show_flags),
            areas.body,
        ),
        Page::Preview(preview) => frame.render_widget(
            widgets::PreviewView::new(preview, state.spinner_frame).show_flags(show_flags),
            areas.body,
        ),
        Page::Success(data) => frame.render_widget(
            widgets::SuccessView::new(data).show_flags(show_flags),
            areas.body,
        ),
        Page::Settings(settings) => frame.render_widget(
            widgets::SettingsView::new(settings, state.spinner_frame),
            areas.body,
        ),
    }

    frame.render_widget(widgets::KeyHints::new(key_hints(state)), areas.footer);
}

/// Keys worth advertising for the current page and focus.
fn key_hints(state: &AppState) -> &'static [(&'static str, &'static str)] {
    match &state.page {
        Page::Home(home) if home.focused_select_open() => &[
            ("↑/↓", "scorri"),
            ("Enter", "seleziona"),
            ("Esc", "chiudi"),
        ],
        Page::Home(home) => match home.focus {
            HomeFocus::Image => &[
                ("Tab", "campo successivo"),
                ("Enter", "carica percorso"),
                ("Del", "rimuovi immagine"),
                ("Ctrl+S", "analizza"),
            ],
            _ => &[
                ("Tab", "campo successivo"),
                ("Ctrl+S", "analizza"),
                ("F3", "settings"),
                ("Ctrl+C", "esci"),
            ],
        },
        Page::Preview(preview) => match preview.focus {
            PreviewFocus::Alert(_) => &[
                ("d", "ignora avviso"),
                ("Tab", "campo successivo"),
                ("Esc", "indietro"),
            ],
            PreviewFocus::Field(PreviewField::Category) => &[
                ("←/→", "scegli categoria"),
                ("Tab", "campo successivo"),
                ("Ctrl+S", "carica"),
            ],
            _ => &[
                ("Tab", "campo successivo"),
                ("Ctrl+S", "carica"),
                ("Esc", "indietro"),
            ],
        },
        Page::Success(_) => &[
            ("Enter", "nuovo prodotto"),
            ("o", "apri link"),
            ("q", "esci"),
        ],
        Page::Settings(_) => &[("Esc", "home"), ("q", "esci")],
    }
}
