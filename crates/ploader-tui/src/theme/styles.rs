//! Semantic style builders.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn label() -> Style {
    Style::default()
        .fg(palette::TEXT_SECONDARY)
        .add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Status styles ---
pub fn status_green() -> Style {
    Style::default().fg(palette::STATUS_GREEN)
}

pub fn status_red() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

pub fn status_yellow() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

pub fn status_blue() -> Style {
    Style::default().fg(palette::STATUS_BLUE)
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

/// "Black on Cyan" - used for focused+selected items across widgets
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Input text, highlighted while it holds focus.
pub fn input(focused: bool) -> Style {
    let style = Style::default()
        .fg(palette::TEXT_PRIMARY)
        .bg(palette::INPUT_BG);
    if focused {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

/// Button face: primary when enabled, dimmed when disabled, accented on focus.
pub fn button(enabled: bool, focused: bool) -> Style {
    match (enabled, focused) {
        (_, true) => focused_selected(),
        (true, false) => Style::default()
            .fg(palette::TEXT_PRIMARY)
            .bg(palette::BUTTON_PRIMARY_BG)
            .add_modifier(Modifier::BOLD),
        (false, false) => Style::default()
            .fg(palette::TEXT_MUTED)
            .bg(palette::BUTTON_DISABLED_BG),
    }
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

pub fn popup_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_active())
        .style(Style::default().bg(palette::POPUP_BG))
}

/// Alert severity style keyed by the backend's `type` string.
pub fn alert_style(kind: &str) -> Style {
    match kind {
        "error" => status_red(),
        "info" => status_blue(),
        "success" => status_green(),
        _ => status_yellow(),
    }
}

/// Connection indicator for the settings page.
///
/// Returns `(icon_char, label, Style)`.
pub fn connection_indicator(connected: bool) -> (&'static str, &'static str, Style) {
    if connected {
        (
            "●",
            "Collegato",
            Style::default()
                .fg(palette::STATUS_GREEN)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        ("○", "Non collegato", Style::default().fg(palette::STATUS_RED))
    }
}
