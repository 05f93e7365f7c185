//! Screen layout definitions for the TUI
//!
//! Every page shares the same frame: a glass header with the app title and
//! navigation, the page body, and a one-line footer of key hints.

use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// Widest the page body grows on large terminals
pub const MAX_BODY_WIDTH: u16 = 100;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Header area (title + navigation)
    pub header: Rect,

    /// Page body, horizontally centered
    pub body: Rect,

    /// Key hint line
    pub footer: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header (glass container)
        Constraint::Min(3),    // Body
        Constraint::Length(1), // Footer
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        body: center_horizontally(chunks[1], MAX_BODY_WIDTH),
        footer: chunks[2],
    }
}

/// Clamp `area` to at most `max_width` columns, centered.
pub fn center_horizontally(area: Rect, max_width: u16) -> Rect {
    let [centered] = Layout::horizontal([Constraint::Max(max_width)])
        .flex(Flex::Center)
        .areas(area);
    centered
}

/// A centered rectangle of at most `width` x `height` inside `area`.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    center_horizontally(row, width)
}
