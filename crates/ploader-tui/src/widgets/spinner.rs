//! Busy indicator shown in place of a view's action buttons

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Animated spinner followed by a message, centered in a glass block.
pub struct Spinner<'a> {
    message: &'a str,
    frame: usize,
}

impl<'a> Spinner<'a> {
    pub fn new(message: &'a str, frame: usize) -> Self {
        Self { message, frame }
    }

    pub fn glyph(frame: usize) -> &'static str {
        FRAMES[frame % FRAMES.len()]
    }
}

impl Widget for Spinner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled(Self::glyph(self.frame), styles::accent_bold()),
            Span::raw(" "),
            Span::styled(self.message, styles::text_secondary()),
        ]);
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .block(styles::glass_block(false))
            .render(area, buf);
    }
}

/// Spinner text while the analyze call is in flight.
pub fn analyzing_message(country: &str) -> String {
    format!("Claude sta analizzando il prodotto per il mercato {country}...")
}

pub const UPLOADING_MESSAGE: &str = "Caricamento in corso su Amazon...";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_glyph_cycles() {
        assert_eq!(Spinner::glyph(0), Spinner::glyph(FRAMES.len()));
        assert_ne!(Spinner::glyph(0), Spinner::glyph(1));
    }

    #[test]
    fn test_spinner_renders_message() {
        let mut term = TestTerminal::new();
        let message = analyzing_message("Germania");
        term.render_widget(Spinner::new(&message, 3), Rect::new(0, 0, 80, 3));

        assert!(term.buffer_contains("Claude sta analizzando il prodotto per il mercato Germania..."));
        assert!(term.buffer_contains(Spinner::glyph(3)));
    }
}
