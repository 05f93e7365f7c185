//! Footer line listing the keys available on the current page

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

/// `(key, description)` pairs rendered as `key description` separated by gaps.
pub struct KeyHints<'a> {
    hints: &'a [(&'a str, &'a str)],
}

impl<'a> KeyHints<'a> {
    pub fn new(hints: &'a [(&'a str, &'a str)]) -> Self {
        Self { hints }
    }
}

impl Widget for KeyHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw(" ")];
        for (i, (key, description)) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ·  ", styles::text_muted()));
            }
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(*description, styles::text_muted()));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
