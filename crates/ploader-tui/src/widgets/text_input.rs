//! Labeled text field
//!
//! Text is wrapped per character so the visible rows can be computed
//! exactly; a focused field keeps its last rows (where the cursor sits) in
//! view.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

use crate::theme::styles;

const CURSOR: &str = "▏";

pub struct TextInput<'a> {
    label: &'a str,
    value: &'a str,
    placeholder: &'a str,
    focused: bool,
    /// Right-aligned note in the top border, e.g. a length counter
    note: Option<Span<'a>>,
}

impl<'a> TextInput<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            placeholder: "",
            focused: false,
            note: None,
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn note(mut self, note: Span<'a>) -> Self {
        self.note = Some(note);
        self
    }
}

impl Widget for TextInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = styles::glass_block(self.focused).title(Span::styled(
            format!(" {} ", self.label),
            if self.focused {
                styles::accent_bold()
            } else {
                styles::label()
            },
        ));
        if let Some(note) = self.note {
            block = block.title_top(Line::from(vec![note, Span::raw(" ")]).right_aligned());
        }
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.value.is_empty() {
            let mut spans = Vec::new();
            if self.focused {
                spans.push(Span::styled(CURSOR, styles::accent()));
            }
            spans.push(Span::styled(self.placeholder, styles::text_muted()));
            Paragraph::new(Line::from(spans))
                .wrap(ratatui::widgets::Wrap { trim: true })
                .render(inner, buf);
            return;
        }

        let rows = wrap_chars(self.value, inner.width as usize);
        let visible = inner.height as usize;
        let skip = if self.focused {
            rows.len().saturating_sub(visible)
        } else {
            0
        };

        let style = styles::input(self.focused);
        let last = rows.len() - 1;
        let lines: Vec<Line> = rows
            .into_iter()
            .enumerate()
            .skip(skip)
            .take(visible)
            .map(|(i, row)| {
                let mut spans = vec![Span::styled(row, style)];
                if self.focused && i == last {
                    spans.push(Span::styled(CURSOR, styles::accent()));
                }
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines)
            .style(Style::default())
            .render(inner, buf);
    }
}

/// Split `text` into rows of at most `width` columns, honoring newlines.
///
/// One column is kept free on the last row for the cursor.
pub fn wrap_chars(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    for line in text.split('\n') {
        let mut row = String::new();
        let mut row_width = 0;
        for c in line.chars() {
            let w = c.width().unwrap_or(0);
            if row_width + w > width {
                rows.push(std::mem::take(&mut row));
                row_width = 0;
            }
            row.push(c);
            row_width += w;
        }
        rows.push(row);
    }
    // Room for the cursor at the end of the text
    if rows.last().is_some_and(|r| r.chars().map(|c| c.width().unwrap_or(0)).sum::<usize>() >= width) {
        rows.push(String::new());
    }
    rows
}
