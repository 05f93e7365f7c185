//! Dismissible advisory banner from the analysis response

use ploader_core::Alert;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::styles;

pub struct AlertBanner<'a> {
    alert: &'a Alert,
    focused: bool,
}

impl<'a> AlertBanner<'a> {
    pub fn new(alert: &'a Alert) -> Self {
        Self {
            alert,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for AlertBanner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = styles::alert_style(&self.alert.kind);
        let block = styles::glass_block(self.focused).border_style(if self.focused {
            styles::border_active()
        } else {
            style
        });
        let block = if self.focused {
            block.title_bottom(
                Line::from(vec![
                    Span::styled(" d", styles::keybinding()),
                    Span::styled(" ignora ", styles::text_muted()),
                ])
                .right_aligned(),
            )
        } else {
            block
        };

        let line = Line::from(vec![
            Span::styled(" ⚠ ", style),
            Span::styled(self.alert.message.as_str(), style),
        ]);
        Paragraph::new(line)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}
