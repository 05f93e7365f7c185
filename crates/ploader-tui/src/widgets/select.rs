//! Select field and its option popup

use ploader_app::select::{SelectOption, SelectState};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use crate::theme::styles;

/// Closed select: label in the border, current option inside.
pub struct SelectField<'a, T> {
    label: &'a str,
    state: &'a SelectState<T>,
    focused: bool,
    show_flags: bool,
}

impl<'a, T: Clone + PartialEq> SelectField<'a, T> {
    pub fn new(label: &'a str, state: &'a SelectState<T>) -> Self {
        Self {
            label,
            state,
            focused: false,
            show_flags: true,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn show_flags(mut self, show_flags: bool) -> Self {
        self.show_flags = show_flags;
        self
    }
}

impl<T: Clone + PartialEq> Widget for SelectField<'_, T> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused).title(Span::styled(
            format!(" {} ", self.label),
            if self.focused {
                styles::accent_bold()
            } else {
                styles::label()
            },
        ));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width < 2 {
            return;
        }

        let mut spans = match self.state.selected_option() {
            Some(option) => option_spans(option, self.show_flags, styles::text_primary()),
            None => vec![Span::styled("Seleziona...", styles::text_muted())],
        };
        spans.insert(0, Span::raw(" "));
        Paragraph::new(Line::from(spans)).render(inner, buf);

        let arrow = if self.state.is_open() { "▴" } else { "▾" };
        let arrow_area = Rect {
            x: inner.x + inner.width - 2,
            width: 2,
            height: 1,
            ..inner
        };
        Paragraph::new(Span::styled(arrow, styles::accent())).render(arrow_area, buf);
    }
}

/// Open option list, drawn over whatever lies below the field.
pub struct SelectPopup<'a, T> {
    state: &'a SelectState<T>,
    show_flags: bool,
}

impl<'a, T: Clone + PartialEq> SelectPopup<'a, T> {
    pub fn new(state: &'a SelectState<T>) -> Self {
        Self {
            state,
            show_flags: true,
        }
    }

    pub fn show_flags(mut self, show_flags: bool) -> Self {
        self.show_flags = show_flags;
        self
    }

    /// Area for the popup directly under `field`, clipped to `bounds`.
    pub fn area_below(&self, field: Rect, bounds: Rect) -> Rect {
        let y = field.y + field.height;
        let wanted = self.state.options().len() as u16 + 2;
        let available = (bounds.y + bounds.height).saturating_sub(y);
        Rect {
            x: field.x,
            y,
            width: field.width,
            height: wanted.min(available),
        }
    }
}

impl<T: Clone + PartialEq> Widget for SelectPopup<'_, T> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let block = styles::popup_block();
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let visible = inner.height as usize;
        let highlighted = self.state.highlighted();
        // Keep the highlighted option on screen
        let offset = (highlighted + 1).saturating_sub(visible);

        let lines: Vec<Line> = self
            .state
            .options()
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .map(|(i, option)| {
                let current = &option.value == self.state.value();
                let marker = if current { "✓ " } else { "  " };
                let base = if i == highlighted {
                    styles::focused_selected()
                } else {
                    styles::text_primary()
                };
                let mut spans = vec![Span::styled(format!(" {marker}"), base)];
                spans.extend(option_spans(option, self.show_flags, base));
                Line::from(spans).style(base)
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

/// `flag label (sublabel)` for one option.
fn option_spans<T>(
    option: &SelectOption<T>,
    show_flags: bool,
    style: ratatui::style::Style,
) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    if let (true, Some(flag)) = (show_flags, option.flag) {
        spans.push(Span::styled(flag, style));
        spans.push(Span::styled(" ", style));
    }
    spans.push(Span::styled(option.label.clone(), style));
    if let Some(sublabel) = &option.sublabel {
        spans.push(Span::styled(
            format!(" ({sublabel})"),
            style.patch(styles::text_muted()),
        ));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use ploader_app::select::SelectAction;

    fn countries() -> SelectState<&'static str> {
        SelectState::new(
            vec![
                SelectOption::new("Italia", "Italia")
                    .with_sublabel("amazon.it")
                    .with_flag("🇮🇹"),
                SelectOption::new("Spagna", "Spagna").with_sublabel("amazon.es"),
                SelectOption::new("Germania", "Germania").with_sublabel("amazon.de"),
            ],
            "Italia",
        )
    }

    #[test]
    fn test_field_renders_current_option() {
        let state = countries();
        let mut term = TestTerminal::new();
        term.render_widget(
            SelectField::new("Mercato di destinazione", &state).show_flags(false),
            Rect::new(0, 0, 50, 3),
        );

        assert!(term.line_contains(0, "Mercato di destinazione"));
        assert!(term.line_contains(1, "Italia (amazon.it)"));
        assert!(term.buffer_contains("▾"));
    }

    #[test]
    fn test_popup_lists_every_option() {
        let mut state = countries();
        state.open();
        let mut term = TestTerminal::new();
        let popup = SelectPopup::new(&state).show_flags(false);
        let area = popup.area_below(Rect::new(0, 0, 50, 3), term.area());
        assert_eq!(area, Rect::new(0, 3, 50, 5));

        term.render_widget(popup, area);
        assert!(term.buffer_contains("✓ Italia"));
        assert!(term.buffer_contains("Spagna (amazon.es)"));
        assert!(term.buffer_contains("Germania (amazon.de)"));
    }

    #[test]
    fn test_popup_scrolls_to_highlighted_option() {
        let mut state = countries();
        state.open();
        state.apply(SelectAction::Next);
        state.apply(SelectAction::Next);
        let mut term = TestTerminal::new();

        // Room for a single option row
        term.render_widget(SelectPopup::new(&state), Rect::new(0, 0, 50, 3));
        assert!(term.buffer_contains("Germania"));
        assert!(!term.buffer_contains("Italia"));
    }

    #[test]
    fn test_popup_area_clipped_to_bounds() {
        let state = countries();
        let popup = SelectPopup::new(&state);
        let area = popup.area_below(Rect::new(0, 0, 50, 3), Rect::new(0, 0, 80, 6));
        assert_eq!(area.height, 3);
    }
}
