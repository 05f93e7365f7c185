//! Preview/edit step
//!
//! The form is laid out as a column of rows. When it is taller than the
//! screen, the view scrolls just far enough to keep the focused row fully
//! visible; rows cut by the viewport edge are not drawn.

use ploader_app::state::{
    CategoryChoice, CategoryField, PreviewField, PreviewFocus, PreviewState,
};
use ploader_core::TITLE_MAX_CHARS;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

use super::home::{render_button, render_error};
use super::{AlertBanner, Spinner, TextInput};

/// One horizontal band of the preview form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Row {
    Badges,
    Alert(usize),
    Image,
    Field(PreviewField),
    BulletsHeader,
    Bullet(usize),
    Error,
    Actions,
}

impl Row {
    fn height(self, preview: &PreviewState) -> u16 {
        match self {
            Row::Badges | Row::Image | Row::BulletsHeader => 1,
            Row::Field(PreviewField::Description) => 6,
            Row::Field(PreviewField::Category) => match preview.category {
                CategoryField::Choice { .. } => 4,
                CategoryField::Single => 3,
            },
            Row::Alert(_) | Row::Field(_) | Row::Bullet(_) | Row::Error | Row::Actions => 3,
        }
    }

    /// Whether this row shows the focus target.
    fn holds(self, focus: PreviewFocus) -> bool {
        match (self, focus) {
            (Row::Alert(a), PreviewFocus::Alert(b)) | (Row::Bullet(a), PreviewFocus::Bullet(b)) => {
                a == b
            }
            (Row::Field(a), PreviewFocus::Field(b)) => a == b,
            (Row::Actions, PreviewFocus::Submit) => true,
            _ => false,
        }
    }
}

pub struct PreviewView<'a> {
    preview: &'a PreviewState,
    spinner_frame: usize,
    show_flags: bool,
}

impl<'a> PreviewView<'a> {
    pub fn new(preview: &'a PreviewState, spinner_frame: usize) -> Self {
        Self {
            preview,
            spinner_frame,
            show_flags: true,
        }
    }

    pub fn show_flags(mut self, show_flags: bool) -> Self {
        self.show_flags = show_flags;
        self
    }

    fn rows(&self) -> Vec<Row> {
        let preview = self.preview;
        let mut rows = vec![Row::Badges];
        rows.extend((0..preview.alerts.len()).map(Row::Alert));
        rows.push(Row::Image);
        rows.extend(PreviewField::ALL.iter().copied().map(Row::Field));
        if !preview.product.bullet_points.is_empty() {
            rows.push(Row::BulletsHeader);
            rows.extend((0..preview.product.bullet_points.len()).map(Row::Bullet));
        }
        if preview.error.is_some() {
            rows.push(Row::Error);
        }
        rows.push(Row::Actions);
        rows
    }

    fn render_row(&self, row: Row, area: Rect, buf: &mut Buffer) {
        let preview = self.preview;
        let focus = preview.focus;
        match row {
            Row::Badges => self.render_badges(area, buf),
            Row::Alert(index) => {
                if let Some(alert) = preview.alerts.get(index) {
                    AlertBanner::new(alert)
                        .focused(focus == PreviewFocus::Alert(index))
                        .render(area, buf);
                }
            }
            Row::Image => {
                let line = Line::from(vec![
                    Span::styled(" Immagine: ", styles::label()),
                    Span::styled(preview.image.file_name.as_str(), styles::text_primary()),
                    Span::styled(
                        format!(
                            "  {} · {} · anteprima {}",
                            preview.image.size_label(),
                            preview.image.preview_media_type(),
                            preview.image.preview_size_label()
                        ),
                        styles::text_muted(),
                    ),
                ]);
                Paragraph::new(line).render(area, buf);
            }
            Row::Field(PreviewField::Category) => self.render_category(area, buf),
            Row::Field(field) => {
                let focused = focus == PreviewFocus::Field(field);
                let value = match field {
                    PreviewField::Title => preview.product.title.as_str(),
                    PreviewField::Brand => preview.product.brand.as_str(),
                    PreviewField::Ean => preview.product.ean.as_str(),
                    PreviewField::Price => preview.price_input.as_str(),
                    PreviewField::Description => preview.product.description.as_str(),
                    PreviewField::Category => preview.product.category_suggested.as_str(),
                };
                let mut input = TextInput::new(field.label(), value).focused(focused);
                if field == PreviewField::Title {
                    input = input.note(title_counter(preview));
                }
                input.render(area, buf);
            }
            Row::BulletsHeader => {
                Paragraph::new(Span::styled(" Bullet Points", styles::label())).render(area, buf);
            }
            Row::Bullet(index) => {
                let text = preview
                    .product
                    .bullet_points
                    .get(index)
                    .map(String::as_str)
                    .unwrap_or_default();
                let label = format!("Punto {}", index + 1);
                TextInput::new(&label, text)
                    .focused(focus == PreviewFocus::Bullet(index))
                    .render(area, buf);
            }
            Row::Error => {
                if let Some(message) = &preview.error {
                    render_error(message, area, buf);
                }
            }
            Row::Actions => self.render_actions(area, buf),
        }
    }

    fn render_badges(&self, area: Rect, buf: &mut Buffer) {
        let preview = self.preview;
        let marketplace = preview.marketplace;
        let mut market = String::new();
        if self.show_flags {
            market.push_str(marketplace.flag);
            market.push(' ');
        }
        market.push_str(&format!(
            "Mercato: {} — Ottimizzato in {}",
            marketplace.country, marketplace.language
        ));

        let line = Line::from(vec![
            Span::raw(" "),
            Span::styled(format!("Cliente: {}", preview.client), styles::accent_bold()),
            Span::styled("  │  ", styles::text_muted()),
            Span::styled(market, styles::text_secondary()),
        ]);
        Paragraph::new(line).render(area, buf);
    }

    fn render_category(&self, area: Rect, buf: &mut Buffer) {
        let preview = self.preview;
        let focused = preview.focus == PreviewFocus::Field(PreviewField::Category);
        match preview.category {
            CategoryField::Single => {
                TextInput::new(
                    PreviewField::Category.label(),
                    &preview.product.category_suggested,
                )
                .focused(focused)
                .render(area, buf);
            }
            CategoryField::Choice { selected } => {
                let block = styles::glass_block(focused).title(Span::styled(
                    format!(" {} ", PreviewField::Category.label()),
                    if focused {
                        styles::accent_bold()
                    } else {
                        styles::label()
                    },
                ));
                let option = |choice: CategoryChoice, value: &'a str, tag: &'static str| {
                    let chosen = selected == choice;
                    let style = if chosen {
                        styles::text_primary()
                    } else {
                        styles::text_muted()
                    };
                    let tag_style = match choice {
                        CategoryChoice::Suggested => styles::accent(),
                        CategoryChoice::User => styles::text_muted(),
                    };
                    Line::from(vec![
                        Span::styled(if chosen { " (•) " } else { " ( ) " }, styles::accent()),
                        Span::styled(value, style),
                        Span::raw(" "),
                        Span::styled(tag, tag_style),
                    ])
                };
                let lines = vec![
                    option(
                        CategoryChoice::Suggested,
                        preview.product.category_suggested.as_str(),
                        "(Suggerita AI)",
                    ),
                    option(
                        CategoryChoice::User,
                        preview.product.category_user.as_str(),
                        "(Originale)",
                    ),
                ];
                Paragraph::new(lines).block(block).render(area, buf);
            }
        }
    }

    fn render_actions(&self, area: Rect, buf: &mut Buffer) {
        let preview = self.preview;
        if preview.is_loading() {
            Spinner::new(super::spinner::UPLOADING_MESSAGE, self.spinner_frame).render(area, buf);
            return;
        }

        let [back, submit] =
            Layout::horizontal([Constraint::Percentage(35), Constraint::Percentage(65)])
                .areas(area);
        render_button("← Torna indietro (Esc)", true, false, back, buf);
        render_button(
            "Conferma e Carica su Amazon",
            true,
            preview.focus == PreviewFocus::Submit,
            submit,
            buf,
        );
    }
}

/// `<n>/250`, flagged red past the limit.
fn title_counter(preview: &PreviewState) -> Span<'static> {
    let len = preview.product.title_len();
    let style = if preview.product.title_too_long() {
        styles::status_red()
    } else {
        styles::text_muted()
    };
    Span::styled(format!("{len}/{TITLE_MAX_CHARS}"), style)
}

impl Widget for PreviewView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let rows = self.rows();
        let mut tops = Vec::with_capacity(rows.len());
        let mut y = 0u16;
        for row in &rows {
            tops.push(y);
            y = y.saturating_add(row.height(self.preview));
        }

        let focused_bottom = rows
            .iter()
            .zip(&tops)
            .find(|(row, _)| row.holds(self.preview.focus))
            .map(|(row, top)| top + row.height(self.preview))
            .unwrap_or(0);
        let offset = focused_bottom.saturating_sub(area.height);

        for (row, top) in rows.iter().zip(&tops) {
            let height = row.height(self.preview);
            if *top < offset || top + height > offset + area.height {
                continue;
            }
            let row_area = Rect {
                x: area.x,
                y: area.y + (top - offset),
                width: area.width,
                height,
            };
            self.render_row(*row, row_area, buf);
        }
    }
}
