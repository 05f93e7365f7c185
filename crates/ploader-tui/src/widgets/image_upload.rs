//! Image field: path entry, drop target and captured file summary

use ploader_core::CapturedImage;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub struct ImageUpload<'a> {
    path: &'a str,
    image: Option<&'a CapturedImage>,
    loading: bool,
    focused: bool,
}

impl<'a> ImageUpload<'a> {
    pub fn new(path: &'a str, image: Option<&'a CapturedImage>) -> Self {
        Self {
            path,
            image,
            loading: false,
            focused: false,
        }
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for ImageUpload<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused).title(Span::styled(
            " Immagine prodotto ",
            if self.focused {
                styles::accent_bold()
            } else {
                styles::label()
            },
        ));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut lines = Vec::new();
        match self.image {
            Some(image) => {
                lines.push(Line::from(vec![
                    Span::styled(" ✓ ", styles::status_green()),
                    Span::styled(image.file_name.as_str(), styles::text_primary()),
                    Span::styled(
                        format!("  {} · {}", image.size_label(), image.mime),
                        styles::text_muted(),
                    ),
                ]));
                lines.push(Line::from(vec![
                    Span::raw(" "),
                    Span::styled("Del", styles::keybinding()),
                    Span::styled(" rimuovi", styles::text_muted()),
                ]));
            }
            None if self.loading => {
                lines.push(Line::from(Span::styled(
                    " Lettura immagine in corso...",
                    styles::text_secondary(),
                )));
            }
            None => {
                let mut path = vec![Span::raw(" "), Span::styled(self.path, styles::input(self.focused))];
                if self.focused {
                    path.push(Span::styled("▏", styles::accent()));
                }
                if self.path.is_empty() {
                    lines.push(Line::from(Span::styled(
                        " Trascina un'immagine qui o digita il percorso e premi Invio",
                        styles::text_secondary(),
                    )));
                    lines.push(Line::from(path));
                } else {
                    lines.push(Line::from(path));
                }
                lines.push(Line::from(Span::styled(" JPG, PNG, WebP", styles::text_muted())));
            }
        }

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_image, TestTerminal};

    #[test]
    fn test_empty_field_shows_drop_hint() {
        let mut term = TestTerminal::new();
        term.render_widget(ImageUpload::new("", None), Rect::new(0, 0, 80, 5));

        assert!(term.buffer_contains("Trascina un'immagine qui"));
        assert!(term.buffer_contains("JPG, PNG, WebP"));
    }

    #[test]
    fn test_typed_path_is_shown() {
        let mut term = TestTerminal::new();
        term.render_widget(
            ImageUpload::new("/tmp/mouse.png", None).focused(true),
            Rect::new(0, 0, 80, 5),
        );
        assert!(term.buffer_contains("/tmp/mouse.png▏"));
    }

    #[test]
    fn test_captured_image_summary() {
        let image = test_image();
        let mut term = TestTerminal::new();
        term.render_widget(
            ImageUpload::new("", Some(&image)),
            Rect::new(0, 0, 80, 5),
        );

        assert!(term.buffer_contains("mouse.png"));
        assert!(term.buffer_contains("3 B · image/png"));
        assert!(term.buffer_contains("Del rimuovi"));
    }

    #[test]
    fn test_loading_state() {
        let mut term = TestTerminal::new();
        term.render_widget(
            ImageUpload::new("/tmp/a.png", None).loading(true),
            Rect::new(0, 0, 80, 5),
        );
        assert!(term.buffer_contains("Lettura immagine in corso..."));
    }
}
