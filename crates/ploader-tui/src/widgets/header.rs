//! Header bar with the app title and page navigation

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

/// Top-level destination highlighted in the header navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Home,
    Settings,
}

/// Main header showing the app title and the Home/Settings navigation
pub struct MainHeader {
    active: NavTarget,
}

impl MainHeader {
    pub fn new(active: NavTarget) -> Self {
        Self { active }
    }

    fn nav_item(&self, key: &'static str, label: &'static str, target: NavTarget) -> Vec<Span<'static>> {
        let label_style = if self.active == target {
            styles::accent_bold()
        } else {
            styles::text_secondary()
        };
        vec![
            Span::styled("[", styles::text_muted()),
            Span::styled(key, styles::keybinding()),
            Span::styled("] ", styles::text_muted()),
            Span::styled(label, label_style),
        ]
    }
}

impl Widget for MainHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::DEEPEST_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = Line::from(vec![
            Span::raw(" "),
            Span::styled("▣", styles::accent()),
            Span::raw(" "),
            Span::styled(
                "ProductLoader",
                Style::default()
                    .fg(palette::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        let title_width = title.width() as u16;

        let mut nav = self.nav_item("F2", "Home", NavTarget::Home);
        nav.push(Span::raw("  "));
        nav.extend(self.nav_item("F3", "Settings", NavTarget::Settings));
        nav.push(Span::raw(" "));
        let nav = Line::from(nav);
        let nav_width = nav.width() as u16;

        Paragraph::new(title).render(inner, buf);

        // Navigation is right aligned and dropped when it would overlap the title
        if title_width + nav_width < inner.width {
            let nav_area = Rect {
                x: inner.x + inner.width - nav_width,
                width: nav_width,
                ..inner
            };
            Paragraph::new(nav).render(nav_area, buf);
        }
    }
}
