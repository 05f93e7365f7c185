//! Upload confirmation

use ploader_app::state::SuccessData;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::layout::centered_rect;
use crate::theme::styles;

pub struct SuccessView<'a> {
    data: &'a SuccessData,
    show_flags: bool,
}

impl<'a> SuccessView<'a> {
    pub fn new(data: &'a SuccessData) -> Self {
        Self {
            data,
            show_flags: true,
        }
    }

    pub fn show_flags(mut self, show_flags: bool) -> Self {
        self.show_flags = show_flags;
        self
    }

    fn field(label: &'static str, value: String) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("  {label:<12}"), styles::text_muted()),
            Span::styled(value, styles::text_primary()),
        ])
    }
}

impl Widget for SuccessView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let data = self.data;
        let marketplace = &data.marketplace;
        let market = if self.show_flags {
            format!("{} {} ({})", marketplace.flag, marketplace.country, marketplace.domain)
        } else {
            format!("{} ({})", marketplace.country, marketplace.domain)
        };

        let lines = vec![
            Line::from(Span::styled("✓", styles::status_green())).alignment(Alignment::Center),
            Line::from(Span::styled(
                "Prodotto caricato con successo!",
                styles::accent_bold(),
            ))
            .alignment(Alignment::Center),
            Line::default(),
            Self::field("ASIN", data.marketplace_item_id.clone()),
            Self::field("Cliente", data.client.clone()),
            Self::field("Marketplace", market),
            Self::field("Titolo", data.title.clone()),
            Self::field("Prezzo", data.price_label()),
            Line::default(),
            Line::from(vec![
                Span::styled("  Link  ", styles::text_muted()),
                Span::styled(data.listing_url(), styles::status_blue()),
            ]),
            Line::default(),
            Line::from(vec![
                Span::styled("Enter", styles::keybinding()),
                Span::styled(" Carica un altro prodotto    ", styles::text_secondary()),
                Span::styled("o", styles::keybinding()),
                Span::styled(" Vai su Amazon", styles::text_secondary()),
            ])
            .alignment(Alignment::Center),
        ];

        let card = centered_rect(80, lines.len() as u16 + 2, area);
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(styles::glass_block(true))
            .render(card, buf);
    }
}
