//! Test utilities for TUI rendering verification
//!
//! Wraps ratatui's TestBackend so widgets and full frames can be rendered
//! and inspected as text.

use ploader_app::state::{AppState, Page, PreviewState};
use ploader_core::{Alert, AnalyzeResponse, CapturedImage, ProductData, MARKETPLACES};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::Frame;
use ratatui::Terminal;

/// Standard test terminal size (matches common terminal dimensions)
pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

/// Tall terminal so the whole preview form fits on screen
pub const TALL_HEIGHT: u16 = 60;

/// Test utility wrapper around ratatui's TestBackend terminal.
pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// Create a new test terminal with standard dimensions (80x24)
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    /// Create a test terminal tall enough for the full preview form (100x60)
    pub fn tall() -> Self {
        Self::with_size(100, TALL_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    /// Get the full terminal area
    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    /// Render a widget to the terminal
    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draws a frame using a custom rendering function, e.g. `render::view`.
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Check if the buffer contains a string anywhere
    pub fn buffer_contains(&self, text: &str) -> bool {
        buffer_to_string(self.buffer()).contains(text)
    }

    /// Check if a specific line contains text
    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        get_line_content(self.buffer(), line).contains(text)
    }

    /// Row index of the first line containing `text`
    pub fn find_line(&self, text: &str) -> Option<u16> {
        let buffer = self.buffer();
        (0..buffer.area.height).find(|&y| get_line_content(buffer, y).contains(text))
    }

    /// Get all content as a string (for debugging)
    pub fn content(&self) -> String {
        buffer_to_string(self.buffer())
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert buffer to string representation
fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        result.push_str(&get_line_content(buffer, y));
        result.push('\n');
    }
    result
}

/// Get content of a specific line
fn get_line_content(buffer: &Buffer, line: u16) -> String {
    let mut result = String::new();
    if line < buffer.area.height {
        for x in 0..buffer.area.width {
            result.push_str(buffer[(x, line)].symbol());
        }
    }
    result
}

pub fn test_image() -> CapturedImage {
    CapturedImage::new("mouse.png", "image/png", vec![1, 2, 3])
}

pub fn test_product() -> ProductData {
    ProductData {
        title: "Wireless Mouse".to_string(),
        brand: "Acme".to_string(),
        ean: "1234567890123".to_string(),
        price: 19.99,
        category_user: "Electronics".to_string(),
        category_suggested: "Electronics".to_string(),
        description: "Ergonomic mouse".to_string(),
        bullet_points: vec!["Silent clicks".to_string(), "USB-C".to_string()],
    }
}

/// Preview bundle for the first marketplace with the given product and alerts
pub fn test_preview(product: ProductData, alerts: Vec<Alert>) -> PreviewState {
    PreviewState::new(
        AnalyzeResponse { alerts, product },
        "PURANOVA".to_string(),
        MARKETPLACES[0],
        test_image(),
    )
}

pub fn preview_app_state(preview: PreviewState) -> AppState {
    let mut state = AppState::new();
    state.page = Page::Preview(Box::new(preview));
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_terminal_creation() {
        let term = TestTerminal::new();
        assert_eq!(term.area().width, TEST_WIDTH);
        assert_eq!(term.area().height, TEST_HEIGHT);
    }

    #[test]
    fn test_buffer_contains() {
        let mut term = TestTerminal::with_size(20, 5);
        term.render_widget(Paragraph::new("Hello World"), term.area());

        assert!(term.buffer_contains("Hello World"));
        assert!(!term.buffer_contains("Goodbye"));
    }

    #[test]
    fn test_line_helpers() {
        let mut term = TestTerminal::with_size(20, 5);
        term.render_widget(Paragraph::new("Hello\nWorld"), term.area());

        assert!(term.line_contains(0, "Hello"));
        assert!(!term.line_contains(0, "World"));
        assert_eq!(term.find_line("World"), Some(1));
        assert_eq!(term.find_line("Missing"), None);
    }
}
