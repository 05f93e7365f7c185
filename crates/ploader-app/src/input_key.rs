//! Abstract input key event, independent of terminal library.
//!
//! The TUI converts crossterm key events into [`InputKey`] at its boundary so
//! the handlers in this crate can be driven from tests without a terminal.

/// Abstract input key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key (letters, digits, symbols, space)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, Ctrl+s, Ctrl+u)
    CharCtrl(char),

    Up,
    Down,
    Left,
    Right,

    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,
    Delete,

    /// Function key (F1-F12)
    F(u8),
}

impl InputKey {
    /// Whether this key types into a focused text field.
    pub fn is_text_input(&self) -> bool {
        matches!(self, InputKey::Char(_) | InputKey::Backspace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_key_equality() {
        assert_eq!(InputKey::Char('a'), InputKey::Char('a'));
        assert_ne!(InputKey::CharCtrl('s'), InputKey::Char('s'));
        assert_eq!(InputKey::F(2), InputKey::F(2));
    }

    #[test]
    fn test_is_text_input() {
        assert!(InputKey::Char('x').is_text_input());
        assert!(InputKey::Backspace.is_text_input());
        assert!(!InputKey::CharCtrl('c').is_text_input());
        assert!(!InputKey::Tab.is_text_input());
    }
}
