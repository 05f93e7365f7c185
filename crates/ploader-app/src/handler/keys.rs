//! Key event handlers for each page

use crate::input_key::InputKey;
use crate::message::Message;
use crate::select::SelectAction;
use crate::state::{
    AppState, CategoryChoice, CategoryField, HomeFocus, HomeState, Page, PreviewField,
    PreviewFocus, PreviewState,
};

use super::preview::edit_message;

/// Convert key events to messages based on the current page
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Global bindings take priority over field input
    match key {
        InputKey::CharCtrl('c') => return Some(Message::Quit),
        InputKey::F(2) => return Some(Message::NavigateHome),
        InputKey::F(3) => return Some(Message::NavigateSettings),
        InputKey::CharCtrl('s') => {
            return match &state.page {
                Page::Home(_) => Some(Message::AnalyzeRequested),
                Page::Preview(_) => Some(Message::UploadRequested),
                _ => None,
            }
        }
        InputKey::Char('q') if !state.text_field_focused() => return Some(Message::Quit),
        _ => {}
    }

    match &state.page {
        Page::Home(home) => handle_key_home(home, key),
        Page::Preview(preview) => handle_key_preview(preview, key),
        Page::Success(_) => handle_key_success(key),
        Page::Settings(_) => handle_key_settings(key),
    }
}

fn handle_key_home(home: &HomeState, key: InputKey) -> Option<Message> {
    // An open list captures navigation until closed
    if home.focused_select_open() {
        return match key {
            InputKey::Up => Some(Message::HomeSelect(SelectAction::Prev)),
            InputKey::Down => Some(Message::HomeSelect(SelectAction::Next)),
            InputKey::Enter => Some(Message::HomeSelect(SelectAction::Confirm)),
            InputKey::Esc => Some(Message::HomeSelect(SelectAction::Dismiss)),
            InputKey::Tab => Some(Message::HomeFocusNext),
            InputKey::BackTab => Some(Message::HomeFocusPrev),
            _ => None,
        };
    }

    match key {
        InputKey::Tab => return Some(Message::HomeFocusNext),
        InputKey::BackTab => return Some(Message::HomeFocusPrev),
        InputKey::Esc if home.error.is_some() => return Some(Message::DismissError),
        _ => {}
    }

    match home.focus {
        HomeFocus::Client | HomeFocus::Marketplace => match key {
            InputKey::Enter | InputKey::Char(' ') | InputKey::Down => {
                Some(Message::HomeSelect(SelectAction::Toggle))
            }
            _ => None,
        },

        HomeFocus::Prompt => {
            let text = edit_text(&home.prompt, key, true)?;
            Some(Message::HomePromptChanged { text })
        }

        HomeFocus::Image => match key {
            InputKey::Enter => Some(Message::HomeImageSubmitPath),
            InputKey::Delete => Some(Message::HomeImageRemoved),
            InputKey::Backspace if home.image_path.is_empty() && home.image.is_some() => {
                Some(Message::HomeImageRemoved)
            }
            _ => {
                let text = edit_text(&home.image_path, key, false)?;
                Some(Message::HomeImagePathChanged { text })
            }
        },

        HomeFocus::Submit => match key {
            InputKey::Enter | InputKey::Char(' ') => Some(Message::AnalyzeRequested),
            _ => None,
        },
    }
}

fn handle_key_preview(preview: &PreviewState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Tab => return Some(Message::PreviewFocusNext),
        InputKey::BackTab => return Some(Message::PreviewFocusPrev),
        InputKey::Esc => return Some(Message::BackToHome),
        _ => {}
    }

    match preview.focus {
        PreviewFocus::Alert(index) => match key {
            InputKey::Enter | InputKey::Char('d') | InputKey::Delete => {
                Some(Message::DismissAlert { index })
            }
            InputKey::Down => Some(Message::PreviewFocusNext),
            InputKey::Up => Some(Message::PreviewFocusPrev),
            _ => None,
        },

        PreviewFocus::Field(PreviewField::Category) => match preview.category {
            CategoryField::Choice { selected } => match key {
                InputKey::Left | InputKey::Up => Some(Message::ChooseCategory(
                    CategoryChoice::Suggested,
                )),
                InputKey::Right | InputKey::Down => {
                    Some(Message::ChooseCategory(CategoryChoice::User))
                }
                InputKey::Char(' ') | InputKey::Enter => {
                    Some(Message::ChooseCategory(selected.toggled()))
                }
                _ => None,
            },
            CategoryField::Single => text_field_key(preview, key),
        },

        PreviewFocus::Field(PreviewField::Price) => match key {
            InputKey::Char(c) if !(c.is_ascii_digit() || c == '.' || c == ',') => None,
            _ => text_field_key(preview, key),
        },

        PreviewFocus::Field(_) | PreviewFocus::Bullet(_) => text_field_key(preview, key),

        PreviewFocus::Submit => match key {
            InputKey::Enter | InputKey::Char(' ') => Some(Message::UploadRequested),
            _ => None,
        },
    }
}

/// Edit the focused preview field; Enter moves on, except in the description.
fn text_field_key(preview: &PreviewState, key: InputKey) -> Option<Message> {
    let multiline = preview.focus == PreviewFocus::Field(PreviewField::Description);
    if key == InputKey::Enter && !multiline {
        return Some(Message::PreviewFocusNext);
    }
    let current = preview.focused_text()?;
    let text = edit_text(current, key, multiline)?;
    edit_message(preview.focus, text)
}

fn handle_key_success(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Char('n') => Some(Message::ResetFlow),
        InputKey::Char('o') => Some(Message::OpenListing),
        _ => None,
    }
}

fn handle_key_settings(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::NavigateHome),
        _ => None,
    }
}

/// Apply a key to a text buffer, returning the new text when it changed.
fn edit_text(current: &str, key: InputKey, multiline: bool) -> Option<String> {
    match key {
        InputKey::Char(c) => {
            let mut text = current.to_string();
            text.push(c);
            Some(text)
        }
        InputKey::Enter if multiline => {
            let mut text = current.to_string();
            text.push('\n');
            Some(text)
        }
        InputKey::Backspace if !current.is_empty() => {
            let mut text = current.to_string();
            text.pop();
            Some(text)
        }
        InputKey::CharCtrl('u') if !current.is_empty() => Some(String::new()),
        _ => None,
    }
}
