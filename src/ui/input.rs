use crate::ui::app::App;
use crate::ui::card::{CardFocus, CardIntent, CardState};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
        app.request_quit();
        return;
    }

    if let Some(intent) = key_intent(app.card(), key) {
        app.dispatch(intent);
    }
}

/// Maps a key press to a card intent given the current focus.
pub fn key_intent(state: &CardState, key: KeyEvent) -> Option<CardIntent> {
    match key.code {
        KeyCode::Tab | KeyCode::Down => return Some(CardIntent::FocusNext),
        KeyCode::BackTab | KeyCode::Up => return Some(CardIntent::FocusPrevious),
        KeyCode::Char('f') if key.modifiers.is_empty() => {
            return Some(CardIntent::ToggleFavorite)
        }
        _ => {}
    }

    match state.focus() {
        CardFocus::Quantity => quantity_intent(state, key),
        CardFocus::Unit => match key.code {
            KeyCode::Right | KeyCode::Enter | KeyCode::Char(' ') => Some(CardIntent::NextUnit),
            KeyCode::Left => Some(CardIntent::PreviousUnit),
            _ => None,
        },
        focus if is_activate(key) => Some(match focus {
            CardFocus::Favorite => CardIntent::ToggleFavorite,
            CardFocus::Compare => CardIntent::Compare,
            CardFocus::Share => CardIntent::Share,
            _ => CardIntent::AddToCart,
        }),
        _ => None,
    }
}

/// Digits and backspace edit the displayed value as text, so every edit goes
/// through the same clamp-to-floor parse as a typed-in value.
fn quantity_intent(state: &CardState, key: KeyEvent) -> Option<CardIntent> {
    match key.code {
        KeyCode::Char(c) if c.is_ascii_digit() => Some(CardIntent::EditQuantity {
            raw: format!("{}{}", state.quantity(), c),
        }),
        KeyCode::Backspace => {
            let mut raw = state.quantity().to_string();
            raw.pop();
            Some(CardIntent::EditQuantity { raw })
        }
        KeyCode::Char('+') | KeyCode::Right => Some(CardIntent::IncrementQuantity),
        KeyCode::Char('-') | KeyCode::Left => Some(CardIntent::DecrementQuantity),
        _ => None,
    }
}

fn is_activate(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Enter | KeyCode::Char(' '))
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&ch))
}
