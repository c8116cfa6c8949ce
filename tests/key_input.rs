mod common;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use product_card::catalog::Unit;
use product_card::ui::card::{CardFocus, CardIntent};
use product_card::ui::input::{handle_key, key_intent};

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn focus(app: &mut product_card::ui::app::App, target: CardFocus) {
    while app.card().focus() != target {
        handle_key(app, press(KeyCode::Tab));
    }
}

#[test]
fn enter_on_favorite_toggles() {
    let mut app = common::demo_app();
    handle_key(&mut app, press(KeyCode::Enter));
    assert!(app.card().is_favorite());
    handle_key(&mut app, press(KeyCode::Char(' ')));
    assert!(!app.card().is_favorite());
}

#[test]
fn f_toggles_favorite_from_any_control() {
    let mut app = common::demo_app();
    focus(&mut app, CardFocus::Unit);
    handle_key(&mut app, press(KeyCode::Char('f')));
    assert!(app.card().is_favorite());
}

#[test]
fn typing_digits_appends_to_quantity() {
    let mut app = common::demo_app();
    focus(&mut app, CardFocus::Quantity);
    handle_key(&mut app, press(KeyCode::Char('2')));
    assert_eq!(app.card().quantity(), 12);
    handle_key(&mut app, press(KeyCode::Backspace));
    assert_eq!(app.card().quantity(), 1);
    handle_key(&mut app, press(KeyCode::Backspace));
    assert_eq!(app.card().quantity(), 1);
}

#[test]
fn plus_and_minus_step_quantity() {
    let mut app = common::demo_app();
    focus(&mut app, CardFocus::Quantity);
    handle_key(&mut app, press(KeyCode::Char('+')));
    handle_key(&mut app, press(KeyCode::Right));
    assert_eq!(app.card().quantity(), 3);
    for _ in 0..5 {
        handle_key(&mut app, press(KeyCode::Char('-')));
    }
    assert_eq!(app.card().quantity(), 1);
}

#[test]
fn arrows_cycle_unit_when_focused() {
    let mut app = common::demo_app();
    focus(&mut app, CardFocus::Unit);
    handle_key(&mut app, press(KeyCode::Right));
    assert_eq!(app.card().unit(), Unit::Box);
    handle_key(&mut app, press(KeyCode::Left));
    handle_key(&mut app, press(KeyCode::Left));
    assert_eq!(app.card().unit(), Unit::Pack);
}

#[test]
fn activating_add_to_cart_changes_nothing() {
    let mut app = common::demo_app();
    focus(&mut app, CardFocus::AddToCart);
    let before = app.card().clone();
    handle_key(&mut app, press(KeyCode::Enter));
    assert_eq!(app.card(), &before);
}

#[test]
fn compare_and_share_map_to_affordances() {
    let mut app = common::demo_app();
    focus(&mut app, CardFocus::Compare);
    assert_eq!(
        key_intent(app.card(), press(KeyCode::Enter)),
        Some(CardIntent::Compare)
    );
    focus(&mut app, CardFocus::Share);
    assert_eq!(
        key_intent(app.card(), press(KeyCode::Enter)),
        Some(CardIntent::Share)
    );
}

#[test]
fn back_tab_moves_backwards() {
    let mut app = common::demo_app();
    handle_key(&mut app, press(KeyCode::BackTab));
    assert_eq!(app.card().focus(), CardFocus::AddToCart);
}

#[test]
fn quit_keys_request_quit() {
    for key in [
        press(KeyCode::Char('q')),
        press(KeyCode::Esc),
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
    ] {
        let mut app = common::demo_app();
        handle_key(&mut app, key);
        assert!(app.should_quit());
    }
}

#[test]
fn key_release_is_ignored() {
    let mut app = common::demo_app();
    let mut key = press(KeyCode::Enter);
    key.kind = KeyEventKind::Release;
    handle_key(&mut app, key);
    assert!(!app.card().is_favorite());
}

#[test]
fn letters_do_nothing_in_quantity() {
    let mut app = common::demo_app();
    focus(&mut app, CardFocus::Quantity);
    assert_eq!(key_intent(app.card(), press(KeyCode::Char('x'))), None);
}
