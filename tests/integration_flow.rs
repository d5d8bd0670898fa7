//! End-to-end flows driven through the key and mouse handlers

use std::time::Instant;

use adpage::app::{App, Page};
use adpage::config::{Action, Config};
use adpage::form::Focus;
use adpage::menu::MenuId;
use adpage::tui::input::{handle_key_event, handle_mouse_event};
use adpage::tui::layout::{BannerItem, BannerLayout, SignupLayout};
use adpage::validate::FieldKind;
use pretty_assertions::assert_eq;
use ratatui::crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

const VIEWPORT: Rect = Rect::new(0, 0, 160, 40);

fn mounted(page: Page) -> App {
    let mut app = App::new(Config::default(), page);
    app.mount(VIEWPORT, Instant::now());
    app
}

fn press(app: &mut App, code: KeyCode) {
    handle_key_event(app, code, KeyModifiers::NONE, Instant::now());
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn click(app: &mut App, rect: Rect) {
    let mouse = MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: rect.x + rect.width / 2,
        row: rect.y + rect.height / 2,
        modifiers: KeyModifiers::NONE,
    };
    handle_mouse_event(app, mouse, Instant::now());
}

#[test]
fn test_home_to_signup_to_submission() {
    let mut app = mounted(Page::Home);
    let banner = BannerLayout::compute(VIEWPORT);

    click(&mut app, banner.trigger(MenuId::Features));
    assert_eq!(app.active_menu.current(), Some(MenuId::Features));

    click(&mut app, banner.rect_of(BannerItem::TryFree));
    assert_eq!(app.page, Page::SignUp);
    assert_eq!(app.active_menu.current(), None);

    let layout = SignupLayout::compute(VIEWPORT);
    click(&mut app, layout.field(FieldKind::FullName));
    type_text(&mut app, "Ada Lovelace");
    click(&mut app, layout.field(FieldKind::Email));
    type_text(&mut app, "ada@example.com");
    click(&mut app, layout.field(FieldKind::Password));
    type_text(&mut app, "Engine#1843");
    click(&mut app, layout.submit);

    assert_eq!(app.status_message.as_deref(), Some("Welcome aboard, Ada Lovelace!"));
    let submission = app.last_submission.as_ref().map(|s| s.email.as_str());
    assert_eq!(submission, Some("ada@example.com"));
}

#[test]
fn test_email_warning_clears_after_fix() {
    let mut app = mounted(Page::SignUp);
    let layout = SignupLayout::compute(VIEWPORT);

    click(&mut app, layout.field(FieldKind::Email));
    type_text(&mut app, "abc@@d");
    click(&mut app, layout.field(FieldKind::Password));
    assert!(app.form.field(FieldKind::Email).shows_warning());

    click(&mut app, layout.field(FieldKind::Email));
    handle_key_event(
        &mut app,
        KeyCode::Char('u'),
        KeyModifiers::CONTROL,
        Instant::now(),
    );
    type_text(&mut app, "a@b.com");
    click(&mut app, layout.field(FieldKind::Password));

    let email = app.form.field(FieldKind::Email);
    assert!(!email.is_invalid());
    assert!(!email.shows_warning());
}

#[test]
fn test_password_rule_scenario() {
    let mut app = mounted(Page::SignUp);
    app.form.set_focus(Focus::Field(FieldKind::Password));
    type_text(&mut app, "Password1");
    press(&mut app, KeyCode::Tab);
    assert!(app.form.field(FieldKind::Password).shows_warning());
    assert!(!app.form.can_submit());

    press(&mut app, KeyCode::BackTab);
    type_text(&mut app, "!");
    press(&mut app, KeyCode::Tab);
    assert!(!app.form.field(FieldKind::Password).is_invalid());
}

#[test]
fn test_disabled_submit_ignores_activation() {
    let mut app = mounted(Page::SignUp);
    let layout = SignupLayout::compute(VIEWPORT);
    type_text(&mut app, "Ada!");
    app.form.set_focus(Focus::Submit);
    assert!(!app.form.can_submit());

    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char(' '));
    click(&mut app, layout.submit);
    assert_eq!(app.status_message, None);
    assert_eq!(app.last_submission, None);
    assert_eq!(app.form.focus(), Focus::Submit);

    click(&mut app, layout.field(FieldKind::FullName));
    handle_key_event(
        &mut app,
        KeyCode::Char('u'),
        KeyModifiers::CONTROL,
        Instant::now(),
    );
    type_text(&mut app, "Ada");
    click(&mut app, layout.submit);
    assert!(app.form.can_submit());
    assert_eq!(app.status_message.as_deref(), Some("Welcome aboard, Ada!"));
}

#[test]
fn test_leaving_signup_discards_form() {
    let mut app = mounted(Page::Home);
    let banner = BannerLayout::compute(VIEWPORT);
    click(&mut app, banner.rect_of(BannerItem::TryFree));
    type_text(&mut app, "bad_name");
    press(&mut app, KeyCode::Tab);
    assert!(app.form.field(FieldKind::FullName).shows_warning());

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.page, Page::Home);
    click(&mut app, banner.rect_of(BannerItem::Login));

    let name = app.form.field(FieldKind::FullName);
    assert_eq!(name.value(), "");
    assert!(!name.shows_warning());
    assert_eq!(app.form.focus(), Focus::Field(FieldKind::FullName));
}

#[test]
fn test_mutual_exclusion_via_keys_and_clicks() {
    let mut app = mounted(Page::Home);
    let banner = BannerLayout::compute(VIEWPORT);

    press(&mut app, KeyCode::F(2));
    click(&mut app, banner.trigger(MenuId::Solutions));
    assert_eq!(app.active_menu.current(), Some(MenuId::Solutions));

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.active_menu.current(), None);
    assert_eq!(app.page, Page::Home);
}

#[test]
fn test_custom_keybinding() {
    let mut config = Config::default();
    config.keys.set("F9", Action::ToggleSolutions);
    let mut app = App::new(config, Page::Home);
    app.mount(VIEWPORT, Instant::now());

    press(&mut app, KeyCode::F(9));
    assert_eq!(app.active_menu.current(), Some(MenuId::Solutions));
}

#[test]
fn test_quit_from_either_page() {
    for page in [Page::Home, Page::SignUp] {
        let mut app = mounted(page);
        handle_key_event(
            &mut app,
            KeyCode::Char('q'),
            KeyModifiers::CONTROL,
            Instant::now(),
        );
        assert!(app.should_quit);
    }
}
