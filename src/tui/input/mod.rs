//! Key and mouse handling
//!
//! Bound keys go through [`App::handle_action`] first. Unbound keys on the
//! sign-up page edit the focused input.

mod mouse;

pub use mouse::handle_mouse_event;

use crate::app::{App, Page};
use crate::form::{Focus, FormField};
use ratatui::crossterm::event::{KeyCode, KeyModifiers};
use std::time::Instant;

/// Handle a key press
pub fn handle_key_event(app: &mut App, code: KeyCode, modifiers: KeyModifiers, now: Instant) {
    if let Some(action) = app.config.keys.get_action(code, modifiers)
        && app.handle_action(action, now)
    {
        return;
    }

    if app.page != Page::SignUp {
        return;
    }

    // Space presses a focused button
    if app.form.focus() == Focus::Submit && code == KeyCode::Char(' ') {
        app.submit();
        return;
    }

    if let Some(field) = app.form.focused_field_mut() {
        edit_field(field, code, modifiers);
    }
}

fn edit_field(field: &mut FormField, code: KeyCode, modifiers: KeyModifiers) {
    let ctrl = modifiers.contains(KeyModifiers::CONTROL);
    match code {
        KeyCode::Char('u') if ctrl => field.clear_line(),
        KeyCode::Char('w') if ctrl => field.delete_word(),
        KeyCode::Char(c) if !ctrl && !modifiers.contains(KeyModifiers::ALT) => {
            field.insert_char(c);
        }
        KeyCode::Backspace => field.backspace(),
        KeyCode::Delete => field.delete(),
        KeyCode::Left => field.cursor_left(),
        KeyCode::Right => field.cursor_right(),
        KeyCode::Home => field.cursor_home(),
        KeyCode::End => field.cursor_end(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::menu::MenuId;
    use crate::validate::FieldKind;
    use pretty_assertions::assert_eq;

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, code, KeyModifiers::NONE, Instant::now());
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_typing_edits_focused_field() {
        let mut app = App::new(Config::default(), Page::SignUp);
        type_text(&mut app, "Ada");
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Backspace);
        type_text(&mut app, "n");

        let field = app.form.field(FieldKind::FullName);
        assert_eq!(field.value(), "Ana");
        assert!(field.has_been_edited());
        assert!(!field.is_invalid());
    }

    #[test]
    fn test_tab_blurs_and_shows_warning() {
        let mut app = App::new(Config::default(), Page::SignUp);
        type_text(&mut app, "Ada");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "abc@@d");
        press(&mut app, KeyCode::Tab);

        let email = app.form.field(FieldKind::Email);
        assert!(email.is_invalid());
        assert!(email.shows_warning());
        assert!(!app.form.can_submit());

        press(&mut app, KeyCode::BackTab);
        handle_key_event(
            &mut app,
            KeyCode::Char('u'),
            KeyModifiers::CONTROL,
            Instant::now(),
        );
        type_text(&mut app, "a@b.com");
        press(&mut app, KeyCode::Tab);

        let email = app.form.field(FieldKind::Email);
        assert!(!email.is_invalid());
        assert!(!email.shows_warning());

        // The password was blurred empty on the way back
        assert!(!app.form.can_submit());
        type_text(&mut app, "Password1!");
        press(&mut app, KeyCode::Tab);
        assert!(app.form.can_submit());
    }

    #[test]
    fn test_ctrl_w_deletes_word() {
        let mut app = App::new(Config::default(), Page::SignUp);
        type_text(&mut app, "Ada Lovelace");
        handle_key_event(
            &mut app,
            KeyCode::Char('w'),
            KeyModifiers::CONTROL,
            Instant::now(),
        );
        assert_eq!(app.form.field(FieldKind::FullName).value(), "Ada ");
    }

    #[test]
    fn test_enter_walks_fields_then_submits() {
        let mut app = App::new(Config::default(), Page::SignUp);
        type_text(&mut app, "Ada Lovelace");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "ada@example.com");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "Password1!");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.form.focus(), Focus::Submit);

        press(&mut app, KeyCode::Enter);
        assert!(app.last_submission.is_some());
    }

    #[test]
    fn test_space_on_submit_submits() {
        let mut app = App::new(Config::default(), Page::SignUp);
        app.form.field_mut(FieldKind::FullName).set("Ada");
        app.form.set_focus(Focus::Submit);
        press(&mut app, KeyCode::Char(' '));
        assert!(app.last_submission.is_some());
        assert_eq!(app.form.field(FieldKind::FullName).value(), "Ada");
    }

    #[test]
    fn test_reveal_password_key() {
        let mut app = App::new(Config::default(), Page::SignUp);
        handle_key_event(
            &mut app,
            KeyCode::Char('r'),
            KeyModifiers::CONTROL,
            Instant::now(),
        );
        assert!(app.form.password_revealed());
        assert_eq!(app.form.field(FieldKind::FullName).value(), "");
    }

    #[test]
    fn test_function_keys_toggle_menus_on_home() {
        let mut app = App::new(Config::default(), Page::Home);
        press(&mut app, KeyCode::F(2));
        assert_eq!(app.active_menu.current(), Some(MenuId::Features));
        press(&mut app, KeyCode::F(3));
        assert_eq!(app.active_menu.current(), Some(MenuId::Solutions));
        press(&mut app, KeyCode::F(3));
        assert_eq!(app.active_menu.current(), None);
    }

    #[test]
    fn test_typing_on_home_is_ignored() {
        let mut app = App::new(Config::default(), Page::Home);
        type_text(&mut app, "abc");
        assert_eq!(app.form.field(FieldKind::FullName).value(), "");
    }

    #[test]
    fn test_escape_returns_home() {
        let mut app = App::new(Config::default(), Page::SignUp);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.page, Page::Home);
    }
}
