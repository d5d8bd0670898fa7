//! Mouse input handling (left clicks only)

use crate::app::{App, Page};
use crate::form::Focus;
use crate::menu::{MenuId, OutsideClick, rect_contains};
use crate::tui::layout::{BannerItem, BannerLayout, SignupLayout};
use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use std::time::Instant;

/// Handle a mouse event. Returns whether it was a click that was handled.
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent, now: Instant) -> bool {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return false;
    }
    match app.page {
        Page::Home => handle_home_click(app, mouse.column, mouse.row, now),
        Page::SignUp => handle_signup_click(app, mouse.column, mouse.row),
    }
    true
}

fn handle_home_click(app: &mut App, x: u16, y: u16, now: Instant) {
    let banner = BannerLayout::compute(app.viewport);

    // Trigger clicks are left to the trigger itself
    let outside = OutsideClick::with_regions(MenuId::ALL.map(|menu| banner.trigger(menu)));
    if outside.is_outside(x, y) {
        app.active_menu.dismiss();
    }

    match banner.item_at(x, y) {
        Some(BannerItem::Menu(menu)) => app.toggle_menu(menu),
        Some(item) if item.opens_signup() => app.navigate(Page::SignUp, now),
        _ => {}
    }
}

fn handle_signup_click(app: &mut App, x: u16, y: u16) {
    let layout = SignupLayout::compute(app.viewport);

    if rect_contains(layout.reveal, x, y) {
        app.form.toggle_password_reveal();
    } else if let Some(kind) = layout.field_at(x, y) {
        app.form.set_focus(Focus::Field(kind));
    } else if rect_contains(layout.submit, x, y) {
        app.form.set_focus(Focus::Submit);
        app.submit();
    } else {
        app.form.blur();
    }
}
