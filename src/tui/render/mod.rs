//! TUI rendering
//!
//! - `colors`: Color palette definitions
//! - `home`: Banner, hero text and dropdown panels
//! - `signup`: Sign-up form, testimonial and logo marquee

pub mod colors;
mod home;
mod menus;
mod signup;

use crate::app::{App, Page};
use crate::config::Action;
use crate::tui::layout;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

/// Render the full application UI
pub fn render(frame: &mut Frame<'_>, app: &App) {
    let (body, status) = layout::page_areas(frame.area());

    match app.page {
        Page::Home => home::render_home(frame, app, body),
        Page::SignUp => signup::render_signup(frame, app),
    }

    render_status_bar(frame, app, status);
}

const HOME_HINTS: &[Action] = &[
    Action::ToggleFeatures,
    Action::ToggleSolutions,
    Action::SignUp,
    Action::Quit,
];

const SIGNUP_HINTS: &[Action] = &[
    Action::NextField,
    Action::Confirm,
    Action::RevealPassword,
    Action::Cancel,
    Action::Quit,
];

fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let left_content = if let Some(status) = &app.status_message {
        Span::styled(format!(" {status} "), Style::default().fg(colors::SUCCESS))
    } else {
        let hints = match app.page {
            Page::Home => HOME_HINTS,
            Page::SignUp => SIGNUP_HINTS,
        };
        Span::styled(
            format!(" {} ", app.config.keys.status_hints(hints)),
            Style::default().fg(colors::TEXT_DIM),
        )
    };

    let page_label = match app.page {
        Page::Home => "Home",
        Page::SignUp => "Sign up",
    };
    let page_width = u16::try_from(page_label.chars().count().saturating_add(2))
        .unwrap_or(0)
        .min(area.width);
    let [left, right] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(page_width)]).areas(area);

    let left_widget =
        Paragraph::new(Line::from(left_content)).style(Style::default().bg(colors::SURFACE));
    frame.render_widget(left_widget, left);

    let right_widget = Paragraph::new(Line::from(Span::styled(
        format!(" {page_label} "),
        Style::default().fg(colors::ACCENT),
    )))
    .style(Style::default().bg(colors::SURFACE))
    .alignment(Alignment::Right);
    frame.render_widget(right_widget, right);
}
