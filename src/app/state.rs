//! Application state

use crate::config::{Action, Config};
use crate::form::{Focus, SignupForm, Submission};
use crate::marquee::{LOGOS, Marquee};
use crate::menu::{ActiveMenu, AnchorRect, MenuId};
use crate::tui::layout;
use ratatui::layout::Rect;
use std::time::{Duration, Instant};
use tracing::debug;

/// Which page is on screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Page {
    /// Landing page with the banner and dropdown menus
    #[default]
    Home,
    /// Sign-up page with the form and logo marquee
    #[value(name = "signup", alias = "sign-up")]
    SignUp,
}

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Application configuration
    pub config: Config,

    /// Current page
    pub page: Page,

    /// Sign-up form state
    pub form: SignupForm,

    /// Open dropdown, if any
    pub active_menu: ActiveMenu,

    /// Last banner measurement
    pub anchor: AnchorRect,

    /// Last known frame size
    pub viewport: Rect,

    /// Logo strip on the sign-up page
    pub marquee: Marquee,

    /// Whether the application should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: Option<String>,

    /// Last accepted submission
    pub last_submission: Option<Submission>,
}

impl App {
    /// Create a new application showing `page`
    #[must_use]
    pub fn new(config: Config, page: Page) -> Self {
        let marquee = Marquee::new(LOGOS, config.marquee);
        Self {
            config,
            page,
            form: SignupForm::new(),
            active_menu: ActiveMenu::none(),
            anchor: AnchorRect::default(),
            viewport: Rect::default(),
            marquee,
            should_quit: false,
            status_message: None,
            last_submission: None,
        }
    }

    /// First layout pass: measure the banner and start the current page's
    /// animation
    pub fn mount(&mut self, viewport: Rect, now: Instant) {
        self.resize(viewport);
        if self.page == Page::SignUp {
            self.marquee.start(now);
        }
    }

    /// Remeasure after the frame size changed
    pub fn resize(&mut self, viewport: Rect) {
        self.viewport = viewport;
        self.anchor = AnchorRect::measure(layout::banner_area(viewport));
        debug!(?viewport, anchor = ?self.anchor, "Viewport measured");
    }

    /// Switch pages.
    ///
    /// Any open dropdown closes. Entering the sign-up page mounts a fresh
    /// form and restarts the marquee from zero; the marquee runs only while
    /// that page is shown.
    pub fn navigate(&mut self, page: Page, now: Instant) {
        if page == self.page {
            return;
        }
        self.active_menu.dismiss();
        match page {
            Page::SignUp => {
                self.form = SignupForm::new();
                self.marquee.start(now);
            }
            Page::Home => self.marquee.stop(),
        }
        self.page = page;
        self.status_message = None;
        debug!(?page, "Navigated");
    }

    /// Open or close a dropdown from its trigger. Only the home page has
    /// a banner.
    pub fn toggle_menu(&mut self, menu: MenuId) {
        if self.page == Page::Home {
            self.active_menu.toggle(menu);
        }
    }

    /// The open dropdown and where its panel goes
    #[must_use]
    pub fn open_panel(&self) -> Option<(MenuId, Rect)> {
        let (body, _) = layout::page_areas(self.viewport);
        self.active_menu
            .current()
            .map(|menu| (menu, menu.panel_rect(self.anchor, self.config.menu, body)))
    }

    /// Close the open dropdown, or leave the sign-up page
    pub fn cancel(&mut self, now: Instant) {
        if self.active_menu.dismiss() {
            return;
        }
        if self.page == Page::SignUp {
            self.navigate(Page::Home, now);
        }
    }

    /// Submit from the submit control; advance focus from a field
    pub fn confirm(&mut self) {
        match self.form.focus() {
            Focus::Submit => self.submit(),
            Focus::Field(_) => self.form.focus_next(),
        }
    }

    /// Activate the submit control.
    ///
    /// The focused field is committed first. While any field is invalid the
    /// control is disabled and nothing else happens.
    pub fn submit(&mut self) {
        if let Ok(submission) = self.form.submit() {
            self.status_message = Some(format!("Welcome aboard, {}!", submission.full_name));
            self.last_submission = Some(submission);
        }
    }

    /// Apply a bound action. Returns whether the action applies to the
    /// current page.
    pub fn handle_action(&mut self, action: Action, now: Instant) -> bool {
        match (action, self.page) {
            (Action::Quit, _) => self.should_quit = true,
            (Action::Cancel, _) => self.cancel(now),
            (Action::ToggleFeatures, Page::Home) => self.toggle_menu(MenuId::Features),
            (Action::ToggleSolutions, Page::Home) => self.toggle_menu(MenuId::Solutions),
            (Action::SignUp, Page::Home) => self.navigate(Page::SignUp, now),
            (Action::NextField, Page::SignUp) => self.form.focus_next(),
            (Action::PrevField, Page::SignUp) => self.form.focus_prev(),
            (Action::Confirm, Page::SignUp) => self.confirm(),
            (Action::RevealPassword, Page::SignUp) => self.form.toggle_password_reveal(),
            _ => return false,
        }
        true
    }

    /// Advance animations. Returns whether anything moved.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.marquee.poll(now)
    }

    /// How long the event loop may block before the next animation frame
    #[must_use]
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        let tick_rate = Duration::from_millis(self.config.tick_rate_ms);
        self.marquee
            .time_until_due(now)
            .map_or(tick_rate, |due| due.min(tick_rate))
    }
}
