//! adpage - Marketing landing page and sign-up form in the terminal
//!
//! A banner with Features/Solutions dropdowns anchored beneath it, a sign-up
//! form with per-field validation, and an endlessly scrolling logo strip.

pub mod app;
pub mod config;
pub mod form;
pub mod marquee;
pub mod menu;
pub mod paths;
pub mod ticker;
pub mod tui;
pub mod validate;

pub use app::{App, Page};
pub use config::Config;
pub use form::{SignupForm, SubmitError};
pub use validate::FieldKind;
