//! Field validation for the sign-up form.
//!
//! Each predicate answers "is this value syntactically acceptable" for one
//! field kind. They are pure and never fail; callers decide what to do with
//! a rejection.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Characters that satisfy the password "special character" requirement.
pub const PASSWORD_SPECIALS: &str = "!@#$%^&*";

/// Minimum password length, counted in characters.
pub const PASSWORD_MIN_LEN: usize = 8;

const LINE_TERMINATORS: [char; 4] = ['\n', '\r', '\u{2028}', '\u{2029}'];

fn pattern(source: &str) -> Regex {
    Regex::new(source).unwrap_or_else(|e| unreachable!("built-in pattern {source}: {e}"))
}

static NAME: LazyLock<Regex> = LazyLock::new(|| pattern(r"^[A-Za-z0-9\s\-'.]+$"));
static EMAIL: LazyLock<Regex> = LazyLock::new(|| pattern(r"^[^\s@]+@[^\s@]+\.[^\s@]+$"));
static UPPERCASE: LazyLock<Regex> = LazyLock::new(|| pattern("[A-Z]"));
static SPECIAL: LazyLock<Regex> = LazyLock::new(|| pattern(r"[!@#$%^&*]"));
static DIGIT: LazyLock<Regex> = LazyLock::new(|| pattern("[0-9]"));

/// Accept a full name made of Latin letters, digits, whitespace, hyphens,
/// apostrophes and periods.
#[must_use]
pub fn name_accepts(value: &str) -> bool {
    NAME.is_match(value)
}

/// Accept `local@domain.tld` where no part contains whitespace or `@`.
///
/// This is a shape check only, not an RFC 5322 parser.
#[must_use]
pub fn email_accepts(value: &str) -> bool {
    EMAIL.is_match(value)
}

/// Accept a password of at least [`PASSWORD_MIN_LEN`] characters containing
/// an uppercase letter, a digit and one of [`PASSWORD_SPECIALS`].
///
/// All conditions are checked independently; character order does not matter.
/// A password must be a single line.
#[must_use]
pub fn password_accepts(value: &str) -> bool {
    !value.contains(LINE_TERMINATORS)
        && value.chars().count() >= PASSWORD_MIN_LEN
        && UPPERCASE.is_match(value)
        && SPECIAL.is_match(value)
        && DIGIT.is_match(value)
}

/// The three inputs of the sign-up form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    /// The "Full Name" input.
    FullName,
    /// The "Email Address" input.
    Email,
    /// The "Password*" input.
    Password,
}

impl FieldKind {
    /// All fields, in form order.
    pub const ALL: [Self; 3] = [Self::FullName, Self::Email, Self::Password];

    /// Run the predicate for this field.
    #[must_use]
    pub fn accepts(self, value: &str) -> bool {
        match self {
            Self::FullName => name_accepts(value),
            Self::Email => email_accepts(value),
            Self::Password => password_accepts(value),
        }
    }

    /// Floating label shown above a non-empty input.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::Email => "Email Address",
            Self::Password => "Password*",
        }
    }

    /// Placeholder shown inside an empty input.
    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        self.label()
    }

    /// Inline message shown under an invalid, edited field.
    #[must_use]
    pub const fn warning(self) -> &'static str {
        match self {
            Self::FullName => {
                "Name can only contain Latin letters, numbers, spaces, hyphens, apostrophes and periods."
            }
            Self::Email => "Invalid e-mail. Use valid emails only",
            Self::Password => {
                "Contain at least one uppercase letter (A-Z), special character. Be at least 8 characters long."
            }
        }
    }

    /// Position of this field in [`FieldKind::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::FullName => 0,
            Self::Email => 1,
            Self::Password => 2,
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for FieldKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "name" | "full-name" | "fullname" => Ok(Self::FullName),
            "email" | "email-address" => Ok(Self::Email),
            "password" => Ok(Self::Password),
            other => Err(format!(
                "unknown field '{other}' (expected name, email or password)"
            )),
        }
    }
}
