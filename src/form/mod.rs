//! Sign-up form state
//!
//! Tracks the three inputs, which control has focus, and whether the form
//! may be submitted. Focus leaving a field is that field's blur.

mod field;

pub use field::FormField;

use crate::validate::FieldKind;
use thiserror::Error;
use tracing::{debug, info};

/// Which control of the form has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// One of the text inputs
    Field(FieldKind),
    /// The submit button
    Submit,
}

impl Focus {
    /// Focus order, top to bottom
    pub const ORDER: [Self; 4] = [
        Self::Field(FieldKind::FullName),
        Self::Field(FieldKind::Email),
        Self::Field(FieldKind::Password),
        Self::Submit,
    ];

    const fn position(self) -> usize {
        match self {
            Self::Field(kind) => kind.index(),
            Self::Submit => 3,
        }
    }

    /// The control after this one, wrapping around
    #[must_use]
    pub const fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    /// The control before this one, wrapping around
    #[must_use]
    pub const fn prev(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Reasons a submission is refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// One or more fields failed their last validation
    #[error("form has invalid fields: {}", field_list(.0))]
    InvalidFields(Vec<FieldKind>),
}

fn field_list(fields: &[FieldKind]) -> String {
    fields
        .iter()
        .map(|kind| kind.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Values captured by an accepted submission
#[derive(Clone, PartialEq, Eq)]
pub struct Submission {
    /// Value of the full name input
    pub full_name: String,
    /// Value of the email input
    pub email: String,
    /// Value of the password input
    pub password: String,
}

impl std::fmt::Debug for Submission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Submission")
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// The sign-up form
#[derive(Debug, Clone)]
pub struct SignupForm {
    fields: [FormField; 3],
    focus: Focus,
    password_revealed: bool,
}

impl Default for SignupForm {
    fn default() -> Self {
        Self::new()
    }
}

impl SignupForm {
    /// Create an empty form with focus on the first field
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fields: [
                FormField::new(FieldKind::FullName),
                FormField::new(FieldKind::Email),
                FormField::new(FieldKind::Password),
            ],
            focus: Focus::Field(FieldKind::FullName),
            password_revealed: false,
        }
    }

    /// Borrow one field
    #[must_use]
    pub fn field(&self, kind: FieldKind) -> &FormField {
        &self.fields[kind.index()]
    }

    /// Mutably borrow one field
    pub fn field_mut(&mut self, kind: FieldKind) -> &mut FormField {
        &mut self.fields[kind.index()]
    }

    /// All fields, in form order
    pub fn fields(&self) -> impl Iterator<Item = &FormField> {
        self.fields.iter()
    }

    /// Currently focused control
    #[must_use]
    pub const fn focus(&self) -> Focus {
        self.focus
    }

    /// The focused text input, if focus is on one
    pub fn focused_field_mut(&mut self) -> Option<&mut FormField> {
        match self.focus {
            Focus::Field(kind) => Some(self.field_mut(kind)),
            Focus::Submit => None,
        }
    }

    /// Blur the focused field, evaluating its validator.
    ///
    /// Focus itself does not move. Does nothing when the submit control is
    /// focused.
    pub fn blur(&mut self) {
        if let Some(field) = self.focused_field_mut() {
            field.commit();
        }
    }

    /// Move focus to `target`, blurring the field being left
    pub fn set_focus(&mut self, target: Focus) {
        if target == self.focus {
            return;
        }
        self.blur();
        self.focus = target;
    }

    /// Move focus to the next control
    pub fn focus_next(&mut self) {
        self.set_focus(self.focus.next());
    }

    /// Move focus to the previous control
    pub fn focus_prev(&mut self) {
        self.set_focus(self.focus.prev());
    }

    /// Whether the password renders in clear text
    #[must_use]
    pub const fn password_revealed(&self) -> bool {
        self.password_revealed
    }

    /// Flip the password reveal toggle
    pub const fn toggle_password_reveal(&mut self) {
        self.password_revealed = !self.password_revealed;
    }

    /// Fields currently flagged invalid
    #[must_use]
    pub fn invalid_fields(&self) -> Vec<FieldKind> {
        self.fields
            .iter()
            .filter(|field| field.is_invalid())
            .map(FormField::kind)
            .collect()
    }

    /// Whether the submit control is enabled
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.fields.iter().all(|field| !field.is_invalid())
    }

    /// Submit the form.
    ///
    /// The focused field is blurred first, as activating the submit control
    /// takes focus away from it. The submission is accepted only when no
    /// field is flagged invalid.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::InvalidFields`] when any field is invalid.
    pub fn submit(&mut self) -> Result<Submission, SubmitError> {
        self.blur();

        let invalid = self.invalid_fields();
        if !invalid.is_empty() {
            debug!(?invalid, "Form has errors");
            return Err(SubmitError::InvalidFields(invalid));
        }

        let submission = Submission {
            full_name: self.field(FieldKind::FullName).value().to_string(),
            email: self.field(FieldKind::Email).value().to_string(),
            password: self.field(FieldKind::Password).value().to_string(),
        };
        info!(?submission, "Form submitted");
        Ok(submission)
    }
}
