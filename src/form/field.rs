//! A single form input: value buffer, cursor and validation flags

use crate::validate::FieldKind;

/// One input of the sign-up form.
///
/// Editing never evaluates validity; only [`FormField::commit`] does. The
/// inline warning is visible iff the field has been edited and is invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    kind: FieldKind,

    /// Current text of the input
    raw_value: String,

    /// Cursor position within `raw_value` (byte offset)
    cursor: usize,

    /// Set on the first edit and never cleared
    has_been_edited: bool,

    /// Result of the last blur; `false` until the first blur
    is_invalid: bool,
}

impl FormField {
    /// Create an empty, untouched field
    #[must_use]
    pub const fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            raw_value: String::new(),
            cursor: 0,
            has_been_edited: false,
            is_invalid: false,
        }
    }

    /// Which input this is
    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Current text of the input
    #[must_use]
    pub fn value(&self) -> &str {
        &self.raw_value
    }

    /// Cursor position (byte offset into [`FormField::value`])
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the value has changed at least once
    #[must_use]
    pub const fn has_been_edited(&self) -> bool {
        self.has_been_edited
    }

    /// Whether the last blur rejected the value
    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        self.is_invalid
    }

    /// Whether the inline warning should be visible
    #[must_use]
    pub const fn shows_warning(&self) -> bool {
        self.has_been_edited && self.is_invalid
    }

    /// Whether the input has content (the label floats, the placeholder hides)
    #[must_use]
    pub fn has_content(&self) -> bool {
        !self.raw_value.is_empty()
    }

    /// Evaluate the validator for the current value and record the verdict.
    ///
    /// Returns the new `is_invalid` flag.
    pub fn commit(&mut self) -> bool {
        self.is_invalid = !self.kind.accepts(&self.raw_value);
        tracing::debug!(field = ?self.kind, invalid = self.is_invalid, "Field committed");
        self.is_invalid
    }

    const fn mark_edited(&mut self) {
        self.has_been_edited = true;
    }

    /// Replace the value and move the cursor to the end
    pub fn set(&mut self, content: impl Into<String>) {
        self.raw_value = content.into();
        self.cursor = self.raw_value.len();
        self.mark_edited();
    }

    /// Clear the value
    pub fn clear_line(&mut self) {
        if self.raw_value.is_empty() {
            return;
        }
        self.raw_value.clear();
        self.cursor = 0;
        self.mark_edited();
    }

    /// Insert a character at the cursor position
    pub fn insert_char(&mut self, c: char) {
        // Single-line input
        if c == '\n' || c == '\r' {
            return;
        }
        self.raw_value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
        self.mark_edited();
    }

    /// Delete the character before the cursor (backspace)
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev_char_boundary = self.raw_value[..self.cursor]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
            self.raw_value.remove(prev_char_boundary);
            self.cursor = prev_char_boundary;
            self.mark_edited();
        }
    }

    /// Delete the character at the cursor (delete key)
    pub fn delete(&mut self) {
        if self.cursor < self.raw_value.len() {
            self.raw_value.remove(self.cursor);
            self.mark_edited();
        }
    }

    /// Delete the previous word, readline style.
    ///
    /// Whitespace immediately before the cursor goes first, then the
    /// contiguous non-whitespace run before it.
    pub fn delete_word(&mut self) {
        if self.cursor == 0 {
            return;
        }

        let mut start = self.cursor;
        let mut found_non_whitespace = false;

        for (index, ch) in self.raw_value[..self.cursor].char_indices().rev() {
            if !found_non_whitespace {
                start = index;
                if !ch.is_whitespace() {
                    found_non_whitespace = true;
                }
                continue;
            }

            if ch.is_whitespace() {
                start = index + ch.len_utf8();
                break;
            }

            start = index;
        }

        self.raw_value.drain(start..self.cursor);
        self.cursor = start;
        self.mark_edited();
    }

    /// Move cursor left by one character
    pub fn cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.raw_value[..self.cursor]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
        }
    }

    /// Move cursor right by one character
    pub fn cursor_right(&mut self) {
        if self.cursor < self.raw_value.len() {
            self.cursor = self.raw_value[self.cursor..]
                .char_indices()
                .nth(1)
                .map_or(self.raw_value.len(), |(i, _)| self.cursor + i);
        }
    }

    /// Move cursor to the start of the input
    pub const fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to the end of the input
    pub fn cursor_end(&mut self) {
        self.cursor = self.raw_value.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_field_is_untouched() {
        let field = FormField::new(FieldKind::Email);
        assert_eq!(field.kind(), FieldKind::Email);
        assert!(field.value().is_empty());
        assert!(!field.has_been_edited());
        assert!(!field.is_invalid());
        assert!(!field.shows_warning());
        assert!(!field.has_content());
    }

    #[test]
    fn test_edit_does_not_evaluate_validity() {
        let mut field = FormField::new(FieldKind::Email);
        field.insert_char('x');
        assert!(field.has_been_edited());
        assert!(!field.is_invalid());
        assert!(!field.shows_warning());
    }

    #[test]
    fn test_commit_sets_invalid_flag() {
        let mut field = FormField::new(FieldKind::Email);
        field.set("abc@@d");
        assert!(field.commit());
        assert!(field.shows_warning());

        field.set("a@b.com");
        // Still flagged until the next blur
        assert!(field.is_invalid());
        assert!(!field.commit());
        assert!(!field.shows_warning());
    }

    #[test]
    fn test_commit_is_idempotent() {
        let mut field = FormField::new(FieldKind::Password);
        field.set("Password1");
        let first = field.commit();
        let second = field.commit();
        assert_eq!(first, second);
        assert!(first);
    }

    #[test]
    fn test_commit_without_edit_hides_warning() {
        let mut field = FormField::new(FieldKind::FullName);
        assert!(field.commit());
        assert!(field.is_invalid());
        assert!(!field.shows_warning());
    }

    #[test]
    fn test_insert_and_backspace() {
        let mut field = FormField::new(FieldKind::FullName);
        for c in "Cody".chars() {
            field.insert_char(c);
        }
        assert_eq!(field.value(), "Cody");
        assert_eq!(field.cursor(), 4);

        field.backspace();
        assert_eq!(field.value(), "Cod");
        assert_eq!(field.cursor(), 3);
    }

    #[test]
    fn test_newlines_are_ignored() {
        let mut field = FormField::new(FieldKind::FullName);
        field.insert_char('\n');
        assert!(field.value().is_empty());
        assert!(!field.has_been_edited());
    }

    #[test]
    fn test_insert_mid_value() {
        let mut field = FormField::new(FieldKind::FullName);
        field.set("Cdy");
        field.cursor_home();
        field.cursor_right();
        field.insert_char('o');
        assert_eq!(field.value(), "Cody");
        assert_eq!(field.cursor(), 2);
    }

    #[test]
    fn test_delete_at_cursor() {
        let mut field = FormField::new(FieldKind::FullName);
        field.set("Coody");
        field.cursor_home();
        field.cursor_right();
        field.delete();
        assert_eq!(field.value(), "Cody");

        field.cursor_end();
        field.delete();
        assert_eq!(field.value(), "Cody");
    }

    #[test]
    fn test_multibyte_cursor_movement() {
        let mut field = FormField::new(FieldKind::FullName);
        field.set("aé");
        field.cursor_left();
        assert_eq!(field.cursor(), 1);
        field.cursor_right();
        assert_eq!(field.cursor(), 3);
        field.backspace();
        assert_eq!(field.value(), "a");
    }

    #[test]
    fn test_delete_word() {
        let mut field = FormField::new(FieldKind::FullName);
        field.set("Cody Tran  ");
        field.delete_word();
        assert_eq!(field.value(), "Cody ");
        field.delete_word();
        assert_eq!(field.value(), "");
        field.delete_word();
        assert_eq!(field.cursor(), 0);
    }

    #[test]
    fn test_clear_line() {
        let mut field = FormField::new(FieldKind::FullName);
        field.clear_line();
        assert!(!field.has_been_edited());

        field.set("Cody");
        field.clear_line();
        assert!(field.value().is_empty());
        assert_eq!(field.cursor(), 0);
        assert!(field.has_been_edited());
    }
}
