//! Keybinding configuration

use ratatui::crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Open or close the Features dropdown
    ToggleFeatures,
    /// Open or close the Solutions dropdown
    ToggleSolutions,
    /// Close the open dropdown, or leave the sign-up page
    Cancel,
    /// Move focus to the next form control
    NextField,
    /// Move focus to the previous form control
    PrevField,
    /// Submit from the submit control, or advance from a field
    Confirm,
    /// Show or hide the password
    RevealPassword,
    /// Go to the sign-up page
    SignUp,
    /// Quit application
    Quit,
}

impl Action {
    /// Get the display description for this action
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::ToggleFeatures => "Features menu",
            Self::ToggleSolutions => "Solutions menu",
            Self::Cancel => "Close / back",
            Self::NextField => "Next field",
            Self::PrevField => "Previous field",
            Self::Confirm => "Submit / next",
            Self::RevealPassword => "Show password",
            Self::SignUp => "Sign up",
            Self::Quit => "Quit",
        }
    }
}

/// Keybinding configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Map of key strings to actions (for serialization)
    bindings: HashMap<String, Action>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        bindings.insert("F2".to_string(), Action::ToggleFeatures);
        bindings.insert("F3".to_string(), Action::ToggleSolutions);
        bindings.insert("F4".to_string(), Action::SignUp);
        bindings.insert("Esc".to_string(), Action::Cancel);
        bindings.insert("Tab".to_string(), Action::NextField);
        bindings.insert("Down".to_string(), Action::NextField);
        bindings.insert("BackTab".to_string(), Action::PrevField);
        bindings.insert("Up".to_string(), Action::PrevField);
        bindings.insert("Enter".to_string(), Action::Confirm);
        bindings.insert("Ctrl+r".to_string(), Action::RevealPassword);
        bindings.insert("Ctrl+c".to_string(), Action::Quit);
        bindings.insert("Ctrl+q".to_string(), Action::Quit);

        Self { bindings }
    }
}

impl KeyBindings {
    /// Merge in any missing default keybindings
    ///
    /// New default bindings become available even with an older saved config.
    pub fn merge_defaults(&mut self) {
        let defaults = Self::default();
        for (key, action) in defaults.bindings {
            self.bindings.entry(key).or_insert(action);
        }
    }

    /// Get the action for a key event
    #[must_use]
    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        let key_str = key_to_string(code, modifiers);
        self.bindings.get(&key_str).copied()
    }

    /// Set a keybinding
    pub fn set(&mut self, key: &str, action: Action) {
        self.bindings.insert(key.to_string(), action);
    }

    /// Get all bindings for an action
    #[must_use]
    pub fn keys_for_action(&self, action: Action) -> Vec<String> {
        let mut keys: Vec<String> = self
            .bindings
            .iter()
            .filter_map(|(k, &v)| (v == action).then(|| k.clone()))
            .collect();
        // Shortest first, then alphabetical, for a stable display order
        keys.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
        keys
    }

    /// Generate status bar hint text for the given actions
    #[must_use]
    pub fn status_hints(&self, actions: &[Action]) -> String {
        actions
            .iter()
            .map(|action| {
                let key = self
                    .keys_for_action(*action)
                    .into_iter()
                    .next()
                    .unwrap_or_default();
                format!("[{key}] {}", action.description())
            })
            .collect::<Vec<_>>()
            .join("  ")
    }
}

/// Convert a key code and modifiers to a string representation
#[must_use]
pub fn key_to_string(code: KeyCode, modifiers: KeyModifiers) -> String {
    let mut parts = Vec::new();

    if modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl".to_string());
    }
    if modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt".to_string());
    }
    // Shift is implied by the character itself and by BackTab
    if modifiers.contains(KeyModifiers::SHIFT)
        && !matches!(code, KeyCode::Char(_) | KeyCode::BackTab)
    {
        parts.push("Shift".to_string());
    }

    let key_part = match code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "BackTab".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::F(n) => format!("F{n}"),
        _ => return String::new(),
    };

    parts.push(key_part);
    parts.join("+")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(KeyCode::F(2), KeyModifiers::NONE, Some(Action::ToggleFeatures))]
    #[case(KeyCode::F(3), KeyModifiers::NONE, Some(Action::ToggleSolutions))]
    #[case(KeyCode::Esc, KeyModifiers::NONE, Some(Action::Cancel))]
    #[case(KeyCode::Tab, KeyModifiers::NONE, Some(Action::NextField))]
    #[case(KeyCode::BackTab, KeyModifiers::SHIFT, Some(Action::PrevField))]
    #[case(KeyCode::Enter, KeyModifiers::NONE, Some(Action::Confirm))]
    #[case(KeyCode::Char('r'), KeyModifiers::CONTROL, Some(Action::RevealPassword))]
    #[case(KeyCode::Char('c'), KeyModifiers::CONTROL, Some(Action::Quit))]
    #[case(KeyCode::Char('q'), KeyModifiers::NONE, None)]
    #[case(KeyCode::Char('R'), KeyModifiers::SHIFT, None)]
    fn test_default_keybindings(
        #[case] code: KeyCode,
        #[case] modifiers: KeyModifiers,
        #[case] expected: Option<Action>,
    ) {
        let keys = KeyBindings::default();
        assert_eq!(keys.get_action(code, modifiers), expected);
    }

    #[test]
    fn test_set_keybinding() {
        let mut keys = KeyBindings::default();
        keys.set("F10", Action::Quit);

        assert_eq!(
            keys.get_action(KeyCode::F(10), KeyModifiers::NONE),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_keys_for_action_sorted() {
        let keys = KeyBindings::default();
        assert_eq!(
            keys.keys_for_action(Action::NextField),
            vec!["Tab".to_string(), "Down".to_string()]
        );
        assert_eq!(
            keys.keys_for_action(Action::Quit),
            vec!["Ctrl+c".to_string(), "Ctrl+q".to_string()]
        );
    }

    #[test]
    fn test_status_hints() {
        let keys = KeyBindings::default();
        let hints = keys.status_hints(&[Action::ToggleFeatures, Action::Quit]);
        assert_eq!(hints, "[F2] Features menu  [Ctrl+c] Quit");
    }

    #[test]
    fn test_merge_defaults() {
        let mut keys = KeyBindings {
            bindings: [("F2".to_string(), Action::Quit)].into_iter().collect(),
        };

        assert_eq!(keys.get_action(KeyCode::F(3), KeyModifiers::NONE), None);

        keys.merge_defaults();
        assert_eq!(
            keys.get_action(KeyCode::F(3), KeyModifiers::NONE),
            Some(Action::ToggleSolutions)
        );
        // Existing bindings are preserved
        assert_eq!(
            keys.get_action(KeyCode::F(2), KeyModifiers::NONE),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_key_to_string() {
        assert_eq!(key_to_string(KeyCode::Char('a'), KeyModifiers::NONE), "a");
        assert_eq!(
            key_to_string(KeyCode::Char('a'), KeyModifiers::CONTROL),
            "Ctrl+a"
        );
        assert_eq!(key_to_string(KeyCode::BackTab, KeyModifiers::SHIFT), "BackTab");
        assert_eq!(key_to_string(KeyCode::Enter, KeyModifiers::SHIFT), "Shift+Enter");
        assert_eq!(key_to_string(KeyCode::Insert, KeyModifiers::NONE), "");
    }

    #[test]
    fn test_serde_roundtrip() -> Result<(), Box<dyn std::error::Error>> {
        let keys = KeyBindings::default();
        let json = serde_json::to_string(&keys)?;
        let parsed: KeyBindings = serde_json::from_str(&json)?;
        assert_eq!(keys, parsed);
        Ok(())
    }
}
