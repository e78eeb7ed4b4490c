//! Key bindings for indicator navigation.

use bubbletea_rs::KeyMsg;
use crossterm::event::KeyCode;

/// A set of keys bound to one action, with help text.
#[derive(Debug, Clone)]
pub struct Binding {
    /// The key codes that trigger this binding.
    pub keys: Vec<KeyCode>,
    /// Short help label (e.g. "←/h").
    pub help: String,
    /// Help description (e.g. "prev page").
    pub description: String,
}

impl Binding {
    /// Creates a binding for the given keys with empty help text.
    pub fn new(keys: Vec<KeyCode>) -> Self {
        Self {
            keys,
            help: String::new(),
            description: String::new(),
        }
    }

    /// Sets the help label and description (builder pattern).
    pub fn with_help(mut self, help: impl Into<String>, description: impl Into<String>) -> Self {
        self.help = help.into();
        self.description = description.into();
        self
    }

    /// Returns true if the key message matches one of this binding's keys.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.keys.contains(&msg.key)
    }
}

/// Help metadata for a component's key bindings.
///
/// Components expose their bindings through this trait so a help view can
/// render them without knowing the component.
pub trait KeyMap {
    /// Bindings for the compact help line.
    fn short_help(&self) -> Vec<&Binding>;
    /// Bindings for the expanded help view, grouped into columns.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_binding_matches() {
        let binding =
            Binding::new(vec![KeyCode::Left, KeyCode::Char('h')]).with_help("←/h", "prev page");
        assert!(binding.matches(&key(KeyCode::Left)));
        assert!(binding.matches(&key(KeyCode::Char('h'))));
        assert!(!binding.matches(&key(KeyCode::Right)));
    }

    #[test]
    fn test_with_help() {
        let binding = Binding::new(vec![KeyCode::Right]).with_help("→/l", "next page");
        assert_eq!(binding.help, "→/l");
        assert_eq!(binding.description, "next page");
    }
}
