use super::action::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KeyConfig {
    pub profile: String,
    pub custom: Option<HashMap<String, String>>,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            profile: "default".to_string(),
            custom: None,
        }
    }
}

/// Browse-mode bindings. Palette-mode keys are context-sensitive (empty
/// query, active filter) and live in the input mapper instead.
#[derive(Debug, PartialEq)]
pub struct KeyMap {
    pub global: HashMap<KeyEvent, Action>,
}

impl KeyMap {
    #[must_use]
    pub fn from_config(_config: &KeyConfig) -> Self {
        let mut global = HashMap::new();

        global.insert(ctrl('k'), Action::TogglePalette);
        global.insert(key(KeyCode::Char('k')), Action::OpenPalette);
        global.insert(key(KeyCode::Char('q')), Action::Quit);
        global.insert(key(KeyCode::Esc), Action::CancelMode);

        Self { global }
    }

    #[must_use]
    pub fn get_action(&self, event: KeyEvent) -> Option<Action> {
        self.global.get(&event).cloned()
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}
