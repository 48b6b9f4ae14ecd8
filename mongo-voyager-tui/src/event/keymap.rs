//! Keyboard shortcut configuration

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Key binding
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// Whether a key event matches this binding
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// Default shortcuts
pub struct DefaultKeymap;

impl DefaultKeymap {
    // Global
    pub const QUIT: KeyBinding = KeyBinding::alt(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::alt(KeyCode::Char('h'));
    pub const REFRESH: KeyBinding = KeyBinding::alt(KeyCode::Char('r'));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);

    // Actions
    pub const ACTION_ADD: KeyBinding = KeyBinding::alt(KeyCode::Char('a'));
    pub const ACTION_EDIT: KeyBinding = KeyBinding::alt(KeyCode::Char('e'));
    pub const ACTION_DELETE: KeyBinding = KeyBinding::alt(KeyCode::Char('d'));
    pub const ACTION_TEST: KeyBinding = KeyBinding::alt(KeyCode::Char('t'));
    pub const ACTION_SAMPLE: KeyBinding = KeyBinding::alt(KeyCode::Char('s'));
    pub const ACTION_INDEXES: KeyBinding = KeyBinding::alt(KeyCode::Char('i'));
    pub const ACTION_EXPLAIN: KeyBinding = KeyBinding::alt(KeyCode::Char('x'));
    pub const ACTION_PREVIEW: KeyBinding = KeyBinding::alt(KeyCode::Char('v'));
    pub const ACTION_PROJECTION: KeyBinding = KeyBinding::alt(KeyCode::Char('o'));
    pub const PAGE_NEXT: KeyBinding = KeyBinding::alt(KeyCode::Char('n'));
    pub const PAGE_PREV: KeyBinding = KeyBinding::alt(KeyCode::Char('p'));
}
