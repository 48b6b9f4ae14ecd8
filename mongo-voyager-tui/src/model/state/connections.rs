//! Connections page state

use mongo_voyager_core::types::ConnectionProfile;

/// Connections page state
#[derive(Debug, Default)]
pub struct ConnectionsState {
    /// Saved profiles
    pub profiles: Vec<ConnectionProfile>,
    /// Currently selected index
    pub selected: usize,
    /// Error message
    pub error: Option<String>,
}

impl ConnectionsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn select_next(&mut self) {
        if !self.profiles.is_empty() && self.selected < self.profiles.len() - 1 {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        if !self.profiles.is_empty() {
            self.selected = self.profiles.len() - 1;
        }
    }

    pub fn selected_profile(&self) -> Option<&ConnectionProfile> {
        self.profiles.get(self.selected)
    }

    pub fn set_profiles(&mut self, profiles: Vec<ConnectionProfile>) {
        self.profiles = profiles;
        if self.selected >= self.profiles.len() {
            self.selected = self.profiles.len().saturating_sub(1);
        }
        self.error = None;
    }
}
