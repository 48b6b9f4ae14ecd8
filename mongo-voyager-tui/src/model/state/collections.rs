//! Collections page state

/// Collections page state
#[derive(Debug, Default)]
pub struct CollectionsState {
    /// Collection names of the active database
    pub collections: Vec<String>,
    /// Currently selected index
    pub selected: usize,
    /// Name of the connected profile, None while disconnected
    pub profile: Option<String>,
}

impl CollectionsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn select_next(&mut self) {
        if !self.collections.is_empty() && self.selected < self.collections.len() - 1 {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        if !self.collections.is_empty() {
            self.selected = self.collections.len() - 1;
        }
    }

    pub fn selected_collection(&self) -> Option<&str> {
        self.collections.get(self.selected).map(String::as_str)
    }

    pub fn set_collections(&mut self, profile: String, collections: Vec<String>) {
        self.profile = Some(profile);
        self.collections = collections;
        self.selected = 0;
    }

    pub fn clear(&mut self) {
        self.profile = None;
        self.collections.clear();
        self.selected = 0;
    }
}
