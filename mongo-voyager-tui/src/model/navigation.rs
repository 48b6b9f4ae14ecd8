//! Navigation panel state

/// Navigation item ID
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItemId {
    Connections,
    Collections,
    Query,
}

/// Navigation item
#[derive(Debug, Clone)]
pub struct NavItem {
    pub id: NavItemId,
    pub label: &'static str,
    pub icon: &'static str,
}

/// Navigation state
pub struct NavigationState {
    /// Navigation items
    pub items: Vec<NavItem>,
    /// Currently selected index
    pub selected: usize,
}

impl NavigationState {
    pub fn new() -> Self {
        Self {
            items: vec![
                NavItem {
                    id: NavItemId::Connections,
                    label: "Connections",
                    icon: "@",
                },
                NavItem {
                    id: NavItemId::Collections,
                    label: "Collections",
                    icon: "▤",
                },
                NavItem {
                    id: NavItemId::Query,
                    label: "Query",
                    icon: ">",
                },
            ],
            selected: 0,
        }
    }

    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn select_next(&mut self) {
        if self.selected < self.items.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    pub fn current_id(&self) -> Option<NavItemId> {
        self.items.get(self.selected).map(|item| item.id)
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}
