//! Focus state

/// Focused panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// Left navigation panel
    #[default]
    Navigation,
    /// Right content panel
    Content,
}

impl FocusPanel {
    /// Switch to the other panel
    pub fn toggle(self) -> Self {
        match self {
            Self::Navigation => Self::Content,
            Self::Content => Self::Navigation,
        }
    }

    pub fn is_navigation(self) -> bool {
        matches!(self, Self::Navigation)
    }

    pub fn is_content(self) -> bool {
        matches!(self, Self::Content)
    }
}
