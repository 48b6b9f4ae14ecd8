//! Page routing state

/// Page enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// Saved connection profiles
    #[default]
    Connections,
    /// Collections of the active database
    Collections,
    /// Query editor and results
    Query,
}

impl Page {
    /// Page title
    pub fn title(self) -> &'static str {
        match self {
            Self::Connections => "Connections",
            Self::Collections => "Collections",
            Self::Query => "Query",
        }
    }

    /// Whether Esc should step back to a parent page
    pub fn parent(self) -> Option<Self> {
        match self {
            Self::Connections => None,
            Self::Collections => Some(Self::Connections),
            Self::Query => Some(Self::Collections),
        }
    }
}
