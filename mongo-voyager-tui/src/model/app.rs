//! Main application state

use anyhow::Result;

use crate::backend::CoreService;

use super::{
    CollectionsState, ConnectionsState, FocusPanel, ModalState, NavigationState, Page, QueryState,
};

/// Main application state
pub struct App {
    /// Whether the main loop should exit
    pub should_quit: bool,

    /// Focused panel
    pub focus: FocusPanel,

    /// Navigation panel state
    pub navigation: NavigationState,

    /// Current page
    pub current_page: Page,

    /// Status bar message
    pub status_message: Option<String>,

    // === Page states ===
    /// Connections page state
    pub connections: ConnectionsState,
    /// Collections page state
    pub collections: CollectionsState,
    /// Query page state
    pub query: QueryState,

    /// Modal state
    pub modal: ModalState,

    /// Bridge to the core services
    pub backend: CoreService,
}

impl App {
    /// Create the application: build the backend and load saved profiles.
    pub fn new() -> Result<Self> {
        let backend = CoreService::new()?;

        let mut app = Self {
            should_quit: false,
            focus: FocusPanel::Navigation,
            navigation: NavigationState::new(),
            current_page: Page::Connections,
            status_message: None,
            connections: ConnectionsState::new(),
            collections: CollectionsState::new(),
            query: QueryState::new(),
            modal: ModalState::new(),
            backend,
        };

        match app.backend.list_profiles() {
            Ok(profiles) => app.connections.set_profiles(profiles),
            Err(e) => app.connections.error = Some(e.to_string()),
        }

        Ok(app)
    }

    /// Set the status bar message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status bar message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
