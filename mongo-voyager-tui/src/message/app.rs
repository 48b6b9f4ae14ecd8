//! Top-level application messages

use super::{ContentMessage, ModalMessage, NavigationMessage};

/// Application message
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Quit the application
    Quit,

    /// Toggle focus between navigation and content panels
    ToggleFocus,

    /// Navigation panel messages
    Navigation(NavigationMessage),

    /// Content panel messages
    Content(ContentMessage),

    /// Modal messages
    Modal(ModalMessage),

    /// Go back one level (close modal or leave a detail page)
    GoBack,

    /// Reload the data behind the current page
    Refresh,

    /// Show the help modal
    ShowHelp,

    /// Clear the status bar message
    ClearStatus,

    /// No operation (ignored event)
    Noop,
}
