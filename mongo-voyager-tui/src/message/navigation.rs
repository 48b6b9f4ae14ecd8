//! Navigation panel messages

/// Navigation panel message
#[derive(Debug, Clone)]
pub enum NavigationMessage {
    /// Move selection up
    SelectPrevious,
    /// Move selection down
    SelectNext,
    /// Jump to the first item
    SelectFirst,
    /// Jump to the last item
    SelectLast,
    /// Open the selected page
    Confirm,
}
