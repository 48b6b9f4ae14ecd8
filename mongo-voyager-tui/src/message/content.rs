//! Content panel messages

/// Content panel message
#[derive(Debug, Clone)]
pub enum ContentMessage {
    // ========== List navigation ==========
    /// Select the previous item
    SelectPrevious,
    /// Select the next item
    SelectNext,
    /// Jump to the first item
    SelectFirst,
    /// Jump to the last item
    SelectLast,
    /// Confirm the selection (connect, open a collection, run the query)
    Confirm,

    // ========== CRUD ==========
    /// Add a new profile
    Add,
    /// Edit the selected profile
    Edit,
    /// Delete the selected item
    Delete,

    // ========== Connections page ==========
    /// Test the selected profile without saving anything
    Test,

    // ========== Collections page ==========
    /// Preview sample documents of the selected collection
    Sample,
    /// Show the indexes of the selected collection
    Indexes,

    // ========== Query page ==========
    /// Append a character to the query text
    Input(char),
    /// Remove the last character of the query text
    Backspace,
    /// Switch text input between the filter and the projection editor
    ToggleProjection,
    /// Show the server's query plan
    Explain,
    /// Open the selected result document in a preview modal
    Preview,
    /// Load the next result page
    NextPage,
    /// Load the previous result page
    PrevPage,
}
