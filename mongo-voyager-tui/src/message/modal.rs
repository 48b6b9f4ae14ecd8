//! Modal messages

/// Modal message
#[derive(Debug, Clone)]
pub enum ModalMessage {
    /// Close the modal
    Close,

    /// Move to the next input field
    NextField,

    /// Move to the previous input field
    PrevField,

    /// Confirm / submit
    Confirm,

    /// Toggle focus in the delete confirmation modal
    ToggleDeleteFocus,

    /// Toggle the boolean field under focus (TLS)
    ToggleFlag,

    /// Input a character into the focused field
    Input(char),

    /// Delete the last character of the focused field
    Backspace,

    /// Toggle password visibility
    ToggleSecrets,

    /// Scroll preview content up
    ScrollUp,

    /// Scroll preview content down
    ScrollDown,
}
