//! Modal state

use mongo_voyager_core::types::ConnectionProfile;

/// Number of fields in the profile form: name, host, port, database,
/// username, password, TLS toggle.
pub const PROFILE_FORM_FIELDS: usize = 7;

/// Index of the TLS toggle, the only non-text field.
pub const TLS_FIELD: usize = 6;

/// Profile create/edit form
#[derive(Debug, Clone, Default)]
pub struct ProfileForm {
    /// Name the profile had before editing; None when creating
    pub original_name: Option<String>,
    pub name: String,
    pub host: String,
    pub port: String,
    pub database: String,
    pub username: String,
    /// New password; left empty while editing keeps the stored one
    pub password: String,
    pub tls: bool,
    /// Focused field index
    pub focus: usize,
    /// Whether the password is shown in clear text
    pub show_secret: bool,
    /// Validation error
    pub error: Option<String>,
}

impl ProfileForm {
    /// Empty form for a new profile, default port prefilled.
    pub fn new() -> Self {
        Self {
            port: "27017".to_string(),
            ..Self::default()
        }
    }

    /// Form prefilled from an existing profile.
    pub fn edit(profile: &ConnectionProfile) -> Self {
        Self {
            original_name: Some(profile.name.clone()),
            name: profile.name.clone(),
            host: profile.host.clone(),
            port: profile.port.to_string(),
            database: profile.database.clone(),
            username: profile.username.clone().unwrap_or_default(),
            password: String::new(),
            tls: profile.tls,
            focus: 0,
            show_secret: false,
            error: None,
        }
    }

    /// Label of each field, in focus order.
    pub fn label(index: usize) -> &'static str {
        match index {
            0 => "Name",
            1 => "Host",
            2 => "Port",
            3 => "Database",
            4 => "Username (optional)",
            5 => "Password",
            _ => "TLS",
        }
    }

    /// The focused text field, None when the TLS toggle has focus.
    pub fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            0 => Some(&mut self.name),
            1 => Some(&mut self.host),
            2 => Some(&mut self.port),
            3 => Some(&mut self.database),
            4 => Some(&mut self.username),
            5 => Some(&mut self.password),
            _ => None,
        }
    }

    /// The text value of a field for rendering.
    pub fn text(&self, index: usize) -> &str {
        match index {
            0 => &self.name,
            1 => &self.host,
            2 => &self.port,
            3 => &self.database,
            4 => &self.username,
            _ => &self.password,
        }
    }
}

/// Modal type
#[derive(Debug, Clone)]
pub enum Modal {
    /// Create or edit a connection profile
    ProfileForm(ProfileForm),
    /// Delete confirmation
    ConfirmDelete {
        /// Profile name to delete
        name: String,
        /// Focus: 0 = cancel, 1 = confirm
        focus: usize,
    },
    /// Read-only document preview (sample, explain, indexes, result row)
    Preview {
        title: String,
        content: String,
        scroll: u16,
    },
    /// Keyboard help
    Help,
    /// Error message
    Error { title: String, message: String },
}

/// Modal state container
#[derive(Debug, Default)]
pub struct ModalState {
    /// Currently active modal
    pub active: Option<Modal>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn show_profile_form(&mut self, form: ProfileForm) {
        self.active = Some(Modal::ProfileForm(form));
    }

    pub fn show_confirm_delete(&mut self, name: &str) {
        self.active = Some(Modal::ConfirmDelete {
            name: name.to_string(),
            focus: 0,
        });
    }

    pub fn show_preview(&mut self, title: impl Into<String>, content: impl Into<String>) {
        self.active = Some(Modal::Preview {
            title: title.into(),
            content: content.into(),
            scroll: 0,
        });
    }

    pub fn show_error(&mut self, title: &str, message: &str) {
        self.active = Some(Modal::Error {
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }
}
