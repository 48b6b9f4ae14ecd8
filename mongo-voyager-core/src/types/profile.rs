//! Connection profile types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A saved MongoDB connection profile.
///
/// The password is never part of the profile; it lives in the OS secret
/// store, keyed by `name`. The `name` is the unique, user-chosen key for
/// both the profile file and the secret-store entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConnectionProfile {
    /// Profile name (unique key)
    pub name: String,
    /// Host name or IP address
    pub host: String,
    /// Port number
    pub port: u16,
    /// Database name
    pub database: String,
    /// Username (optional; no authentication when absent)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Whether to use TLS
    #[serde(default)]
    pub tls: bool,
    /// Creation time
    #[serde(rename = "createdAt")]
    #[serde(with = "crate::utils::datetime")]
    pub created_at: DateTime<Utc>,
    /// Last update time
    #[serde(rename = "updatedAt")]
    #[serde(with = "crate::utils::datetime")]
    pub updated_at: DateTime<Utc>,
}

impl ConnectionProfile {
    /// Create a profile with both timestamps set to now.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        host: impl Into<String>,
        port: u16,
        database: impl Into<String>,
        username: Option<String>,
        tls: bool,
    ) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            host: host.into(),
            port,
            database: database.into(),
            username,
            tls,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A profile merged with its password, ready to hand to the driver.
#[derive(Debug, Clone)]
pub struct ResolvedProfile {
    /// The non-secret profile fields
    pub profile: ConnectionProfile,
    /// Password from the secret store (empty string when none stored)
    pub password: String,
}

/// Outcome of a short-lived connection test.
#[derive(Debug, Clone, Serialize)]
pub struct ConnectionTestReport {
    /// Whether the server answered the ping
    pub success: bool,
    /// Human-readable reason
    pub message: String,
}
