//! Storage adapters
//!
//! Platform implementations of the core storage traits:
//! - `JsonProfileRepository` - profiles in a single JSON file
//! - `KeyringCredentialStore` - passwords in the OS keychain

mod json_profile_repository;
mod keyring_credential_store;

pub use json_profile_repository::JsonProfileRepository;
pub use keyring_credential_store::KeyringCredentialStore;
