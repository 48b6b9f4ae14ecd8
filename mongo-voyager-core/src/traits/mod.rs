//! Storage layer abstraction trait definition

mod credential_store;
mod profile_repository;

pub use credential_store::CredentialStore;
pub use profile_repository::ProfileRepository;
