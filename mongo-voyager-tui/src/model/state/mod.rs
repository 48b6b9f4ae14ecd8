//! Page data state

mod collections;
mod connections;
mod modal;
mod query;

pub use collections::CollectionsState;
pub use connections::ConnectionsState;
pub use modal::{Modal, ModalState, ProfileForm, PROFILE_FORM_FIELDS, TLS_FIELD};
pub use query::QueryState;
