//! Model layer: application state
//!
//! The single source of truth for the UI. Pure data apart from the backend
//! handle; all mutation happens in the update layer, all reading in the
//! view layer.
//!
//! `Page` is the door number (where the user is); the structs under
//! `state/` are the room contents (lists, selection, loaded data).

mod app;
mod focus;
mod navigation;
mod page;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use navigation::{NavItem, NavItemId, NavigationState};
pub use page::Page;
pub use state::{CollectionsState, ConnectionsState, Modal, ModalState, QueryState};
