//! Message layer: events as data
//!
//! The bridge between Event and Update. Every user action is expressed as
//! a message; the update layer consumes messages to mutate the model.

mod app;
mod content;
mod modal;
mod navigation;

pub use app::AppMessage;
pub use content::ContentMessage;
pub use modal::ModalMessage;
pub use navigation::NavigationMessage;
