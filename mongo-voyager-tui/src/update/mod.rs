//! Update layer: state transitions
//!
//! The only place that mutates the model. Messages arrive from the event
//! layer; complex sub-messages are delegated to the navigation, content,
//! and modal submodules. Content handlers call the backend synchronously;
//! the core bounds every driver call with its connect timeout.

mod content;
mod modal;
mod navigation;

use crate::message::AppMessage;
use crate::model::App;

/// Handle an application message
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            if !app.modal.is_open() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Navigation(nav_msg) => {
            navigation::update(app, nav_msg);
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::GoBack => {
            if app.modal.is_open() {
                app.modal.close();
                app.clear_status();
            } else if let Some(parent) = app.current_page.parent() {
                app.current_page = parent;
                app.clear_status();
            }
        }

        AppMessage::Refresh => {
            content::refresh(app);
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::ClearStatus => {
            app.clear_status();
        }

        AppMessage::Noop => {}
    }
}
