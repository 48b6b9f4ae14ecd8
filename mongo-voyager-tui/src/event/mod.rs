//! Event layer: input handling
//!
//! Translates keyboard events into messages. Nothing here mutates state;
//! the update layer consumes the returned message on the same loop turn.

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
