//! Mongo Voyager TUI
//!
//! Elm-style architecture:
//! - **Model**: application state (`model/`)
//! - **Message**: events as data (`message/`)
//! - **Update**: state transitions (`update/`)
//! - **View**: rendering (`view/`)
//! - **Event**: input translation (`event/`)
//! - **Backend**: bridge to the core services (`backend/`)
//!
//! `main` initializes the terminal, builds the app model (which constructs
//! the backend and loads the saved profiles), runs the main loop, and
//! restores the terminal whether the loop succeeded or not.

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::Result;

use util::{init_terminal, restore_terminal};

fn main() -> Result<()> {
    let mut app = model::App::new()?;

    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app);
    restore_terminal(&mut terminal)?;

    result
}
