//! View layer: rendering
//!
//! Pure functions from the model to the frame. Nothing here mutates state.

pub mod components;
pub mod layout;
pub mod pages;
pub mod theme;

pub use layout::render;
