//! Page views

pub mod collections;
pub mod connections;
pub mod query;
