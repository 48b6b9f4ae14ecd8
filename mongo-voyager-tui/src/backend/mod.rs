//! Backend layer: bridge between the sync UI loop and the async core

mod core_service;

pub use core_service::CoreService;
