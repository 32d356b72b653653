//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`RouteEntry`] - One navigation destination (name + path)
//! - [`AppRoute`] - Hash-based navigation state
//! - [`ContentState`] - Tri-state result of a remote content load
//! - [`profile`] - Payload schemas for the content endpoints

mod content;
pub mod profile;
mod route;

pub use content::ContentState;
pub use route::{AppRoute, RouteEntry};
