//! Utility modules for web and DOM operations.
//!
//! Provides:
//! - [`fetch_json`] - Network fetching into typed payloads
//! - [`dom`] - Safe access to window, scroll, and hash APIs
//! - [`markdown_to_html`] - Markdown rendering with XSS sanitization

pub mod dom;
mod fetch;
mod markdown;

pub use fetch::fetch_json;
pub use markdown::markdown_to_html;
