//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`navbar`] - Fixed navigation chrome (app bar + mobile drawer)
//! - [`portfolio`] - Composed single-page view of all content sections
//! - [`sections`] - Individually data-driven content sections
//! - [`feedback`] - Shared loading/error indicators
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod feedback;
pub mod hooks;
pub mod icons;
pub mod navbar;
pub mod portfolio;
pub mod router;
pub mod sections;
pub mod theme;

pub use router::AppRouter;
