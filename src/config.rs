//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Site title displayed in the navigation bar.
pub const APP_TITLE: &str = "Portfolio";

// =============================================================================
// Content Endpoints
// =============================================================================

/// Static JSON endpoints, one per content section.
///
/// Each endpoint returns a fixed schema (see [`crate::models::profile`]).
/// The `ROUTES` endpoint is optional: when it is unreachable or malformed,
/// navigation falls back to the built-in defaults.
pub mod endpoints {
    pub const HOME: &str = "/profile/home.json";
    pub const ABOUT: &str = "/profile/about.json";
    pub const SOCIAL: &str = "/profile/social.json";
    pub const SKILLS: &str = "/profile/skills.json";
    pub const EXPERIENCES: &str = "/profile/experiences.json";
    pub const EDUCATION: &str = "/profile/education.json";
    pub const PROJECTS: &str = "/profile/projects.json";
    pub const ROUTES: &str = "/profile/routes.json";
}

// =============================================================================
// Chrome Configuration
// =============================================================================

/// Height of the fixed app bar in pixels.
///
/// In-page scroll targets are offset by this amount so section headings
/// clear the bar, and the scroll spy uses it as its activation threshold.
pub const NAVBAR_HEIGHT_PX: f64 = 64.0;

/// Viewport width below which the drawer replaces the inline link row.
pub const MOBILE_BREAKPOINT_PX: u32 = 600;

// =============================================================================
// Hero Typewriter Configuration
// =============================================================================

/// Typewriter animation delays (milliseconds).
pub mod typewriter {
    /// Delay between typed characters.
    pub const TYPE_MS: u32 = 80;
    /// Pause after a role is fully typed.
    pub const HOLD_MS: u32 = 1600;
    /// Delay between deleted characters.
    pub const DELETE_MS: u32 = 40;
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
