//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuBriefcase as Work, LuGraduationCap as Education, LuList as Menu, LuMoon as Moon,
        LuSun as Sun, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsBriefcase as Work, BsListUl as Menu, BsMoonStars as Moon, BsMortarboard as Education,
        BsSun as Sun, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(MENU, Menu);
themed_icon!(CLOSE, Close);
themed_icon!(SUN, Sun);
themed_icon!(MOON, Moon);
themed_icon!(EDUCATION, Education);
themed_icon!(WORK, Work);

// =============================================================================
// Social Network Icons
// =============================================================================

/// Resolve a brand icon from a social link's `network` field.
///
/// Brand icons are only available in the Bootstrap set, so this mapping is
/// not themed. Unknown networks get a globe.
pub fn social_icon(network: &str) -> Icon {
    match network.to_ascii_lowercase().as_str() {
        "github" => icondata::BsGithub,
        "linkedin" => icondata::BsLinkedin,
        "twitter" | "x" => icondata::BsTwitter,
        "email" | "mail" => icondata::BsEnvelope,
        _ => icondata::BsGlobe,
    }
}
