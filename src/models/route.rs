//! Navigation destinations and hash-based routing.
//!
//! The site is a single-page app served from a static host, so navigation
//! state lives in the URL hash (`#/about`) rather than the path. Browser
//! back/forward buttons work via `hashchange` events.

/// One navigation destination: a display label plus a path identifier.
///
/// Paths are unique within a navigation model and the entry with
/// `path == "/"` (Home) is always present and always first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    /// Display label shown in the navigation chrome.
    pub name: String,
    /// Absolute path identifier (e.g. `/projects`).
    pub path: String,
}

impl RouteEntry {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// In-page anchor id for this destination: the path minus its leading
    /// separator. The Home entry maps to the hero section's `home` anchor.
    pub fn anchor(&self) -> String {
        let anchor = self.path.trim_start_matches('/');
        if anchor.is_empty() {
            "home".to_string()
        } else {
            anchor.to_string()
        }
    }
}

/// Application routes for hash-based navigation.
///
/// URL format: `#/` for the composed home page, `#/about` (etc.) for a
/// standalone section page.
#[derive(Clone, Debug, PartialEq)]
pub enum AppRoute {
    /// Composed single-page view: `#/` or empty hash.
    Home,
    /// Standalone section page: `#/about`, `#/projects`, ...
    Section {
        /// Normalized path with exactly one leading separator.
        path: String,
    },
}

impl AppRoute {
    /// Parse a URL hash into a route.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_start_matches('/');

        if path.is_empty() {
            return Self::Home;
        }

        Self::Section {
            path: format!("/{}", path),
        }
    }

    /// Parse a path (with or without a leading separator) into a route.
    pub fn from_path(path: &str) -> Self {
        Self::from_hash(path)
    }

    /// Convert the route to a URL hash.
    pub fn to_hash(&self) -> String {
        match self {
            Self::Home => "#/".to_string(),
            Self::Section { path } => format!("#{}", path),
        }
    }

    /// The current path, normalized to one leading separator.
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Section { path } => path.clone(),
        }
    }

    /// Whether this is the composed home view (scroll-mode navigation).
    pub fn is_home(&self) -> bool {
        matches!(self, Self::Home)
    }

    /// Get the current route from the browser URL.
    pub fn current() -> Self {
        let hash = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        Self::from_hash(&hash)
    }

    /// Update the browser URL to match this route.
    ///
    /// Sets `location.hash` so a `hashchange` event fires and the router's
    /// route signal picks up the change.
    pub fn push(&self) {
        crate::utils::dom::set_hash(&self.to_hash());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!(AppRoute::from_hash(""), AppRoute::Home);
        assert_eq!(AppRoute::from_hash("#"), AppRoute::Home);
        assert_eq!(AppRoute::from_hash("#/"), AppRoute::Home);
        assert_eq!(
            AppRoute::from_hash("#/about"),
            AppRoute::Section {
                path: "/about".to_string(),
            }
        );
        assert_eq!(
            AppRoute::from_hash("#/projects"),
            AppRoute::Section {
                path: "/projects".to_string(),
            }
        );
    }

    #[test]
    fn test_route_to_hash() {
        assert_eq!(AppRoute::Home.to_hash(), "#/");
        assert_eq!(
            AppRoute::Section {
                path: "/education".to_string(),
            }
            .to_hash(),
            "#/education"
        );
    }

    #[test]
    fn test_from_path_normalizes() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Home);
        assert_eq!(
            AppRoute::from_path("work"),
            AppRoute::Section {
                path: "/work".to_string(),
            }
        );
        assert_eq!(AppRoute::from_path("/skills").path(), "/skills");
    }

    #[test]
    fn test_anchor_strips_separator() {
        assert_eq!(RouteEntry::new("About", "/about").anchor(), "about");
        assert_eq!(RouteEntry::new("Home", "/").anchor(), "home");
        assert_eq!(RouteEntry::new("Work", "work").anchor(), "work");
    }
}
