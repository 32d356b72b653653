//! Navigation mode resolution and active-link computation.
//!
//! A navigation link behaves differently depending on where the user is:
//! on the composed home view it scrolls to an in-page section, on any
//! standalone page it performs a full route change. The choice is an
//! explicit two-variant strategy rather than ad-hoc branching at each
//! call site.

use crate::models::RouteEntry;

/// What activating a navigation link should do.
#[derive(Clone, Debug, PartialEq)]
pub enum NavAction {
    /// Smooth-scroll the viewport to the in-page section with this anchor.
    ScrollTo { anchor: String },
    /// Perform a full route change to this normalized path.
    Navigate { path: String },
}

/// Normalize a path to exactly one leading separator.
pub fn normalize_path(path: &str) -> String {
    format!("/{}", path.trim_start_matches('/'))
}

/// Select the navigation strategy for a link.
pub fn resolve(target: &RouteEntry, is_home_route: bool) -> NavAction {
    if is_home_route {
        NavAction::ScrollTo {
            anchor: target.anchor(),
        }
    } else {
        NavAction::Navigate {
            path: normalize_path(&target.path),
        }
    }
}

/// Scroll-spy: pick the section nearest the top of the viewport.
///
/// `positions` holds `(anchor, document offset)` pairs in document order.
/// The active section is the one with the greatest offset not past
/// `scroll_y + spy_offset`; ties break toward the earliest section. Returns
/// `None` when no section has been reached (or none are rendered).
pub fn active_section(positions: &[(String, f64)], scroll_y: f64, spy_offset: f64) -> Option<usize> {
    let threshold = scroll_y + spy_offset + 1.0;
    let mut best: Option<(usize, f64)> = None;

    for (index, (_, top)) in positions.iter().enumerate() {
        if *top > threshold {
            continue;
        }
        match best {
            Some((_, best_top)) if *top <= best_top => {}
            _ => best = Some((index, *top)),
        }
    }

    best.map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions() -> Vec<(String, f64)> {
        vec![
            ("home".to_string(), 0.0),
            ("about".to_string(), 800.0),
            ("skills".to_string(), 1600.0),
            ("projects".to_string(), 2400.0),
        ]
    }

    #[test]
    fn test_resolve_scroll_mode_on_home() {
        let entry = RouteEntry::new("Projects", "/projects");
        assert_eq!(
            resolve(&entry, true),
            NavAction::ScrollTo {
                anchor: "projects".to_string(),
            }
        );
    }

    #[test]
    fn test_resolve_navigation_mode_off_home() {
        let entry = RouteEntry::new("Projects", "projects");
        assert_eq!(
            resolve(&entry, false),
            NavAction::Navigate {
                path: "/projects".to_string(),
            }
        );
    }

    #[test]
    fn test_normalize_path_single_separator() {
        assert_eq!(normalize_path("about"), "/about");
        assert_eq!(normalize_path("/about"), "/about");
        assert_eq!(normalize_path("//about"), "/about");
        assert_eq!(normalize_path("/"), "/");
    }

    #[test]
    fn test_spy_at_top_activates_first_section() {
        assert_eq!(active_section(&positions(), 0.0, 64.0), Some(0));
    }

    #[test]
    fn test_spy_tracks_scroll_position() {
        let positions = positions();
        assert_eq!(active_section(&positions, 750.0, 64.0), Some(1));
        assert_eq!(active_section(&positions, 1700.0, 64.0), Some(2));
        assert_eq!(active_section(&positions, 9000.0, 64.0), Some(3));
    }

    #[test]
    fn test_spy_section_just_past_threshold_is_inactive() {
        let positions = positions();
        // about at 800 is not reached at y=700 (700 + 64 + 1 < 800)
        assert_eq!(active_section(&positions, 700.0, 64.0), Some(0));
    }

    #[test]
    fn test_spy_ties_break_toward_earliest() {
        let positions = vec![
            ("a".to_string(), 100.0),
            ("b".to_string(), 100.0),
            ("c".to_string(), 500.0),
        ];
        assert_eq!(active_section(&positions, 200.0, 64.0), Some(0));
    }

    #[test]
    fn test_spy_no_sections_means_no_active_link() {
        assert_eq!(active_section(&[], 500.0, 64.0), None);
    }

    #[test]
    fn test_nav_mode_active_is_unique() {
        // Navigation mode highlights by exact path equality; unique paths
        // guarantee at most one active entry for any current path.
        let model = vec![
            RouteEntry::new("Home", "/"),
            RouteEntry::new("About", "/about"),
            RouteEntry::new("Projects", "/projects"),
        ];

        for current in ["/", "/about", "/projects", "/nowhere"] {
            let active = model.iter().filter(|entry| entry.path == current).count();
            assert!(active <= 1);
        }

        let active = model
            .iter()
            .filter(|entry| entry.path == "/projects")
            .count();
        assert_eq!(active, 1);
    }
}
