//! Navigation model synthesis.
//!
//! Merges the build-time default navigation skeleton with the optional
//! server-delivered section list from `routes.json`. Navigation must never
//! be empty: any absent, failed, or malformed server response degrades to
//! the defaults.

use crate::models::RouteEntry;
use crate::models::profile::SectionEntry;

/// Build-time navigation skeleton used until (and unless) the server
/// provides its own section list.
pub fn default_routes() -> Vec<RouteEntry> {
    vec![
        RouteEntry::new("Home", "/"),
        RouteEntry::new("About", "/about"),
        RouteEntry::new("Education", "/education"),
        RouteEntry::new("Experience", "/experience"),
        RouteEntry::new("Projects", "/projects"),
        RouteEntry::new("Skills", "/skills"),
    ]
}

/// Combine the default skeleton with server-provided sections.
///
/// With `sections` absent the defaults are returned unchanged. Otherwise
/// the Home entry is synthesized locally and the server sections are
/// appended in order; a server entry claiming the root path is dropped so
/// Home can never be duplicated by upstream data. Idempotent: the same
/// inputs always yield a structurally identical model.
pub fn synthesize(defaults: &[RouteEntry], sections: Option<&[SectionEntry]>) -> Vec<RouteEntry> {
    let Some(sections) = sections else {
        return defaults.to_vec();
    };

    let mut model = vec![RouteEntry::new("Home", "/")];
    model.extend(
        sections
            .iter()
            .filter(|section| section.path.trim_start_matches('/') != "")
            .map(|section| RouteEntry::new(&section.header_title, &section.path)),
    );
    model
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(title: &str, path: &str) -> SectionEntry {
        SectionEntry {
            header_title: title.to_string(),
            path: path.to_string(),
        }
    }

    #[test]
    fn test_absent_sections_fall_back_to_defaults() {
        let defaults = default_routes();
        let model = synthesize(&defaults, None);
        assert_eq!(model, defaults);
        let homes = model.iter().filter(|r| r.path == "/").count();
        assert_eq!(homes, 1);
    }

    #[test]
    fn test_home_entry_is_always_first() {
        let defaults = default_routes();

        let empty = synthesize(&defaults, Some(&[]));
        assert_eq!(empty, vec![RouteEntry::new("Home", "/")]);

        let model = synthesize(&defaults, Some(&[section("Work", "/work")]));
        assert_eq!(model[0], RouteEntry::new("Home", "/"));
    }

    #[test]
    fn test_server_sections_appended_in_order() {
        let defaults = default_routes();
        let sections = [section("Work", "/work"), section("Talks", "/talks")];
        let model = synthesize(&defaults, Some(&sections));
        assert_eq!(
            model,
            vec![
                RouteEntry::new("Home", "/"),
                RouteEntry::new("Work", "/work"),
                RouteEntry::new("Talks", "/talks"),
            ]
        );
    }

    #[test]
    fn test_server_root_entry_cannot_duplicate_home() {
        let defaults = default_routes();
        let sections = [section("Start", "/"), section("Work", "/work")];
        let model = synthesize(&defaults, Some(&sections));
        let homes = model.iter().filter(|r| r.path == "/").count();
        assert_eq!(homes, 1);
        assert_eq!(model[0].name, "Home");
    }

    #[test]
    fn test_synthesize_is_idempotent() {
        let defaults = default_routes();
        let sections = [section("Work", "/work")];
        let first = synthesize(&defaults, Some(&sections));
        let second = synthesize(&defaults, Some(&sections));
        assert_eq!(first, second);
    }
}
