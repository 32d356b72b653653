//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error
//! handling. Every accessor degrades to a no-op when the window is not
//! available.

use web_sys::{Document, ScrollBehavior, ScrollToOptions, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the document.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Set the URL hash (adds to browser history and fires `hashchange`).
///
/// The hash should include the '#' prefix.
pub fn set_hash(hash: &str) {
    if let Some(window) = window() {
        let _ = window.location().set_hash(hash);
    }
}

/// Document-relative top offset of the section with the given anchor id.
///
/// Returns `None` when no such section is rendered.
pub fn section_top(anchor: &str) -> Option<f64> {
    if anchor.is_empty() {
        return None;
    }
    let element = document()?.get_element_by_id(anchor)?;
    let scroll_y = window()?.page_y_offset().ok()?;
    Some(element.get_bounding_client_rect().top() + scroll_y)
}

/// Smooth-scroll the viewport so the section heading clears the fixed
/// chrome.
///
/// An anchor that matches no rendered section is a silent no-op: malformed
/// server-provided paths must not crash navigation. A scroll issued while
/// a previous one is still animating supersedes it.
pub fn scroll_to_section(anchor: &str, chrome_offset: f64) {
    let Some(top) = section_top(anchor) else {
        return;
    };
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top((top - chrome_offset).max(0.0));
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Write the current palette selection onto the document element.
///
/// The palette values themselves live in CSS keyed off `data-theme`.
pub fn set_color_scheme(dark: bool) {
    if let Some(document) = document()
        && let Some(root) = document.document_element()
    {
        let _ = root.set_attribute("data-theme", if dark { "dark" } else { "light" });
    }
}
