//! Custom hooks shared across components.
//!
//! Provides the remote-content loading state machine every section uses,
//! and the viewport/scroll observer driving the navigation chrome.

use leptos::prelude::*;
use leptos_use::{use_media_query, use_window_scroll};
use serde::de::DeserializeOwned;
use wasm_bindgen_futures::spawn_local;

use crate::config::MOBILE_BREAKPOINT_PX;
use crate::models::ContentState;
use crate::utils::fetch_json;

// ============================================================================
// Remote Content Loader
// ============================================================================

/// Issue one fetch for a named JSON resource and expose its tri-state
/// result.
///
/// The returned signal starts at `Pending` and settles exactly once, to
/// `Ready` or `Failed`. No retries, no caching, no de-duplication: each
/// caller owns an independent request tied to its own lifetime, and a
/// re-mounted section simply fetches again. `resource` is the name used
/// in failure messages ("Failed to fetch projects").
pub fn use_remote_content<T>(resource: &'static str, url: &'static str) -> ReadSignal<ContentState<T>>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    let (state, set_state) = signal(ContentState::Pending);

    spawn_local(async move {
        let result = fetch_json::<T>(url).await;
        // The owning section may have been torn down while the request
        // was in flight; a disposed signal is left alone.
        let _ = set_state.try_set(ContentState::from_result(result, resource));
    });

    state
}

// ============================================================================
// Viewport & Scroll Chrome Controller
// ============================================================================

/// Reactive chrome state derived from viewport size and scroll offset.
///
/// `is_mobile` and `is_scrolled` are push-based subscriptions (media query
/// and scroll events) that detach when the observing component is torn
/// down. The drawer flag is owned here; crossing back above the mobile
/// breakpoint force-closes it.
#[derive(Clone, Copy)]
pub struct ChromeState {
    /// Viewport is below the mobile breakpoint.
    pub is_mobile: Signal<bool>,
    /// Scroll offset has departed from zero (drives app-bar elevation only).
    pub is_scrolled: Signal<bool>,
    /// Mobile navigation drawer open/closed.
    pub drawer_open: RwSignal<bool>,
}

impl ChromeState {
    pub fn toggle_drawer(&self) {
        self.drawer_open.update(|open| *open = !*open);
    }

    pub fn close_drawer(&self) {
        self.drawer_open.set(false);
    }
}

/// Hook that wires up the chrome controller. Call once in the navbar.
pub fn use_chrome() -> ChromeState {
    let is_mobile = use_media_query(format!("(max-width: {MOBILE_BREAKPOINT_PX}px)"));

    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = Signal::derive(move || scroll_y.get() > 0.0);

    let drawer_open = RwSignal::new(false);
    Effect::new(move || {
        if !is_mobile.get() {
            drawer_open.set(false);
        }
    });

    ChromeState {
        is_mobile,
        is_scrolled,
        drawer_open,
    }
}
