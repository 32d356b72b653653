//! Root application module.
//!
//! Contains the main App component and the AppContext holding shell-owned
//! state, following Leptos conventions.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::AppRouter;
use crate::config::endpoints;
use crate::core::routes::{default_routes, synthesize};
use crate::models::RouteEntry;
use crate::models::profile::RoutesData;
use crate::utils::{dom, fetch_json};

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from any child
/// component using `use_context::<AppContext>()`. Holds the two pieces of
/// state the shell owns outright:
///
/// - **Navigation model**: built once per page load, replaced wholesale if
///   the server delivers a section list. Children read it, never write it.
/// - **Dark mode**: toggled by an explicit user action in the chrome; the
///   palette itself lives in CSS keyed off a `data-theme` attribute.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Ordered navigation model; insertion order is display order.
    pub routes: RwSignal<Vec<RouteEntry>>,
    /// Light/dark palette selection.
    pub dark_mode: RwSignal<bool>,
}

impl AppContext {
    /// Creates a new context with the default navigation skeleton and the
    /// light palette.
    pub fn new() -> Self {
        Self {
            routes: RwSignal::new(default_routes()),
            dark_mode: RwSignal::new(false),
        }
    }

    pub fn toggle_dark_mode(&self) {
        self.dark_mode.update(|dark| *dark = !*dark);
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Route loading
// ============================================================================

/// Fetch the server-delivered section list once per page load.
///
/// This is the one place a failure is fully swallowed: navigation must
/// remain usable with zero backend availability, so any error or missing
/// `sections` field silently leaves the defaults in place.
fn load_routes(ctx: AppContext) {
    spawn_local(async move {
        match fetch_json::<RoutesData>(endpoints::ROUTES).await {
            Ok(RoutesData {
                sections: Some(sections),
            }) => {
                ctx.routes
                    .set(synthesize(&default_routes(), Some(&sections)));
            }
            Ok(RoutesData { sections: None }) => {}
            Err(err) => {
                leptos::logging::warn!("Error loading routes: {err}");
            }
        }
    });
}

// ============================================================================
// App Component
// ============================================================================

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Kicks off the one-shot routes fetch
/// - Mirrors the dark-mode flag onto the document element
/// - Wraps the app in an ErrorBoundary for graceful error handling
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    load_routes(ctx);

    Effect::new(move || {
        dom::set_color_scheme(ctx.dark_mode.get());
    });

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    text-align: center;
                ">
                    <h1>"Something went wrong"</h1>
                    <p>"An unexpected error occurred. Please try reloading the page."</p>
                    <ul style="list-style: none; padding: 0;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}
