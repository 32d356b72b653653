//! Application router component.
//!
//! Handles URL-based routing with hash history so the site works from any
//! static host. Uses native hashchange events instead of leptos_router.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: navigation state is derived from `#/path`
//! - **NavBar never re-renders on navigation**: it is always mounted
//! - **hashchange events**: browser back/forward buttons work automatically

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::components::navbar::NavBar;
use crate::components::portfolio::Portfolio;
use crate::components::sections::{About, Education, Experience, Projects, Skills};
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/router.module.css");

/// Main application router.
///
/// Routes:
/// - `#/` → composed single-page portfolio (scroll-mode navigation)
/// - `#/about`, `#/education`, ... → standalone section pages
#[component]
pub fn AppRouter() -> impl IntoView {
    // Create route signal from current URL hash
    let route = RwSignal::new(AppRoute::current());

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(AppRoute::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    // Convert to Memo for children (which expect Memo<AppRoute>)
    let route_memo = Memo::new(move |_| route.get());

    view! {
        // NavBar is always rendered (stable across route changes)
        <NavBar route=route_memo />

        <main class=css::main>
            {move || match route_memo.get() {
                AppRoute::Home => view! { <Portfolio /> }.into_any(),
                AppRoute::Section { path } => standalone_page(&path),
            }}
        </main>
    }
}

/// Render the standalone page for a path, if one exists.
///
/// Server-synthesized routes may point at paths with no standalone page;
/// those get a not-found block while the navigation chrome stays usable.
fn standalone_page(path: &str) -> AnyView {
    match path {
        "/about" => view! { <About /> }.into_any(),
        "/education" => view! { <Education /> }.into_any(),
        "/experience" => view! { <Experience /> }.into_any(),
        "/projects" => view! { <Projects /> }.into_any(),
        "/skills" => view! { <Skills /> }.into_any(),
        _ => view! { <NotFound /> }.into_any(),
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class=css::notFound>
            <h2>"Page not found"</h2>
            <p>"This page has no content. Use the navigation above to get back."</p>
        </div>
    }
}
