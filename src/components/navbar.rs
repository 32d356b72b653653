//! Fixed navigation chrome: app bar, link row, and mobile drawer.
//!
//! Links behave differently depending on the current route: on the
//! composed home view they smooth-scroll to in-page sections (with
//! scroll-spy highlighting), on standalone pages they perform full route
//! changes (with exact-path highlighting). Scroll offset drives the bar's
//! elevation; viewport width decides between the link row and the drawer.

use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::use_window_scroll;

use crate::app::AppContext;
use crate::components::hooks::{ChromeState, use_chrome};
use crate::components::icons as ic;
use crate::components::theme::ThemeToggle;
use crate::config::{APP_TITLE, NAVBAR_HEIGHT_PX};
use crate::core::nav::{self, NavAction};
use crate::models::{AppRoute, RouteEntry};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/navbar.module.css");

/// Navigation bar with scroll-aware elevation and a mobile drawer.
///
/// # Props
/// - `route`: the current application route (derived from URL)
#[component]
pub fn NavBar(route: Memo<AppRoute>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let chrome = use_chrome();

    let is_home = Memo::new(move |_| route.get().is_home());
    let current_path = Memo::new(move |_| route.get().path());

    // Scroll spy: recomputed on every scroll event while on the home view.
    // Section offsets are read fresh each time since content loads resize
    // the document.
    let (_, scroll_y) = use_window_scroll();
    let routes = ctx.routes;
    let active_anchor = Memo::new(move |_| {
        if !is_home.get() {
            return None;
        }
        let y = scroll_y.get();
        let positions: Vec<(String, f64)> = routes
            .get()
            .iter()
            .filter_map(|entry| {
                let anchor = entry.anchor();
                dom::section_top(&anchor).map(|top| (anchor, top))
            })
            .collect();
        nav::active_section(&positions, y, NAVBAR_HEIGHT_PX).map(|i| positions[i].0.clone())
    });

    let links = move || {
        routes
            .get()
            .into_iter()
            .map(|entry| {
                view! {
                    <NavLink
                        entry=entry
                        is_home=is_home
                        current_path=current_path
                        active_anchor=active_anchor
                        chrome=chrome
                    />
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <header class=css::appBar class=(css::scrolled, move || chrome.is_scrolled.get())>
            <div class=css::toolbar>
                <a class=css::title on:click=move |_| AppRoute::Home.push()>
                    {APP_TITLE}
                </a>

                <Show
                    when=move || !chrome.is_mobile.get()
                    fallback=move || view! {
                        <button
                            class=css::menuButton
                            on:click=move |_| chrome.toggle_drawer()
                            title="Open navigation"
                        >
                            <Icon icon=ic::MENU />
                        </button>
                    }
                >
                    <nav class=css::navLinks>
                        {links}
                        <ThemeToggle />
                    </nav>
                </Show>
            </div>
        </header>

        <Show when=move || chrome.drawer_open.get()>
            <div class=css::backdrop on:click=move |_| chrome.close_drawer()></div>
            <nav class=css::drawer>
                <button
                    class=css::drawerClose
                    on:click=move |_| chrome.close_drawer()
                    title="Close navigation"
                >
                    <Icon icon=ic::CLOSE />
                </button>
                <div class=css::drawerLinks>
                    {links}
                </div>
                <div class=css::drawerFooter>
                    <ThemeToggle />
                </div>
            </nav>
        </Show>
    }
}

/// One navigation link.
///
/// Activation resolves to a scroll or a route change per the current mode,
/// and additionally closes the drawer on mobile. Active state is the spy
/// anchor in scroll mode and an exact path match in navigation mode.
#[component]
fn NavLink(
    entry: RouteEntry,
    is_home: Memo<bool>,
    current_path: Memo<String>,
    active_anchor: Memo<Option<String>>,
    chrome: ChromeState,
) -> impl IntoView {
    let is_active = {
        let anchor = entry.anchor();
        let path = entry.path.clone();
        Signal::derive(move || {
            if is_home.get() {
                active_anchor.get().as_deref() == Some(anchor.as_str())
            } else {
                current_path.get() == path
            }
        })
    };

    let on_click = {
        let entry = entry.clone();
        move |_| {
            match nav::resolve(&entry, is_home.get_untracked()) {
                NavAction::ScrollTo { anchor } => {
                    dom::scroll_to_section(&anchor, NAVBAR_HEIGHT_PX);
                }
                NavAction::Navigate { path } => {
                    AppRoute::from_path(&path).push();
                }
            }
            if chrome.is_mobile.get_untracked() {
                chrome.close_drawer();
            }
        }
    };

    view! {
        <a
            class=css::navLink
            class=(css::active, move || is_active.get())
            on:click=on_click
        >
            {entry.name.clone()}
        </a>
    }
}
