//! Light/dark theme toggle button.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/theme.module.css");

/// Icon button toggling the shell-owned dark-mode flag.
///
/// The chrome only reads the flag to pick an icon; the palette itself is
/// applied via the `data-theme` attribute the shell writes.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    view! {
        <button
            class=css::toggle
            on:click=move |_| ctx.toggle_dark_mode()
            title="Toggle theme"
        >
            <Show
                when=move || ctx.dark_mode.get()
                fallback=|| view! { <Icon icon=ic::MOON /> }
            >
                <Icon icon=ic::SUN />
            </Show>
        </button>
    }
}
