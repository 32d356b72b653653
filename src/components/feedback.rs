//! Shared loading and error indicators for content sections.

use leptos::prelude::*;

stylance::import_crate_style!(css, "src/components/feedback.module.css");

/// Loading indicator shown while a section's content is pending.
#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class=css::spinner>
            <div class=css::ring></div>
        </div>
    }
}

/// Inline, human-readable failure message.
///
/// Failures never propagate past the owning section; this is the whole
/// error surface.
#[component]
pub fn ErrorMessage(message: String) -> impl IntoView {
    view! { <p class=css::error>{message}</p> }
}
