//! About section: markdown bio plus an optional portrait.

use leptos::prelude::*;

use crate::components::feedback::{ErrorMessage, Spinner};
use crate::components::hooks::use_remote_content;
use crate::config::endpoints;
use crate::models::ContentState;
use crate::models::profile::AboutData;
use crate::utils::markdown_to_html;

stylance::import_crate_style!(css, "src/components/sections/about.module.css");

#[component]
pub fn About() -> impl IntoView {
    let state = use_remote_content::<AboutData>("about", endpoints::ABOUT);

    view! {
        <div class=css::container>
            <h2 class=css::title>"About Me"</h2>
            {move || match state.get() {
                ContentState::Pending => view! { <Spinner /> }.into_any(),
                ContentState::Failed(msg) => view! { <ErrorMessage message=msg /> }.into_any(),
                ContentState::Ready(data) => {
                    let bio = markdown_to_html(&data.about);
                    view! {
                        <div class=css::grid>
                            <div class=css::bio inner_html=bio></div>
                            {data.image_source.map(|src| view! {
                                <div class=css::portraitWrap>
                                    <img class=css::portrait src=src alt="Profile" />
                                </div>
                            })}
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
