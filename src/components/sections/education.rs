//! Education section: school cards.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::feedback::{ErrorMessage, Spinner};
use crate::components::hooks::use_remote_content;
use crate::components::icons as ic;
use crate::config::endpoints;
use crate::models::ContentState;
use crate::models::profile::EducationData;

stylance::import_crate_style!(css, "src/components/sections/education.module.css");

#[component]
pub fn Education() -> impl IntoView {
    let state = use_remote_content::<EducationData>("education", endpoints::EDUCATION);

    view! {
        <div class=css::container>
            {move || match state.get() {
                ContentState::Pending => view! { <Spinner /> }.into_any(),
                ContentState::Failed(msg) => view! { <ErrorMessage message=msg /> }.into_any(),
                ContentState::Ready(data) if data.education.is_empty() => ().into_any(),
                ContentState::Ready(data) => view! {
                    <h2 class=css::title>"Education"</h2>
                    <p class=css::subtitle>"My academic journey and qualifications"</p>
                    <div class=css::grid>
                        {data
                            .education
                            .into_iter()
                            .map(|record| view! {
                                <div class=css::card>
                                    <span class=css::icon>
                                        <Icon icon=ic::EDUCATION />
                                    </span>
                                    <h3 class=css::school>{record.card_title.clone()}</h3>
                                    <p class=css::degree>{record.card_subtitle.clone()}</p>
                                    <p class=css::date>{record.title.clone()}</p>
                                </div>
                            })
                            .collect::<Vec<_>>()}
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}
