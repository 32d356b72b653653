//! Experience section: work history timeline.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::feedback::{ErrorMessage, Spinner};
use crate::components::hooks::use_remote_content;
use crate::components::icons as ic;
use crate::config::endpoints;
use crate::models::ContentState;
use crate::models::profile::{ExperienceRecord, ExperiencesData};

stylance::import_crate_style!(css, "src/components/sections/experience.module.css");

#[component]
pub fn Experience() -> impl IntoView {
    let state = use_remote_content::<ExperiencesData>("experiences", endpoints::EXPERIENCES);

    view! {
        <div class=css::container>
            {move || match state.get() {
                ContentState::Pending => view! { <Spinner /> }.into_any(),
                ContentState::Failed(msg) => view! { <ErrorMessage message=msg /> }.into_any(),
                ContentState::Ready(data) if data.experiences.is_empty() => ().into_any(),
                ContentState::Ready(data) => view! {
                    <h2 class=css::title>"Experience"</h2>
                    <p class=css::subtitle>"My professional journey and work experience"</p>
                    <div class=css::timeline>
                        {data
                            .experiences
                            .into_iter()
                            .map(timeline_item)
                            .collect::<Vec<_>>()}
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}

fn timeline_item(record: ExperienceRecord) -> impl IntoView {
    view! {
        <div class=css::item>
            <div class=css::marker>
                <span class=css::dot>
                    <Icon icon=ic::WORK />
                </span>
                <span class=css::connector></span>
            </div>
            <div class=css::card>
                <h3 class=css::role>{record.title.clone()}</h3>
                <p class=css::company>{record.subtitle.clone()}</p>
                <p class=css::meta>{record.work_type.clone()}</p>
                <p class=css::meta>{record.date_text.clone()}</p>
                <p class=css::duration>{record.duration.clone()}</p>
                <ul class=css::bullets>
                    {record
                        .work_description
                        .into_iter()
                        .map(|line| view! { <li>{line}</li> })
                        .collect::<Vec<_>>()}
                </ul>
            </div>
        </div>
    }
}
