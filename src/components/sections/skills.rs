//! Skills section: intro paragraph and categorized skill grid.

use leptos::prelude::*;

use crate::components::feedback::{ErrorMessage, Spinner};
use crate::components::hooks::use_remote_content;
use crate::config::endpoints;
use crate::models::ContentState;
use crate::models::profile::{SkillCategory, SkillsData};

stylance::import_crate_style!(css, "src/components/sections/skills.module.css");

#[component]
pub fn Skills() -> impl IntoView {
    let state = use_remote_content::<SkillsData>("skills", endpoints::SKILLS);

    view! {
        <div class=css::container>
            {move || match state.get() {
                ContentState::Pending => view! { <Spinner /> }.into_any(),
                ContentState::Failed(msg) => view! { <ErrorMessage message=msg /> }.into_any(),
                ContentState::Ready(data) if data.skills.is_empty() => ().into_any(),
                ContentState::Ready(data) => view! {
                    <h2 class=css::title>"Skills"</h2>
                    <p class=css::intro>{data.intro.clone()}</p>
                    {data.skills.into_iter().map(category_block).collect::<Vec<_>>()}
                }
                .into_any(),
            }}
        </div>
    }
}

fn category_block(category: SkillCategory) -> impl IntoView {
    view! {
        <div class=css::category>
            <h3 class=css::categoryTitle>{category.title.clone()}</h3>
            <div class=css::grid>
                {category
                    .items
                    .into_iter()
                    .map(|skill| view! {
                        <div class=css::card>
                            <img class=css::icon src=skill.icon.clone() alt=skill.title.clone() />
                            <span class=css::skillName>{skill.title.clone()}</span>
                        </div>
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
