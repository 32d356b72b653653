//! Projects section: cards with markdown body, links, and tags.

use leptos::prelude::*;

use crate::components::feedback::{ErrorMessage, Spinner};
use crate::components::hooks::use_remote_content;
use crate::config::endpoints;
use crate::models::ContentState;
use crate::models::profile::{Project, ProjectsData};
use crate::utils::markdown_to_html;

stylance::import_crate_style!(css, "src/components/sections/projects.module.css");

#[component]
pub fn Projects() -> impl IntoView {
    let state = use_remote_content::<ProjectsData>("projects", endpoints::PROJECTS);

    view! {
        <div class=css::container>
            {move || match state.get() {
                ContentState::Pending => view! { <Spinner /> }.into_any(),
                ContentState::Failed(msg) => view! { <ErrorMessage message=msg /> }.into_any(),
                ContentState::Ready(data) if data.projects.is_empty() => ().into_any(),
                ContentState::Ready(data) => view! {
                    <h2 class=css::title>"Projects"</h2>
                    <p class=css::subtitle>"A collection of my work and contributions"</p>
                    <div class=css::grid>
                        {data
                            .projects
                            .into_iter()
                            .map(|project| view! { <ProjectCard project=project /> })
                            .collect::<Vec<_>>()}
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let body = markdown_to_html(&project.body_text);

    let links = (!project.links.is_empty()).then(|| {
        let buttons = project
            .links
            .clone()
            .into_iter()
            .map(|link| {
                view! {
                    <a
                        class=css::linkButton
                        href=link.href
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        {link.text}
                    </a>
                }
            })
            .collect::<Vec<_>>();
        view! { <div class=css::links>{buttons}</div> }
    });

    let tags = project
        .tags
        .clone()
        .into_iter()
        .map(|tag| view! { <span class=css::chip>{tag}</span> })
        .collect::<Vec<_>>();

    view! {
        <div class=css::card>
            {project.image.clone().map(|src| view! {
                <img class=css::media src=src alt=project.title.clone() />
            })}
            <div class=css::content>
                <h3 class=css::cardTitle>{project.title.clone()}</h3>
                <div class=css::body inner_html=body></div>
                {links}
                <div class=css::tags>{tags}</div>
            </div>
        </div>
    }
}
