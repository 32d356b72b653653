//! Social link row rendered inside the hero.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::feedback::{ErrorMessage, Spinner};
use crate::components::hooks::use_remote_content;
use crate::components::icons::social_icon;
use crate::config::endpoints;
use crate::models::ContentState;
use crate::models::profile::SocialData;

stylance::import_crate_style!(css, "src/components/sections/social.module.css");

#[component]
pub fn Social() -> impl IntoView {
    let state = use_remote_content::<SocialData>("social", endpoints::SOCIAL);

    view! {
        {move || match state.get() {
            ContentState::Pending => view! { <Spinner /> }.into_any(),
            ContentState::Failed(msg) => view! { <ErrorMessage message=msg /> }.into_any(),
            ContentState::Ready(data) if data.social.is_empty() => ().into_any(),
            ContentState::Ready(data) => {
                // Entries missing a network or href are skipped, not errors.
                let links = data
                    .social
                    .into_iter()
                    .filter_map(|link| Some((link.network?, link.href?)))
                    .map(|(network, href)| {
                        let icon = social_icon(&network);
                        view! {
                            <a
                                class=css::icon
                                href=href
                                target="_blank"
                                rel="noopener noreferrer"
                                title=network
                            >
                                <Icon icon=icon />
                            </a>
                        }
                    })
                    .collect::<Vec<_>>();
                view! { <div class=css::row>{links}</div> }.into_any()
            }
        }}
    }
}
