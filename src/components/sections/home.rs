//! Hero section: name, typewriter role line, and social links.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::feedback::{ErrorMessage, Spinner};
use crate::components::hooks::use_remote_content;
use crate::components::sections::Social;
use crate::config::{endpoints, typewriter};
use crate::models::ContentState;
use crate::models::profile::HomeData;

stylance::import_crate_style!(css, "src/components/sections/home.module.css");

#[component]
pub fn Hero() -> impl IntoView {
    let state = use_remote_content::<HomeData>("home", endpoints::HOME);

    view! {
        <div class=css::container>
            {move || match state.get() {
                ContentState::Pending => view! { <Spinner /> }.into_any(),
                ContentState::Failed(msg) => view! { <ErrorMessage message=msg /> }.into_any(),
                ContentState::Ready(data) => view! { <HeroContent data=data /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn HeroContent(data: HomeData) -> impl IntoView {
    let typed = use_typewriter(data.roles.clone());

    view! {
        <h1 class=css::name>{data.name.clone()}</h1>
        <p class=css::roleLine>
            "I'm "
            <span class=css::typed>{move || typed.get()}</span>
            <span class=css::cursor>"|"</span>
        </p>
        <Social />
    }
}

/// Cycle through the given roles with a type/pause/delete animation.
///
/// The loop stops on its own once the owning component is torn down and
/// the signal is disposed.
fn use_typewriter(roles: Vec<String>) -> ReadSignal<String> {
    let (typed, set_typed) = signal(String::new());

    if roles.is_empty() {
        return typed;
    }

    spawn_local(async move {
        let mut index = 0usize;
        loop {
            let role: &str = &roles[index % roles.len()];
            let len = role.chars().count();

            for n in 1..=len {
                let text: String = role.chars().take(n).collect();
                if set_typed.try_set(text).is_some() {
                    return;
                }
                TimeoutFuture::new(typewriter::TYPE_MS).await;
            }

            TimeoutFuture::new(typewriter::HOLD_MS).await;

            for n in (0..len).rev() {
                let text: String = role.chars().take(n).collect();
                if set_typed.try_set(text).is_some() {
                    return;
                }
                TimeoutFuture::new(typewriter::DELETE_MS).await;
            }

            index += 1;
        }
    });

    typed
}
