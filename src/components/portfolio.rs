//! Page composer: the single-page home view.
//!
//! Renders every content section in one fixed order, each addressable by
//! a stable anchor id matching its route path (minus the leading
//! separator). Sections load their own data independently; one section
//! failing never blocks another.

use leptos::prelude::*;

use crate::components::sections::{About, Education, Experience, Hero, Projects, Skills};

stylance::import_crate_style!(css, "src/components/portfolio.module.css");

#[component]
pub fn Portfolio() -> impl IntoView {
    view! {
        <div class=css::page>
            <section id="home" class=format!("{} {}", css::section, css::hero)>
                <Hero />
            </section>
            <section id="about" class=css::section>
                <About />
            </section>
            <section id="skills" class=css::section>
                <Skills />
            </section>
            <section id="education" class=css::section>
                <Education />
            </section>
            <section id="experience" class=css::section>
                <Experience />
            </section>
            <section id="projects" class=css::section>
                <Projects />
            </section>
        </div>
    }
}
