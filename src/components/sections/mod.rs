//! Content sections.
//!
//! Each section owns one remote content load and renders, per its current
//! state: a spinner (pending), its content (ready with data), nothing
//! (ready but empty), or an inline error message (failed). Sections never
//! read one another's state.

mod about;
mod education;
mod experience;
mod home;
mod projects;
mod skills;
mod social;

pub use about::About;
pub use education::Education;
pub use experience::Experience;
pub use home::Hero;
pub use projects::Projects;
pub use skills::Skills;
pub use social::Social;
