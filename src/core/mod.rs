//! Pure application logic, independent of the DOM and the reactive layer.
//!
//! - [`error`] - Error taxonomy for content loads
//! - [`nav`] - Navigation mode resolution and active-link computation
//! - [`routes`] - Navigation model synthesis from defaults + server sections

pub mod error;
pub mod nav;
pub mod routes;
