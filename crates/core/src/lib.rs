//! Domain logic for the DigitalPro agency site.
//!
//! Nothing in this crate performs I/O. Records are fetched and written by
//! `digitalpro-db`; handlers in `digitalpro-api` pass data in and render
//! what comes back out.

pub mod catalog;
pub mod content;
pub mod dashboard;
pub mod editor;
pub mod error;
pub mod forms;
pub mod guard;
pub mod mailto;
pub mod review_links;
pub mod roles;
pub mod status;
pub mod types;
pub mod uri;
