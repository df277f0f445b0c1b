//! Server-side session tracking.
//!
//! - [`session`] -- per-token session state kept current from auth events.

pub mod session;
