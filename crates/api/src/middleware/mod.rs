//! Authentication and authorization extractors.
//!
//! - [`auth::CurrentSession`] -- the session behind the request's bearer token, if any.
//! - [`rbac::RequireAdmin`] -- runs the admin route guard.

pub mod auth;
pub mod rbac;
