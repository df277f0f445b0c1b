//! Row models for the remote tables.
//!
//! Each submodule holds the row struct as returned by the store plus the
//! DTO written on insert.

pub mod case_study;
pub mod contact_message;
pub mod proposal;
pub mod user_profile;

pub const CASE_STUDIES_TABLE: &str = "case_studies";
pub const PROPOSALS_TABLE: &str = "proposals";
pub const CONTACT_MESSAGES_TABLE: &str = "contact_messages";
pub const USER_PROFILES_TABLE: &str = "user_profiles";
