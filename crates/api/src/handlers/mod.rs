pub mod admin;
pub mod auth;
pub mod contact;
pub mod pages;
pub mod proposals;
pub mod setup;
pub mod tools;
