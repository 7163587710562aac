//! HTTP handlers for the auth and blog route groups.

pub mod auth;
pub mod blog;
