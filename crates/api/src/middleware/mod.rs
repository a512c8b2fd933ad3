//! Request middleware.

pub mod auth;

pub use auth::{AuthCaller, USER_ID_HEADER, auth_gate};
