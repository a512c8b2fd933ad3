//! Shared types, errors, and configuration for Kontor.
//!
//! This crate provides common types used across all other crates:
//! - Money arithmetic and presentation with decimal precision
//! - Application-wide error types
//! - Request validation helpers
//! - Auth request/response payloads
//! - Configuration management

pub mod auth;
pub mod config;
pub mod error;
pub mod types;
pub mod validation;

pub use config::{AppConfig, ConfigError};
pub use error::{AppError, ValidationIssue};
