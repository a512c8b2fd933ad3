//! Core business rules for Kontor.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Derived posten state, material bookings and the auth lifecycle live here.
//!
//! # Modules
//!
//! - `posten` - Ledger posten state (`bezahlt`, `offen`, `status`) and payment booking
//! - `material` - Stock movements and income rollups
//! - `kunde` - Kunde payloads
//! - `auth` - Roles, user lifecycle, caller scoping and password hashing

pub mod auth;
pub mod kunde;
pub mod material;
pub mod posten;
