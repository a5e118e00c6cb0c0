//! MowTrack Core - Shared types library.
//!
//! This crate provides the domain types used across MowTrack components:
//! - `admin` - The administrative web application
//! - `integration-tests` - Live-environment test suite
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access,
//! no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, costs, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
