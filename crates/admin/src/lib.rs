//! `MowTrack` admin library.
//!
//! Server-rendered administration panel for a single lawn mower shop:
//! customer records, per-customer service history, and internal notes,
//! stored as JSONB documents in `PostgreSQL`.
//!
//! The binary in `main.rs` wires these modules together; everything here
//! is exposed as a library so the integration-tests crate can reuse it.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
