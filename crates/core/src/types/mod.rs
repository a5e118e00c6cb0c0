//! Core types for MowTrack.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cost;
pub mod email;
pub mod id;
pub mod status;

pub use cost::{Cost, CostError};
pub use email::{Email, EmailError};
pub use id::*;
pub use status::{ParseServiceStatusError, ServiceStatus};
