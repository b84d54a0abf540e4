//! Core types for Golden Beet.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod category;
pub mod email;
pub mod id;

pub use category::CategoryChoice;
pub use email::{Email, EmailError};
pub use id::*;
