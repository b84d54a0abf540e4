//! Golden Beet Core - Shared types library.
//!
//! This crate provides common types used across all Golden Beet components:
//! - `controller` - Storefront page controller library
//! - `cli` - Command-line tools for poking a live storefront
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no page
//! access. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, and category
//!   choices

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
