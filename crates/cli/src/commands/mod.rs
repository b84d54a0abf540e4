//! CLI command implementations.
//!
//! Each command drives the same [`golden_beet_controller::api::HttpApi`]
//! the page controller uses, so what the CLI sees is exactly what a loaded
//! page would see.

pub mod addresses;
pub mod cart;
pub mod catalog;
pub mod session;
