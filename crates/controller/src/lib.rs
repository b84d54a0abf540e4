//! Golden Beet storefront page controller.
//!
//! This crate implements the client-side logic of the storefront page
//! chrome as a library: session-state navigation toggling, cart badge and
//! button synchronization, the delivery-address selection modal, and the
//! header search/category bar.
//!
//! The storefront REST API is an external collaborator reached through the
//! [`api::StorefrontApi`] seam (with [`api::HttpApi`] as the reqwest-backed
//! implementation), and the page markup is an external collaborator reached
//! through the [`page::Page`] seam. The [`controller::PageController`] owns
//! all page-lifetime state and is constructed fresh on every page load.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod controller;
pub mod nav;
pub mod page;
pub mod render;

pub use controller::{AddDestination, ModalState, PageController};
