//! Storefront REST API client.
//!
//! # Architecture
//!
//! - The server is the source of truth - NO local sync, direct API calls
//! - [`StorefrontApi`] is the seam the controller is written against; the
//!   reqwest-backed [`HttpApi`] is the production implementation
//! - Failure mapping follows the API contract: list reads degrade to empty
//!   on non-success statuses, the session probe degrades to guest, and only
//!   cart mutations surface the server's `{"error": ...}` message
//! - The category enumeration is cached in-memory via `moka` (5 minute TTL)
//!
//! # Example
//!
//! ```rust,ignore
//! use golden_beet_controller::api::{HttpApi, StorefrontApi};
//!
//! let api = HttpApi::new(&config)?;
//!
//! let cart = api.cart().await?;
//! let item = api.add_to_cart(product_id, 1).await?;
//! ```

mod http;
pub mod types;

pub use http::HttpApi;
pub use types::{Address, AddToCartRequest, CartItem, CurrentUser, total_quantity};

use golden_beet_core::ProductId;
use thiserror::Error;

/// Errors that can occur when talking to the storefront API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed (connection, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the expected JSON.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The server rejected the operation with an application-level message.
    #[error("rejected by storefront: {message}")]
    Rejected {
        /// The `error` field of the response body, or a fallback.
        message: String,
    },
}

/// The storefront REST surface consumed by the page controller.
///
/// One method per endpoint. Implementations own the failure mapping listed
/// in the module docs; the controller only distinguishes success, rejection
/// (with a message), and transport failure.
pub trait StorefrontApi {
    /// `GET /api/users/me` - the identity behind the current session.
    ///
    /// `Ok(None)` means a guest session (any non-success status); only
    /// transport problems are errors.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be completed or the body
    /// cannot be decoded.
    fn current_user(
        &self,
    ) -> impl Future<Output = Result<Option<CurrentUser>, ApiError>>;

    /// `POST /api/users/logout` - end the current session.
    ///
    /// # Errors
    ///
    /// Returns an error only on transport failure; the response status is
    /// irrelevant to the caller, which navigates home regardless.
    fn logout(&self) -> impl Future<Output = Result<(), ApiError>>;

    /// `GET /api/users/addresses` - saved delivery addresses.
    ///
    /// Non-success statuses map to an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be completed or the body
    /// cannot be decoded.
    fn addresses(&self) -> impl Future<Output = Result<Vec<Address>, ApiError>>;

    /// `GET /api/cart/` - the current cart snapshot.
    ///
    /// Non-success statuses map to an empty cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be completed or the body
    /// cannot be decoded.
    fn cart(&self) -> impl Future<Output = Result<Vec<CartItem>, ApiError>>;

    /// `POST /api/cart/` - add units of a product to the cart.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] with the server's message on any
    /// non-success status, or a transport error.
    fn add_to_cart(
        &self,
        product: ProductId,
        quantity: u32,
    ) -> impl Future<Output = Result<CartItem, ApiError>>;

    /// `GET /api/products/categories` - the category name enumeration.
    ///
    /// Non-success statuses map to an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be completed or the body
    /// cannot be decoded.
    fn categories(&self) -> impl Future<Output = Result<Vec<String>, ApiError>>;
}
