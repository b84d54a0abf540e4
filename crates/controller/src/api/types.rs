//! Wire types for the storefront REST API.
//!
//! Shapes mirror what the server serializes; unknown fields are ignored so
//! the client keeps working when the server grows its payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use golden_beet_core::{AddressId, CartItemId, Email, ProductId, UserId};

/// A line in the shopping cart.
///
/// The server is the source of truth; the client holds no cart line beyond
/// the snapshot it just fetched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    /// Server-issued cart line id.
    pub id: CartItemId,
    /// Product this line refers to.
    pub product_id: ProductId,
    /// Units of the product in the cart.
    pub quantity: u32,
}

/// Sum of quantities across a cart snapshot.
#[must_use]
pub fn total_quantity(items: &[CartItem]) -> u32 {
    items.iter().map(|item| item.quantity).sum()
}

/// Request body for adding a product to the cart.
#[derive(Debug, Clone, Serialize)]
pub struct AddToCartRequest {
    /// Product to add.
    pub product_id: ProductId,
    /// Units to add.
    pub quantity: u32,
}

/// A saved delivery address.
///
/// Only `name` and `address_line1` are guaranteed; every other line is
/// optional and must be omitted from rendered output when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    /// Server-issued address id.
    pub id: AddressId,
    /// Full name for the address.
    pub name: String,
    /// First street line.
    pub address_line1: String,
    /// Second street line, if any.
    #[serde(default)]
    pub address_line2: Option<String>,
    /// City.
    #[serde(default)]
    pub city: Option<String>,
    /// State or province.
    #[serde(default)]
    pub state: Option<String>,
    /// Postal code.
    #[serde(default)]
    pub postal_code: Option<String>,
    /// Country.
    #[serde(default)]
    pub country: Option<String>,
    /// Contact phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Whether the server marks this as the default delivery address.
    #[serde(default)]
    pub is_default: bool,
    /// When the address was created (server clock).
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// When the address was last updated (server clock).
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// The identity behind the current session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Server-issued user id.
    pub id: UserId,
    /// Account email address.
    pub email: Email,
    /// Display name, when the account has one.
    #[serde(default)]
    pub name: Option<String>,
}
