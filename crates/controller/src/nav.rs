//! Navigation URL building.
//!
//! These are full-page navigations, not API calls: the products listing,
//! the add-to-cart confirmation page, and the account address pages are all
//! rendered server-side.

use url::form_urlencoded;

use golden_beet_core::{CategoryChoice, ProductId};

/// Storefront home.
pub const HOME: &str = "/";

/// Products listing.
pub const PRODUCTS: &str = "/products";

/// Account address management page.
pub const MANAGE_ADDRESSES: &str = "/account/addresses";

/// New-address form.
pub const NEW_ADDRESS: &str = "/account/addresses/new";

/// Build the products-listing URL for a header search submission.
///
/// The search term is trimmed and omitted entirely when empty. The `local`
/// pseudo-category travels as `local=true`; a named category as
/// `category=<value>`. With neither a term nor a category this is the bare
/// listing.
#[must_use]
pub fn products_url(search_term: &str, category: Option<&CategoryChoice>) -> String {
    let term = search_term.trim();

    let mut query = form_urlencoded::Serializer::new(String::new());
    if !term.is_empty() {
        query.append_pair("search", term);
    }
    match category {
        Some(CategoryChoice::Local) => {
            query.append_pair("local", "true");
        }
        Some(CategoryChoice::Named(name)) => {
            query.append_pair("category", name);
        }
        None => {}
    }

    let query = query.finish();
    if query.is_empty() {
        PRODUCTS.to_owned()
    } else {
        format!("{PRODUCTS}?{query}")
    }
}

/// Build the confirmation-page URL shown after adding from a detail page.
#[must_use]
pub fn added_to_cart_url(product: ProductId) -> String {
    format!("/added-to-cart?product_id={product}")
}
