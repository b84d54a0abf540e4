//! The page-surface seam.
//!
//! The storefront's HTML templates are an external collaborator: they own
//! the markup, and this crate patches it. [`Page`] is the contract between
//! the two - every element the controller touches is listed in
//! [`element_ids`] (or derived from a [`SearchScope`]), and every access is
//! defensive: operations on an absent element are no-ops, reads return
//! `None`.

use golden_beet_core::{AddressId, ProductId};

/// Element ids the controller expects the page templates to provide.
///
/// Absence of any of these is handled defensively, but their presence
/// defines the integration contract with the templates.
pub mod element_ids {
    /// Cart badge counter in the header.
    pub const CART_COUNT: &str = "cart-count";

    /// Navigation menu shown to guests.
    pub const GUEST_MENU: &str = "account-menu-guest";

    /// Navigation menu shown to authenticated users.
    pub const USER_MENU: &str = "account-menu-user";

    /// Order-history link, authenticated only.
    pub const ORDERS_LINK: &str = "orders-link";

    /// Header delivery-location wrapper.
    pub const DELIVERY_LOCATION: &str = "delivery-location";

    /// Header "city zip" text inside the delivery-location wrapper.
    pub const DELIVERY_CITY_ZIP: &str = "delivery-city-zip";

    /// Homepage hero headline.
    pub const HERO_TITLE: &str = "hero-title";

    /// Address selector modal wrapper (also the click-to-close scrim).
    pub const ADDRESS_MODAL: &str = "address-selector-modal";

    /// Container the address cards are rendered into.
    pub const ADDRESS_LIST: &str = "address-list";

    /// "Delivery addresses (N)" label in the modal.
    pub const ADDRESS_COUNT: &str = "address-count";

    /// Checkout page block showing the chosen address.
    pub const ADDRESS_DETAILS: &str = "address-details";

    /// Checkout form field carrying the formatted shipping address.
    pub const SHIPPING_ADDRESS: &str = "shipping_address";

    /// Checkout form hidden field carrying the chosen address id.
    pub const SELECTED_ADDRESS_ID: &str = "selected_address_id";

    /// Collapsible search container on small screens.
    pub const MOBILE_SEARCH_CONTAINER: &str = "mobile-search-container";

    /// Radio group name shared by the address cards in the modal.
    pub const ADDRESS_RADIO_NAME: &str = "address_radio";
}

/// One of the two duplicated search bars (desktop header vs mobile).
///
/// The markup ships both with id prefixes `header-` and `mobile-`; all
/// logic is written once against this discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchScope {
    /// Desktop header search bar.
    Header,
    /// Mobile search bar.
    Mobile,
}

impl SearchScope {
    /// The opposite scope.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Header => Self::Mobile,
            Self::Mobile => Self::Header,
        }
    }

    /// Free-text search input.
    #[must_use]
    pub const fn search_input(self) -> &'static str {
        match self {
            Self::Header => "header-search-input",
            Self::Mobile => "mobile-search-input",
        }
    }

    /// Hidden field holding the chosen category value.
    #[must_use]
    pub const fn category_value(self) -> &'static str {
        match self {
            Self::Header => "header-category-value",
            Self::Mobile => "mobile-category-value",
        }
    }

    /// Visible label of the category picker.
    #[must_use]
    pub const fn category_display(self) -> &'static str {
        match self {
            Self::Header => "header-category-display",
            Self::Mobile => "mobile-category-display",
        }
    }

    /// Dropdown panel of the category picker.
    #[must_use]
    pub const fn category_dropdown(self) -> &'static str {
        match self {
            Self::Header => "header-category-dropdown",
            Self::Mobile => "mobile-category-dropdown",
        }
    }

    /// Container the category option buttons are appended to.
    #[must_use]
    pub const fn category_options(self) -> &'static str {
        match self {
            Self::Header => "header-category-options",
            Self::Mobile => "mobile-category-options",
        }
    }
}

/// An interactive add-to-cart control found on the page.
///
/// Controls are tagged with `data-product-id`; the class list is carried so
/// the replacement marker can preserve the control's sizing and keep the
/// layout from shifting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartControl {
    /// Opaque page-assigned handle, valid until the control is replaced.
    pub key: usize,
    /// Product the control adds.
    pub product: ProductId,
    /// CSS classes on the control.
    pub classes: Vec<String>,
}

/// The page surface the controller patches.
///
/// Write operations on ids with no matching element are no-ops; reads on
/// absent elements return `None`. The implementation is expected to live in
/// the embedding (a browser bridge, a server-side harness, a test fake).
pub trait Page {
    /// Whether an element with this id exists.
    fn has_element(&self, id: &str) -> bool;

    /// Reveal the element (remove its `hidden` state).
    fn show(&mut self, id: &str);

    /// Hide the element.
    fn hide(&mut self, id: &str);

    /// Flip the element's hidden state. Returns `true` when the element is
    /// hidden afterwards.
    fn toggle_hidden(&mut self, id: &str) -> bool;

    /// Replace the element's text content.
    fn set_text(&mut self, id: &str, text: &str);

    /// Replace the element's inner markup.
    fn set_html(&mut self, id: &str, html: &str);

    /// Append markup inside the element.
    fn append_html(&mut self, id: &str, html: &str);

    /// Set a form field's value.
    fn set_field(&mut self, id: &str, value: &str);

    /// Read a form field's value; `None` when the field is absent.
    fn field_value(&self, id: &str) -> Option<String>;

    /// Move input focus to the element.
    fn focus(&mut self, id: &str);

    /// All interactive add-to-cart controls tagged with this product id.
    fn cart_controls(&self, product: ProductId) -> Vec<CartControl>;

    /// Replace the control identified by `key` with the given markup.
    fn replace_control(&mut self, key: usize, html: &str);

    /// The checked entry of the address radio group, if any.
    fn checked_address(&self) -> Option<AddressId>;

    /// Read a query parameter from the current location.
    fn query_param(&self, name: &str) -> Option<String>;

    /// Show a blocking alert dialog.
    fn alert(&mut self, message: &str);

    /// Leave the page for the given URL (full page load).
    fn navigate(&mut self, url: &str);
}
