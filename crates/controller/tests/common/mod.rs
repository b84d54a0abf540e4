//! In-memory fakes for the API and page seams.
//!
//! `FakeApi` returns scripted responses (with a transport-failure switch
//! per endpoint); `FakePage` is an element store that records every patch,
//! alert, and navigation for assertions.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use golden_beet_controller::api::{
    Address, ApiError, CartItem, CurrentUser, StorefrontApi,
};
use golden_beet_controller::page::{CartControl, Page};
use golden_beet_core::{AddressId, CartItemId, Email, ProductId, UserId};

/// A constructible stand-in for a transport failure.
///
/// The controller treats every non-`Rejected` error the same way, so a
/// parse error works as the generic "fetch failed" case.
pub fn transport_error() -> ApiError {
    ApiError::Parse(
        serde_json::from_str::<serde_json::Value>("").expect_err("empty input cannot parse"),
    )
}

pub fn sample_user() -> CurrentUser {
    CurrentUser {
        id: UserId::new(1),
        email: Email::parse("dana@example.com").expect("valid email"),
        name: Some("Dana Reeves".to_string()),
    }
}

/// A full address; tweak fields per test.
pub fn sample_address(id: i32) -> Address {
    Address {
        id: AddressId::new(id),
        name: format!("Resident {id}"),
        address_line1: format!("{id} Elm St"),
        address_line2: None,
        city: Some("Portland".to_string()),
        state: Some("OR".to_string()),
        postal_code: Some("97201".to_string()),
        country: Some("USA".to_string()),
        phone: None,
        is_default: false,
        created_at: None,
        updated_at: None,
    }
}

pub fn cart_item(id: i32, product: i32, quantity: u32) -> CartItem {
    CartItem {
        id: CartItemId::new(id),
        product_id: ProductId::new(product),
        quantity,
    }
}

// =============================================================================
// FakeApi
// =============================================================================

#[derive(Default)]
pub struct FakeApi {
    pub user: Option<CurrentUser>,
    pub user_fails: bool,
    pub logout_fails: bool,
    pub addresses: Vec<Address>,
    pub addresses_fail: bool,
    pub addresses_calls: RefCell<usize>,
    pub cart: RefCell<Vec<CartItem>>,
    pub cart_fails: bool,
    pub cart_calls: RefCell<usize>,
    /// `Some(message)` makes every add a rejection with that message.
    pub add_rejection: Option<String>,
    pub add_fails: bool,
    pub categories: Vec<String>,
    pub categories_fail: bool,
}

impl FakeApi {
    pub fn with_user(mut self, user: CurrentUser) -> Self {
        self.user = Some(user);
        self
    }

    pub fn with_addresses(mut self, addresses: Vec<Address>) -> Self {
        self.addresses = addresses;
        self
    }

    pub fn with_cart(self, items: Vec<CartItem>) -> Self {
        *self.cart.borrow_mut() = items;
        self
    }

    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }

    pub fn rejecting_add(mut self, message: &str) -> Self {
        self.add_rejection = Some(message.to_string());
        self
    }
}

impl StorefrontApi for FakeApi {
    async fn current_user(&self) -> Result<Option<CurrentUser>, ApiError> {
        if self.user_fails {
            return Err(transport_error());
        }
        Ok(self.user.clone())
    }

    async fn logout(&self) -> Result<(), ApiError> {
        if self.logout_fails {
            return Err(transport_error());
        }
        Ok(())
    }

    async fn addresses(&self) -> Result<Vec<Address>, ApiError> {
        *self.addresses_calls.borrow_mut() += 1;
        if self.addresses_fail {
            return Err(transport_error());
        }
        Ok(self.addresses.clone())
    }

    async fn cart(&self) -> Result<Vec<CartItem>, ApiError> {
        *self.cart_calls.borrow_mut() += 1;
        if self.cart_fails {
            return Err(transport_error());
        }
        Ok(self.cart.borrow().clone())
    }

    async fn add_to_cart(&self, product: ProductId, quantity: u32) -> Result<CartItem, ApiError> {
        if self.add_fails {
            return Err(transport_error());
        }
        if let Some(message) = &self.add_rejection {
            return Err(ApiError::Rejected {
                message: message.clone(),
            });
        }

        let mut cart = self.cart.borrow_mut();
        let id = i32::try_from(cart.len()).unwrap_or(0) + 1;
        let item = CartItem {
            id: CartItemId::new(id),
            product_id: product,
            quantity,
        };
        cart.push(item.clone());
        Ok(item)
    }

    async fn categories(&self) -> Result<Vec<String>, ApiError> {
        if self.categories_fail {
            return Err(transport_error());
        }
        Ok(self.categories.clone())
    }
}

// =============================================================================
// FakePage
// =============================================================================

pub struct FakeControl {
    pub product: ProductId,
    pub classes: Vec<String>,
}

#[derive(Default)]
pub struct FakePage {
    pub present: HashSet<String>,
    pub text: HashMap<String, String>,
    pub html: HashMap<String, String>,
    pub fields: HashMap<String, String>,
    /// Hidden state per element; absent means "still hidden" (modals and
    /// dropdowns start hidden in the markup).
    pub hidden: HashMap<String, bool>,
    pub controls: Vec<FakeControl>,
    pub replaced: HashMap<usize, String>,
    pub checked: Option<AddressId>,
    pub params: HashMap<String, String>,
    pub alerts: Vec<String>,
    pub navigations: Vec<String>,
    pub focused: Vec<String>,
}

impl FakePage {
    pub fn with_element(mut self, id: &str) -> Self {
        self.present.insert(id.to_string());
        self
    }

    pub fn with_field(mut self, id: &str, value: &str) -> Self {
        self.fields.insert(id.to_string(), value.to_string());
        self
    }

    pub fn with_control(mut self, product: i32, classes: &[&str]) -> Self {
        self.controls.push(FakeControl {
            product: ProductId::new(product),
            classes: classes.iter().map(ToString::to_string).collect(),
        });
        self
    }

    pub fn with_checked(mut self, id: i32) -> Self {
        self.checked = Some(AddressId::new(id));
        self
    }

    pub fn with_param(mut self, name: &str, value: &str) -> Self {
        self.params.insert(name.to_string(), value.to_string());
        self
    }

    pub fn is_hidden(&self, id: &str) -> bool {
        self.hidden.get(id).copied().unwrap_or(true)
    }

    /// Replacement markup for the control at `key`, if it was swapped.
    pub fn replacement(&self, key: usize) -> Option<&str> {
        self.replaced.get(&key).map(String::as_str)
    }
}

impl Page for FakePage {
    fn has_element(&self, id: &str) -> bool {
        self.present.contains(id) || self.fields.contains_key(id)
    }

    fn show(&mut self, id: &str) {
        self.hidden.insert(id.to_string(), false);
    }

    fn hide(&mut self, id: &str) {
        self.hidden.insert(id.to_string(), true);
    }

    fn toggle_hidden(&mut self, id: &str) -> bool {
        let now_hidden = !self.is_hidden(id);
        self.hidden.insert(id.to_string(), now_hidden);
        now_hidden
    }

    fn set_text(&mut self, id: &str, text: &str) {
        self.text.insert(id.to_string(), text.to_string());
    }

    fn set_html(&mut self, id: &str, html: &str) {
        self.html.insert(id.to_string(), html.to_string());
    }

    fn append_html(&mut self, id: &str, html: &str) {
        self.html.entry(id.to_string()).or_default().push_str(html);
    }

    fn set_field(&mut self, id: &str, value: &str) {
        self.fields.insert(id.to_string(), value.to_string());
    }

    fn field_value(&self, id: &str) -> Option<String> {
        self.fields.get(id).cloned()
    }

    fn focus(&mut self, id: &str) {
        self.focused.push(id.to_string());
    }

    fn cart_controls(&self, product: ProductId) -> Vec<CartControl> {
        self.controls
            .iter()
            .enumerate()
            .filter(|(key, control)| {
                control.product == product && !self.replaced.contains_key(key)
            })
            .map(|(key, control)| CartControl {
                key,
                product: control.product,
                classes: control.classes.clone(),
            })
            .collect()
    }

    fn replace_control(&mut self, key: usize, html: &str) {
        self.replaced.insert(key, html.to_string());
    }

    fn checked_address(&self) -> Option<AddressId> {
        self.checked
    }

    fn query_param(&self, name: &str) -> Option<String> {
        self.params.get(name).cloned()
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn navigate(&mut self, url: &str) {
        self.navigations.push(url.to_string());
    }
}
