//! Cart synchronizer and mutator.
//!
//! The cart badge and the "In cart" button markers are a stateless
//! projection of server truth, re-queried after every mutation. Staleness
//! between fetches is accepted.

use tracing::{debug, warn};

use golden_beet_core::ProductId;

use crate::api::{ApiError, CartItem, StorefrontApi, total_quantity};
use crate::nav;
use crate::page::{Page, element_ids};
use crate::render::{InCartTemplate, render_fragment};

/// Where to land after a successful add.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddDestination {
    /// Stay on the page; the originating control turns into "In cart".
    Stay,
    /// Navigate to the confirmation page (product detail flow).
    Confirmation,
}

/// Alert shown when an add fails without a server message.
const ADD_RETRY_MESSAGE: &str = "Error adding item to cart. Please try again.";

impl<A: StorefrontApi, P: Page> super::PageController<A, P> {
    /// Refresh the cart badge (and button markers) from a fresh snapshot.
    ///
    /// A failed fetch counts as an empty cart: the badge shows `0`.
    pub async fn update_cart_count(&mut self) {
        match self.api.cart().await {
            Ok(items) => {
                let total = total_quantity(&items);
                self.page
                    .set_text(element_ids::CART_COUNT, &total.to_string());
                self.mark_in_cart(&items);
            }
            Err(err) => {
                debug!(error = %err, "cart fetch failed, showing empty badge");
                self.page.set_text(element_ids::CART_COUNT, "0");
            }
        }
    }

    /// Refresh only the "In cart" button markers from a fresh snapshot.
    pub async fn update_cart_button_states(&mut self) {
        match self.api.cart().await {
            Ok(items) => self.mark_in_cart(&items),
            Err(err) => debug!(error = %err, "cart fetch failed, button states unchanged"),
        }
    }

    /// Convert every interactive control for an in-cart product into a
    /// non-interactive "In cart" marker, preserving its sizing classes.
    fn mark_in_cart(&mut self, items: &[CartItem]) {
        for item in items {
            self.mark_product_in_cart(item.product_id);
        }
    }

    fn mark_product_in_cart(&mut self, product: ProductId) {
        for control in self.page.cart_controls(product) {
            let marker = InCartTemplate::for_control(&control);
            self.page
                .replace_control(control.key, &render_fragment(&marker));
        }
    }

    /// Add one unit of a product to the cart.
    ///
    /// On success the cart UI is refreshed and the flow either navigates to
    /// the confirmation page or swaps the originating control in place.
    /// A rejection whose message mentions `already` is an idempotent retry
    /// and stays silent; any other rejection is alerted verbatim; transport
    /// failures are alerted with a generic retry message.
    pub async fn add_to_cart(&mut self, product: ProductId, destination: AddDestination) {
        match self.api.add_to_cart(product, 1).await {
            Ok(_) => {
                self.update_cart_count().await;
                match destination {
                    AddDestination::Confirmation => {
                        self.page.navigate(&nav::added_to_cart_url(product));
                    }
                    AddDestination::Stay => self.mark_product_in_cart(product),
                }
            }
            Err(ApiError::Rejected { message }) if message.contains("already") => {
                debug!(%message, product = %product, "duplicate add suppressed");
            }
            Err(ApiError::Rejected { message }) => {
                warn!(%message, product = %product, "add to cart rejected");
                self.page.alert(&message);
            }
            Err(err) => {
                warn!(error = %err, product = %product, "add to cart failed");
                self.page.alert(ADD_RETRY_MESSAGE);
            }
        }
    }
}
