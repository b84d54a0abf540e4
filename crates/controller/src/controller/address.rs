//! Delivery-address selection.
//!
//! The selector modal is a small state machine over a snapshot that is
//! refetched on every open - a stale cache is never trusted. Selection is
//! purely client-side until checkout submits the form; nothing here
//! persists remotely.

use tracing::debug;

use golden_beet_core::AddressId;

use crate::api::{Address, StorefrontApi};
use crate::page::{Page, element_ids};
use crate::render::{
    AddressBlockTemplate, AddressCardView, AddressEmptyTemplate, AddressListTemplate, city_zip,
    hero_headline, render_fragment, shipping_field_value,
};

use super::ModalState;

const SELECT_PROMPT: &str = "Please select an address";

impl<A: StorefrontApi, P: Page> super::PageController<A, P> {
    /// Initialize the header delivery location from the saved addresses.
    ///
    /// Picks the server's default address, falling back to the first in
    /// list order. Silent on failure or when no addresses exist.
    pub async fn load_delivery_location(&mut self) {
        match self.api.addresses().await {
            Ok(addresses) => {
                let chosen = addresses
                    .iter()
                    .find(|a| a.is_default)
                    .or_else(|| addresses.first())
                    .cloned();
                if let Some(address) = chosen {
                    self.selected_address = Some(address.id);
                    self.show_delivery_location(&address);
                }
                self.addresses = addresses;
            }
            Err(err) => debug!(error = %err, "address fetch failed, delivery location unset"),
        }
    }

    /// Open the selector modal, refetching the address snapshot.
    ///
    /// No-op on pages without the modal. A transport failure leaves the
    /// modal closed; an empty snapshot opens it with a call-to-action to
    /// create an address.
    pub async fn open_address_selector(&mut self) {
        if !self.page.has_element(element_ids::ADDRESS_MODAL) {
            return;
        }

        self.modal = ModalState::Loading;
        match self.api.addresses().await {
            Ok(addresses) => {
                self.addresses = addresses;
                self.page.set_text(
                    element_ids::ADDRESS_COUNT,
                    &format!("Delivery addresses ({})", self.addresses.len()),
                );

                if self.addresses.is_empty() {
                    self.page.set_html(
                        element_ids::ADDRESS_LIST,
                        &render_fragment(&AddressEmptyTemplate),
                    );
                } else {
                    self.render_address_list(false);
                }

                self.modal = ModalState::Open { expanded: false };
                self.page.show(element_ids::ADDRESS_MODAL);
            }
            Err(err) => {
                debug!(error = %err, "address fetch failed, selector stays closed");
                self.modal = ModalState::Closed;
            }
        }
    }

    /// Expand the list to all addresses, without refetching.
    ///
    /// One-way: there is no collapse affordance.
    pub fn show_more_addresses(&mut self) {
        if matches!(self.modal, ModalState::Open { .. }) {
            self.render_address_list(true);
            self.modal = ModalState::Open { expanded: true };
        }
    }

    /// Highlight a different address card and remember the choice.
    ///
    /// Pure visual update; nothing is persisted remotely.
    pub fn update_address_selection(&mut self, id: AddressId) {
        self.selected_address = Some(id);
        if let ModalState::Open { expanded } = self.modal {
            self.render_address_list(expanded);
        }
    }

    /// Commit the checked address and close the modal.
    ///
    /// With no radio checked this alerts and aborts without touching any
    /// state. A checked id missing from the snapshot (stale markup) aborts
    /// silently.
    pub fn confirm_address_selection(&mut self) {
        let Some(id) = self.page.checked_address() else {
            self.page.alert(SELECT_PROMPT);
            return;
        };

        let Some(address) = self.addresses.iter().find(|a| a.id == id).cloned() else {
            debug!(address = %id, "checked address not in snapshot, ignoring");
            return;
        };

        self.selected_address = Some(id);
        self.show_delivery_location(&address);

        // Checkout page: the form carries the formatted address and its id.
        if self.page.has_element(element_ids::ADDRESS_DETAILS)
            && self.page.has_element(element_ids::SHIPPING_ADDRESS)
        {
            let block = AddressBlockTemplate::for_address(&address);
            self.page
                .set_html(element_ids::ADDRESS_DETAILS, &render_fragment(&block));
            self.page
                .set_field(element_ids::SHIPPING_ADDRESS, &shipping_field_value(&address));
            if self.page.has_element(element_ids::SELECTED_ADDRESS_ID) {
                self.page
                    .set_field(element_ids::SELECTED_ADDRESS_ID, &id.to_string());
            }
        }

        self.close_address_selector();
    }

    /// Close the modal, from any state.
    ///
    /// Also wired to a click on the modal's background scrim.
    pub fn close_address_selector(&mut self) {
        self.modal = ModalState::Closed;
        self.page.hide(element_ids::ADDRESS_MODAL);
    }

    /// Update the header delivery text and homepage hero for an address.
    fn show_delivery_location(&mut self, address: &Address) {
        if let Some(text) = city_zip(address) {
            self.page.set_text(element_ids::DELIVERY_CITY_ZIP, &text);
            self.page.show(element_ids::DELIVERY_LOCATION);
        }
        if let Some(city) = &address.city
            && self.page.has_element(element_ids::HERO_TITLE)
        {
            self.page
                .set_text(element_ids::HERO_TITLE, &hero_headline(city));
        }
    }

    /// Render the card list for the current selection and expansion state.
    fn render_address_list(&mut self, expanded: bool) {
        let limit = if expanded {
            self.addresses.len()
        } else {
            self.address_page_size
        };

        let cards = self
            .addresses
            .iter()
            .take(limit)
            .map(|a| AddressCardView::new(a, self.selected_address == Some(a.id)))
            .collect();
        let show_more = !expanded && self.addresses.len() > self.address_page_size;

        let list = AddressListTemplate { cards, show_more };
        self.page
            .set_html(element_ids::ADDRESS_LIST, &render_fragment(&list));
    }
}
