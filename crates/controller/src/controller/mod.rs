//! The storefront page controller.
//!
//! One [`PageController`] is constructed per page load and owns all
//! page-lifetime state: the last fetched address snapshot, the selected
//! address id, and the selector-modal state machine. Everything else lives
//! either on the server (refetched after every mutation) or in the page
//! itself.
//!
//! All operations absorb API failures: every path terminates in some
//! rendered page state, never in a propagated error.

mod address;
mod cart;
mod search;
mod session;

pub use cart::AddDestination;

use golden_beet_core::AddressId;

use crate::api::{Address, StorefrontApi};
use crate::page::Page;

/// How many addresses the selector shows before "Show more".
pub const DEFAULT_ADDRESS_PAGE_SIZE: usize = 4;

/// Address-selector modal state.
///
/// `closed -> loading -> open -> closed`; within `open`, `expanded` tracks
/// whether the full list has replaced the first page (a one-way expansion).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    /// Modal is not visible.
    Closed,
    /// Snapshot refetch in flight.
    Loading,
    /// Modal is visible.
    Open {
        /// Whether the full, unbounded list is showing.
        expanded: bool,
    },
}

/// Controller for the storefront page chrome.
///
/// Generic over the API seam and the page surface so behavior is testable
/// with in-memory fakes.
pub struct PageController<A, P> {
    api: A,
    page: P,
    addresses: Vec<Address>,
    selected_address: Option<AddressId>,
    modal: ModalState,
    address_page_size: usize,
}

impl<A: StorefrontApi, P: Page> PageController<A, P> {
    /// Create a controller for a freshly loaded page.
    ///
    /// Selection state always starts empty; `load_delivery_location`
    /// re-derives it from the server's default address.
    pub fn new(api: A, page: P) -> Self {
        Self {
            api,
            page,
            addresses: Vec::new(),
            selected_address: None,
            modal: ModalState::Closed,
            address_page_size: DEFAULT_ADDRESS_PAGE_SIZE,
        }
    }

    /// Override the address page size (the selector's "first page").
    #[must_use]
    pub fn with_address_page_size(mut self, size: usize) -> Self {
        self.address_page_size = size;
        self
    }

    /// Run the page-load initialization sequence.
    pub async fn init(&mut self) {
        self.check_auth().await;
        self.update_cart_count().await;
        self.update_cart_button_states().await;
        self.load_delivery_location().await;
        self.load_categories().await;
        self.prefill_search_from_location();
    }

    /// The currently selected address id, if any.
    #[must_use]
    pub fn selected_address(&self) -> Option<AddressId> {
        self.selected_address
    }

    /// Current state of the address-selector modal.
    #[must_use]
    pub fn modal_state(&self) -> ModalState {
        self.modal
    }

    /// The API seam.
    #[must_use]
    pub fn api(&self) -> &A {
        &self.api
    }

    /// The page surface, for event wiring and inspection.
    #[must_use]
    pub fn page(&self) -> &P {
        &self.page
    }

    /// Mutable access to the page surface.
    pub fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }
}
