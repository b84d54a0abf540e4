//! Session probe: guest vs authenticated navigation.

use tracing::debug;

use crate::api::StorefrontApi;
use crate::nav;
use crate::page::{Page, element_ids};

impl<A: StorefrontApi, P: Page> super::PageController<A, P> {
    /// Probe the current session and toggle the navigation menus.
    ///
    /// An unauthenticated session is the normal guest state; a transport
    /// failure renders the same guest navigation. Never fails.
    pub async fn check_auth(&mut self) {
        match self.api.current_user().await {
            Ok(Some(user)) => {
                debug!(user = %user.email, "authenticated session");
                self.page.hide(element_ids::GUEST_MENU);
                self.page.show(element_ids::USER_MENU);
                self.page.show(element_ids::ORDERS_LINK);
            }
            Ok(None) => self.render_guest_nav(),
            Err(err) => {
                debug!(error = %err, "session probe failed, rendering guest nav");
                self.render_guest_nav();
            }
        }
    }

    fn render_guest_nav(&mut self) {
        self.page.show(element_ids::GUEST_MENU);
        self.page.hide(element_ids::USER_MENU);
        self.page.hide(element_ids::ORDERS_LINK);
    }

    /// End the session and return to the home page.
    ///
    /// Navigates home regardless of the outcome; a dead session and a
    /// successful logout look the same to the user.
    pub async fn logout(&mut self) {
        if let Err(err) = self.api.logout().await {
            debug!(error = %err, "logout request failed");
        }
        self.page.navigate(nav::HOME);
    }
}
