//! Header search and category bar.
//!
//! The desktop and mobile bars are duplicates in the markup; all logic here
//! is written once against [`SearchScope`], which keeps the two from
//! drifting apart.

use tracing::debug;

use golden_beet_core::CategoryChoice;

use crate::api::StorefrontApi;
use crate::nav;
use crate::page::{Page, SearchScope, element_ids};
use crate::render::{CategoryOptionTemplate, LocalBadgeTemplate, render_fragment};

impl<A: StorefrontApi, P: Page> super::PageController<A, P> {
    /// Handle a search submission from either bar.
    ///
    /// Reads whichever scope's input exists (desktop first), trims the
    /// term, pairs it with that scope's category value, and navigates to
    /// the products listing. The embedding prevents the form's default
    /// submission before calling this.
    pub fn handle_search(&mut self) {
        let term = self.first_field(SearchScope::search_input);
        let raw_category = self.first_field(SearchScope::category_value);
        let category = CategoryChoice::parse(raw_category.as_deref().unwrap_or(""));

        let url = nav::products_url(term.as_deref().unwrap_or(""), category.as_ref());
        self.page.navigate(&url);
    }

    /// Toggle a scope's category dropdown, closing the other scope's first.
    ///
    /// At most one dropdown is ever open.
    pub fn toggle_category_dropdown(&mut self, scope: SearchScope) {
        self.page.hide(scope.other().category_dropdown());
        self.page.toggle_hidden(scope.category_dropdown());
    }

    /// Close both category dropdowns (outside-click wiring).
    pub fn close_category_dropdowns(&mut self) {
        self.page.hide(SearchScope::Header.category_dropdown());
        self.page.hide(SearchScope::Mobile.category_dropdown());
    }

    /// Record a category choice in a scope and update its display.
    ///
    /// The `local` pseudo-category gets the pin-icon badge; named
    /// categories show their label as plain text.
    pub fn select_category(&mut self, scope: SearchScope, choice: &CategoryChoice, label: &str) {
        self.page.set_field(scope.category_value(), choice.value());

        if choice.is_local() {
            self.page.set_html(
                scope.category_display(),
                &render_fragment(&LocalBadgeTemplate),
            );
        } else {
            self.page.set_text(scope.category_display(), label);
        }

        self.page.hide(scope.category_dropdown());
    }

    /// Populate both scopes' dropdowns from the category enumeration.
    ///
    /// Fetched once at page load; on failure the dropdowns stay empty.
    pub async fn load_categories(&mut self) {
        match self.api.categories().await {
            Ok(categories) => {
                for name in categories {
                    for scope in [SearchScope::Header, SearchScope::Mobile] {
                        let option = CategoryOptionTemplate { name: name.clone() };
                        self.page
                            .append_html(scope.category_options(), &render_fragment(&option));
                    }
                }
            }
            Err(err) => debug!(error = %err, "category fetch failed, dropdowns stay empty"),
        }
    }

    /// Mirror a keystroke in one scope's search input into the other's.
    pub fn sync_search_inputs(&mut self, source: SearchScope) {
        if let Some(value) = self.page.field_value(source.search_input()) {
            self.page.set_field(source.other().search_input(), &value);
        }
    }

    /// Seed both search inputs from the location's `?search=` parameter.
    pub fn prefill_search_from_location(&mut self) {
        if let Some(term) = self.page.query_param("search") {
            self.page
                .set_field(SearchScope::Header.search_input(), &term);
            self.page
                .set_field(SearchScope::Mobile.search_input(), &term);
        }
    }

    /// Toggle the collapsible mobile search bar, focusing its input when it
    /// becomes visible.
    pub fn toggle_mobile_search(&mut self) {
        let hidden = self
            .page
            .toggle_hidden(element_ids::MOBILE_SEARCH_CONTAINER);
        if !hidden {
            self.page.focus(SearchScope::Mobile.search_input());
        }
    }

    /// The first scope's value for a field, desktop before mobile.
    fn first_field(&self, field: fn(SearchScope) -> &'static str) -> Option<String> {
        [SearchScope::Header, SearchScope::Mobile]
            .into_iter()
            .find_map(|scope| self.page.field_value(field(scope)))
    }
}
