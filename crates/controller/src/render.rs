//! Markup fragments rendered into the page.
//!
//! Templates are small askama partials; the structs here are the view data
//! behind them. Formatting rules live in pure functions so the edge cases
//! (absent address fields, sizing classes) are unit-testable without a
//! page.

use askama::Template;

use crate::api::Address;
use crate::page::CartControl;

/// Size classes an add-to-cart control may carry; the first match is
/// preserved on the replacement marker.
const SIZE_CLASSES: [&str; 3] = ["btn-primary-lg", "btn-primary-md", "btn-primary-sm"];

/// Class marking a full-width add-to-cart control.
const FULL_WIDTH_CLASS: &str = "btn-primary-full";

/// Render a fragment, degrading to an empty string on failure.
///
/// Askama rendering into a `String` only fails through a formatting error
/// in a field's `Display`; the page is left untouched rather than fed a
/// half-written fragment.
pub(crate) fn render_fragment(template: &impl Template) -> String {
    template.render().unwrap_or_else(|err| {
        tracing::error!(error = %err, "fragment render failed");
        String::new()
    })
}

// =============================================================================
// Address formatting
// =============================================================================

/// The display lines of an address, absent fields omitted.
///
/// City, state, and postal code collapse into one line joined with `", "`,
/// and only when a city is present at all.
#[must_use]
pub fn address_lines(address: &Address) -> Vec<String> {
    let mut lines = Vec::new();

    if !address.address_line1.is_empty() {
        lines.push(address.address_line1.clone());
    }
    if let Some(line2) = &address.address_line2 {
        lines.push(line2.clone());
    }
    if let Some(city) = &address.city {
        let mut city_line = city.clone();
        if let Some(state) = &address.state {
            city_line.push_str(", ");
            city_line.push_str(state);
        }
        if let Some(postal) = &address.postal_code {
            city_line.push_str(", ");
            city_line.push_str(postal);
        }
        lines.push(city_line);
    }
    if let Some(country) = &address.country {
        lines.push(country.clone());
    }

    lines
}

/// One-line address summary for cards and the checkout block.
#[must_use]
pub fn address_summary(address: &Address) -> String {
    address_lines(address).join(", ")
}

/// Newline-joined plain-text form of the address for the shipping field.
#[must_use]
pub fn shipping_field_value(address: &Address) -> String {
    address_lines(address).join("\n")
}

/// Header delivery text, `"<city> <postal_code>"`, when both are present.
#[must_use]
pub fn city_zip(address: &Address) -> Option<String> {
    match (&address.city, &address.postal_code) {
        (Some(city), Some(postal)) => Some(format!("{city} {postal}")),
        _ => None,
    }
}

/// Homepage hero headline for a delivery city.
#[must_use]
pub fn hero_headline(city: &str) -> String {
    format!("Shop Local, Support {city}")
}

// =============================================================================
// Templates
// =============================================================================

/// Display data for one selectable address card.
#[derive(Debug, Clone)]
pub struct AddressCardView {
    pub id: i32,
    pub name: String,
    pub summary: String,
    pub phone: Option<String>,
    pub selected: bool,
}

impl AddressCardView {
    /// Build the card view, highlighting it when selected.
    #[must_use]
    pub fn new(address: &Address, selected: bool) -> Self {
        Self {
            id: address.id.as_i32(),
            name: address.name.clone(),
            summary: address_summary(address),
            phone: address.phone.clone(),
            selected,
        }
    }
}

/// The address list inside the selector modal.
#[derive(Template)]
#[template(path = "partials/address_list.html")]
pub struct AddressListTemplate {
    pub cards: Vec<AddressCardView>,
    pub show_more: bool,
}

/// Empty-state call-to-action shown when no addresses are saved.
#[derive(Template)]
#[template(path = "partials/address_empty.html")]
pub struct AddressEmptyTemplate;

/// Human-readable address block on the checkout page.
#[derive(Template)]
#[template(path = "partials/address_block.html")]
pub struct AddressBlockTemplate {
    pub name: String,
    pub summary: String,
    pub phone: Option<String>,
}

impl AddressBlockTemplate {
    /// Build the checkout block for an address.
    #[must_use]
    pub fn for_address(address: &Address) -> Self {
        Self {
            name: address.name.clone(),
            summary: address_summary(address),
            phone: address.phone.clone(),
        }
    }
}

/// Non-interactive "In cart" marker replacing an add-to-cart control.
#[derive(Template)]
#[template(path = "partials/in_cart.html")]
pub struct InCartTemplate {
    pub product_id: i32,
    pub wrapper_class: &'static str,
    pub size_class: Option<&'static str>,
}

impl InCartTemplate {
    /// Build the marker for a control, preserving its width and size
    /// classes so the layout does not shift.
    #[must_use]
    pub fn for_control(control: &CartControl) -> Self {
        let full_width = control.classes.iter().any(|c| c == FULL_WIDTH_CLASS);
        let size_class = SIZE_CLASSES
            .into_iter()
            .find(|size| control.classes.iter().any(|c| c == size));

        Self {
            product_id: control.product.as_i32(),
            wrapper_class: if full_width { "block" } else { "inline-block" },
            size_class,
        }
    }
}

/// One category option button in a dropdown.
#[derive(Template)]
#[template(path = "partials/category_option.html")]
pub struct CategoryOptionTemplate {
    pub name: String,
}

/// The pin-icon badge shown when the `local` pseudo-category is picked.
#[derive(Template)]
#[template(path = "partials/local_badge.html")]
pub struct LocalBadgeTemplate;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use golden_beet_core::{AddressId, ProductId};

    fn address() -> Address {
        Address {
            id: AddressId::new(1),
            name: "Dana Reeves".to_string(),
            address_line1: "12 Elm St".to_string(),
            address_line2: None,
            city: Some("Portland".to_string()),
            state: Some("OR".to_string()),
            postal_code: Some("97201".to_string()),
            country: Some("USA".to_string()),
            phone: None,
            is_default: false,
            created_at: Some(Utc::now()),
            updated_at: None,
        }
    }

    #[test]
    fn test_address_lines_full() {
        assert_eq!(
            address_lines(&address()),
            vec!["12 Elm St", "Portland, OR, 97201", "USA"]
        );
    }

    #[test]
    fn test_address_lines_omit_absent_fields() {
        let mut a = address();
        a.state = None;
        a.country = None;
        assert_eq!(address_lines(&a), vec!["12 Elm St", "Portland, 97201"]);
    }

    #[test]
    fn test_address_lines_no_city_drops_postal() {
        let mut a = address();
        a.city = None;
        assert_eq!(address_lines(&a), vec!["12 Elm St", "USA"]);
    }

    #[test]
    fn test_shipping_field_is_newline_joined() {
        assert_eq!(
            shipping_field_value(&address()),
            "12 Elm St\nPortland, OR, 97201\nUSA"
        );
    }

    #[test]
    fn test_city_zip_requires_both() {
        assert_eq!(city_zip(&address()).as_deref(), Some("Portland 97201"));

        let mut a = address();
        a.postal_code = None;
        assert_eq!(city_zip(&a), None);
    }

    #[test]
    fn test_hero_headline() {
        assert_eq!(hero_headline("Portland"), "Shop Local, Support Portland");
    }

    #[test]
    fn test_in_cart_preserves_size_and_width() {
        let control = CartControl {
            key: 0,
            product: ProductId::new(9),
            classes: vec![
                "btn-primary-full".to_string(),
                "btn-primary-lg".to_string(),
            ],
        };
        let marker = InCartTemplate::for_control(&control);
        assert_eq!(marker.wrapper_class, "block");
        assert_eq!(marker.size_class, Some("btn-primary-lg"));

        let html = marker.render().expect("render");
        assert!(html.contains("In cart"));
        assert!(html.contains("block"));
        assert!(html.contains("btn-primary-lg"));
        assert!(html.contains(r#"data-product-id="9""#));
    }

    #[test]
    fn test_in_cart_defaults_inline() {
        let control = CartControl {
            key: 0,
            product: ProductId::new(9),
            classes: vec!["btn-primary-md".to_string()],
        };
        let marker = InCartTemplate::for_control(&control);
        assert_eq!(marker.wrapper_class, "inline-block");
        assert_eq!(marker.size_class, Some("btn-primary-md"));
    }

    #[test]
    fn test_address_card_selected_markup() {
        let card = AddressCardView::new(&address(), true);
        let html = AddressListTemplate {
            cards: vec![card],
            show_more: false,
        }
        .render()
        .expect("render");

        assert!(html.contains("border-blue-500"));
        assert!(html.contains("checked"));
        assert!(html.contains("Dana Reeves"));
        assert!(html.contains("12 Elm St, Portland, OR, 97201, USA"));
        assert!(!html.contains("Show more addresses"));
    }

    #[test]
    fn test_address_list_show_more_affordance() {
        let html = AddressListTemplate {
            cards: vec![AddressCardView::new(&address(), false)],
            show_more: true,
        }
        .render()
        .expect("render");

        assert!(html.contains("Show more addresses"));
        assert!(html.contains("border-gray-200"));
        assert!(!html.contains("border-blue-500 bg-blue-50"));
    }

    #[test]
    fn test_empty_state_links_to_new_address() {
        let html = AddressEmptyTemplate.render().expect("render");
        assert!(html.contains("No addresses saved"));
        assert!(html.contains("/account/addresses/new"));
    }

    #[test]
    fn test_local_badge_markup() {
        let html = LocalBadgeTemplate.render().expect("render");
        assert!(html.contains("local"));
        assert!(html.contains("<svg"));
    }
}
