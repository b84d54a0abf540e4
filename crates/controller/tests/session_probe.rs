//! Session probe: guest vs authenticated navigation toggling.

mod common;

use common::{FakeApi, FakePage, sample_user};
use golden_beet_controller::PageController;
use golden_beet_controller::page::element_ids;

#[tokio::test]
async fn authenticated_session_reveals_user_menu() {
    let api = FakeApi::default().with_user(sample_user());
    let mut controller = PageController::new(api, FakePage::default());

    controller.check_auth().await;

    let page = controller.page();
    assert!(page.is_hidden(element_ids::GUEST_MENU));
    assert!(!page.is_hidden(element_ids::USER_MENU));
    assert!(!page.is_hidden(element_ids::ORDERS_LINK));
}

#[tokio::test]
async fn guest_session_reveals_guest_menu() {
    let mut controller = PageController::new(FakeApi::default(), FakePage::default());

    controller.check_auth().await;

    let page = controller.page();
    assert!(!page.is_hidden(element_ids::GUEST_MENU));
    assert!(page.is_hidden(element_ids::USER_MENU));
    assert!(page.is_hidden(element_ids::ORDERS_LINK));
}

#[tokio::test]
async fn probe_failure_is_treated_as_guest() {
    let api = FakeApi {
        user_fails: true,
        ..FakeApi::default()
    };
    let mut controller = PageController::new(api, FakePage::default());

    controller.check_auth().await;

    let page = controller.page();
    assert!(!page.is_hidden(element_ids::GUEST_MENU));
    assert!(page.is_hidden(element_ids::USER_MENU));
    assert!(page.alerts.is_empty());
}

#[tokio::test]
async fn logout_navigates_home() {
    let api = FakeApi::default().with_user(sample_user());
    let mut controller = PageController::new(api, FakePage::default());

    controller.logout().await;

    assert_eq!(controller.page().navigations, vec!["/"]);
}

#[tokio::test]
async fn logout_navigates_home_even_on_failure() {
    let api = FakeApi {
        logout_fails: true,
        ..FakeApi::default()
    };
    let mut controller = PageController::new(api, FakePage::default());

    controller.logout().await;

    assert_eq!(controller.page().navigations, vec!["/"]);
    assert!(controller.page().alerts.is_empty());
}

#[tokio::test]
async fn init_runs_the_full_page_load_sequence() {
    let api = FakeApi::default()
        .with_user(sample_user())
        .with_cart(vec![common::cart_item(1, 10, 2)])
        .with_addresses(vec![common::sample_address(1)])
        .with_categories(vec!["Groceries".to_string()]);
    let page = FakePage::default()
        .with_element(element_ids::HERO_TITLE)
        .with_param("search", "beets");
    let mut controller = PageController::new(api, page);

    controller.init().await;

    let page = controller.page();
    assert!(page.is_hidden(element_ids::GUEST_MENU));
    assert_eq!(page.text.get(element_ids::CART_COUNT).map(String::as_str), Some("2"));
    assert_eq!(
        page.text.get(element_ids::DELIVERY_CITY_ZIP).map(String::as_str),
        Some("Portland 97201")
    );
    assert_eq!(
        page.text.get(element_ids::HERO_TITLE).map(String::as_str),
        Some("Shop Local, Support Portland")
    );
    assert!(
        page.html
            .get("header-category-options")
            .is_some_and(|html| html.contains("Groceries"))
    );
    assert_eq!(
        page.fields.get("header-search-input").map(String::as_str),
        Some("beets")
    );
}
