//! Cart inspection and mutation commands.

use golden_beet_core::ProductId;

use golden_beet_controller::api::{ApiError, HttpApi, StorefrontApi, total_quantity};

/// Show the current cart snapshot and the badge total a page would render.
///
/// # Errors
///
/// Returns an error on transport failure.
pub async fn show(api: &HttpApi) -> Result<(), ApiError> {
    let items = api.cart().await?;

    if items.is_empty() {
        tracing::info!("Cart is empty");
        return Ok(());
    }

    for item in &items {
        tracing::info!(
            "  line {}: product {} x{}",
            item.id,
            item.product_id,
            item.quantity
        );
    }
    tracing::info!("Badge total: {}", total_quantity(&items));
    Ok(())
}

/// Add one unit of a product, then show the refreshed badge total.
///
/// # Errors
///
/// Returns an error on transport failure or when the server rejects the
/// add (the rejection message is surfaced as-is).
pub async fn add(api: &HttpApi, product_id: i32) -> Result<(), ApiError> {
    let product = ProductId::new(product_id);
    let item = api.add_to_cart(product, 1).await?;
    tracing::info!("Added product {} (cart line {})", item.product_id, item.id);

    let items = api.cart().await?;
    tracing::info!("Badge total: {}", total_quantity(&items));
    Ok(())
}
