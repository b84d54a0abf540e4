//! Saved-address listing command.

use golden_beet_controller::api::{ApiError, HttpApi, StorefrontApi};
use golden_beet_controller::render::address_summary;

/// List the saved delivery addresses the selector modal would show.
///
/// # Errors
///
/// Returns an error on transport failure.
pub async fn list(api: &HttpApi) -> Result<(), ApiError> {
    let addresses = api.addresses().await?;

    if addresses.is_empty() {
        tracing::info!("No addresses saved");
        return Ok(());
    }

    tracing::info!("Delivery addresses ({})", addresses.len());
    for address in &addresses {
        let marker = if address.is_default { " [default]" } else { "" };
        tracing::info!("  {} ({}){}", address.name, address.id, marker);
        tracing::info!("    {}", address_summary(address));
        if let Some(phone) = &address.phone {
            tracing::info!("    {phone}");
        }
    }
    Ok(())
}
