//! Category enumeration command.

use golden_beet_controller::api::{ApiError, HttpApi, StorefrontApi};

/// List the category names the header dropdowns are populated from.
///
/// # Errors
///
/// Returns an error on transport failure.
pub async fn categories(api: &HttpApi) -> Result<(), ApiError> {
    let categories = api.categories().await?;

    if categories.is_empty() {
        tracing::info!("No categories enumerated");
        return Ok(());
    }

    for category in &categories {
        tracing::info!("  {category}");
    }
    Ok(())
}
