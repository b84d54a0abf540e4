//! Session probe command.

use golden_beet_controller::api::{ApiError, HttpApi, StorefrontApi};

/// Report who the configured session cookie belongs to.
///
/// # Errors
///
/// Returns an error on transport failure; a guest session is a normal
/// outcome, not an error.
pub async fn probe(api: &HttpApi) -> Result<(), ApiError> {
    match api.current_user().await? {
        Some(user) => {
            tracing::info!("Authenticated as {} (user id {})", user.email, user.id);
            if let Some(name) = user.name {
                tracing::info!("  Name: {name}");
            }
        }
        None => tracing::info!("No authenticated session (guest)"),
    }
    Ok(())
}
