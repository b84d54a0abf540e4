//! Reqwest-backed implementation of the storefront API.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use golden_beet_core::ProductId;

use crate::config::ControllerConfig;

use super::types::{AddToCartRequest, Address, CartItem, CurrentUser};
use super::{ApiError, StorefrontApi};

const CATEGORIES_CACHE_KEY: &str = "categories";
const CATEGORIES_TTL: Duration = Duration::from_secs(300); // 5 minutes

/// Fallback message when a cart rejection carries no readable error body.
const ADD_REJECTED_FALLBACK: &str = "Failed to add item to cart";

/// Error body shape for application-level rejections.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// HTTP client for the storefront REST API.
///
/// Cheaply cloneable via `Arc`. Holds a cookie store so the session cookie
/// set by the server survives across calls; an explicitly configured
/// session cookie is attached to every request on top of that.
#[derive(Clone)]
pub struct HttpApi {
    inner: Arc<HttpApiInner>,
}

struct HttpApiInner {
    client: reqwest::Client,
    base: String,
    session_cookie: Option<SecretString>,
    categories: Cache<&'static str, Vec<String>>,
}

impl HttpApi {
    /// Create a new API client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &ControllerConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder().cookie_store(true).build()?;

        let categories = Cache::builder()
            .max_capacity(1)
            .time_to_live(CATEGORIES_TTL)
            .build();

        Ok(Self {
            inner: Arc::new(HttpApiInner {
                client,
                base: config.api_base.as_str().trim_end_matches('/').to_owned(),
                session_cookie: config.session_cookie.clone(),
                categories,
            }),
        })
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{path}", self.inner.base);
        let mut builder = self.inner.client.request(method, url);
        if let Some(cookie) = &self.inner.session_cookie {
            builder = builder.header("Cookie", cookie.expose_secret());
        }
        builder
    }

    /// Fetch a JSON list, mapping non-success statuses to an empty list.
    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        let response = self.request(Method::GET, path).send().await?;
        let status = response.status();

        if !status.is_success() {
            debug!(%status, path, "non-success response, treating as empty list");
            return Ok(Vec::new());
        }

        let body = response.text().await?;
        decode(&body, path)
    }
}

/// Decode a response body, logging a truncated copy on failure.
fn decode<T: DeserializeOwned>(body: &str, path: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|err| {
        tracing::error!(
            error = %err,
            path,
            body = %body.chars().take(500).collect::<String>(),
            "failed to parse storefront response"
        );
        ApiError::Parse(err)
    })
}

impl StorefrontApi for HttpApi {
    #[instrument(skip(self))]
    async fn current_user(&self) -> Result<Option<CurrentUser>, ApiError> {
        let response = self.request(Method::GET, "/api/users/me").send().await?;
        let status = response.status();

        if !status.is_success() {
            debug!(%status, "no authenticated session");
            return Ok(None);
        }

        let body = response.text().await?;
        decode(&body, "/api/users/me").map(Some)
    }

    #[instrument(skip(self))]
    async fn logout(&self) -> Result<(), ApiError> {
        let response = self.request(Method::POST, "/api/users/logout").send().await?;
        debug!(status = %response.status(), "logout issued");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn addresses(&self) -> Result<Vec<Address>, ApiError> {
        self.get_list("/api/users/addresses").await
    }

    #[instrument(skip(self))]
    async fn cart(&self) -> Result<Vec<CartItem>, ApiError> {
        self.get_list("/api/cart/").await
    }

    #[instrument(skip(self), fields(product = %product))]
    async fn add_to_cart(&self, product: ProductId, quantity: u32) -> Result<CartItem, ApiError> {
        let response = self
            .request(Method::POST, "/api/cart/")
            .json(&AddToCartRequest {
                product_id: product,
                quantity,
            })
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.error)
                .unwrap_or_else(|| ADD_REJECTED_FALLBACK.to_string());
            debug!(%status, %message, "add to cart rejected");
            return Err(ApiError::Rejected { message });
        }

        decode(&body, "/api/cart/")
    }

    #[instrument(skip(self))]
    async fn categories(&self) -> Result<Vec<String>, ApiError> {
        if let Some(categories) = self.inner.categories.get(CATEGORIES_CACHE_KEY).await {
            debug!("cache hit for categories");
            return Ok(categories);
        }

        let response = self
            .request(Method::GET, "/api/products/categories")
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            debug!(%status, "category fetch failed, treating as empty");
            return Ok(Vec::new());
        }

        let body = response.text().await?;
        let categories: Vec<String> = decode(&body, "/api/products/categories")?;

        self.inner
            .categories
            .insert(CATEGORIES_CACHE_KEY, categories.clone())
            .await;

        Ok(categories)
    }
}
