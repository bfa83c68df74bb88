//! REST helper for fetching the product catalog.
//!
//! Client-side (csr): one real HTTP call via `gloo-net` per page mount.
//! Native builds compile only the pure parsing/validation half so the
//! fetch boundary stays unit-testable off-wasm.
//!
//! ERROR HANDLING
//! ==============
//! Every transport, parse, and shape failure is converted into a single
//! `FetchError` here; callers only ever see one displayable message and
//! nothing propagates past the fetch boundary.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::Product;

/// Fixed remote endpoint; no auth, no query parameters, no pagination.
pub const PRODUCTS_ENDPOINT: &str = "https://fakestoreapi.com/products";

/// Failure at the fetch boundary, carrying its user-facing message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// Transport failure or non-success HTTP status.
    #[error("Network issue")]
    Network,
    /// Body was valid JSON but not an array.
    #[error("Expected an array but got something else")]
    Shape,
    /// Body was not valid JSON, or an element was not product-shaped;
    /// the message is the parser's own text.
    #[error("{0}")]
    Parse(String),
}

/// Parse and shape-validate a response body.
///
/// The top-level value must be a JSON array of product-shaped objects;
/// element order is preserved.
///
/// # Errors
///
/// `Parse` if the body is not valid JSON or an element does not match the
/// product schema, `Shape` if the top-level value is not an array.
pub fn parse_products(body: &str) -> Result<Vec<Product>, FetchError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| FetchError::Parse(e.to_string()))?;
    if !value.is_array() {
        return Err(FetchError::Shape);
    }
    serde_json::from_value(value).map_err(|e| FetchError::Parse(e.to_string()))
}

/// Fetch the full catalog from `PRODUCTS_ENDPOINT`.
///
/// Issued exactly once per page mount. No retry, no timeout, no
/// cancellation token; teardown safety is the caller's concern.
///
/// # Errors
///
/// `Network` on transport failure or a non-success status, otherwise
/// whatever `parse_products` reports for the body.
#[cfg(feature = "csr")]
pub async fn fetch_products() -> Result<Vec<Product>, FetchError> {
    let resp = gloo_net::http::Request::get(PRODUCTS_ENDPOINT)
        .send()
        .await
        .map_err(|_| FetchError::Network)?;
    if !resp.ok() {
        return Err(FetchError::Network);
    }
    let body = resp.text().await.map_err(|_| FetchError::Network)?;
    parse_products(&body)
}
