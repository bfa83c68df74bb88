//! Catalog view state and the fetch-result transition.
//!
//! DESIGN
//! ======
//! Loading is an explicit phase rather than being inferred from an empty
//! product list; an empty-but-successful fetch is a real, distinct state.
//! `Loaded` and `Failed` are both terminal for a given page mount — there
//! is no refresh action, so no transition back to `Loading` exists.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::net::api::FetchError;
use crate::net::types::Product;

/// Fetch lifecycle for one page mount.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadPhase {
    /// Between mount and first resolution of the catalog request.
    #[default]
    Loading,
    /// The request resolved with a valid product array (possibly empty).
    Loaded,
    /// The request failed; `error` carries the displayable message.
    Failed,
}

/// Products, fetch error, and phase for the catalog page.
///
/// Invariant: `error` and `products` are never both used for rendering —
/// a present `error` suppresses the grid entirely.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogState {
    /// Replaced wholesale on a successful fetch; never merged or appended.
    pub products: Vec<Product>,
    /// Displayable failure message from the fetch boundary.
    pub error: Option<String>,
    pub phase: LoadPhase,
}

impl CatalogState {
    /// Apply the outcome of the one-shot catalog fetch.
    ///
    /// Success replaces `products` in full; failure records the message and
    /// leaves any previous products untouched.
    pub fn apply_fetch_result(&mut self, result: Result<Vec<Product>, FetchError>) {
        match result {
            Ok(products) => {
                self.products = products;
                self.phase = LoadPhase::Loaded;
            }
            Err(err) => {
                self.error = Some(err.to_string());
                self.phase = LoadPhase::Failed;
            }
        }
    }
}
