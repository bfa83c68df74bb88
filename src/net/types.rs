//! Product DTO as received from the remote catalog API.
//!
//! DESIGN
//! ======
//! This type mirrors the upstream payload rather than an internal ideal:
//! the catalog is external data we render verbatim, so serde is lenient
//! about fields we never display (category, image, rating, ...).

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A catalog item as served by the products endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique within a response; used as the render-list key.
    pub id: u32,
    /// Display name.
    pub title: String,
    /// Unit price; rendered with a `$` prefix and native float formatting.
    pub price: f64,
    /// Long-form text; only the first 50 characters are ever displayed.
    pub description: String,
}
