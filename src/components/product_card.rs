//! Card component for a single catalog product.
//!
//! DESIGN
//! ======
//! The truncation rule is deliberate upstream display behavior reproduced
//! exactly: the ellipsis is appended unconditionally, even when the
//! description is already shorter than the cutoff.

#[cfg(test)]
#[path = "product_card_test.rs"]
mod product_card_test;

use leptos::prelude::*;

use crate::net::types::Product;

/// Display cutoff for product descriptions, in characters.
const DESCRIPTION_CUTOFF: usize = 50;

/// Price text with the currency prefix, native float formatting.
fn display_price(price: f64) -> String {
    format!("${price}")
}

/// First 50 characters of the description plus a literal ellipsis suffix,
/// regardless of whether the string is shorter than the cutoff.
fn truncate_description(description: &str) -> String {
    let prefix: String = description.chars().take(DESCRIPTION_CUTOFF).collect();
    format!("{prefix}...")
}

/// A card showing one product's title, price, and truncated description.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    view! {
        <article class="product-card">
            <h3 class="product-card__title">{product.title}</h3>
            <p class="product-card__price">{display_price(product.price)}</p>
            <p class="product-card__description">
                {truncate_description(&product.description)}
            </p>
        </article>
    }
}
