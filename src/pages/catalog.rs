//! Catalog page — fetches the product list once and renders the grid.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. It issues the one-shot catalog request on mount
//! and renders either the card grid or a single error line; the mode toggle
//! in the header stays functional in every state.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use leptos::prelude::*;

use crate::components::product_card::ProductCard;
use crate::state::catalog::CatalogState;
use crate::state::ui::UiState;

/// Button label shows the mode you would switch *to*, not the current one.
fn toggle_label(dark_mode: bool) -> &'static str {
    if dark_mode { "Toggle Light Mode" } else { "Toggle Dark Mode" }
}

/// The single user-facing line shown in place of the grid on failure.
fn error_line(message: &str) -> String {
    format!("Error fetching products: {message}")
}

/// Catalog page — header with mode toggle, then error line or product grid.
#[component]
pub fn CatalogPage() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    // One request per mount. The alive flag guards the post-await update so
    // a response arriving after teardown never touches defunct state.
    #[cfg(feature = "csr")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_products().await;
            if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                return;
            }
            match &result {
                Ok(products) => log::debug!("catalog loaded: {} products", products.len()),
                Err(err) => log::warn!("catalog fetch failed: {err}"),
            }
            catalog.update(|state| state.apply_fetch_result(result));
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let on_toggle = move |_| ui.update(|state| state.toggle());

    view! {
        <div class="catalog-page">
            <header class="catalog-page__header">
                <h1 class="catalog-page__title">"Product List"</h1>
                <button class="catalog-page__mode-toggle" on:click=on_toggle>
                    {move || toggle_label(ui.get().dark_mode)}
                </button>
            </header>
            <Show
                when=move || catalog.get().error.is_none()
                fallback=move || {
                    view! {
                        <p class="catalog-page__error" role="alert">
                            {move || error_line(&catalog.get().error.unwrap_or_default())}
                        </p>
                    }
                }
            >
                <div class="catalog-page__grid">
                    <For
                        each=move || catalog.get().products
                        key=|product| product.id
                        children=move |product| view! { <ProductCard product=product /> }
                    />
                </div>
            </Show>
        </div>
    }
}
