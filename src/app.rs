//! Root application component.
//!
//! ARCHITECTURE
//! ============
//! Owns the shared signals, provides them via context, and hosts the single
//! catalog page. The display-mode preference is hydrated here before first
//! paint and persisted as a side effect of every change.

use leptos::prelude::*;

use crate::pages::catalog::CatalogPage;
use crate::state::catalog::CatalogState;
use crate::state::ui::UiState;
use crate::util::dark_mode;

/// Application root: context providers plus the catalog page.
#[component]
pub fn App() -> impl IntoView {
    let catalog = RwSignal::new(CatalogState::default());
    let ui = RwSignal::new(UiState::from_preference(dark_mode::read_preference()));
    provide_context(catalog);
    provide_context(ui);

    // Runs after every change to the flag, including the initial value on
    // mount, so the preference is persisted once even without interaction.
    Effect::new(move || {
        let enabled = ui.get().dark_mode;
        dark_mode::apply(enabled);
        dark_mode::persist(enabled);
    });

    view! { <CatalogPage /> }
}
