//! Shared view state provided via Leptos context.
//!
//! DESIGN
//! ======
//! Catalog data and UI chrome live in separate structs so the display-mode
//! overlay can transition independently of the fetch lifecycle.

pub mod catalog;
pub mod ui;
