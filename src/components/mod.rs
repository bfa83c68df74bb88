//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render presentation details for the catalog page while the
//! page itself owns orchestration and shared state access.

pub mod product_card;
