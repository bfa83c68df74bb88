//! Storefront client — a single-page product catalog viewer.
//!
//! ARCHITECTURE
//! ============
//! `pages` owns route-scoped orchestration (the one-shot catalog fetch),
//! `components` renders presentation details, `net` talks to the remote
//! catalog API, `state` holds the shared view state provided via context,
//! and `util` isolates browser/environment concerns.
//!
//! The crate compiles natively with no features so the test suite runs
//! off-wasm; all browser access is gated behind the `csr` feature.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
