//! Networking modules for the remote catalog API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the one-shot REST call and owns the fetch-boundary error
//! taxonomy; `types` defines the product schema received from the API.

pub mod api;
pub mod types;
