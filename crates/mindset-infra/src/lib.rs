//! Infrastructure layer for Mindset.
//!
//! Contains the reqwest-backed implementation of the `CompletionClient`
//! trait defined in `mindset-core`, the client for the service's
//! housekeeping routes, and configuration/data-directory loading.

pub mod config;
pub mod http;
