//! HTTP client for the professor service.
//!
//! [`HttpCompletionClient`] implements the [`CompletionClient`] trait from
//! `mindset-core` and also exposes the service's housekeeping routes
//! (health, server-side history, reset).
//!
//! [`CompletionClient`]: mindset_core::completion::CompletionClient

pub mod client;

pub use client::HttpCompletionClient;
