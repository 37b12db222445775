//! Completion endpoint abstractions for Mindset.
//!
//! - `CompletionClient`: RPITIT trait for concrete endpoint clients
//! - Canned fallback messages shown in place of technical errors

pub mod client;
pub mod fallback;

pub use client::CompletionClient;
