//! Business logic and client trait definitions for Mindset.
//!
//! This crate defines the "ports" (`CompletionClient`, `SessionRenderer`)
//! that the infrastructure and CLI layers implement, plus the session
//! orchestrators that drive them. It depends only on `mindset-types` --
//! never on `mindset-infra` or any HTTP crate.

pub mod completion;
pub mod conversation;
pub mod render;
pub mod session;
pub mod wizard;
