//! Shared domain types for Mindset.
//!
//! This crate contains the types used across the Mindset client: chat
//! messages, session identifiers, wizard steps, the completion endpoint's
//! wire shapes, configuration, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod chat;
pub mod completion;
pub mod config;
pub mod error;
pub mod remote;
pub mod session;
pub mod wizard;
