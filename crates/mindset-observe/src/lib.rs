//! Observability for Mindset: subscriber setup and shared span field names.

pub mod attributes;
pub mod tracing_setup;
