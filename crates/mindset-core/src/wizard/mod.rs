//! Step tracking for the guided reflection wizard.
//!
//! `StepController` owns which step is active and the per-step submission
//! state; `PendingGuard` scopes the `Pending` state of one submission.

pub mod controller;
pub mod pending;

pub use controller::StepController;
pub use pending::PendingGuard;
