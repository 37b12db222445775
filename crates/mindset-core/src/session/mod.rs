//! Session orchestrators.
//!
//! Each session object owns its id, conversation log and (for the wizard)
//! step controller. Nothing is process-global, so any number of sessions
//! can run side by side.

pub mod chat;
pub mod wizard;

#[cfg(test)]
pub(crate) mod testing;

pub use chat::ChatSession;
pub use wizard::{StepOutcome, WizardOptions, WizardSession};
