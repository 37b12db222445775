//! Interactive terminal sessions.
//!
//! The freeform chat and the reflection wizard share the same input
//! handling, slash commands and renderer. Entry points:
//! `loop_runner::run_chat_loop` and `loop_runner::run_wizard_loop`.

pub mod banner;
pub mod commands;
pub mod input;
pub mod loop_runner;
pub mod renderer;
