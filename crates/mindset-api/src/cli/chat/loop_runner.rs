//! Interactive loop orchestration.
//!
//! Reads lines, handles slash commands and hands everything else to the
//! session, which drives the renderer itself.

use std::io::Write;

use console::style;
use rustyline_async::SharedWriter;
use tracing::{Instrument, debug, info_span};

use mindset_core::conversation::ConversationLog;
use mindset_core::session::{ChatSession, WizardOptions, WizardSession};
use mindset_observe::attributes::{
    HTTP_ENDPOINT, KIND_CHAT, KIND_WIZARD, SERVICE_URL, SESSION_ID, SESSION_KIND, WIZARD_STEP,
};
use mindset_types::chat::MessageRole;
use mindset_types::completion::{CHAT_ENDPOINT, HistoryMode};
use mindset_types::session::SessionId;
use mindset_types::wizard::WizardStep;

use crate::state::AppState;

use super::banner::print_welcome_banner;
use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};
use super::renderer::{TerminalRenderer, progress_bar};

/// Longest message preview shown by `/history`.
const PREVIEW_CHARS: usize = 100;

fn chat_prompt() -> String {
    format!("  {} ", style("You >").green().bold())
}

fn step_prompt(step: WizardStep) -> String {
    format!(
        "  {} ",
        style(format!("[{}/{}] You >", step.number(), WizardStep::COUNT))
            .green()
            .bold()
    )
}

/// Run the freeform chat loop.
pub async fn run_chat_loop(state: &AppState, session: Option<String>) -> anyhow::Result<()> {
    let id = session
        .map(SessionId::new)
        .unwrap_or_else(|| SessionId::generate(state.config.chat_session_ids));
    let span = info_span!(
        "chat_session",
        { SESSION_ID } = %id,
        { SESSION_KIND } = KIND_CHAT,
        { SERVICE_URL } = %state.client.base_url(),
    );

    chat_loop(state, id).instrument(span).await
}

async fn chat_loop(state: &AppState, id: SessionId) -> anyhow::Result<()> {
    let (mut input, mut writer) = ChatInput::new(chat_prompt())
        .map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    print_welcome_banner(
        &mut writer,
        "Growth Mindset Professor",
        state.client.base_url(),
        id.as_str(),
    );

    let mut session = ChatSession::new(id, state.client.clone(), TerminalRenderer::new(writer));

    loop {
        match input.read_line().await {
            InputEvent::Eof => {
                end_notice(session.renderer_mut().writer());
                break;
            }
            InputEvent::Interrupted => {
                let out = session.renderer_mut().writer();
                let _ = writeln!(
                    out,
                    "\n  {}",
                    style("Press Ctrl+D to exit, or keep chatting.").dim()
                );
            }
            InputEvent::Message(text) => {
                if let Some(cmd) = commands::parse(&text) {
                    let log = session.log().clone();
                    let out = session.renderer_mut().writer();
                    match cmd {
                        ChatCommand::Help => {
                            let _ = write!(out, "{}", commands::help_text(false));
                        }
                        ChatCommand::Clear => input.clear(),
                        ChatCommand::Exit => {
                            end_notice(out);
                            break;
                        }
                        ChatCommand::History => print_log(out, &log),
                        ChatCommand::Progress | ChatCommand::Unknown(_) => {
                            unknown_command(out, &text);
                        }
                    }
                    continue;
                }

                // Failures are rendered by the session.
                if let Err(err) = session.send(&text).await {
                    debug!({ HTTP_ENDPOINT } = CHAT_ENDPOINT, error = %err, "Chat turn not completed");
                }
            }
        }
    }

    input.finish();
    Ok(())
}

/// Run the three-step reflection wizard.
pub async fn run_wizard_loop(
    state: &AppState,
    session: Option<String>,
    client_history: bool,
) -> anyhow::Result<()> {
    let id = session
        .map(SessionId::new)
        .unwrap_or_else(|| SessionId::generate(state.config.wizard_session_ids));
    let mut options = WizardOptions::from(&state.config);
    if client_history {
        options.history_mode = HistoryMode::Client;
    }
    let span = info_span!(
        "wizard_session",
        { SESSION_ID } = %id,
        { SESSION_KIND } = KIND_WIZARD,
        { SERVICE_URL } = %state.client.base_url(),
    );

    wizard_loop(state, id, options).instrument(span).await
}

async fn wizard_loop(state: &AppState, id: SessionId, options: WizardOptions) -> anyhow::Result<()> {
    let (mut input, mut writer) = ChatInput::new(step_prompt(WizardStep::Analyze))
        .map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    print_welcome_banner(
        &mut writer,
        "Reflection Wizard",
        state.client.base_url(),
        id.as_str(),
    );

    let mut wizard = WizardSession::new(
        id,
        state.client.clone(),
        TerminalRenderer::new(writer),
        options,
    );
    wizard.open();

    loop {
        match input.read_line().await {
            InputEvent::Eof => {
                end_notice(wizard.renderer_mut().writer());
                break;
            }
            InputEvent::Interrupted => {
                let out = wizard.renderer_mut().writer();
                let _ = writeln!(
                    out,
                    "\n  {}",
                    style("Press Ctrl+D to exit, or keep reflecting.").dim()
                );
            }
            InputEvent::Message(text) => {
                if let Some(cmd) = commands::parse(&text) {
                    let log = wizard.log().clone();
                    let active = wizard.active_step();
                    let progress = wizard.progress();
                    let out = wizard.renderer_mut().writer();
                    match cmd {
                        ChatCommand::Help => {
                            let _ = write!(out, "{}", commands::help_text(true));
                        }
                        ChatCommand::Clear => input.clear(),
                        ChatCommand::Exit => {
                            end_notice(out);
                            break;
                        }
                        ChatCommand::History => print_log(out, &log),
                        ChatCommand::Progress => print_progress(out, active, progress),
                        ChatCommand::Unknown(_) => unknown_command(out, &text),
                    }
                    continue;
                }

                let step = wizard.active_step();
                if let Err(err) = wizard.submit(&text).await {
                    debug!(
                        { WIZARD_STEP } = step.map(WizardStep::number).unwrap_or_default(),
                        error = %err,
                        "Wizard step not completed"
                    );
                }

                match wizard.active_step() {
                    Some(step) => input.update_prompt(&step_prompt(step)),
                    None => break,
                }
            }
        }
    }

    input.finish();
    Ok(())
}

fn end_notice(out: &mut SharedWriter) {
    let _ = writeln!(out, "\n  {}", style("Session ended.").dim());
}

fn unknown_command(out: &mut SharedWriter, text: &str) {
    let _ = writeln!(
        out,
        "\n  {} Unknown command: {}. Type /help for available commands.\n",
        style("?").yellow().bold(),
        style(text).dim()
    );
}

fn print_progress(out: &mut SharedWriter, active: Option<WizardStep>, progress: f32) {
    let label = match active {
        Some(step) => format!("Step {} of {}: {}", step.number(), WizardStep::COUNT, step.title()),
        None => "All steps complete".to_string(),
    };
    let _ = writeln!(out, "\n  {}", style(label).bold());
    let _ = writeln!(out, "  {}\n", style(progress_bar(progress)).dim());
}

fn print_log(out: &mut SharedWriter, log: &ConversationLog) {
    if log.is_empty() {
        let _ = writeln!(out, "\n  {}\n", style("No messages yet.").dim());
        return;
    }

    let _ = writeln!(out);
    for message in log.iter() {
        let label = match message.role {
            MessageRole::User => style("You").green(),
            MessageRole::Assistant => style("Professor").cyan(),
            MessageRole::System => style("System").dim(),
        };
        let _ = writeln!(out, "  {} {}", label.bold(), preview(&message.content));
    }
    let _ = writeln!(out);
}

/// First line of `content`, cut to [`PREVIEW_CHARS`] characters.
fn preview(content: &str) -> String {
    let first_line = content.lines().next().unwrap_or_default();
    if first_line.chars().count() > PREVIEW_CHARS || content.lines().nth(1).is_some() {
        let cut: String = first_line.chars().take(PREVIEW_CHARS - 3).collect();
        format!("{cut}...")
    } else {
        first_line.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_keeps_short_single_line() {
        assert_eq!(preview("Missed a deadline"), "Missed a deadline");
    }

    #[test]
    fn preview_truncates_on_char_boundary() {
        let long = "é".repeat(150);
        let cut = preview(&long);
        assert!(cut.ends_with("..."));
        assert_eq!(cut.chars().count(), PREVIEW_CHARS);
    }

    #[test]
    fn preview_marks_multiline() {
        assert_eq!(preview("First\nSecond"), "First...");
    }

    #[test]
    fn step_prompt_shows_position() {
        let prompt = console::strip_ansi_codes(&step_prompt(WizardStep::Assess)).to_string();
        assert_eq!(prompt.trim(), "[2/3] You >");
    }
}
