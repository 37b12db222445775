//! Slash command parsing for the interactive loops.
//!
//! Commands start with `/`. Everything else is sent to the professor.

use console::style;

/// Available slash commands.
#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    /// Show available commands.
    Help,
    /// Clear the terminal screen.
    Clear,
    /// Exit the session.
    Exit,
    /// Show this session's conversation so far.
    History,
    /// Show wizard progress.
    Progress,
    /// Unknown command.
    Unknown(String),
}

/// Parse user input as a slash command.
///
/// Returns `None` if the input doesn't start with `/`.
pub fn parse(input: &str) -> Option<ChatCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let cmd = trimmed
        .split_whitespace()
        .next()
        .unwrap_or(trimmed)
        .to_lowercase();

    match cmd.as_str() {
        "/help" | "/h" | "/?" => Some(ChatCommand::Help),
        "/clear" | "/cls" => Some(ChatCommand::Clear),
        "/exit" | "/quit" | "/q" => Some(ChatCommand::Exit),
        "/history" => Some(ChatCommand::History),
        "/progress" | "/p" => Some(ChatCommand::Progress),
        other => Some(ChatCommand::Unknown(other.to_string())),
    }
}

/// Help text listing the commands. `/progress` only applies to the wizard.
pub fn help_text(wizard: bool) -> String {
    let mut entries = vec![
        ("/help", "Show this help message"),
        ("/clear", "Clear the screen"),
        ("/history", "Show the conversation so far"),
    ];
    if wizard {
        entries.push(("/progress", "Show which step you're on"));
    }
    entries.push(("/exit", "End the session"));

    let mut text = format!("\n  {}\n\n", style("Available commands:").bold());
    for (name, description) in entries {
        text.push_str(&format!("  {:<12} {description}\n", style(name).cyan()));
    }
    text.push_str(&format!("\n  {}\n", style("Ctrl+D to exit").dim()));
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_help() {
        assert_eq!(parse("/help"), Some(ChatCommand::Help));
        assert_eq!(parse("/h"), Some(ChatCommand::Help));
        assert_eq!(parse("/?"), Some(ChatCommand::Help));
    }

    #[test]
    fn test_parse_exit() {
        assert_eq!(parse("/exit"), Some(ChatCommand::Exit));
        assert_eq!(parse("/QUIT"), Some(ChatCommand::Exit));
        assert_eq!(parse("  /q  "), Some(ChatCommand::Exit));
    }

    #[test]
    fn test_parse_progress_and_history() {
        assert_eq!(parse("/progress"), Some(ChatCommand::Progress));
        assert_eq!(parse("/history now"), Some(ChatCommand::History));
    }

    #[test]
    fn test_parse_not_command() {
        assert_eq!(parse("I missed a deadline / again"), None);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            parse("/remember"),
            Some(ChatCommand::Unknown("/remember".to_string()))
        );
    }

    #[test]
    fn test_help_lists_progress_only_for_wizard() {
        let wizard = console::strip_ansi_codes(&help_text(true)).to_string();
        let chat = console::strip_ansi_codes(&help_text(false)).to_string();
        assert!(wizard.contains("/progress"));
        assert!(!chat.contains("/progress"));
        assert!(chat.contains("/exit"));
    }
}
