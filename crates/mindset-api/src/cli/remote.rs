//! One-shot commands against the service's housekeeping routes.

use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;
use dialoguer::Confirm;

use mindset_types::chat::MessageRole;
use mindset_types::remote::SessionHistory;
use mindset_types::session::SessionId;

use crate::cli::chat::renderer::spinner;
use crate::state::AppState;

/// `mindset health`
pub async fn health(state: &AppState, json: bool) -> Result<()> {
    let progress = spinner("Checking service...");
    let result = state.client.health().await;
    progress.finish_and_clear();
    let status = result?;

    if json {
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    let marker = if status.is_healthy() {
        style("\u{25cf}").green().bold()
    } else {
        style("\u{25cf}").red().bold()
    };
    println!();
    println!(
        "  {} {} {}",
        marker,
        style(status.service.as_deref().unwrap_or("Service")).bold(),
        style(&status.status).dim()
    );
    println!("  {}  {}", style("URL:").bold(), state.client.base_url());
    println!(
        "  {}  {}",
        style("Model configured:").bold(),
        if status.anthropic_configured { "yes" } else { "no" }
    );
    if let Some(active) = status.active_sessions {
        println!("  {}  {active}", style("Active sessions:").bold());
    }
    println!();

    Ok(())
}

/// `mindset history`
pub async fn history(state: &AppState, session: &str, json: bool) -> Result<()> {
    let id = SessionId::new(session);
    let history = state.client.session_history(&id).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&history)?);
        return Ok(());
    }

    if history.history.is_empty() {
        println!();
        println!(
            "  {} No history for session {}.",
            style("i").blue().bold(),
            style(session).yellow()
        );
        println!();
        return Ok(());
    }

    println!();
    println!("{}", history_table(&history));
    println!();
    println!(
        "  {} message{}",
        style(history.message_count).bold(),
        if history.message_count == 1 { "" } else { "s" }
    );
    println!();

    Ok(())
}

fn history_table(history: &SessionHistory) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("#").fg(Color::White),
        Cell::new("Role").fg(Color::White),
        Cell::new("Message").fg(Color::White),
        Cell::new("Time").fg(Color::White),
    ]);

    for (idx, entry) in history.history.iter().enumerate() {
        let role = match entry.role {
            MessageRole::User => Cell::new("you").fg(Color::Green),
            MessageRole::Assistant => Cell::new("professor").fg(Color::Cyan),
            MessageRole::System => Cell::new("system").fg(Color::DarkGrey),
        };
        table.add_row(vec![
            Cell::new(idx + 1),
            role,
            Cell::new(&entry.content),
            Cell::new(entry.timestamp.as_deref().unwrap_or("-")).fg(Color::DarkGrey),
        ]);
    }

    table
}

/// `mindset reset`
pub async fn reset(state: &AppState, session: &str, force: bool, json: bool) -> Result<()> {
    if !force && !json {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Discard the service's record of session '{}'?",
                style(session).red().bold()
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("  Cancelled.");
            return Ok(());
        }
    }

    let id = SessionId::new(session);
    let progress = spinner("Resetting session...");
    let result = state.client.reset_session(&id).await;
    progress.finish_and_clear();
    let ack = result?;

    if json {
        println!("{}", serde_json::to_string_pretty(&ack)?);
    } else {
        println!("  {} {}", style("\u{2713}").green().bold(), ack.message);
    }

    Ok(())
}
