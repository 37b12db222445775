//! Terminal presentation of session events.
//!
//! `TerminalRenderer` implements [`SessionRenderer`]: a spinner while a
//! submission is pending, termimad for the professor's replies, and styled
//! notices for failures and wizard progress. Output goes through the
//! readline's `SharedWriter` so it never clobbers the prompt.

use std::io::Write;
use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use rustyline_async::SharedWriter;
use termimad::MadSkin;

use mindset_core::render::{DisplayText, SessionRenderer};
use mindset_types::completion::SessionSummary;
use mindset_types::wizard::WizardStep;

/// Width of the wizard progress bar, in cells.
const PROGRESS_WIDTH: usize = 24;

/// Label printed before each reply.
const SPEAKER: &str = "Professor";

/// Start a steady-ticking spinner with `message`.
pub fn spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// `[████████░░░░] 33%` for a fraction in `0.0..=1.0`.
pub fn progress_bar(progress: f32) -> String {
    let progress = progress.clamp(0.0, 1.0);
    let filled = (progress * PROGRESS_WIDTH as f32).round() as usize;
    format!(
        "[{}{}] {:>3}%",
        "\u{2588}".repeat(filled),
        "\u{2591}".repeat(PROGRESS_WIDTH - filled),
        (progress * 100.0).round() as u32
    )
}

/// Renders session events into the terminal.
pub struct TerminalRenderer {
    out: SharedWriter,
    skin: MadSkin,
    spinner: Option<ProgressBar>,
}

impl TerminalRenderer {
    pub fn new(out: SharedWriter) -> Self {
        let mut skin = MadSkin::default_dark();
        skin.bold.set_fg(termimad::crossterm::style::Color::Cyan);
        skin.inline_code
            .set_fg(termimad::crossterm::style::Color::Yellow);

        Self {
            out,
            skin,
            spinner: None,
        }
    }

    /// Writer shared with the readline; safe to use while the prompt is shown.
    pub fn writer(&mut self) -> &mut SharedWriter {
        &mut self.out
    }

    fn line(&mut self, text: impl std::fmt::Display) {
        let _ = writeln!(self.out, "{text}");
    }
}

impl SessionRenderer for TerminalRenderer {
    fn pending_changed(&mut self, pending: bool) {
        if pending {
            self.spinner = Some(spinner("thinking..."));
        } else if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }

    fn response(&mut self, text: &DisplayText) {
        let rendered = self.skin.term_text(&text.to_plain()).to_string();
        self.line("");
        self.line(format!("  {}", style(SPEAKER).cyan().bold()));
        for line in rendered.trim_end().lines() {
            self.line(format!("  {line}"));
        }
        self.line("");
    }

    fn failure(&mut self, notice: &str) {
        self.line(format!("\n  {} {notice}\n", style("!").red().bold()));
    }

    fn invalid_input(&mut self, notice: &str) {
        self.line(format!("  {} {notice}", style("?").yellow().bold()));
    }

    fn step_activated(&mut self, step: WizardStep, progress: f32) {
        self.line("");
        self.line(format!(
            "  {} {}",
            style(format!("Step {} of {}:", step.number(), WizardStep::COUNT)).bold(),
            style(step.title()).cyan()
        ));
        self.line(format!("  {}", style(progress_bar(progress)).dim()));
        self.line(format!(
            "  {}",
            style(format!("Enter your {} below.", step.input_label())).dim()
        ));
        self.line("");
    }

    fn session_finished(&mut self, summary: Option<&SessionSummary>) {
        self.line(format!("  {}", style(progress_bar(1.0)).dim()));
        self.line(format!(
            "\n  {} {}",
            style("\u{2713}").green().bold(),
            style("Reflection complete. Keep growing!").bold()
        ));
        if let Some(summary) = summary {
            self.line(format!(
                "  {}",
                style(format!(
                    "{} exchanges \u{00b7} steps: {}",
                    summary.total_exchanges,
                    summary.completed_steps.join(", ")
                ))
                .dim()
            ));
        }
        self.line("");
    }
}
