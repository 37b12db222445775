//! Presentation callbacks for session orchestrators.
//!
//! Sessions never draw anything themselves. They call a `SessionRenderer`
//! with display data and the front-end decides how it looks (terminal
//! output in mindset-api, a recorder in tests).

use mindset_types::completion::SessionSummary;
use mindset_types::wizard::WizardStep;

/// Line-break marker used by [`DisplayText::to_html`].
pub const HTML_LINE_BREAK: &str = "<br>";

/// A completion formatted for display: the response split on newlines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayText {
    lines: Vec<String>,
}

impl DisplayText {
    /// Split a completion on `\n` (a preceding `\r` is dropped).
    pub fn from_completion(text: &str) -> Self {
        let lines = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
            .collect();
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The text with newlines restored.
    pub fn to_plain(&self) -> String {
        self.lines.join("\n")
    }

    /// HTML-escaped text with each newline replaced by `<br>`.
    pub fn to_html(&self) -> String {
        self.lines
            .iter()
            .map(|line| escape_html(line))
            .collect::<Vec<_>>()
            .join(HTML_LINE_BREAK)
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Callbacks a session invokes to present its state.
///
/// Every method has a no-op default so front-ends only implement what they
/// display.
pub trait SessionRenderer: Send {
    /// A submission entered (`true`) or left (`false`) the pending state.
    /// Front-ends disable their submit control while pending.
    fn pending_changed(&mut self, _pending: bool) {}

    /// Echo the student's message (chat only, shown before the request).
    fn user_message(&mut self, _text: &str) {}

    /// Show a completion.
    fn response(&mut self, _text: &DisplayText) {}

    /// A submission failed; `notice` is a canned, non-technical message.
    fn failure(&mut self, _notice: &str) {}

    /// Input was rejected before any request was made.
    fn invalid_input(&mut self, _notice: &str) {}

    /// A wizard step became active. `progress` is `step / total`.
    fn step_activated(&mut self, _step: WizardStep, _progress: f32) {}

    /// The wizard's final step completed.
    fn session_finished(&mut self, _summary: Option<&SessionSummary>) {}
}

/// Renderer that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl SessionRenderer for NullRenderer {}
