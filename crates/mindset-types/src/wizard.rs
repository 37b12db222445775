//! Guided reflection wizard types.
//!
//! The wizard walks a student through three fixed steps. Each step posts
//! one text field to its own endpoint; the steps only move forward.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// One stage of the guided reflection wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    /// Step 1: the student describes a challenge and gets an analysis.
    Analyze,
    /// Step 2: the student reflects on the analysis and gets an assessment.
    Assess,
    /// Step 3: the student commits to an action plan and gets a closing summary.
    Finalize,
}

impl WizardStep {
    /// All steps in order.
    pub const ALL: [WizardStep; 3] = [WizardStep::Analyze, WizardStep::Assess, WizardStep::Finalize];

    /// Number of steps in the wizard.
    pub const COUNT: usize = Self::ALL.len();

    /// 1-based position of this step.
    pub fn number(self) -> usize {
        match self {
            WizardStep::Analyze => 1,
            WizardStep::Assess => 2,
            WizardStep::Finalize => 3,
        }
    }

    /// Inverse of [`WizardStep::number`].
    pub fn from_number(number: usize) -> Option<Self> {
        number
            .checked_sub(1)
            .and_then(|idx| Self::ALL.get(idx))
            .copied()
    }

    /// The step after this one, or `None` for the final step.
    pub fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }

    /// Path of the endpoint that handles this step.
    pub fn endpoint(self) -> &'static str {
        match self {
            WizardStep::Analyze => "/analyze_challenge",
            WizardStep::Assess => "/assess_reflection",
            WizardStep::Finalize => "/finalize_session",
        }
    }

    /// JSON field carrying the student's text for this step.
    pub fn payload_field(self) -> &'static str {
        match self {
            WizardStep::Analyze => "challenge",
            WizardStep::Assess => "reflection",
            WizardStep::Finalize => "action_plan",
        }
    }

    /// Human-readable name of the text the student supplies.
    pub fn input_label(self) -> &'static str {
        match self {
            WizardStep::Analyze => "challenge",
            WizardStep::Assess => "reflection",
            WizardStep::Finalize => "action plan",
        }
    }

    /// Heading shown when the step becomes active.
    pub fn title(self) -> &'static str {
        match self {
            WizardStep::Analyze => "Share your learning challenge",
            WizardStep::Assess => "Reflect on the analysis",
            WizardStep::Finalize => "Commit to an action plan",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WizardStep::Analyze => write!(f, "analyze"),
            WizardStep::Assess => write!(f, "assess"),
            WizardStep::Finalize => write!(f, "finalize"),
        }
    }
}

impl FromStr for WizardStep {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "analyze" => Ok(WizardStep::Analyze),
            "assess" => Ok(WizardStep::Assess),
            "finalize" => Ok(WizardStep::Finalize),
            other => Err(format!("invalid wizard step: '{other}'")),
        }
    }
}

/// Submission state of a single step.
///
/// `Idle -> Pending -> Completed` on success, `Idle -> Pending -> Failed` on
/// failure. `Failed` may be submitted again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    #[default]
    Idle,
    Pending,
    Completed,
    Failed,
}

impl StepStatus {
    /// Whether a new submission may start from this state.
    pub fn accepts_submission(self) -> bool {
        matches!(self, StepStatus::Idle | StepStatus::Failed)
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepStatus::Idle => write!(f, "idle"),
            StepStatus::Pending => write!(f, "pending"),
            StepStatus::Completed => write!(f, "completed"),
            StepStatus::Failed => write!(f, "failed"),
        }
    }
}
