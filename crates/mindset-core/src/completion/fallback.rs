//! Canned user-facing messages.
//!
//! A failed completion is never shown with technical detail. The chat
//! front-end and the wizard each have one apology string.

use mindset_types::wizard::WizardStep;

/// Shown in the chat transcript when `/chat` fails.
pub const CHAT_FALLBACK: &str =
    "I apologize, but I'm having trouble connecting right now. Please try again in a moment.";

/// Shown as an alert when a wizard step fails.
pub const WIZARD_FALLBACK: &str =
    "Sorry, there was an error processing your request. Please try again.";

/// Notice for an empty wizard submission.
pub fn empty_step_notice(step: WizardStep) -> String {
    format!("Please enter your {} before continuing.", step.input_label())
}

/// Notice for an empty chat message.
pub const EMPTY_MESSAGE_NOTICE: &str = "Please type a message first.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_step_notice_names_the_field() {
        assert_eq!(
            empty_step_notice(WizardStep::Finalize),
            "Please enter your action plan before continuing."
        );
    }

    #[test]
    fn test_fallbacks_carry_no_technical_detail() {
        for msg in [CHAT_FALLBACK, WIZARD_FALLBACK] {
            assert!(!msg.contains("HTTP"));
            assert!(!msg.contains("error:"));
        }
    }
}
