use thiserror::Error;

/// Rejected user input. Raised before any network call is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    EmptyInput { field: &'static str },
}

/// Errors from the completion endpoint.
///
/// Technical detail stays in logs; users only ever see a canned fallback.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("request to {endpoint} failed: {message}")]
    Transport { endpoint: String, message: String },

    #[error("{endpoint} returned HTTP {status}")]
    Status { endpoint: String, status: u16 },

    #[error("failed to parse response from {endpoint}: {message}")]
    Deserialization { endpoint: String, message: String },
}

impl CompletionError {
    pub fn endpoint(&self) -> &str {
        match self {
            CompletionError::Transport { endpoint, .. }
            | CompletionError::Status { endpoint, .. }
            | CompletionError::Deserialization { endpoint, .. } => endpoint,
        }
    }
}

/// Illegal step transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepError {
    #[error("step {step} is not active (active step: {active})")]
    NotActive { step: usize, active: usize },

    #[error("step {0} already has a submission in flight")]
    AlreadyPending(usize),

    #[error("step {0} is already completed")]
    AlreadyCompleted(usize),

    #[error("step {0} has not completed")]
    NotCompleted(usize),

    #[error("step {0} is the final step")]
    Terminal(usize),

    #[error("session is already finished")]
    Finished,
}

/// Errors from a session submission.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Completion(#[from] CompletionError),

    #[error(transparent)]
    Step(#[from] StepError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::EmptyInput { field: "challenge" };
        assert_eq!(err.to_string(), "challenge must not be empty");
    }

    #[test]
    fn test_completion_error_display_and_endpoint() {
        let err = CompletionError::Status {
            endpoint: "/assess_reflection".to_string(),
            status: 500,
        };
        assert_eq!(err.to_string(), "/assess_reflection returned HTTP 500");
        assert_eq!(err.endpoint(), "/assess_reflection");
    }

    #[test]
    fn test_session_error_wraps_transparently() {
        let err: SessionError = StepError::Terminal(3).into();
        assert_eq!(err.to_string(), "step 3 is the final step");
    }
}
