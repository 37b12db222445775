//! Scope-bound `Pending` state.
//!
//! A submission holds a `PendingGuard` for as long as its request is in
//! flight. Settling the guard records the outcome; dropping it unsettled
//! (for example when the submitting future is dropped) puts the step back
//! to `Idle`, so a step can never be left stuck in `Pending`.

use mindset_types::wizard::StepStatus;

/// Exclusive `Pending` marker for one step or chat turn.
#[must_use = "dropping the guard unsettled returns the step to Idle"]
pub struct PendingGuard<'a> {
    status: &'a mut StepStatus,
    settled: bool,
}

impl<'a> PendingGuard<'a> {
    /// Mark `status` as `Pending`.
    ///
    /// Callers check [`StepStatus::accepts_submission`] first.
    pub(crate) fn enter(status: &'a mut StepStatus) -> Self {
        *status = StepStatus::Pending;
        Self {
            status,
            settled: false,
        }
    }

    /// Settle as `Completed`.
    pub fn complete(mut self) {
        *self.status = StepStatus::Completed;
        self.settled = true;
    }

    /// Settle as `Failed`; the step may be submitted again.
    pub fn fail(mut self) {
        *self.status = StepStatus::Failed;
        self.settled = true;
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        if !self.settled {
            *self.status = StepStatus::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_marks_completed() {
        let mut status = StepStatus::Idle;
        let guard = PendingGuard::enter(&mut status);
        assert_eq!(*guard.status, StepStatus::Pending);
        guard.complete();
        assert_eq!(status, StepStatus::Completed);
    }

    #[test]
    fn test_fail_marks_failed() {
        let mut status = StepStatus::Idle;
        PendingGuard::enter(&mut status).fail();
        assert_eq!(status, StepStatus::Failed);
        assert!(status.accepts_submission());
    }

    #[test]
    fn test_unsettled_drop_returns_to_idle() {
        let mut status = StepStatus::Failed;
        {
            let _guard = PendingGuard::enter(&mut status);
        }
        assert_eq!(status, StepStatus::Idle);
    }
}
