//! StepController state machine.
//!
//! Steps are numbered `1..=total`. Exactly one step is active at a time and
//! the active step only moves forward, one step per successful completion.
//! The last step never advances; completing it finishes the controller.

use mindset_types::error::StepError;
use mindset_types::wizard::{StepStatus, WizardStep};

use super::pending::PendingGuard;

/// Tracks the active step and each step's submission state.
#[derive(Debug, Clone)]
pub struct StepController {
    current: usize,
    statuses: Vec<StepStatus>,
    finished: bool,
}

impl StepController {
    /// Create a controller over `total` steps, starting at step 1.
    ///
    /// A zero `total` is treated as a single step.
    pub fn new(total: usize) -> Self {
        Self {
            current: 1,
            statuses: vec![StepStatus::Idle; total.max(1)],
            finished: false,
        }
    }

    /// Controller for the three-step reflection wizard.
    pub fn for_wizard() -> Self {
        Self::new(WizardStep::COUNT)
    }

    /// 1-based number of the active step.
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.statuses.len()
    }

    /// Fraction of the wizard reached: `current / total`.
    pub fn progress(&self) -> f32 {
        self.current as f32 / self.total() as f32
    }

    /// Submission state of `step`, or `None` when out of range.
    pub fn status(&self, step: usize) -> Option<StepStatus> {
        step.checked_sub(1)
            .and_then(|idx| self.statuses.get(idx))
            .copied()
    }

    pub fn current_status(&self) -> StepStatus {
        self.statuses[self.current - 1]
    }

    /// Whether the active step is the last one.
    pub fn is_terminal(&self) -> bool {
        self.current == self.total()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Start a submission for `step`.
    ///
    /// Only the active step accepts submissions, and only from `Idle` or
    /// `Failed`. The returned guard keeps the step `Pending` until settled.
    pub fn begin(&mut self, step: usize) -> Result<PendingGuard<'_>, StepError> {
        if self.finished {
            return Err(StepError::Finished);
        }
        if step != self.current {
            return Err(StepError::NotActive {
                step,
                active: self.current,
            });
        }

        let status = &mut self.statuses[step - 1];
        match *status {
            StepStatus::Pending => Err(StepError::AlreadyPending(step)),
            StepStatus::Completed => Err(StepError::AlreadyCompleted(step)),
            StepStatus::Idle | StepStatus::Failed => Ok(PendingGuard::enter(status)),
        }
    }

    /// Move from a completed step `k` to step `k + 1`. Returns the new step.
    pub fn advance(&mut self) -> Result<usize, StepError> {
        if self.finished {
            return Err(StepError::Finished);
        }
        if self.current_status() != StepStatus::Completed {
            return Err(StepError::NotCompleted(self.current));
        }
        if self.is_terminal() {
            return Err(StepError::Terminal(self.current));
        }

        self.current += 1;
        Ok(self.current)
    }

    /// Finish after the last step completed. This is a terminal action,
    /// not a transition to a further step.
    pub fn finish(&mut self) -> Result<(), StepError> {
        if self.finished {
            return Err(StepError::Finished);
        }
        if !self.is_terminal() {
            return Err(StepError::NotActive {
                step: self.total(),
                active: self.current,
            });
        }
        if self.current_status() != StepStatus::Completed {
            return Err(StepError::NotCompleted(self.current));
        }

        self.finished = true;
        Ok(())
    }
}

impl Default for StepController {
    fn default() -> Self {
        Self::for_wizard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_current(ctrl: &mut StepController) {
        let step = ctrl.current();
        ctrl.begin(step).unwrap().complete();
    }

    #[test]
    fn test_new_starts_at_step_one() {
        let ctrl = StepController::for_wizard();
        assert_eq!(ctrl.current(), 1);
        assert_eq!(ctrl.total(), 3);
        assert_eq!(ctrl.current_status(), StepStatus::Idle);
        assert!(!ctrl.is_finished());
        assert!((ctrl.progress() - 1.0 / 3.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_zero_total_is_single_step() {
        let ctrl = StepController::new(0);
        assert_eq!(ctrl.total(), 1);
        assert!(ctrl.is_terminal());
    }

    #[test]
    fn test_advance_requires_completion() {
        let mut ctrl = StepController::for_wizard();
        assert_eq!(ctrl.advance(), Err(StepError::NotCompleted(1)));

        ctrl.begin(1).unwrap().fail();
        assert_eq!(ctrl.advance(), Err(StepError::NotCompleted(1)));
        assert_eq!(ctrl.current(), 1);
    }

    #[test]
    fn test_each_success_advances_by_exactly_one() {
        let mut ctrl = StepController::new(5);
        let mut seen = vec![ctrl.current()];

        while !ctrl.is_terminal() {
            complete_current(&mut ctrl);
            let next = ctrl.advance().unwrap();
            assert_eq!(next, seen.last().unwrap() + 1);
            seen.push(next);
        }

        assert_eq!(seen, vec![1, 2, 3, 4, 5]);
        assert!((ctrl.progress() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_terminal_step_does_not_advance() {
        let mut ctrl = StepController::for_wizard();
        for _ in 0..2 {
            complete_current(&mut ctrl);
            ctrl.advance().unwrap();
        }
        complete_current(&mut ctrl);

        assert_eq!(ctrl.advance(), Err(StepError::Terminal(3)));
        ctrl.finish().unwrap();
        assert!(ctrl.is_finished());
        assert_eq!(ctrl.current(), 3);
        assert_eq!(ctrl.finish(), Err(StepError::Finished));
        assert!(matches!(ctrl.begin(3), Err(StepError::Finished)));
    }

    #[test]
    fn test_finish_before_last_step_is_rejected() {
        let mut ctrl = StepController::for_wizard();
        complete_current(&mut ctrl);
        assert_eq!(
            ctrl.finish(),
            Err(StepError::NotActive { step: 3, active: 1 })
        );
    }

    #[test]
    fn test_begin_rejects_inactive_step() {
        let mut ctrl = StepController::for_wizard();
        assert!(matches!(
            ctrl.begin(2),
            Err(StepError::NotActive { step: 2, active: 1 })
        ));
    }

    #[test]
    fn test_begin_rejects_completed_step() {
        let mut ctrl = StepController::for_wizard();
        complete_current(&mut ctrl);
        assert!(matches!(ctrl.begin(1), Err(StepError::AlreadyCompleted(1))));
    }

    #[test]
    fn test_failed_step_is_resubmittable() {
        let mut ctrl = StepController::for_wizard();
        ctrl.begin(1).unwrap().fail();
        assert_eq!(ctrl.status(1), Some(StepStatus::Failed));

        ctrl.begin(1).unwrap().complete();
        assert_eq!(ctrl.status(1), Some(StepStatus::Completed));
        assert_eq!(ctrl.advance(), Ok(2));
    }

    #[test]
    fn test_dropped_guard_leaves_no_pending_state() {
        let mut ctrl = StepController::for_wizard();
        drop(ctrl.begin(1).unwrap());
        assert_eq!(ctrl.current_status(), StepStatus::Idle);
        assert!(ctrl.begin(1).is_ok());
    }

    #[test]
    fn test_status_out_of_range() {
        let ctrl = StepController::for_wizard();
        assert_eq!(ctrl.status(0), None);
        assert_eq!(ctrl.status(4), None);
    }
}
