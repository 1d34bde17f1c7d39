//! Per-lane submission state.

use crate::llm::FailureKind;

/// One submit/result cycle. The evaluation and each variant regeneration
/// own independent instances of this machine:
///
/// `Idle → Submitting → { Succeeded | Failed } → (next begin) Submitting`
#[derive(Debug, Clone, PartialEq)]
pub enum Submission<T> {
    Idle,
    Submitting,
    Succeeded(T),
    Failed(FailureKind),
}

impl<T> Default for Submission<T> {
    fn default() -> Self {
        Submission::Idle
    }
}

impl<T> Submission<T> {
    /// Start a new cycle. Returns false while a call is already in flight;
    /// the caller must issue no request in that case. Any settled outcome
    /// is replaced by the new cycle.
    pub fn begin(&mut self) -> bool {
        if matches!(self, Submission::Submitting) {
            return false;
        }
        *self = Submission::Submitting;
        true
    }

    /// Record the outcome of the in-flight call.
    pub fn finish(&mut self, outcome: Result<T, FailureKind>) {
        *self = match outcome {
            Ok(value) => Submission::Succeeded(value),
            Err(kind) => Submission::Failed(kind),
        };
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Submission::Submitting)
    }

    pub fn succeeded(&self) -> Option<&T> {
        match self {
            Submission::Succeeded(value) => Some(value),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<FailureKind> {
        match self {
            Submission::Failed(kind) => Some(*kind),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begins_from_idle() {
        let mut lane: Submission<()> = Submission::Idle;
        assert!(lane.begin());
        assert!(lane.is_submitting());
    }

    #[test]
    fn second_begin_while_submitting_is_refused() {
        let mut lane: Submission<()> = Submission::Idle;
        assert!(lane.begin());
        assert!(!lane.begin());
    }

    #[test]
    fn a_settled_lane_can_begin_again() {
        let mut lane: Submission<u32> = Submission::Idle;
        lane.begin();
        lane.finish(Ok(7));
        assert_eq!(lane.succeeded(), Some(&7));
        assert!(lane.begin());
        assert!(lane.succeeded().is_none());
    }

    #[test]
    fn failures_keep_their_kind() {
        let mut lane: Submission<u32> = Submission::Idle;
        lane.begin();
        lane.finish(Err(crate::llm::FailureKind::Transport));
        assert_eq!(lane.failure(), Some(crate::llm::FailureKind::Transport));
        assert!(!lane.is_submitting());
    }
}
