use stride_core::Observer;

use crate::traits::{CanStopEarly, HasOutcome};

/// Stops a run once it has taken too many steps or seen too many rejections.
///
/// The supervisor itself never bounds a run; this observer is the
/// caller-level ceiling. Both limits count from the observer's creation, so a
/// single `StepLimit` can only bound one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepLimit {
    max_steps: Option<usize>,
    max_rejections: Option<usize>,
    steps: usize,
    rejections: usize,
}

impl StepLimit {
    /// Stops after `max_steps` accepted steps.
    #[must_use]
    pub fn steps(max_steps: usize) -> Self {
        Self {
            max_steps: Some(max_steps),
            ..Self::default()
        }
    }

    /// Stops after `max_rejections` rejected steps in total.
    #[must_use]
    pub fn rejections(max_rejections: usize) -> Self {
        Self {
            max_rejections: Some(max_rejections),
            ..Self::default()
        }
    }

    /// Also stops after `max_rejections` rejected steps in total.
    #[must_use]
    pub fn and_rejections(mut self, max_rejections: usize) -> Self {
        self.max_rejections = Some(max_rejections);
        self
    }

    fn exceeded(&self) -> bool {
        self.max_steps.is_some_and(|max| self.steps >= max)
            || self.max_rejections.is_some_and(|max| self.rejections >= max)
    }
}

impl<E: HasOutcome, A: CanStopEarly> Observer<E, A> for StepLimit {
    fn observe(&mut self, event: &E) -> Option<A> {
        if event.is_accepted() {
            self.steps += 1;
        } else {
            self.rejections += 1;
        }
        self.exceeded().then(A::stop_early)
    }
}
