use stride_core::Observer;

use crate::traits::{HasOutcome, HasStepSize, HasTime};

/// Logs every attempted step through [`tracing`].
///
/// Accepted steps are logged at `DEBUG` and rejected steps at `WARN`, each
/// with the problem label, the present time, and the step size. The observer
/// also counts both kinds of steps, and never returns an action.
///
/// # Example
///
/// ```ignore
/// let log = TracingObserver::new("relaxation");
/// supervisor::run_until(&mut problem, 1.0, &Config::default(), log)?;
/// ```
#[derive(Debug, Clone)]
pub struct TracingObserver {
    label: String,
    accepted: usize,
    rejected: usize,
}

impl TracingObserver {
    /// Creates an observer whose records carry `label`.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            accepted: 0,
            rejected: 0,
        }
    }

    /// Returns the label attached to every record.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the number of accepted steps seen so far.
    #[must_use]
    pub fn accepted(&self) -> usize {
        self.accepted
    }

    /// Returns the number of rejected steps seen so far.
    #[must_use]
    pub fn rejected(&self) -> usize {
        self.rejected
    }
}

impl Default for TracingObserver {
    fn default() -> Self {
        Self::new("problem")
    }
}

impl<E, A> Observer<E, A> for TracingObserver
where
    E: HasTime + HasStepSize + HasOutcome,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if event.is_accepted() {
            self.accepted += 1;
            tracing::debug!(
                problem = %self.label,
                time = event.time(),
                dt = event.dt(),
                step = self.accepted,
                "step accepted"
            );
        } else {
            self.rejected += 1;
            tracing::warn!(
                problem = %self.label,
                time = event.time(),
                dt = event.dt(),
                rejected = self.rejected,
                "step rejected"
            );
        }
        None
    }
}
