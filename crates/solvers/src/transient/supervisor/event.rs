use super::Rule;

/// Events emitted by the supervisor, one per attempted step.
///
/// Each event borrows the problem, so observers can read outputs or the
/// present time without the supervisor knowing what they look at.
#[derive(Debug)]
pub enum Event<'a, P> {
    /// A step was solved and validated.
    Accepted {
        /// Number of steps validated so far in this run, starting at 1.
        step: usize,

        /// Present time after the step.
        time: f64,

        /// Size of the step.
        dt: f64,

        /// How the step size was derived from the proposal.
        rule: Rule,

        /// The problem, after validation.
        problem: &'a P,
    },

    /// A step was rejected and aborted.
    Rejected {
        /// Consecutive rejections of the current step, starting at 1.
        attempt: usize,

        /// Present time, unchanged by the rejected step.
        time: f64,

        /// Size of the rejected step.
        dt: f64,

        /// How the step size was derived from the proposal.
        rule: Rule,

        /// The problem, after the abort.
        problem: &'a P,
    },
}

impl<'a, P> Event<'a, P> {
    /// Returns the present time after the event.
    #[must_use]
    pub fn time(&self) -> f64 {
        match self {
            Self::Accepted { time, .. } | Self::Rejected { time, .. } => *time,
        }
    }

    /// Returns the size of the attempted step.
    #[must_use]
    pub fn dt(&self) -> f64 {
        match self {
            Self::Accepted { dt, .. } | Self::Rejected { dt, .. } => *dt,
        }
    }

    /// Returns how the attempted step size was derived.
    #[must_use]
    pub fn rule(&self) -> Rule {
        match self {
            Self::Accepted { rule, .. } | Self::Rejected { rule, .. } => *rule,
        }
    }

    /// Returns the problem being stepped.
    #[must_use]
    pub fn problem(&self) -> &'a P {
        match self {
            Self::Accepted { problem, .. } | Self::Rejected { problem, .. } => problem,
        }
    }

    /// Returns `true` for [`Event::Accepted`].
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}
