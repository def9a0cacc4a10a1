/// A step size proposed by a problem for its next time step.
///
/// The proposal is a hint: the supervisor may shrink `dt` before attempting
/// the step, but never grows it. When `stop` is set the problem wants the run
/// to end (for example, it reached its own natural terminus) and no step is
/// attempted, whatever the value of `dt`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeStep {
    /// The desired size of the next step.
    pub dt: f64,

    /// Whether the problem wants to stop.
    pub stop: bool,
}

impl TimeStep {
    /// Proposes a step of size `dt` and asks to continue.
    #[must_use]
    pub const fn new(dt: f64) -> Self {
        Self { dt, stop: false }
    }

    /// Proposes a step of size `dt` but asks to stop.
    #[must_use]
    pub const fn stopping(dt: f64) -> Self {
        Self { dt, stop: true }
    }

    /// Returns `true` if `dt` is a usable step size: strictly positive and
    /// not NaN.
    ///
    /// An infinite `dt` is valid and means the problem has no step limit of
    /// its own; the supervisor clamps it to the target.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.dt > 0.0
    }
}
