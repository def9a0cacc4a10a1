use crate::{Problem, TimeStep};

/// Defines the step-wise solve protocol of an unsteady problem.
///
/// A single time step goes through these calls, in order:
///
/// 1. [`compute_time_step`](Self::compute_time_step) proposes a step size.
/// 2. [`init_time_step`](Self::init_time_step) prepares a step of the size
///    actually chosen by the caller.
/// 3. [`solve_time_step`](Self::solve_time_step) computes the unknowns at the
///    end of the step and reports whether it succeeded.
/// 4. Either [`validate_time_step`](Self::validate_time_step) commits the step
///    and moves the present time forward, or
///    [`abort_time_step`](Self::abort_time_step) discards it.
///
/// The present time changes only in `validate_time_step`. After an abort, the
/// clock and every piece of internal state must be exactly what they were
/// before `init_time_step`; supervisors rely on this to retry a step.
///
/// A step that cannot be solved is reported as `Ok(false)` from
/// `solve_time_step` and is recoverable. An `Err` from any method is fatal.
pub trait UnsteadyProblem: Problem {
    /// Returns the present time.
    fn present_time(&self) -> f64;

    /// Proposes the next time step.
    ///
    /// The proposal is only a hint for the next `init_time_step`. A problem
    /// that observed a failed step is expected, but not required, to propose a
    /// smaller step afterward.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if no step can be proposed.
    fn compute_time_step(&self) -> Result<TimeStep, Self::Error>;

    /// Prepares a time step of size `dt`, which is strictly positive.
    ///
    /// The present time does not change.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the step cannot be prepared.
    fn init_time_step(&mut self, dt: f64) -> Result<(), Self::Error>;

    /// Solves the prepared time step.
    ///
    /// Returns `Ok(true)` if the unknowns were found and `Ok(false)` if the
    /// step was rejected. Internal state may change speculatively either way.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] on an unrecoverable failure.
    fn solve_time_step(&mut self) -> Result<bool, Self::Error>;

    /// Commits the solved step, moving the present time to the end of it.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the step cannot be committed.
    fn validate_time_step(&mut self) -> Result<(), Self::Error>;

    /// Discards the prepared step and restores the state it started from.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the state cannot be restored.
    fn abort_time_step(&mut self) -> Result<(), Self::Error>;

    /// Returns `true` if the unknowns did not change during the last
    /// validated step.
    ///
    /// The default implementation always returns `false`.
    fn is_stationary(&self) -> bool {
        false
    }
}
