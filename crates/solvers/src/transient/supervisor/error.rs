use std::error::Error as StdError;

use thiserror::Error;

/// Errors that can occur while supervising a run.
///
/// A rejected step is not an error; it is retried.
#[derive(Debug, Error)]
pub enum Error {
    #[error("target time must be finite, got {0}")]
    InvalidTarget(f64),

    #[error("target time {target} is before present time {present}")]
    TargetBeforePresent { target: f64, present: f64 },

    #[error("problem reported a non-finite present time {0}")]
    InvalidPresentTime(f64),

    #[error("problem proposed an invalid time step {dt} at t = {time}")]
    InvalidTimeStep { time: f64, dt: f64 },

    /// A problem method failed.
    ///
    /// If the failure happened while preparing or solving a step, that step
    /// was aborted and the problem is at its last validated time.
    #[error("problem error: {0}")]
    Problem(#[source] Box<dyn StdError + Send + Sync>),

    /// Preparing or solving a step failed, and aborting it failed too.
    ///
    /// The problem may be left mid-step.
    #[error("problem error: {source} (aborting the step also failed: {abort})")]
    AbortFailed {
        #[source]
        source: Box<dyn StdError + Send + Sync>,
        abort: Box<dyn StdError + Send + Sync>,
    },
}

impl Error {
    pub(crate) fn problem<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Problem(Box::new(err))
    }
}
