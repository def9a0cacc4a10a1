/// Indicates how a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The present time reached the target within tolerance.
    Reached,

    /// The problem asked to stop before the target was reached.
    StoppedByProblem,

    /// Stopped early due to an observer action.
    StoppedByObserver,

    /// A step was rejected more times in a row than the config allows.
    RetryLimit,
}

/// The result of a supervised run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// How the run ended.
    pub status: Status,

    /// Present time of the problem when the run ended.
    pub time: f64,

    /// Number of validated steps.
    pub steps: usize,

    /// Number of rejected attempts.
    pub rejected: usize,
}
