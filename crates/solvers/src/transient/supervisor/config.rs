/// Configuration for the supervisor.
///
/// The default places no bound on retries: a step that keeps being rejected
/// is retried until the problem succeeds or asks to stop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    max_retries: Option<usize>,
}

impl Config {
    /// Creates a config with an optional bound on consecutive retries.
    #[must_use]
    pub fn new(max_retries: Option<usize>) -> Self {
        Self { max_retries }
    }

    /// Creates a config that gives up after `max_retries` consecutive retries
    /// of the same step.
    ///
    /// With `max_retries = 0` the run ends at the first rejected step.
    #[must_use]
    pub fn with_max_retries(max_retries: usize) -> Self {
        Self::new(Some(max_retries))
    }

    /// Returns the bound on consecutive retries, if any.
    #[must_use]
    pub fn max_retries(&self) -> Option<usize> {
        self.max_retries
    }

    /// Returns `true` if a step rejected `rejections` times in a row must not
    /// be retried again.
    pub(super) fn retries_exhausted(&self, rejections: usize) -> bool {
        self.max_retries.is_some_and(|max| rejections > max)
    }
}
