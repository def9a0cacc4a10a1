/// Control actions supported by the supervisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the run after the current event and return the solution so far.
    ///
    /// The problem is left at its last committed time.
    StopEarly,
}
