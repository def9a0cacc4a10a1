//! Capability traits for cross-supervisor observers.
//!
//! These traits abstract over supervisor-specific event and action types,
//! enabling observers to work generically across different supervisors.
//!
//! # Event traits
//!
//! - [`HasTime`] — events that carry the present time
//! - [`HasStepSize`] — events that carry the attempted step size
//! - [`HasOutcome`] — events that tell whether the step was accepted
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use stride_core::Observer;
//! use stride_observers::traits::{CanStopEarly, HasTime};
//!
//! struct StopAfter {
//!     time: f64,
//! }
//!
//! impl<E: HasTime, A: CanStopEarly> Observer<E, A> for StopAfter {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.time() >= self.time).then(A::stop_early)
//!     }
//! }
//! ```

use stride_solvers::transient::supervisor;

/// An event that carries the present time.
pub trait HasTime {
    /// Returns the present time after the event.
    fn time(&self) -> f64;
}

/// An event that carries the size of an attempted step.
pub trait HasStepSize {
    /// Returns the size of the attempted step.
    fn dt(&self) -> f64;
}

/// An event that reports whether a step was accepted.
pub trait HasOutcome {
    /// Returns `true` if the step was accepted, `false` if it was rejected.
    fn is_accepted(&self) -> bool;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the run early.
    fn stop_early() -> Self;
}

// --- supervisor::Event ---

impl<P> HasTime for supervisor::Event<'_, P> {
    fn time(&self) -> f64 {
        supervisor::Event::time(self)
    }
}

impl<P> HasStepSize for supervisor::Event<'_, P> {
    fn dt(&self) -> f64 {
        supervisor::Event::dt(self)
    }
}

impl<P> HasOutcome for supervisor::Event<'_, P> {
    fn is_accepted(&self) -> bool {
        supervisor::Event::is_accepted(self)
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for supervisor::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
