//! Core traits and types for the Stride framework.
//!
//! This crate defines the shared abstractions that supervisors, observers, and
//! problems build on:
//!
//! - [`Problem`] — lifecycle of an exclusively owned simulation instance
//! - [`UnsteadyProblem`] — the step-wise solve protocol (propose, prepare,
//!   solve, then validate or abort)
//! - [`ScalarIo`] — named scalar inputs and outputs set between runs
//! - [`TimeStep`] — a step size proposed by a problem
//! - [`Observer`] — receives supervisor events and optionally returns control actions

mod observer;
mod problems;
mod time_step;

pub use observer::Observer;
pub use problems::{Problem, ScalarIo, UnsteadyProblem};
pub use time_step::TimeStep;
