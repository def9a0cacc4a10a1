//! Supervisors for transient runs.
//!
//! A transient supervisor owns no simulation state. It repeatedly asks an
//! [`UnsteadyProblem`] for a step proposal, sizes the step against the target
//! time, and commits or rolls back each attempt through the problem's own
//! protocol.
//!
//! # Supervisors
//!
//! - [`supervisor`] — run to a target time, avoiding overshoot and sliver
//!   steps, retrying rejected steps
//!
//! [`UnsteadyProblem`]: stride_core::UnsteadyProblem

pub mod supervisor;
