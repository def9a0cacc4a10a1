//! Supervisors that drive [`UnsteadyProblem`]s through time.
//!
//! # Modules
//!
//! - [`transient`] — run a problem to a target time with adaptive step sizing
//!   and retry on rejected steps
//!
//! [`UnsteadyProblem`]: stride_core::UnsteadyProblem

pub mod transient;
