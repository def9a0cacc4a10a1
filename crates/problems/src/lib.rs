//! Reference problems for the Stride framework.
//!
//! These problems implement the full [`UnsteadyProblem`] protocol, including
//! strict checking of call order, and are small enough to verify by hand.
//! They serve as test beds for supervisors and as templates for adapters
//! over real solver codes.
//!
//! - [`Relaxation`] — scalar first-order relaxation `dy/dt = a - b*y`
//!
//! [`UnsteadyProblem`]: stride_core::UnsteadyProblem

pub mod relaxation;

pub use relaxation::Relaxation;
