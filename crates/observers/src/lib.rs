//! Reusable observers for the Stride framework.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across supervisors in the Stride ecosystem.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-supervisor observers
//!   ([`HasTime`], [`HasStepSize`], [`HasOutcome`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`TracingObserver`] — logs every attempted step through `tracing`
//! - [`StepLimit`] — stops a run after a number of steps or rejections
//!
//! [`Observer`]: stride_core::Observer
//! [`HasTime`]: traits::HasTime
//! [`HasStepSize`]: traits::HasStepSize
//! [`HasOutcome`]: traits::HasOutcome
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod limit;
mod logging;

pub use limit::StepLimit;
pub use logging::TracingObserver;
