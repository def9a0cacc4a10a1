//! Supervised run of an unsteady problem to a target time.
//!
//! # Algorithm
//!
//! Until the run ends:
//!
//! 1. Ask the problem for a step proposal `(dt, stop)`.
//! 2. Size the step with the [policy](adjust): stop if the present time is
//!    within tolerance of the target, otherwise clamp or halve `dt` so the run
//!    lands on the target without a sliver step.
//! 3. Stop if the problem asked to.
//! 4. Prepare and solve the step. On success validate it, which moves the
//!    clock forward. On rejection abort it, which leaves the clock and the
//!    problem state untouched, and go back to step 1 for a fresh proposal.
//!
//! The supervisor holds no simulation state beyond the current proposal.
//!
//! # Retries
//!
//! A rejected step is retried with a fresh proposal and never surfaced as an
//! error. By default there is no bound: a problem that rejects every step
//! keeps the supervisor busy forever. Use [`Config::with_max_retries`], an
//! observer returning [`Action::StopEarly`], or a problem that proposes
//! `stop = true` to bound a run.
//!
//! # Observer Events
//!
//! - [`Event::Accepted`] — after each validated step
//! - [`Event::Rejected`] — after each aborted step
//!
//! # Example
//!
//! ```ignore
//! use stride_solvers::transient::supervisor;
//!
//! let solution = supervisor::run_until_unobserved(&mut problem, 1.0)?;
//! assert_eq!(solution.status, supervisor::Status::Reached);
//! ```

mod action;
mod config;
mod error;
mod event;
mod policy;
mod solution;


pub use action::Action;
pub use config::Config;
pub use error::Error;
pub use event::Event;
pub use policy::{Adjustment, RELATIVE_TIME_TOLERANCE, Rule, adjust, is_reached};
pub use solution::{Solution, Status};

use stride_core::{Observer, UnsteadyProblem};

/// Runs `problem` from its present time to `target`.
///
/// On return the problem's present time is within [`RELATIVE_TIME_TOLERANCE`]
/// of `target`, unless the returned [`Status`] says the run ended earlier.
///
/// The observer receives an [`Event`] after every attempted step and may
/// return [`Action::StopEarly`].
///
/// # Errors
///
/// Returns an error without attempting any step if `target` is not finite or
/// lies before the present time. Returns an error if the problem reports a
/// non-finite present time, proposes a step that is not positive (NaN
/// included) without asking to stop, or if any problem method fails. An
/// infinite proposal is clamped to the target like any other. A failure while
/// preparing or solving a step aborts the step first, leaving the problem at
/// its last validated time; if that abort fails too, the error is
/// [`Error::AbortFailed`].
pub fn run_until<P, Obs>(
    problem: &mut P,
    target: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    P: UnsteadyProblem,
    Obs: for<'a> Observer<Event<'a, P>, Action>,
{
    check_target(problem.present_time(), target)?;

    let mut steps = 0;
    let mut rejected = 0;
    let mut rejections = 0;

    let finish = |status, time, steps, rejected| Solution {
        status,
        time,
        steps,
        rejected,
    };

    loop {
        let present = problem.present_time();
        if !present.is_finite() {
            return Err(Error::InvalidPresentTime(present));
        }
        let proposal = problem.compute_time_step().map_err(Error::problem)?;

        let (dt, rule) = match adjust(present, proposal.dt, target) {
            Adjustment::Stop => return Ok(finish(Status::Reached, present, steps, rejected)),
            _ if proposal.stop => {
                return Ok(finish(Status::StoppedByProblem, present, steps, rejected));
            }
            _ if !proposal.is_valid() => {
                return Err(Error::InvalidTimeStep {
                    time: present,
                    dt: proposal.dt,
                });
            }
            Adjustment::Step { dt, rule } => (dt, rule),
        };

        if attempt(problem, dt)? {
            steps += 1;
            rejections = 0;

            let time = problem.present_time();
            let event = Event::Accepted {
                step: steps,
                time,
                dt,
                rule,
                problem: &*problem,
            };
            if let Some(Action::StopEarly) = observer.observe(&event) {
                return Ok(finish(Status::StoppedByObserver, time, steps, rejected));
            }
        } else {
            rejected += 1;
            rejections += 1;

            let time = problem.present_time();
            let event = Event::Rejected {
                attempt: rejections,
                time,
                dt,
                rule,
                problem: &*problem,
            };
            if let Some(Action::StopEarly) = observer.observe(&event) {
                return Ok(finish(Status::StoppedByObserver, time, steps, rejected));
            }
            if config.retries_exhausted(rejections) {
                return Ok(finish(Status::RetryLimit, time, steps, rejected));
            }
        }
    }
}

/// Runs `problem` to `target` with the default config and no observer.
///
/// This is a convenience wrapper around [`run_until`].
///
/// # Errors
///
/// See [`run_until`].
pub fn run_until_unobserved<P>(problem: &mut P, target: f64) -> Result<Solution, Error>
where
    P: UnsteadyProblem,
{
    run_until(problem, target, &Config::default(), ())
}

/// Runs `problem` for `duration` past its present time.
///
/// # Errors
///
/// See [`run_until`].
pub fn run_for<P, Obs>(
    problem: &mut P,
    duration: f64,
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    P: UnsteadyProblem,
    Obs: for<'a> Observer<Event<'a, P>, Action>,
{
    let target = problem.present_time() + duration;
    run_until(problem, target, config, observer)
}

/// Rejects targets the run could never reach.
///
/// A non-finite `present` passes here and is rejected by the step loop.
fn check_target(present: f64, target: f64) -> Result<(), Error> {
    if !target.is_finite() {
        return Err(Error::InvalidTarget(target));
    }
    if target < present - present.abs() * RELATIVE_TIME_TOLERANCE {
        return Err(Error::TargetBeforePresent { target, present });
    }
    Ok(())
}

/// Prepares, solves, and then validates or aborts a step of size `dt`.
///
/// Returns whether the step was validated.
fn attempt<P: UnsteadyProblem>(problem: &mut P, dt: f64) -> Result<bool, Error> {
    let solved = problem
        .init_time_step(dt)
        .and_then(|()| problem.solve_time_step());

    match solved {
        Ok(true) => {
            problem.validate_time_step().map_err(Error::problem)?;
            Ok(true)
        }
        Ok(false) => {
            problem.abort_time_step().map_err(Error::problem)?;
            Ok(false)
        }
        Err(err) => match problem.abort_time_step() {
            Ok(()) => Err(Error::problem(err)),
            Err(abort) => Err(Error::AbortFailed {
                source: Box::new(err),
                abort: Box::new(abort),
            }),
        },
    }
}
