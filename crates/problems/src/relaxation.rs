//! Scalar first-order relaxation problem.
//!
//! [`Relaxation`] integrates `dy/dt = a - b*y` with implicit Euler,
//! `y_next = (y + dt*a) / (1 + dt*b)`, or follows a step response that holds
//! `a` before `t0` and `b` after. It always proposes `dt_max` and never asks
//! to stop, so runs are bounded only by the supervisor's target time.
//!
//! After a rejected step its next proposal is capped at half of the rejected
//! step size; the cap is lifted once a step is validated.
//!
//! # Inputs and outputs
//!
//! | Name | Kind | Meaning |
//! |---|---|---|
//! | `a` | input | source term, or value before `t0` |
//! | `b` | input | decay rate, or value from `t0` on |
//! | `dt_max` | input | proposed step size |
//! | `t0` | input | switch time of the step response |
//! | `y` | output | the unknown |

mod error;
mod parameters;

pub use error::Error;
pub use parameters::{Parameters, Response};

use std::path::{Path, PathBuf};

use stride_core::{Problem, ScalarIo, TimeStep, UnsteadyProblem};

const INPUTS: [&str; 4] = ["a", "b", "dt_max", "t0"];
const OUTPUTS: [&str; 1] = ["y"];

/// Where the problem stands in its call protocol.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Uninitialized,
    Idle,
    Prepared { dt: f64 },
    Solved { dt: f64, y: f64 },
}

/// Scalar relaxation toward `a / b`, see the [module docs](self).
#[derive(Debug, Clone)]
pub struct Relaxation {
    parameters: Parameters,
    data_file: Option<PathBuf>,
    phase: Phase,
    time: f64,
    y: f64,
    cap: Option<f64>,
    stationary: bool,
}

impl Relaxation {
    /// Creates an uninitialized problem with the given parameters.
    ///
    /// A data file set afterward replaces them at initialization.
    #[must_use]
    pub fn new(parameters: Parameters) -> Self {
        Self {
            parameters,
            data_file: None,
            phase: Phase::Uninitialized,
            time: 0.0,
            y: parameters.y0,
            cap: None,
            stationary: false,
        }
    }

    /// Returns the current parameters, including inputs set since initialization.
    #[must_use]
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Returns the current value of the unknown.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    fn require_initialized(&self, call: &'static str) -> Result<(), Error> {
        match self.phase {
            Phase::Uninitialized => Err(Error::WrongContext(call)),
            _ => Ok(()),
        }
    }
}

impl Default for Relaxation {
    fn default() -> Self {
        Self::new(Parameters::default())
    }
}

impl Problem for Relaxation {
    type Error = Error;

    fn set_data_file(&mut self, path: &Path) -> Result<(), Self::Error> {
        if self.phase != Phase::Uninitialized {
            return Err(Error::WrongContext("set_data_file"));
        }
        self.data_file = Some(path.to_path_buf());
        Ok(())
    }

    fn initialize(&mut self) -> Result<(), Self::Error> {
        if self.phase != Phase::Uninitialized {
            return Err(Error::WrongContext("initialize"));
        }
        if let Some(path) = &self.data_file {
            self.parameters = Parameters::from_file(path)?;
        } else {
            self.parameters.validate()?;
        }

        self.time = 0.0;
        self.y = self.parameters.initial_y(self.time);
        self.phase = Phase::Idle;
        tracing::debug!(parameters = ?self.parameters, y = self.y, "relaxation initialized");
        Ok(())
    }

    fn terminate(self) -> Result<(), Self::Error> {
        self.require_initialized("terminate")?;
        tracing::debug!(time = self.time, y = self.y, "relaxation terminated");
        Ok(())
    }
}

impl UnsteadyProblem for Relaxation {
    fn present_time(&self) -> f64 {
        self.time
    }

    fn compute_time_step(&self) -> Result<TimeStep, Self::Error> {
        self.require_initialized("compute_time_step")?;
        let dt = match self.cap {
            Some(cap) => cap.min(self.parameters.dt_max),
            None => self.parameters.dt_max,
        };
        Ok(TimeStep::new(dt))
    }

    fn init_time_step(&mut self, dt: f64) -> Result<(), Self::Error> {
        if self.phase != Phase::Idle {
            return Err(Error::WrongContext("init_time_step"));
        }
        if !(dt.is_finite() && dt > 0.0) {
            return Err(Error::InvalidTimeStep(dt));
        }
        self.phase = Phase::Prepared { dt };
        Ok(())
    }

    fn solve_time_step(&mut self) -> Result<bool, Self::Error> {
        let Phase::Prepared { dt } = self.phase else {
            return Err(Error::WrongContext("solve_time_step"));
        };

        match self.parameters.advance(self.y, self.time, dt) {
            Some(y) => {
                tracing::debug!(time = self.time, dt, y, "time step solved");
                self.phase = Phase::Solved { dt, y };
                Ok(true)
            }
            None => {
                tracing::debug!(time = self.time, dt, "time step has no solution");
                Ok(false)
            }
        }
    }

    fn validate_time_step(&mut self) -> Result<(), Self::Error> {
        let Phase::Solved { dt, y } = self.phase else {
            return Err(Error::WrongContext("validate_time_step"));
        };

        self.stationary = (y - self.y).abs() <= f64::EPSILON * self.y.abs();
        self.time += dt;
        self.y = y;
        self.cap = None;
        self.phase = Phase::Idle;
        tracing::debug!(time = self.time, y = self.y, "time step validated");
        Ok(())
    }

    fn abort_time_step(&mut self) -> Result<(), Self::Error> {
        let dt = match self.phase {
            Phase::Prepared { dt } | Phase::Solved { dt, .. } => dt,
            Phase::Uninitialized | Phase::Idle => {
                return Err(Error::WrongContext("abort_time_step"));
            }
        };

        self.cap = Some(dt / 2.0);
        self.phase = Phase::Idle;
        tracing::debug!(time = self.time, dt, "time step aborted");
        Ok(())
    }

    fn is_stationary(&self) -> bool {
        self.stationary
    }
}

impl ScalarIo for Relaxation {
    fn input_names(&self) -> Vec<&str> {
        INPUTS.to_vec()
    }

    fn output_names(&self) -> Vec<&str> {
        OUTPUTS.to_vec()
    }

    fn set_input_double_value(&mut self, name: &str, value: f64) -> Result<(), Self::Error> {
        self.require_initialized("set_input_double_value")?;

        let slot = match name {
            "a" => &mut self.parameters.a,
            "b" => &mut self.parameters.b,
            "dt_max" => &mut self.parameters.dt_max,
            "t0" => &mut self.parameters.t0,
            _ => return Err(Error::UnknownInput(name.to_owned())),
        };
        parameters::check(name, value)?;
        *slot = value;

        // A step response that has not started yet follows its new inputs.
        if self.parameters.response == Response::Step && self.time == 0.0 {
            self.y = self.parameters.initial_y(self.time);
        }
        Ok(())
    }

    fn get_output_double_value(&self, name: &str) -> Result<f64, Self::Error> {
        match name {
            "y" => Ok(self.y),
            _ => Err(Error::UnknownOutput(name.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn initialized(parameters: Parameters) -> Relaxation {
        let mut problem = Relaxation::new(parameters);
        problem.initialize().expect("valid parameters");
        problem
    }

    fn step(problem: &mut Relaxation, dt: f64) -> bool {
        problem.init_time_step(dt).expect("idle");
        let ok = problem.solve_time_step().expect("prepared");
        if ok {
            problem.validate_time_step().expect("solved");
        } else {
            problem.abort_time_step().expect("prepared");
        }
        ok
    }

    #[test]
    fn proposes_dt_max_and_never_stops() {
        let problem = initialized(Parameters::default());
        assert_eq!(problem.compute_time_step().unwrap(), TimeStep::new(0.1));
    }

    #[test]
    fn validated_step_moves_clock_and_unknown() {
        let mut problem = initialized(Parameters::default());

        assert!(step(&mut problem, 0.5));

        // dy/dt = 1 with b = 0: y grows linearly.
        assert_relative_eq!(problem.present_time(), 0.5);
        assert_relative_eq!(problem.get_output_double_value("y").unwrap(), 0.5);
    }

    #[test]
    fn clock_waits_for_validation() {
        let mut problem = initialized(Parameters::default());

        problem.init_time_step(0.5).unwrap();
        assert_relative_eq!(problem.present_time(), 0.0);
        assert!(problem.solve_time_step().unwrap());
        assert_relative_eq!(problem.present_time(), 0.0);
        assert_relative_eq!(problem.y(), 0.0);
    }

    #[test]
    fn abort_restores_state_and_caps_next_proposal() {
        let mut problem = initialized(Parameters::default());
        assert!(step(&mut problem, 0.1));
        let (time, y) = (problem.present_time(), problem.y());

        problem.init_time_step(0.08).unwrap();
        assert!(problem.solve_time_step().unwrap());
        problem.abort_time_step().unwrap();

        assert_relative_eq!(problem.present_time(), time);
        assert_relative_eq!(problem.y(), y);
        assert_relative_eq!(problem.compute_time_step().unwrap().dt, 0.04);

        assert!(step(&mut problem, 0.04));
        assert_relative_eq!(problem.compute_time_step().unwrap().dt, 0.1);
    }

    #[test]
    fn unstable_step_is_rejected_not_fatal() {
        let mut problem = initialized(Parameters {
            b: -4.0,
            ..Parameters::default()
        });

        assert!(!step(&mut problem, 0.5));
        assert_relative_eq!(problem.present_time(), 0.0);
        assert_relative_eq!(problem.compute_time_step().unwrap().dt, 0.1);
        assert!(step(&mut problem, 0.1));
    }

    #[test]
    fn calls_out_of_order_are_errors() {
        let mut problem = Relaxation::default();
        assert!(matches!(
            problem.compute_time_step(),
            Err(Error::WrongContext("compute_time_step"))
        ));
        assert!(matches!(
            problem.init_time_step(0.1),
            Err(Error::WrongContext("init_time_step"))
        ));

        problem.initialize().unwrap();
        assert!(matches!(
            problem.initialize(),
            Err(Error::WrongContext("initialize"))
        ));
        assert!(matches!(
            problem.set_data_file(Path::new("late.toml")),
            Err(Error::WrongContext("set_data_file"))
        ));
        assert!(matches!(
            problem.solve_time_step(),
            Err(Error::WrongContext("solve_time_step"))
        ));
        assert!(matches!(
            problem.abort_time_step(),
            Err(Error::WrongContext("abort_time_step"))
        ));

        problem.init_time_step(0.1).unwrap();
        assert!(matches!(
            problem.init_time_step(0.1),
            Err(Error::WrongContext("init_time_step"))
        ));
        assert!(matches!(
            problem.validate_time_step(),
            Err(Error::WrongContext("validate_time_step"))
        ));
    }

    #[test]
    fn rejects_invalid_step_size() {
        let mut problem = initialized(Parameters::default());
        assert!(matches!(
            problem.init_time_step(0.0),
            Err(Error::InvalidTimeStep(_))
        ));
        assert!(matches!(
            problem.init_time_step(f64::NAN),
            Err(Error::InvalidTimeStep(_))
        ));
    }

    #[test]
    fn inputs_and_outputs_by_name() {
        let mut problem = initialized(Parameters::default());

        assert_eq!(problem.input_names(), vec!["a", "b", "dt_max", "t0"]);
        assert_eq!(problem.output_names(), vec!["y"]);

        problem.set_input_double_value("dt_max", 0.25).unwrap();
        assert_relative_eq!(problem.compute_time_step().unwrap().dt, 0.25);

        assert!(matches!(
            problem.set_input_double_value("c", 1.0),
            Err(Error::UnknownInput(name)) if name == "c"
        ));
        assert!(matches!(
            problem.set_input_double_value("dt_max", -1.0),
            Err(Error::InvalidValue { .. })
        ));
        assert!(matches!(
            problem.get_output_double_value("z"),
            Err(Error::UnknownOutput(_))
        ));
        assert_relative_eq!(problem.parameters().dt_max, 0.25);
    }

    #[test]
    fn inputs_require_initialization() {
        let mut problem = Relaxation::default();
        assert!(matches!(
            problem.set_input_double_value("a", 1.0),
            Err(Error::WrongContext("set_input_double_value"))
        ));
    }

    #[test]
    fn step_response_follows_inputs_before_start() {
        let mut problem = initialized(Parameters {
            response: Response::Step,
            ..Parameters::default()
        });
        assert_relative_eq!(problem.y(), 1.0);

        problem.set_input_double_value("a", 5.0).unwrap();
        assert_relative_eq!(problem.y(), 5.0);

        problem.set_input_double_value("t0", 0.0).unwrap();
        assert_relative_eq!(problem.y(), 0.0);
    }

    #[test]
    fn stationary_once_at_equilibrium() {
        let mut problem = initialized(Parameters {
            a: 2.0,
            b: 1.0,
            y0: 2.0,
            ..Parameters::default()
        });

        assert!(step(&mut problem, 0.1));
        assert!(problem.is_stationary());

        problem.set_input_double_value("a", 3.0).unwrap();
        assert!(step(&mut problem, 0.1));
        assert!(!problem.is_stationary());
    }

    #[test]
    fn terminate_requires_initialization() {
        assert!(matches!(
            Relaxation::default().terminate(),
            Err(Error::WrongContext("terminate"))
        ));
        assert!(initialized(Parameters::default()).terminate().is_ok());
    }
}
