use std::{fs, path::Path};

use serde::Deserialize;

use super::Error;

/// How `y` responds to the inputs over a step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Response {
    /// Implicit Euler on `dy/dt = a - b*y`.
    #[default]
    Implicit,

    /// `y` equals `a` before `t0` and `b` from `t0` on.
    Step,
}

/// Parameters of a [`Relaxation`](super::Relaxation), as read from a data file.
///
/// Every key is optional in the TOML file:
///
/// ```toml
/// a = 1.0
/// b = 0.0
/// y0 = 0.0
/// dt_max = 0.1
/// response = "implicit"   # or "step"
/// t0 = 1.0                # step response only
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Parameters {
    pub a: f64,
    pub b: f64,
    pub y0: f64,
    pub dt_max: f64,
    pub response: Response,
    pub t0: f64,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            y0: 0.0,
            dt_max: 0.1,
            response: Response::Implicit,
            t0: 1.0,
        }
    }
}

impl Parameters {
    /// Parses and validates parameters from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML, contains unknown keys,
    /// or holds an invalid value (see [`Parameters::validate`]).
    pub fn from_toml(text: &str) -> Result<Self, Error> {
        let parameters: Self = toml::from_str(text)?;
        parameters.validate()?;
        Ok(parameters)
    }

    /// Reads parameters from a TOML data file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, Error> {
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// Checks that every value is finite and `dt_max` is positive.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidValue`] naming the first offending parameter.
    pub fn validate(&self) -> Result<(), Error> {
        for (name, value) in [
            ("a", self.a),
            ("b", self.b),
            ("y0", self.y0),
            ("dt_max", self.dt_max),
            ("t0", self.t0),
        ] {
            check(name, value)?;
        }
        Ok(())
    }

    /// Returns the value of `y` when the run starts at `time`.
    pub(super) fn initial_y(&self, time: f64) -> f64 {
        match self.response {
            Response::Implicit => self.y0,
            Response::Step => self.step_value(time),
        }
    }

    /// Returns `y` at the end of a step of size `dt` starting at `time` from `y`.
    ///
    /// Returns `None` when the implicit scheme has no positive denominator
    /// for this step size.
    pub(super) fn advance(&self, y: f64, time: f64, dt: f64) -> Option<f64> {
        match self.response {
            Response::Implicit => {
                let denominator = 1.0 + dt * self.b;
                (denominator > 0.0).then(|| (y + dt * self.a) / denominator)
            }
            Response::Step => Some(self.step_value(time + dt)),
        }
    }

    fn step_value(&self, time: f64) -> f64 {
        if time < self.t0 { self.a } else { self.b }
    }
}

/// Rejects non-finite values and a non-positive `dt_max`.
pub(super) fn check(name: &str, value: f64) -> Result<(), Error> {
    let valid = value.is_finite() && (name != "dt_max" || value > 0.0);
    if valid {
        Ok(())
    } else {
        Err(Error::InvalidValue {
            name: name.to_owned(),
            value,
        })
    }
}
