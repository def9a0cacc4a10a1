use crate::Problem;

/// Named scalar inputs and outputs of a problem.
///
/// Callers use this to change boundary conditions or read results between
/// runs. Values set here are consumed by the next prepared time step.
pub trait ScalarIo: Problem {
    /// Returns the names accepted by [`ScalarIo::set_input_double_value`].
    fn input_names(&self) -> Vec<&str>;

    /// Returns the names accepted by [`ScalarIo::get_output_double_value`].
    fn output_names(&self) -> Vec<&str>;

    /// Sets the input named `name` to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if `name` is unknown or `value` is not acceptable.
    fn set_input_double_value(&mut self, name: &str, value: f64) -> Result<(), Self::Error>;

    /// Returns the current value of the output named `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if `name` is unknown.
    fn get_output_double_value(&self, name: &str) -> Result<f64, Self::Error>;
}
