use std::path::Path;

/// Lifecycle of a simulation instance.
///
/// A problem is configured from a data file, initialized once, driven through
/// any number of runs, and finally terminated. Termination consumes the
/// problem, so no call can follow it.
///
/// Each backend (a solver code, a test problem, an adapter over a foreign
/// library) implements this trait; the caller picks the backend, never the
/// supervisor.
pub trait Problem {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Specifies the data file used to configure this problem.
    ///
    /// Must be called before [`Problem::initialize`].
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the problem is already initialized or the
    /// data file cannot be used.
    fn set_data_file(&mut self, path: &Path) -> Result<(), Self::Error>;

    /// Prepares the problem for stepping.
    ///
    /// Must be called once, after [`Problem::set_data_file`] and before any
    /// other method.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the problem cannot be initialized.
    fn initialize(&mut self) -> Result<(), Self::Error>;

    /// Releases the problem.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if anything that had to be saved or released
    /// could not be.
    fn terminate(self) -> Result<(), Self::Error>
    where
        Self: Sized;
}
