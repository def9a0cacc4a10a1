use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by [`Relaxation`](super::Relaxation).
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0} called in the wrong context")]
    WrongContext(&'static str),

    #[error("time step must be finite and positive, got {0}")]
    InvalidTimeStep(f64),

    #[error("unknown input `{0}`")]
    UnknownInput(String),

    #[error("unknown output `{0}`")]
    UnknownOutput(String),

    #[error("invalid value {value} for `{name}`")]
    InvalidValue { name: String, value: f64 },

    #[error("failed to read data file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse data file: {0}")]
    Parse(#[from] toml::de::Error),
}
