pub mod lifecycle;
pub mod scalar_io;
pub mod unsteady;

pub use lifecycle::Problem;
pub use scalar_io::ScalarIo;
pub use unsteady::UnsteadyProblem;
