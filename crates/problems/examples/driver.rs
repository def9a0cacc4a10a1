//! Drives a relaxation problem through three runs, changing its inputs
//! between them.
//!
//! ```text
//! RUST_LOG=debug cargo run -p stride-problems --example driver
//! ```

use std::{error::Error, path::Path};

use stride_core::{Problem, ScalarIo, UnsteadyProblem};
use stride_observers::TracingObserver;
use stride_problems::Relaxation;
use stride_solvers::transient::supervisor::{self, Config};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let data_file = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/relaxation.toml");

    let mut problem = Relaxation::default();
    problem.set_data_file(&data_file)?;
    problem.initialize()?;

    let config = Config::default();
    let schedule: [(f64, Option<(&str, f64)>); 3] =
        [(1.0, None), (2.0, Some(("a", 0.0))), (4.0, Some(("b", 4.0)))];

    for (target, input) in schedule {
        if let Some((name, value)) = input {
            problem.set_input_double_value(name, value)?;
        }

        let observer = TracingObserver::new("relaxation");
        let solution = supervisor::run_until(&mut problem, target, &config, observer)?;

        println!(
            "t = {:.4}  y = {:.6}  steps = {}  status = {:?}",
            problem.present_time(),
            problem.get_output_double_value("y")?,
            solution.steps,
            solution.status,
        );
    }

    problem.terminate()?;
    Ok(())
}
