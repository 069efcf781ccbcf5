pub mod error;
pub mod io;
pub mod model;
pub mod plot;
pub mod sim;

pub use error::SimError;
pub use io::RunSummary;
pub use model::{EnergyLedger, OscillatorParams, Sample, Trajectory};
pub use sim::{euler_step, simulate, SimRun, StepResult};
