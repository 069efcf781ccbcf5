pub mod integrator;
pub mod runner;

pub use integrator::{euler_step, StepResult};
pub use runner::{simulate, SimRun};
