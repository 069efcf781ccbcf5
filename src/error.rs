use thiserror::Error;

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// Errors surfaced by the simulator.
///
/// The taxonomy is deliberately small: parameter validation is the only
/// recoverable failure, and it is rejected before any trajectory buffer is
/// allocated. Numerical blow-up from an unstable timestep is not an error —
/// it propagates through the trajectory as large or non-finite values.
#[derive(Error, Debug)]
pub enum SimError {
    /// Non-positive mass, timestep, or duration, or a horizon too short to
    /// take a single integration step.
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}
