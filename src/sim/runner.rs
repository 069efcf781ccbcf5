use crate::error::SimError;
use crate::model::{EnergyLedger, OscillatorParams, Sample, Trajectory};

use super::integrator::euler_step;

// ---------------------------------------------------------------------------
// Full simulation pass
// ---------------------------------------------------------------------------

/// Everything one run produces: the trajectory plus the final state of the
/// drag-work ledger.
#[derive(Debug, Clone)]
pub struct SimRun {
    pub trajectory: Trajectory,
    pub ledger: EnergyLedger,
}

/// Integrate the damped oscillator over the full horizon.
///
/// One strictly sequential forward pass: sample i is derived from sample
/// i-1 alone and never revisited, except that the step leaving sample i-1
/// writes the acceleration it evaluated back into that sample. The final
/// sample's acceleration stays 0.0 — no step ever departs from it.
///
/// Fails only on invalid parameters, before the trajectory is allocated.
pub fn simulate(params: &OscillatorParams) -> Result<SimRun, SimError> {
    params.validate()?;

    let step_count = params.step_count();
    let mut samples = Vec::with_capacity(step_count);
    samples.push(Sample::initial(params));

    let mut ledger = EnergyLedger::new(params);

    for i in 1..step_count {
        let result = euler_step(&samples[i - 1], params);
        ledger.drain(params.drag_coefficient, samples[i - 1].velocity, params.dt);
        samples[i - 1].acceleration = result.accel;
        samples.push(result.next);
    }

    Ok(SimRun {
        trajectory: Trajectory::new(samples),
        ledger,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
