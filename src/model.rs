use crate::error::SimError;

// ---------------------------------------------------------------------------
// Oscillator parameters
// ---------------------------------------------------------------------------

/// Physical and numerical parameters for one simulation run.
/// SI units throughout. Immutable once the run starts.
#[derive(Debug, Clone)]
pub struct OscillatorParams {
    pub spring_constant: f64,      // N/m
    pub mass: f64,                 // kg
    pub drag_coefficient: f64,     // kg/s — linear, velocity-proportional
    pub dt: f64,                   // s, integration timestep
    pub duration: f64,             // s, total simulated time
    pub initial_displacement: f64, // m, offset from equilibrium
    pub initial_velocity: f64,     // m/s
    pub initial_time: f64,         // s
}

impl Default for OscillatorParams {
    fn default() -> Self {
        Self {
            spring_constant: 10.0,
            mass: 1.0,
            drag_coefficient: 0.5,
            dt: 1.0e-3,
            duration: 10.0,
            initial_displacement: 0.50,
            initial_velocity: 1.0,
            initial_time: 0.0,
        }
    }
}

impl OscillatorParams {
    /// Number of trajectory samples: floor(duration / dt).
    pub fn step_count(&self) -> usize {
        (self.duration / self.dt) as usize
    }

    /// Undamped natural frequency: ω0 = sqrt(k/m), rad/s.
    pub fn natural_frequency(&self) -> f64 {
        (self.spring_constant / self.mass).sqrt()
    }

    /// Damping ratio: ζ = k1 / (2·sqrt(k·m)). ζ < 1 is underdamped.
    pub fn damping_ratio(&self) -> f64 {
        self.drag_coefficient / (2.0 * (self.spring_constant * self.mass).sqrt())
    }

    /// Damped oscillation frequency ωd = ω0·sqrt(1 - ζ²), rad/s.
    /// None when critically damped or overdamped (no oscillation).
    pub fn damped_frequency(&self) -> Option<f64> {
        let zeta = self.damping_ratio();
        if zeta < 1.0 {
            Some(self.natural_frequency() * (1.0 - zeta * zeta).sqrt())
        } else {
            None
        }
    }

    /// Undamped oscillation period: T = 2π/ω0, s.
    pub fn period(&self) -> f64 {
        2.0 * std::f64::consts::PI / self.natural_frequency()
    }

    /// Total mechanical energy of the initial condition: ½mv0² + ½kh0², J.
    pub fn initial_energy(&self) -> f64 {
        0.5 * self.mass * self.initial_velocity.powi(2)
            + 0.5 * self.spring_constant * self.initial_displacement.powi(2)
    }

    /// Reject invalid parameters before any buffers are allocated.
    ///
    /// A horizon shorter than two timesteps would yield a degenerate
    /// trajectory of at most one sample with no integration step taken, so
    /// it is rejected rather than returned silently.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.mass <= 0.0 {
            return Err(SimError::InvalidParameters(format!(
                "mass must be positive, got {}",
                self.mass
            )));
        }
        if self.dt <= 0.0 {
            return Err(SimError::InvalidParameters(format!(
                "timestep must be positive, got {}",
                self.dt
            )));
        }
        if self.duration <= 0.0 {
            return Err(SimError::InvalidParameters(format!(
                "duration must be positive, got {}",
                self.duration
            )));
        }
        if self.step_count() < 2 {
            return Err(SimError::InvalidParameters(format!(
                "duration {} too short for timestep {} (needs at least 2 steps)",
                self.duration, self.dt
            )));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Per-step sample
// ---------------------------------------------------------------------------

/// Full state and derived energies at a single point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub time: f64,         // s
    pub displacement: f64, // m
    pub velocity: f64,     // m/s
    pub acceleration: f64, // m/s² — filled in by the step that leaves this
                           // sample; stays 0.0 on the final sample
    pub kinetic: f64,      // J
    pub potential: f64,    // J
    pub total: f64,        // J, kinetic + potential
}

impl Sample {
    /// The t0 sample from the initial condition.
    pub fn initial(params: &OscillatorParams) -> Sample {
        let kinetic = 0.5 * params.mass * params.initial_velocity.powi(2);
        let potential =
            0.5 * params.spring_constant * params.initial_displacement.powi(2);
        Sample {
            time: params.initial_time,
            displacement: params.initial_displacement,
            velocity: params.initial_velocity,
            acceleration: 0.0,
            kinetic,
            potential,
            total: kinetic + potential,
        }
    }
}

// ---------------------------------------------------------------------------
// Trajectory: the ordered output of one run
// ---------------------------------------------------------------------------

/// Ordered time series produced by one simulation pass. Built once by the
/// runner and read-only afterwards; plotting and export only read it.
#[derive(Debug, Clone)]
pub struct Trajectory {
    samples: Vec<Sample>,
}

impl Trajectory {
    pub(crate) fn new(samples: Vec<Sample>) -> Trajectory {
        Trajectory { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn first(&self) -> &Sample {
        &self.samples[0]
    }

    pub fn last(&self) -> &Sample {
        &self.samples[self.samples.len() - 1]
    }

    // Plotting contract: ordered, equal-length series.

    pub fn times(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.time).collect()
    }

    pub fn displacements(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.displacement).collect()
    }

    pub fn kinetic(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.kinetic).collect()
    }

    pub fn potential(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.potential).collect()
    }

    pub fn total(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.total).collect()
    }
}

// ---------------------------------------------------------------------------
// Energy ledger
// ---------------------------------------------------------------------------

/// Running estimate of mechanical energy, tracked independently of the
/// per-sample kinetic + potential sum: starts at the initial energy and is
/// drained by the work done against drag each step. Diagnostic only — it
/// never feeds the plotted series.
#[derive(Debug, Clone, Copy)]
pub struct EnergyLedger {
    pub initial: f64,
    pub tracked: f64,
}

impl EnergyLedger {
    pub fn new(params: &OscillatorParams) -> EnergyLedger {
        let initial = params.initial_energy();
        EnergyLedger { initial, tracked: initial }
    }

    /// Subtract the drag work k1·v²·dt done over one step at velocity v.
    pub fn drain(&mut self, drag_coefficient: f64, velocity: f64, dt: f64) {
        self.tracked -= drag_coefficient * velocity * velocity * dt;
    }

    /// Cumulative energy lost to drag so far.
    pub fn dissipated(&self) -> f64 {
        self.initial - self.tracked
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_step_count() {
        let p = OscillatorParams::default();
        assert_eq!(p.step_count(), 10_000);
    }

    #[test]
    fn default_params_are_underdamped() {
        let p = OscillatorParams::default();
        // ζ = 0.5 / (2·sqrt(10)) ≈ 0.079
        let zeta = p.damping_ratio();
        assert!(zeta < 1.0, "default system should be underdamped, ζ = {}", zeta);
        assert!(p.damped_frequency().is_some());
    }

    #[test]
    fn initial_energy_matches_closed_form() {
        let p = OscillatorParams::default();
        // ½·1·1² + ½·10·0.5² = 0.5 + 1.25
        assert!((p.initial_energy() - 1.75).abs() < 1e-12);
    }

    #[test]
    fn validate_rejects_nonpositive_mass() {
        let p = OscillatorParams { mass: 0.0, ..Default::default() };
        assert!(matches!(p.validate(), Err(SimError::InvalidParameters(_))));
    }

    #[test]
    fn validate_rejects_nonpositive_timestep() {
        let p = OscillatorParams { dt: -1.0e-3, ..Default::default() };
        assert!(matches!(p.validate(), Err(SimError::InvalidParameters(_))));
    }

    #[test]
    fn validate_rejects_nonpositive_duration() {
        let p = OscillatorParams { duration: 0.0, ..Default::default() };
        assert!(matches!(p.validate(), Err(SimError::InvalidParameters(_))));
    }

    #[test]
    fn validate_rejects_duration_shorter_than_timestep() {
        // step_count = floor(0.5e-3 / 1e-3) = 0
        let p = OscillatorParams { duration: 0.5e-3, ..Default::default() };
        assert!(matches!(p.validate(), Err(SimError::InvalidParameters(_))));
    }

    #[test]
    fn validate_rejects_single_step_horizon() {
        // step_count = floor(1.5e-3 / 1e-3) = 1: degenerate, no step taken
        let p = OscillatorParams { duration: 1.5e-3, ..Default::default() };
        assert!(matches!(p.validate(), Err(SimError::InvalidParameters(_))));
    }

    #[test]
    fn initial_sample_holds_initial_condition() {
        let p = OscillatorParams::default();
        let s = Sample::initial(&p);
        assert_eq!(s.time, 0.0);
        assert_eq!(s.displacement, 0.5);
        assert_eq!(s.velocity, 1.0);
        assert_eq!(s.acceleration, 0.0);
        assert!((s.total - p.initial_energy()).abs() < 1e-12);
    }

    #[test]
    fn ledger_drains_monotonically_with_drag() {
        let p = OscillatorParams::default();
        let mut ledger = EnergyLedger::new(&p);
        let mut prev = ledger.tracked;
        for v in [1.0, -0.8, 0.6, -0.4, 0.0, 0.2] {
            ledger.drain(p.drag_coefficient, v, p.dt);
            assert!(
                ledger.tracked <= prev,
                "ledger increased: {} -> {}",
                prev,
                ledger.tracked
            );
            prev = ledger.tracked;
        }
        assert!((ledger.dissipated() - (ledger.initial - ledger.tracked)).abs() < 1e-15);
    }

    #[test]
    fn ledger_untouched_without_drag() {
        let p = OscillatorParams { drag_coefficient: 0.0, ..Default::default() };
        let mut ledger = EnergyLedger::new(&p);
        ledger.drain(p.drag_coefficient, 3.0, p.dt);
        assert_eq!(ledger.tracked, ledger.initial);
    }
}
