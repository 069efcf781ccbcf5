use crate::model::{OscillatorParams, Sample};

// ---------------------------------------------------------------------------
// Explicit Euler step for the damped spring-mass system
// ---------------------------------------------------------------------------

/// Output of one integration step.
#[derive(Debug, Clone, Copy)]
pub struct StepResult {
    /// Acceleration evaluated at the pre-step state. It belongs to the
    /// sample the step departed from, not the one it produced.
    pub accel: f64,
    /// The advanced sample. Its own acceleration is left at 0.0 until the
    /// next step fills it in.
    pub next: Sample,
}

/// Single explicit Euler step:
///
///   a = -(k/m)·h - (k1/m)·v
///   v' = v + a·dt
///   h' = h + v·dt
///
/// The position advances with the pre-step velocity, not the freshly
/// updated one. The asymmetry is the integration policy, not a bug; the
/// expected trajectories are pinned to this exact ordering.
pub fn euler_step(prev: &Sample, params: &OscillatorParams) -> StepResult {
    let k = params.spring_constant;
    let m = params.mass;
    let k1 = params.drag_coefficient;
    let dt = params.dt;

    let accel = -(k / m) * prev.displacement - (k1 / m) * prev.velocity;
    let velocity = prev.velocity + accel * dt;
    let displacement = prev.displacement + prev.velocity * dt;

    let kinetic = 0.5 * m * velocity * velocity;
    let potential = 0.5 * k * displacement * displacement;

    StepResult {
        accel,
        next: Sample {
            time: prev.time + dt,
            displacement,
            velocity,
            acceleration: 0.0,
            kinetic,
            potential,
            total: kinetic + potential,
        },
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_step_matches_literal_arithmetic() {
        // k=10, m=1, k1=0.5, dt=1e-3, h0=0.5, v0=1.0:
        //   a  = -(10/1)·0.5 - (0.5/1)·1.0 = -5.5
        //   v1 = 1.0 + (-5.5)·0.001 = 0.9945
        //   h1 = 0.5 + 1.0·0.001 = 0.501
        let p = OscillatorParams::default();
        let s0 = Sample::initial(&p);
        let r = euler_step(&s0, &p);

        assert!((r.accel - (-5.5)).abs() < 1e-12, "a = {}", r.accel);
        assert!((r.next.velocity - 0.9945).abs() < 1e-12, "v1 = {}", r.next.velocity);
        assert!((r.next.displacement - 0.501).abs() < 1e-12, "h1 = {}", r.next.displacement);
        assert!((r.next.time - 0.001).abs() < 1e-15);
    }

    #[test]
    fn position_uses_pre_step_velocity() {
        // With a huge restoring force the updated velocity differs wildly
        // from the pre-step one; the position must still move by v·dt.
        let p = OscillatorParams {
            spring_constant: 1.0e4,
            drag_coefficient: 0.0,
            ..Default::default()
        };
        let s0 = Sample::initial(&p);
        let r = euler_step(&s0, &p);
        let expected = s0.displacement + s0.velocity * p.dt;
        assert!(
            (r.next.displacement - expected).abs() < 1e-12,
            "position must advance with the old velocity"
        );
    }

    #[test]
    fn step_energies_follow_new_state() {
        let p = OscillatorParams::default();
        let s0 = Sample::initial(&p);
        let r = euler_step(&s0, &p);
        let k_expected = 0.5 * p.mass * r.next.velocity.powi(2);
        let v_expected = 0.5 * p.spring_constant * r.next.displacement.powi(2);
        assert!((r.next.kinetic - k_expected).abs() < 1e-15);
        assert!((r.next.potential - v_expected).abs() < 1e-15);
        assert!((r.next.total - (k_expected + v_expected)).abs() < 1e-15);
    }

    #[test]
    fn new_sample_acceleration_defaults_to_zero() {
        let p = OscillatorParams::default();
        let r = euler_step(&Sample::initial(&p), &p);
        assert_eq!(r.next.acceleration, 0.0);
    }

    #[test]
    fn undamped_step_is_drag_free() {
        let p = OscillatorParams { drag_coefficient: 0.0, ..Default::default() };
        let s0 = Sample::initial(&p);
        let r = euler_step(&s0, &p);
        let expected = -(p.spring_constant / p.mass) * s0.displacement;
        assert!((r.accel - expected).abs() < 1e-12);
    }
}
