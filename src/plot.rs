//! Figure rendering with plotters (PNG output).
//!
//! Narrow interface: every function takes only the finished trajectory, so
//! the numeric core carries no dependency on the rendering stack.

use std::path::Path;

use anyhow::Result;
use plotters::prelude::*;

use crate::model::Trajectory;

// ---------------------------------------------------------------------------
// Displacement vs time
// ---------------------------------------------------------------------------

/// Render displacement vs time with an equilibrium reference line at zero,
/// spanning the full time range.
pub fn render_displacement(path: &Path, trajectory: &Trajectory) -> Result<()> {
    let root = BitMapBackend::new(path, (800, 500)).into_drawing_area();
    root.fill(&WHITE)?;

    let (t0, t1) = time_range(trajectory);
    let (lo, hi) = padded_range(trajectory.samples().iter().map(|s| s.displacement));
    // The equilibrium line must be visible even if the motion never crosses it.
    let lo = lo.min(0.0);
    let hi = hi.max(0.0);

    let mut chart = ChartBuilder::on(&root)
        .caption("Damped spring-mass displacement", ("sans-serif", 20))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(t0..t1, lo..hi)?;

    chart
        .configure_mesh()
        .x_desc("Time (s)")
        .y_desc("Amplitude (m)")
        .draw()?;

    chart.draw_series(LineSeries::new(
        trajectory.samples().iter().map(|s| (s.time, s.displacement)),
        &BLUE,
    ))?;

    chart.draw_series(LineSeries::new([(t0, 0.0), (t1, 0.0)], &BLACK))?;

    root.present()?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Energy components vs time
// ---------------------------------------------------------------------------

/// Render kinetic, potential, and total energy vs time with the equilibrium
/// reference line and a "Kinetic"/"Potential"/"Total" legend.
pub fn render_energy(path: &Path, trajectory: &Trajectory) -> Result<()> {
    let root = BitMapBackend::new(path, (800, 500)).into_drawing_area();
    root.fill(&WHITE)?;

    let (t0, t1) = time_range(trajectory);
    let e_max = trajectory
        .samples()
        .iter()
        .map(|s| s.total)
        .fold(f64::NEG_INFINITY, f64::max);

    let mut chart = ChartBuilder::on(&root)
        .caption("Oscillator energy", ("sans-serif", 20))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(t0..t1, 0.0..e_max * 1.1)?;

    chart
        .configure_mesh()
        .x_desc("Time (s)")
        .y_desc("Energy (J)")
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            trajectory.samples().iter().map(|s| (s.time, s.kinetic)),
            &BLUE,
        ))?
        .label("Kinetic")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    chart
        .draw_series(LineSeries::new(
            trajectory.samples().iter().map(|s| (s.time, s.potential)),
            &GREEN,
        ))?
        .label("Potential")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GREEN));

    chart
        .draw_series(LineSeries::new(
            trajectory.samples().iter().map(|s| (s.time, s.total)),
            &RED,
        ))?
        .label("Total")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    chart.draw_series(LineSeries::new([(t0, 0.0), (t1, 0.0)], &BLACK))?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;

    root.present()?;
    Ok(())
}

fn time_range(trajectory: &Trajectory) -> (f64, f64) {
    (trajectory.first().time, trajectory.last().time)
}

fn padded_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    let pad = (max - min).max(1e-9) * 0.05;
    (min - pad, max + pad)
}
