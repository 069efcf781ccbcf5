use std::io::{self, Write};

use crate::model::OscillatorParams;
use crate::sim::SimRun;

/// Summary statistics computed from one simulation run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub step_count: usize,
    pub simulated_time: f64,
    pub peak_displacement: f64,
    pub peak_speed: f64,
    pub final_energy: f64,
    pub dissipated_energy: f64,
    pub dissipated_fraction: f64,
    pub damping_ratio: f64,
}

impl RunSummary {
    /// Compute summary from a completed run.
    pub fn from_run(run: &SimRun, params: &OscillatorParams) -> Self {
        let traj = &run.trajectory;

        let peak_displacement = traj
            .samples()
            .iter()
            .map(|s| s.displacement.abs())
            .fold(0.0_f64, f64::max);

        let peak_speed = traj
            .samples()
            .iter()
            .map(|s| s.velocity.abs())
            .fold(0.0_f64, f64::max);

        let final_energy = traj.last().total;
        let dissipated = run.ledger.dissipated();

        RunSummary {
            step_count: traj.len(),
            simulated_time: traj.last().time - traj.first().time,
            peak_displacement,
            peak_speed,
            final_energy,
            dissipated_energy: dissipated,
            dissipated_fraction: dissipated / run.ledger.initial,
            damping_ratio: params.damping_ratio(),
        }
    }
}

/// Write the run summary as JSON to a writer.
pub fn write_summary<W: Write>(
    writer: &mut W,
    params: &OscillatorParams,
    summary: &RunSummary,
) -> io::Result<()> {
    writeln!(writer, "{{")?;
    writeln!(writer, "  \"parameters\": {{")?;
    writeln!(writer, "    \"spring_constant\": {},", params.spring_constant)?;
    writeln!(writer, "    \"mass\": {},", params.mass)?;
    writeln!(writer, "    \"drag_coefficient\": {},", params.drag_coefficient)?;
    writeln!(writer, "    \"dt\": {},", params.dt)?;
    writeln!(writer, "    \"duration\": {}", params.duration)?;
    writeln!(writer, "  }},")?;
    writeln!(writer, "  \"results\": {{")?;
    writeln!(writer, "    \"step_count\": {},", summary.step_count)?;
    writeln!(writer, "    \"simulated_time_s\": {:.4},", summary.simulated_time)?;
    writeln!(writer, "    \"peak_displacement_m\": {:.6},", summary.peak_displacement)?;
    writeln!(writer, "    \"peak_speed_ms\": {:.6},", summary.peak_speed)?;
    writeln!(writer, "    \"final_energy_j\": {:.6},", summary.final_energy)?;
    writeln!(writer, "    \"dissipated_energy_j\": {:.6},", summary.dissipated_energy)?;
    writeln!(writer, "    \"dissipated_fraction\": {:.4},", summary.dissipated_fraction)?;
    writeln!(writer, "    \"damping_ratio\": {:.4}", summary.damping_ratio)?;
    writeln!(writer, "  }}")?;
    writeln!(writer, "}}")?;
    Ok(())
}

/// Write the run summary JSON to a file.
pub fn write_summary_file(
    path: &str,
    params: &OscillatorParams,
    summary: &RunSummary,
) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_summary(&mut file, params, summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::simulate;

    #[test]
    fn summary_reflects_damped_run() {
        let p = OscillatorParams::default();
        let run = simulate(&p).unwrap();
        let s = RunSummary::from_run(&run, &p);

        assert_eq!(s.step_count, 10_000);
        // Peak displacement of the damped system stays within the bound set
        // by the initial energy: ½k·h² ≤ E0.
        let bound = (2.0 * run.ledger.initial / p.spring_constant).sqrt();
        assert!(
            s.peak_displacement <= bound * 1.05,
            "peak {} exceeds energy bound {}",
            s.peak_displacement,
            bound
        );
        assert!(s.dissipated_fraction > 0.0 && s.dissipated_fraction < 1.0);
        assert!(s.damping_ratio < 1.0);
    }

    #[test]
    fn json_output_is_well_formed() {
        let p = OscillatorParams::default();
        let run = simulate(&p).unwrap();
        let summary = RunSummary::from_run(&run, &p);

        let mut buf = Vec::new();
        write_summary(&mut buf, &p, &summary).unwrap();
        let json = String::from_utf8(buf).unwrap();
        assert!(json.contains("\"parameters\""));
        assert!(json.contains("\"peak_displacement_m\""));
        assert!(json.contains("\"damping_ratio\""));
    }
}
