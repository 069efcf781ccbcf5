use std::io::{self, Write};

use crate::model::Trajectory;

/// Write the trajectory as CSV.
///
/// Columns: time, displacement, velocity, acceleration,
///          kinetic, potential, total
pub fn write_trajectory<W: Write>(writer: &mut W, trajectory: &Trajectory) -> io::Result<()> {
    writeln!(
        writer,
        "time,displacement,velocity,acceleration,kinetic,potential,total"
    )?;

    for s in trajectory.samples() {
        writeln!(
            writer,
            "{:.6},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6}",
            s.time,
            s.displacement,
            s.velocity,
            s.acceleration,
            s.kinetic,
            s.potential,
            s.total,
        )?;
    }

    Ok(())
}

/// Write the trajectory to a CSV file at the given path.
pub fn write_trajectory_file(path: &str, trajectory: &Trajectory) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_trajectory(&mut file, trajectory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OscillatorParams;
    use crate::sim::simulate;

    #[test]
    fn csv_output_has_header_and_rows() {
        let p = OscillatorParams {
            duration: 0.01,
            ..Default::default()
        };
        let run = simulate(&p).unwrap();

        let mut buf = Vec::new();
        write_trajectory(&mut buf, &run.trajectory).unwrap();
        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[0].starts_with("time,displacement,"));
        assert_eq!(lines.len(), run.trajectory.len() + 1); // header + samples
        assert!(lines[1].starts_with("0.000000,0.500000,1.000000,"));
    }
}
