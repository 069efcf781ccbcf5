use std::path::Path;

use anyhow::Result;

use spring_sim::io::RunSummary;
use spring_sim::model::OscillatorParams;
use spring_sim::{plot, sim};

fn main() -> Result<()> {
    // -----------------------------------------------------------------------
    // System: 1 kg mass on a 10 N/m spring with linear drag
    // -----------------------------------------------------------------------
    let params = OscillatorParams::default();

    // -----------------------------------------------------------------------
    // Run simulation
    // -----------------------------------------------------------------------
    let run = sim::simulate(&params)?;
    let summary = RunSummary::from_run(&run, &params);
    let trajectory = &run.trajectory;

    // -----------------------------------------------------------------------
    // Print results
    // -----------------------------------------------------------------------
    println!();
    println!("====================================================================");
    println!("  DAMPED SPRING-MASS SIMULATION");
    println!("====================================================================");
    println!();
    println!("  System Parameters");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Spring k:      {:>8.2} N/m   Mass:         {:>8.2} kg",
        params.spring_constant, params.mass
    );
    println!(
        "  Drag k1:       {:>8.2} kg/s  Timestep:     {:>8.1e} s",
        params.drag_coefficient, params.dt
    );
    println!(
        "  Duration:      {:>8.1} s     Steps:        {:>8}",
        params.duration,
        params.step_count()
    );
    println!(
        "  Initial h:     {:>8.2} m     Initial v:    {:>8.2} m/s",
        params.initial_displacement, params.initial_velocity
    );
    println!();

    println!("  Derived Quantities");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Natural freq:  {:>8.3} rad/s Period:       {:>8.3} s",
        params.natural_frequency(),
        params.period()
    );
    match params.damped_frequency() {
        Some(wd) => println!(
            "  Damping ratio: {:>8.3}       Damped freq:  {:>8.3} rad/s",
            params.damping_ratio(),
            wd
        ),
        None => println!(
            "  Damping ratio: {:>8.3}       (no oscillation)",
            params.damping_ratio()
        ),
    }
    println!(
        "  Initial E:     {:>8.4} J",
        params.initial_energy()
    );
    println!();

    println!("  Energy Summary");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Final K+V:     {:>8.4} J     Ledger:       {:>8.4} J",
        summary.final_energy, run.ledger.tracked
    );
    println!(
        "  Dissipated:    {:>8.4} J     ({:.1}% of initial)",
        summary.dissipated_energy,
        summary.dissipated_fraction * 100.0
    );
    println!(
        "  Peak |h|:      {:>8.4} m     Peak |v|:     {:>8.4} m/s",
        summary.peak_displacement, summary.peak_speed
    );
    println!();

    // -----------------------------------------------------------------------
    // Trajectory table (sampled)
    // -----------------------------------------------------------------------
    println!("  Trajectory");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  {:>7}  {:>9}  {:>9}  {:>9}  {:>9}  {:>9}",
        "t (s)", "h (m)", "v (m/s)", "K (J)", "V (J)", "E (J)"
    );
    println!("  {}", "─".repeat(62));

    let sample_interval = (trajectory.len() / 20).max(1);
    for (i, s) in trajectory.samples().iter().enumerate() {
        if i % sample_interval != 0 && i != trajectory.len() - 1 {
            continue;
        }
        println!(
            "  {:>7.3}  {:>9.4}  {:>9.4}  {:>9.4}  {:>9.4}  {:>9.4}",
            s.time, s.displacement, s.velocity, s.kinetic, s.potential, s.total
        );
    }
    println!();

    // -----------------------------------------------------------------------
    // Figures
    // -----------------------------------------------------------------------
    plot::render_displacement(Path::new("spring_oscil.png"), trajectory)?;
    plot::render_energy(Path::new("spring_energy.png"), trajectory)?;
    println!("  Figures: spring_oscil.png, spring_energy.png");
    println!("====================================================================");
    println!();

    Ok(())
}
