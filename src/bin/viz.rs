use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints};

use spring_sim::model::{OscillatorParams, Sample, Trajectory};
use spring_sim::sim;

fn main() -> eframe::Result {
    let params = OscillatorParams::default();
    let run = sim::simulate(&params).expect("default parameters are valid");

    let app = SimViz { trajectory: run.trajectory, params };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 700.0]),
        ..Default::default()
    };
    eframe::run_native("Spring-Mass Simulator", options, Box::new(|_| Ok(Box::new(app))))
}

struct SimViz {
    trajectory: Trajectory,
    params: OscillatorParams,
}

impl eframe::App for SimViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let step = (self.trajectory.len() / 2000).max(1);
        let sampled: Vec<&Sample> = self.trajectory.samples().iter().step_by(step).collect();
        let t_end = self.trajectory.last().time;

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading("Damped harmonic oscillator");
            let peak = self
                .trajectory
                .samples()
                .iter()
                .map(|s| s.displacement.abs())
                .fold(0.0_f64, f64::max);
            ui.label(format!(
                "Peak |h|: {:.3} m  |  ζ: {:.3}  |  ω0: {:.2} rad/s  |  {} steps over {:.1} s",
                peak,
                self.params.damping_ratio(),
                self.params.natural_frequency(),
                self.trajectory.len(),
                t_end,
            ));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size();
            let half_w = available.x / 2.0 - 8.0;

            ui.horizontal(|ui| {
                // Displacement vs Time
                ui.vertical(|ui| {
                    ui.label("Amplitude (m)");
                    let points: PlotPoints = sampled.iter()
                        .map(|s| [s.time, s.displacement])
                        .collect();
                    let zero: PlotPoints = vec![[0.0, 0.0], [t_end, 0.0]].into();
                    Plot::new("displacement")
                        .width(half_w)
                        .height(available.y - 40.0)
                        .x_axis_label("Time (s)")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Displacement", points));
                            plot_ui.line(Line::new("Equilibrium", zero));
                        });
                });

                // Energy components vs Time
                ui.vertical(|ui| {
                    ui.label("Energy (J)");
                    let kinetic: PlotPoints = sampled.iter()
                        .map(|s| [s.time, s.kinetic])
                        .collect();
                    let potential: PlotPoints = sampled.iter()
                        .map(|s| [s.time, s.potential])
                        .collect();
                    let total: PlotPoints = sampled.iter()
                        .map(|s| [s.time, s.total])
                        .collect();
                    Plot::new("energy")
                        .width(half_w)
                        .height(available.y - 40.0)
                        .x_axis_label("Time (s)")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Kinetic", kinetic));
                            plot_ui.line(Line::new("Potential", potential));
                            plot_ui.line(Line::new("Total", total));
                        });
                });
            });
        });
    }
}
