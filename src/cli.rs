use std::path::PathBuf;

use clap::Parser;

use crate::controllers::sketch::SketchConfig;

/// Runs the sketch headlessly: start, pause for a snapshot, resume to the
/// end and write the drawings out as PPM files.
#[derive(Parser, Debug, Default)]
#[command(name = "sketch_view", about = "Headless sketch runner")]
pub struct SketchArgs {
    /// Host width in pixels.
    #[arg(long)]
    pub width: Option<u32>,

    /// Host height in pixels.
    #[arg(long)]
    pub height: Option<u32>,

    /// Seed of the first run.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of runs before continuous mode stops.
    #[arg(long, value_name = "N")]
    pub runs: Option<usize>,

    /// Brush steps per run.
    #[arg(long)]
    pub steps: Option<usize>,

    #[arg(long, value_name = "N")]
    pub strokes_per_frame: Option<usize>,

    #[arg(long, value_name = "PX")]
    pub brush_width: Option<f64>,

    /// Paint strokes with a flat colour instead of a soft edge.
    #[arg(long)]
    pub no_gradient: bool,

    /// Trace the path outline when a run finishes.
    #[arg(long)]
    pub post_render: bool,

    /// Turn continuous mode off.
    #[arg(long)]
    pub single: bool,

    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

impl SketchArgs {
    /// Overrides the fields of `config` that were given on the command line.
    #[must_use]
    pub fn apply_to(self, config: SketchConfig) -> SketchConfig {
        SketchConfig {
            width: self.width.unwrap_or(config.width),
            height: self.height.unwrap_or(config.height),
            first_seed: self.seed.unwrap_or(config.first_seed),
            steps_per_run: self.steps.unwrap_or(config.steps_per_run),
            strokes_per_frame: self.strokes_per_frame.unwrap_or(config.strokes_per_frame),
            brush_width: self.brush_width.unwrap_or(config.brush_width),
            gradient: config.gradient && !self.no_gradient,
            continuous: config.continuous && !self.single,
            post_render: config.post_render || self.post_render,
            max_runs: self.runs.or(config.max_runs),
            output_dir: self.output_dir.unwrap_or(config.output_dir),
        }
    }
}
