use clap::Parser;
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    sketch_view::init_logging();

    let args = sketch_view::SketchArgs::parse();
    let config = args.apply_to(sketch_view::SketchConfig::default());

    let report = sketch_view::headless_controller(config)?;

    info!(
        runs = report.runs,
        frames = report.frames_drawn,
        seeds = ?report.seeds,
        final_state = ?report.final_state,
        "done"
    );
    for path in &report.downloads {
        info!(path = %path.display(), "saved");
    }

    Ok(())
}
