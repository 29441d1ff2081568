use clap::Parser;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    sketch_view::init_logging();

    let args = sketch_view::SketchArgs::parse();
    let config = args.apply_to(sketch_view::SketchConfig::default());
    config.validate()?;

    sketch_view::run_gui(config)
}
