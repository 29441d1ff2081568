use std::error::Error;
use std::path::PathBuf;
use std::time::Instant;

use tracing::info;

use crate::controllers::sketch::{SketchConfig, SketchDriver};
use crate::controllers::view::ViewEvent;
use crate::core::lifecycle::LifecycleState;
use crate::presenters::file::ppm::PpmFilePresenter;

/// What a headless session did.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessReport {
    /// Seed history as shown to the user, newest first.
    pub seeds: Vec<String>,
    pub frames_drawn: usize,
    pub runs: usize,
    pub downloads: Vec<PathBuf>,
    pub final_state: LifecycleState,
}

/// Drives the view without a window, the way a user would: start, pause
/// half way to download a snapshot, resume until the runs are exhausted,
/// then download the final drawing.
///
/// Without a run limit continuous mode would never stop, so one run is
/// assumed when `config.max_runs` is unset.
pub fn headless_controller(config: SketchConfig) -> Result<HeadlessReport, Box<dyn Error>> {
    let config = SketchConfig {
        max_runs: Some(config.max_runs.unwrap_or(1)),
        ..config
    };
    let frames_per_run = config.frames_per_run();

    info!(
        width = config.width,
        height = config.height,
        first_seed = config.first_seed,
        runs = ?config.max_runs,
        frames_per_run,
        "starting headless session"
    );

    let mut driver = SketchDriver::new(config, PpmFilePresenter::new())?;
    let start = Instant::now();

    driver.handle_event(ViewEvent::PrimaryAction)?;

    for _ in 0..frames_per_run / 2 {
        driver.tick()?;
    }

    if driver.state() == LifecycleState::Running {
        driver.handle_event(ViewEvent::PrimaryAction)?;
        driver.handle_event(ViewEvent::DownloadRequested)?;
        driver.handle_event(ViewEvent::PrimaryAction)?;
    }

    while driver.state() == LifecycleState::Running {
        driver.tick()?;
    }

    driver.handle_event(ViewEvent::DownloadRequested)?;

    info!(
        elapsed = ?start.elapsed(),
        frames = driver.frames_drawn(),
        "headless session finished"
    );

    Ok(HeadlessReport {
        seeds: driver.view().controller().seeds().display_texts(),
        frames_drawn: driver.frames_drawn(),
        runs: driver.runs_started(),
        downloads: driver.downloads().to_vec(),
        final_state: driver.state(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_in(dir: &std::path::Path) -> SketchConfig {
        SketchConfig {
            width: 40,
            height: 30,
            first_seed: 7,
            steps_per_run: 30,
            strokes_per_frame: 5,
            brush_width: 2.0,
            output_dir: dir.to_path_buf(),
            ..SketchConfig::default()
        }
    }

    #[test]
    fn test_single_run_downloads_snapshot_and_final_drawing() {
        let dir = tempfile::tempdir().unwrap();

        let report = headless_controller(config_in(dir.path())).unwrap();

        assert_eq!(report.runs, 1);
        assert_eq!(report.frames_drawn, 6);
        assert_eq!(report.seeds, vec!["7"]);
        assert_eq!(report.final_state, LifecycleState::Stopped);
        assert_eq!(report.downloads.len(), 2);
        for path in &report.downloads {
            let bytes = std::fs::read(path).unwrap();
            assert!(bytes.starts_with(b"P6\n40 30\n255\n"));
        }
    }

    #[test]
    fn test_continuous_session_runs_until_limit() {
        let dir = tempfile::tempdir().unwrap();
        let config = SketchConfig {
            max_runs: Some(3),
            ..config_in(dir.path())
        };

        let report = headless_controller(config).unwrap();

        assert_eq!(report.runs, 3);
        assert_eq!(report.frames_drawn, 18);
        assert_eq!(report.seeds, vec!["9", "8", "7"]);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let config = SketchConfig {
            width: 0,
            ..SketchConfig::default()
        };

        let error = headless_controller(config).unwrap_err();

        assert_eq!(error.to_string(), "canvas size must be positive: 0x600");
    }
}
