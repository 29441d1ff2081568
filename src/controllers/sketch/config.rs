use std::error::Error;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum SketchConfigError {
    ZeroSize { width: u32, height: u32 },
    ZeroSteps,
    ZeroStrokesPerFrame,
    InvalidBrushWidth(f64),
    ZeroRuns,
}

impl fmt::Display for SketchConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSize { width, height } => {
                write!(f, "canvas size must be positive: {}x{}", width, height)
            }
            Self::ZeroSteps => write!(f, "a run needs at least one step"),
            Self::ZeroStrokesPerFrame => write!(f, "strokes per frame must be greater than zero"),
            Self::InvalidBrushWidth(width) => {
                write!(f, "brush width must be finite and positive, got {}", width)
            }
            Self::ZeroRuns => write!(f, "run limit must be greater than zero"),
        }
    }
}

impl Error for SketchConfigError {}

/// Settings for driving the view with the built-in rosette sketch.
#[derive(Debug, Clone, PartialEq)]
pub struct SketchConfig {
    /// Initial host size; the surface picks it up on its first clear.
    pub width: u32,
    pub height: u32,
    /// Seed of the first run; later runs count up from it.
    pub first_seed: u64,
    pub steps_per_run: usize,
    pub strokes_per_frame: usize,
    /// Half-width of each brush stroke, in pixels.
    pub brush_width: f64,
    pub gradient: bool,
    /// Initial state of the continuous toggle.
    pub continuous: bool,
    /// Initial state of the post-render toggle.
    pub post_render: bool,
    /// `None` keeps restarting for as long as continuous mode is on.
    pub max_runs: Option<usize>,
    pub output_dir: PathBuf,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            first_seed: 1,
            steps_per_run: 600,
            strokes_per_frame: 12,
            brush_width: 6.0,
            gradient: true,
            continuous: true,
            post_render: false,
            max_runs: None,
            output_dir: PathBuf::from("output"),
        }
    }
}

impl SketchConfig {
    pub fn validate(&self) -> Result<(), SketchConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(SketchConfigError::ZeroSize {
                width: self.width,
                height: self.height,
            });
        }
        if self.steps_per_run == 0 {
            return Err(SketchConfigError::ZeroSteps);
        }
        if self.strokes_per_frame == 0 {
            return Err(SketchConfigError::ZeroStrokesPerFrame);
        }
        if !self.brush_width.is_finite() || self.brush_width <= 0.0 {
            return Err(SketchConfigError::InvalidBrushWidth(self.brush_width));
        }
        if self.max_runs == Some(0) {
            return Err(SketchConfigError::ZeroRuns);
        }

        Ok(())
    }

    /// Frames needed to finish one run.
    #[must_use]
    pub fn frames_per_run(&self) -> usize {
        self.steps_per_run.div_ceil(self.strokes_per_frame.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(SketchConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_zero_size() {
        let config = SketchConfig {
            width: 0,
            ..SketchConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(SketchConfigError::ZeroSize {
                width: 0,
                height: 600
            })
        );
    }

    #[test]
    fn test_rejects_bad_counts_and_brush() {
        let cases = [
            (
                SketchConfig {
                    steps_per_run: 0,
                    ..SketchConfig::default()
                },
                SketchConfigError::ZeroSteps,
            ),
            (
                SketchConfig {
                    strokes_per_frame: 0,
                    ..SketchConfig::default()
                },
                SketchConfigError::ZeroStrokesPerFrame,
            ),
            (
                SketchConfig {
                    brush_width: -1.0,
                    ..SketchConfig::default()
                },
                SketchConfigError::InvalidBrushWidth(-1.0),
            ),
            (
                SketchConfig {
                    max_runs: Some(0),
                    ..SketchConfig::default()
                },
                SketchConfigError::ZeroRuns,
            ),
        ];

        for (config, expected) in cases {
            assert_eq!(config.validate(), Err(expected));
        }
    }

    #[test]
    fn test_frames_per_run_rounds_up() {
        let config = SketchConfig {
            steps_per_run: 25,
            strokes_per_frame: 10,
            ..SketchConfig::default()
        };

        assert_eq!(config.frames_per_run(), 3);
    }
}
