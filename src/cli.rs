//! Command-line argument parsing.

use clap::Parser;

use crate::params::{EpicycleParams, ParamsError, RenderConfig};
use crate::shapes::Shape;
use crate::spectrum::TransformMode;
use crate::Point;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "Epicycles")]
#[command(about = "Draw a path and watch rotating Fourier vectors redraw it", long_about = None)]
pub struct Args {
    /// Playback speed: one revolution of an N-point path takes 2N / RATE frames
    #[arg(long, value_name = "RATE", default_value = "1.3")]
    pub angular_velocity: f64,

    /// Frequency pairs drawn after the DC term (0 = all)
    #[arg(long, value_name = "PAIRS", default_value = "50")]
    pub max_components: usize,

    /// Fixed trail length in points (derived from path length when omitted)
    #[arg(long, value_name = "POINTS")]
    pub trace_capacity: Option<usize>,

    /// Transform: paired (default), complex
    #[arg(long, value_name = "MODE", default_value = "paired")]
    pub transform: String,

    /// Duplicate the last sample of odd-length paths before decomposing
    #[arg(long)]
    pub pad_odd: bool,

    /// Path committed at start-up: none (default), square, circle, star
    #[arg(long, value_name = "SHAPE", default_value = "none")]
    pub shape: String,

    /// Number of samples in the start-up path
    #[arg(long, value_name = "POINTS", default_value = "200")]
    pub shape_samples: usize,

    /// Window width (pixels)
    #[arg(long, value_name = "PIXELS", default_value = "1280")]
    pub width: u32,

    /// Window height (pixels)
    #[arg(long, value_name = "PIXELS", default_value = "720")]
    pub height: u32,
}

impl Args {
    /// Parse transform mode from command-line arguments
    pub fn parse_transform(&self) -> TransformMode {
        match self.transform.to_lowercase().as_str() {
            "paired" => TransformMode::Paired,
            "complex" => TransformMode::Complex,
            other => {
                log::warn!("Unknown transform '{}', using paired", other);
                TransformMode::Paired
            }
        }
    }

    /// Parse start-up shape from command-line arguments
    pub fn parse_shape(&self) -> Option<Shape> {
        match self.shape.to_lowercase().as_str() {
            "none" => None,
            "square" => Some(Shape::Square),
            "circle" => Some(Shape::Circle),
            "star" => Some(Shape::Star),
            other => {
                log::warn!("Unknown shape '{}', starting with an empty canvas", other);
                None
            }
        }
    }

    /// Validated decomposition parameters
    pub fn epicycle_params(&self) -> Result<EpicycleParams, ParamsError> {
        let params = EpicycleParams {
            angular_velocity: self.angular_velocity,
            max_components: (self.max_components > 0).then_some(self.max_components),
            trace_capacity: self.trace_capacity,
            transform: self.parse_transform(),
            pad_odd_paths: self.pad_odd,
            ..Default::default()
        };
        params.validate()?;
        Ok(params)
    }

    /// Validated rendering configuration
    pub fn render_config(&self) -> Result<RenderConfig, ParamsError> {
        let config = RenderConfig {
            window_width: self.width,
            window_height: self.height,
            ..Default::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Start-up path centred in the capture pane, if a shape was requested
    pub fn preset_path(&self, config: &RenderConfig) -> Option<Vec<Point>> {
        let shape = self.parse_shape()?;
        let pane_width = config.pane_width();
        let height = config.window_height as f64;
        let center = Point::new(pane_width / 2.0, height / 2.0);
        let size = 0.35 * pane_width.min(height);
        Some(shape.points(center, size, self.shape_samples))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        let argv = std::iter::once("epicycles").chain(args.iter().copied());
        Args::try_parse_from(argv).expect("arguments should parse")
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);
        let params = args.epicycle_params().expect("defaults are valid");

        assert_eq!(params.angular_velocity, 1.3);
        assert_eq!(params.max_components, Some(50));
        assert_eq!(params.trace_capacity, None);
        assert_eq!(params.transform, TransformMode::Paired);
        assert!(!params.pad_odd_paths);
        assert_eq!(args.parse_shape(), None);
    }

    #[test]
    fn test_zero_max_components_means_unbounded() {
        let params = parse(&["--max-components", "0"])
            .epicycle_params()
            .expect("valid");
        assert_eq!(params.max_components, None);
    }

    #[test]
    fn test_transform_and_shape() {
        let args = parse(&["--transform", "Complex", "--shape", "star", "--pad-odd"]);
        assert_eq!(args.parse_transform(), TransformMode::Complex);
        assert_eq!(args.parse_shape(), Some(Shape::Star));
        assert!(args.epicycle_params().expect("valid").pad_odd_paths);

        let unknown = parse(&["--transform", "polar", "--shape", "blob"]);
        assert_eq!(unknown.parse_transform(), TransformMode::Paired);
        assert_eq!(unknown.parse_shape(), None);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let args = parse(&["--angular-velocity", "0"]);
        assert!(matches!(
            args.epicycle_params(),
            Err(ParamsError::AngularVelocity(_))
        ));

        let args = parse(&["--width", "0"]);
        assert!(args.render_config().is_err());
    }

    #[test]
    fn test_preset_path_fits_capture_pane() {
        let args = parse(&["--shape", "circle", "--shape-samples", "64"]);
        let config = args.render_config().expect("valid");
        let path = args.preset_path(&config).expect("shape requested");

        assert_eq!(path.len(), 64);
        for p in &path {
            assert!(p.x >= 0.0 && p.x <= config.pane_width());
            assert!(p.y >= 0.0 && p.y <= config.window_height as f64);
        }
    }
}
