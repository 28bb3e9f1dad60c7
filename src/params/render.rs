//! Window and drawing configuration.

use super::ParamsError;

/// Linear RGBA color
pub type Color = [f32; 4];

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Window width (pixels), split evenly between capture and playback panes
    pub window_width: u32,

    /// Window height (pixels)
    pub window_height: u32,

    /// Epicycles with a radius at or below this are not drawn (pixels)
    pub min_circle_radius: f64,

    /// Line segments per drawn epicycle
    pub circle_segments: u32,

    pub background: Color,
    pub path_color: Color,
    pub arm_color: Color,
    pub circle_color: Color,
    pub divider_color: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 720,
            min_circle_radius: 5.0,
            circle_segments: 48,
            background: [0.0, 0.0, 0.0, 1.0],
            path_color: [0.373, 0.624, 0.749, 1.0], // #5F9FBF
            arm_color: [1.0, 1.0, 1.0, 1.0],
            circle_color: [0.125, 0.125, 0.125, 1.0], // #202020
            divider_color: [0.2, 0.2, 0.2, 1.0],
        }
    }
}

impl RenderConfig {
    /// Width of each of the two panes (pixels)
    pub fn pane_width(&self) -> f64 {
        self.window_width as f64 / 2.0
    }

    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err(ParamsError::WindowSize {
                width: self.window_width,
                height: self.window_height,
            });
        }
        if self.circle_segments < 3 {
            return Err(ParamsError::CircleSegments(self.circle_segments));
        }
        Ok(())
    }
}
