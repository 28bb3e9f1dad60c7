//! Parameter definitions with units and documented semantics.
//!
//! All tunables live here with:
//! - Units (pixels, ticks, radians) where they apply
//! - Documented ranges and meanings
//! - A `validate()` that rejects values the core cannot animate

mod epicycle;
mod render;

pub use epicycle::EpicycleParams;
pub use render::{Color, RenderConfig};

/// Rejected configuration value
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ParamsError {
    #[error("Angular velocity must be finite and > 0, got {0}")]
    AngularVelocity(f64),

    #[error("Trace capacity override must be > 0")]
    ZeroTraceCapacity,

    #[error("Window size must be non-zero, got {width}x{height}")]
    WindowSize { width: u32, height: u32 },

    #[error("Circles need at least 3 segments, got {0}")]
    CircleSegments(u32),
}
