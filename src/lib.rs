//! Epicycles library - Fourier decomposition and epicycle playback of 2-D paths

pub mod chain;
pub mod cli;
pub mod clock;
pub mod params;
pub mod rendering;
pub mod scene;
pub mod session;
pub mod shapes;
pub mod spectrum;
pub mod trace;

/// 2-D point in window pixel coordinates
pub type Point = glam::DVec2;
