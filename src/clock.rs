//! Virtual time driving the reconstruction, decoupled from wall-clock time.

use std::f64::consts::PI;

/// Phase accumulator advanced once per animation tick
///
/// `t` is measured in radians of the fundamental frequency, so the chain
/// passes through sample `i` of an N-point path at `t = 2π·i/N`. With the
/// increment `π·angular_velocity/N`, one full revolution takes
/// `2N/angular_velocity` ticks regardless of N.
#[derive(Debug, Clone)]
pub struct VirtualClock {
    angular_velocity: f64,
    time: f64,
    increment: f64,
}

impl VirtualClock {
    pub fn new(angular_velocity: f64) -> Self {
        Self {
            angular_velocity,
            time: 0.0,
            increment: 0.0,
        }
    }

    /// Current virtual time
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn increment(&self) -> f64 {
        self.increment
    }

    /// Step forward by one tick
    pub fn advance(&mut self) -> f64 {
        self.time += self.increment;
        self.time
    }

    /// Restart at zero with the increment for a path of `path_len` samples
    ///
    /// An empty path gets a zero increment.
    pub fn reset(&mut self, path_len: usize) {
        self.time = 0.0;
        self.increment = if path_len == 0 {
            0.0
        } else {
            PI * self.angular_velocity / path_len as f64
        };
    }

    /// Number of ticks for one full revolution of the fundamental
    pub fn ticks_per_revolution(path_len: usize, angular_velocity: f64) -> f64 {
        2.0 * path_len as f64 / angular_velocity
    }
}
