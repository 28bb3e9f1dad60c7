//! Decomposition and animation parameters.

use super::ParamsError;
use crate::spectrum::TransformMode;
use crate::trace::TraceBuffer;

/// Tunables for decomposition, playback speed and trail length
#[derive(Debug, Clone)]
pub struct EpicycleParams {
    /// Playback speed (half-revolutions of the fundamental per N ticks)
    /// One revolution of an N-point path takes `2N / angular_velocity` ticks.
    pub angular_velocity: f64,

    /// Cap on conjugate pairs added after the DC term (`None` = all)
    /// Clamped to `⌊N/2⌋` at evaluation time.
    pub max_components: Option<usize>,

    /// Fixed trail length in points, replacing the per-path derivation
    pub trace_capacity: Option<usize>,

    /// Points held back from one full revolution so the trail does not
    /// touch its own tail
    pub trace_margin: usize,

    /// Two real transforms or one complex transform
    pub transform: TransformMode,

    /// Duplicate the last sample of odd-length paths before committing
    pub pad_odd_paths: bool,
}

impl Default for EpicycleParams {
    fn default() -> Self {
        Self {
            angular_velocity: 1.3,
            max_components: Some(50),
            trace_capacity: None,
            trace_margin: 20,
            transform: TransformMode::Paired,
            pad_odd_paths: false,
        }
    }
}

impl EpicycleParams {
    /// Trail capacity for a committed path of `path_len` samples
    pub fn trace_capacity_for(&self, path_len: usize) -> usize {
        self.trace_capacity.unwrap_or_else(|| {
            TraceBuffer::capacity_for(path_len, self.angular_velocity, self.trace_margin)
        })
    }

    pub fn validate(&self) -> Result<(), ParamsError> {
        if !self.angular_velocity.is_finite() || self.angular_velocity <= 0.0 {
            return Err(ParamsError::AngularVelocity(self.angular_velocity));
        }
        if self.trace_capacity == Some(0) {
            return Err(ParamsError::ZeroTraceCapacity);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let params = EpicycleParams::default();
        assert_eq!(params.validate(), Ok(()));
        assert_eq!(params.max_components, Some(50));
        assert_eq!(params.transform, TransformMode::Paired);
    }

    #[test]
    fn test_rejects_bad_angular_velocity() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let params = EpicycleParams {
                angular_velocity: bad,
                ..Default::default()
            };
            assert!(matches!(
                params.validate(),
                Err(ParamsError::AngularVelocity(_))
            ));
        }
    }

    #[test]
    fn test_trace_capacity_override() {
        let mut params = EpicycleParams::default();
        assert_eq!(params.trace_capacity_for(100), 133);

        params.trace_capacity = Some(7);
        assert_eq!(params.trace_capacity_for(100), 7);

        params.trace_capacity = Some(0);
        assert_eq!(params.validate(), Err(ParamsError::ZeroTraceCapacity));
    }
}
