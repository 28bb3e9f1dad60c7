//! Lifecycle of one drawn path: capture, commit, animate, replace.
//!
//! All mutable state lives in a single `PathSession`. Input handlers and the
//! per-frame `tick` take it by `&mut`, so capture and animation can never
//! interleave within a frame.

use log::{debug, info};

use crate::chain::{self, Circle, EpicycleChain};
use crate::clock::VirtualClock;
use crate::params::EpicycleParams;
use crate::spectrum::PathSpectrum;
use crate::trace::TraceBuffer;
use crate::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Nothing captured yet (or the last capture was empty)
    Idle,

    /// Receiving path points; the clock is frozen
    Capturing,

    /// Spectrum and trail built, no tick taken yet
    Committed,

    /// Ticking through the reconstruction
    Animating,
}

/// Committed decomposition and its trail, always replaced together
#[derive(Debug, Clone)]
struct Reconstruction {
    spectrum: PathSpectrum,
    trace: TraceBuffer,
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone)]
pub struct Frame<'a> {
    /// Raw captured path
    pub path: &'a [Point],

    /// Epicycle chain vertices, DC first (empty unless animating)
    pub arms: Vec<Point>,

    /// Reconstructed trail, oldest first (empty unless animating)
    pub trail: Vec<Point>,
}

impl Frame<'_> {
    /// Epicycles to draw around the arms
    pub fn circles(&self, min_radius: f64) -> Vec<Circle> {
        chain::circles(&self.arms, min_radius)
    }
}

/// Owner of the captured path, its reconstruction and the virtual clock
pub struct PathSession {
    params: EpicycleParams,
    path: Vec<Point>,
    phase: SessionPhase,
    reconstruction: Option<Reconstruction>,
    clock: VirtualClock,
}

impl PathSession {
    pub fn new(params: EpicycleParams) -> Self {
        let clock = VirtualClock::new(params.angular_velocity);
        Self {
            params,
            path: Vec::new(),
            phase: SessionPhase::Idle,
            reconstruction: None,
            clock,
        }
    }

    /// Begin a new path, dropping the current one and its reconstruction
    pub fn on_capture_start(&mut self) {
        debug!("Capture started");
        self.path.clear();
        self.reconstruction = None;
        self.phase = SessionPhase::Capturing;
    }

    /// Append a point to the path being captured (ignored otherwise)
    pub fn on_capture_point(&mut self, x: f64, y: f64) {
        if self.phase == SessionPhase::Capturing {
            self.path.push(Point::new(x, y));
        }
    }

    /// Finish capturing and commit the path if it holds any points
    pub fn on_capture_end(&mut self) {
        if self.phase != SessionPhase::Capturing {
            return;
        }
        if self.path.is_empty() {
            debug!("Capture ended with no points");
            self.phase = SessionPhase::Idle;
            return;
        }
        debug!("Capture ended with {} points", self.path.len());
        self.commit();
    }

    /// Capture and commit a complete path in one step
    pub fn commit_path(&mut self, points: impl IntoIterator<Item = Point>) {
        self.on_capture_start();
        self.path.extend(points);
        self.on_capture_end();
    }

    fn commit(&mut self) {
        let mut samples = self.path.clone();
        if self.params.pad_odd_paths && samples.len() % 2 == 1 {
            if let Some(&last) = samples.last() {
                samples.push(last);
            }
        }

        let spectrum = PathSpectrum::build(&samples, self.params.transform);
        let trace = TraceBuffer::with_capacity(self.params.trace_capacity_for(samples.len()));
        self.clock.reset(samples.len());

        info!(
            "Committed path: {} samples, {} pairs drawn, trail of {} points",
            samples.len(),
            self.params
                .max_components
                .map_or(spectrum.pair_count(), |cap| cap.min(spectrum.pair_count())),
            trace.capacity()
        );

        self.reconstruction = Some(Reconstruction { spectrum, trace });
        self.phase = SessionPhase::Committed;
    }

    /// Advance one animation frame and report what to draw
    ///
    /// Only a committed path advances the clock; while idle or capturing the
    /// frame carries the raw path alone.
    pub fn tick(&mut self) -> Frame<'_> {
        let mut arms = Vec::new();
        let mut trail = Vec::new();

        if matches!(
            self.phase,
            SessionPhase::Committed | SessionPhase::Animating
        ) {
            if let Some(reconstruction) = self.reconstruction.as_mut() {
                let t = self.clock.advance();
                let chain =
                    EpicycleChain::evaluate(&reconstruction.spectrum, t, self.params.max_components);
                reconstruction.trace.append(chain.final_point());

                arms = chain.into_arms();
                trail = reconstruction.trace.render_sequence();
                self.phase = SessionPhase::Animating;
            }
        }

        Frame {
            path: &self.path,
            arms,
            trail,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn path(&self) -> &[Point] {
        &self.path
    }

    pub fn spectrum(&self) -> Option<&PathSpectrum> {
        self.reconstruction.as_ref().map(|r| &r.spectrum)
    }

    pub fn trace(&self) -> Option<&TraceBuffer> {
        self.reconstruction.as_ref().map(|r| &r.trace)
    }

    pub fn clock(&self) -> &VirtualClock {
        &self.clock
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 0.0),
        ]
    }

    fn capture(session: &mut PathSession, points: &[Point]) {
        session.on_capture_start();
        for p in points {
            session.on_capture_point(p.x, p.y);
        }
        session.on_capture_end();
    }

    #[test]
    fn test_idle_session_draws_nothing() {
        let mut session = PathSession::new(EpicycleParams::default());
        let frame = session.tick();

        assert!(frame.path.is_empty());
        assert!(frame.arms.is_empty());
        assert!(frame.trail.is_empty());
        assert_eq!(session.phase(), SessionPhase::Idle);
        assert_eq!(session.clock().time(), 0.0);
    }

    #[test]
    fn test_capture_commit_animate() {
        let mut session = PathSession::new(EpicycleParams::default());

        session.on_capture_start();
        assert_eq!(session.phase(), SessionPhase::Capturing);
        for p in square() {
            session.on_capture_point(p.x, p.y);
        }
        session.on_capture_end();
        assert_eq!(session.phase(), SessionPhase::Committed);
        assert_eq!(session.spectrum().map(|s| s.sample_count()), Some(4));

        let frame = session.tick();
        assert_eq!(frame.path.len(), 4);
        assert_eq!(frame.arms.len(), 4);
        assert_eq!(frame.trail.len(), 1);
        assert_eq!(session.phase(), SessionPhase::Animating);
        assert!(session.clock().time() > 0.0);
    }

    #[test]
    fn test_points_outside_capture_are_ignored() {
        let mut session = PathSession::new(EpicycleParams::default());
        session.on_capture_point(1.0, 2.0);
        assert!(session.path().is_empty());

        capture(&mut session, &square());
        session.on_capture_point(9.0, 9.0);
        assert_eq!(session.path(), square().as_slice());
    }

    #[test]
    fn test_capture_start_discards_reconstruction_and_freezes_clock() {
        let mut session = PathSession::new(EpicycleParams::default());
        capture(&mut session, &square());
        for _ in 0..5 {
            session.tick();
        }
        let frozen = session.clock().time();

        session.on_capture_start();
        assert!(session.spectrum().is_none());
        assert!(session.trace().is_none());
        assert!(session.path().is_empty());

        session.on_capture_point(3.0, 4.0);
        for _ in 0..5 {
            let frame = session.tick();
            assert!(frame.arms.is_empty());
            assert!(frame.trail.is_empty());
            assert_eq!(frame.path, &[Point::new(3.0, 4.0)]);
        }
        assert_eq!(session.clock().time(), frozen);
        assert_eq!(session.phase(), SessionPhase::Capturing);
    }

    #[test]
    fn test_empty_capture_returns_to_idle() {
        let mut session = PathSession::new(EpicycleParams::default());
        session.on_capture_start();
        session.on_capture_end();

        assert_eq!(session.phase(), SessionPhase::Idle);
        assert!(session.spectrum().is_none());
        assert!(session.tick().arms.is_empty());
    }

    #[test]
    fn test_end_without_start_is_ignored() {
        let mut session = PathSession::new(EpicycleParams::default());
        session.on_capture_end();
        assert_eq!(session.phase(), SessionPhase::Idle);
    }

    #[test]
    fn test_new_commit_replaces_reconstruction() {
        let params = EpicycleParams {
            trace_capacity: Some(3),
            ..Default::default()
        };
        let mut session = PathSession::new(params);
        capture(&mut session, &square());
        for _ in 0..10 {
            session.tick();
        }
        assert_eq!(session.trace().map(|t| t.len()), Some(3));

        let triangle = [
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(1.0, 2.0),
        ];
        capture(&mut session, &triangle);
        assert_eq!(session.spectrum().map(|s| s.sample_count()), Some(3));
        assert_eq!(session.trace().map(|t| t.len()), Some(0));
        assert_eq!(session.clock().time(), 0.0);
    }

    #[test]
    fn test_odd_paths_are_padded_on_request() {
        let triangle = [
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(1.0, 2.0),
        ];

        let mut plain = PathSession::new(EpicycleParams::default());
        plain.commit_path(triangle);
        assert_eq!(plain.spectrum().map(|s| s.sample_count()), Some(3));

        let mut padded = PathSession::new(EpicycleParams {
            pad_odd_paths: true,
            ..Default::default()
        });
        padded.commit_path(triangle);
        assert_eq!(padded.spectrum().map(|s| s.sample_count()), Some(4));
        // The raw path is left as captured
        assert_eq!(padded.path().len(), 3);
    }

    #[test]
    fn test_single_point_path_stays_put() {
        let mut session = PathSession::new(EpicycleParams::default());
        session.commit_path([Point::new(5.0, 7.0)]);

        for _ in 0..50 {
            let frame = session.tick();
            assert_eq!(frame.arms.len(), 1);
            assert!(frame.arms[0].distance(Point::new(5.0, 7.0)) < 1e-9);
            assert!(frame.circles(0.0).is_empty());
        }
        assert_eq!(session.trace().map(|t| t.capacity()), Some(1));
    }

    #[test]
    fn test_ticks_land_on_samples() {
        // angular velocity 2 advances exactly one sample per tick
        let mut session = PathSession::new(EpicycleParams {
            angular_velocity: 2.0,
            max_components: None,
            ..Default::default()
        });
        let path = square();
        session.commit_path(path.clone());

        for k in 1..=8 {
            let frame = session.tick();
            let tip = frame.arms.last().copied().unwrap_or_default();
            let expected = path[k % path.len()];
            assert!(
                tip.distance(expected) < 1e-6,
                "tick {}: expected {:?}, got {:?}",
                k,
                expected,
                tip
            );
            assert_eq!(frame.trail.last().copied(), Some(tip));
        }
    }

    #[test]
    fn test_extreme_trail_sizes_animate() {
        let path = [Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
        let slow = EpicycleParams {
            angular_velocity: 1e-300,
            ..Default::default()
        };
        let oversized = EpicycleParams {
            trace_capacity: Some(usize::MAX),
            ..Default::default()
        };

        for params in [slow, oversized] {
            assert_eq!(params.validate(), Ok(()));
            let mut session = PathSession::new(params);
            session.commit_path(path);

            for ticks in 1..=3 {
                let frame = session.tick();
                assert_eq!(frame.arms.len(), 2);
                assert_eq!(frame.trail.len(), ticks);
            }
            assert_eq!(session.trace().map(|t| t.capacity()), Some(usize::MAX));
        }
    }

    #[test]
    fn test_trail_is_bounded() {
        let mut session = PathSession::new(EpicycleParams {
            trace_capacity: Some(5),
            ..Default::default()
        });
        session.commit_path(square());

        for ticks in 1..=12 {
            let frame = session.tick();
            assert_eq!(frame.trail.len(), ticks.min(5));
        }
    }
}
