//! Epicycle chain: running sums of the rotating vectors at one instant.

use crate::spectrum::PathSpectrum;
use crate::Point;

/// One drawn epicycle: the circle swept by an arm around its base vertex
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

/// Arm vertices of the chain evaluated at a single virtual time
#[derive(Debug, Clone)]
pub struct EpicycleChain {
    arms: Vec<Point>,
}

impl EpicycleChain {
    /// Evaluate the chain at virtual time `t`
    ///
    /// Vertex 0 is the DC term. Each following step adds bin `+i` and then,
    /// unless `i` is the Nyquist bin, its negative partner `N - i`, for
    /// `i = 1..=min(⌊N/2⌋, max_components)`. A cap beyond the available pairs
    /// is clamped.
    pub fn evaluate(spectrum: &PathSpectrum, t: f64, max_components: Option<usize>) -> Self {
        let n = spectrum.sample_count();
        let pairs = max_components.map_or(n / 2, |cap| cap.min(n / 2));

        let mut arms = Vec::with_capacity(2 * pairs + 1);
        let mut tip = spectrum.contribution(0, t);
        arms.push(tip);

        for i in 1..=pairs {
            tip += spectrum.contribution(i, t);
            arms.push(tip);

            if i != n - i {
                tip += spectrum.contribution(n - i, t);
                arms.push(tip);
            }
        }

        Self { arms }
    }

    /// Vertices from the DC term to the reconstructed point
    pub fn arms(&self) -> &[Point] {
        &self.arms
    }

    /// Tip of the last arm
    pub fn final_point(&self) -> Point {
        // arms always holds the DC vertex
        self.arms.last().copied().unwrap_or(Point::ZERO)
    }

    pub fn into_arms(self) -> Vec<Point> {
        self.arms
    }

    /// Circles traced by each arm, skipping those no larger than `min_radius`
    pub fn circles(&self, min_radius: f64) -> Vec<Circle> {
        circles(&self.arms, min_radius)
    }
}

/// Circle swept by each arm of a vertex chain, centred on the arm's base
pub fn circles(arms: &[Point], min_radius: f64) -> Vec<Circle> {
    arms.windows(2)
        .map(|pair| Circle {
            center: pair[0],
            radius: pair[0].distance(pair[1]),
        })
        .filter(|circle| circle.radius > min_radius)
        .collect()
}
