//! Discrete Fourier decomposition of a sampled path.
//!
//! A path of N points is turned into N rotating vectors per transformed
//! signal. Two layouts are supported:
//! - `Paired`: x and y are transformed as independent real signals, and the
//!   y spectrum carries a π/2 phase offset so its vectors rotate along the
//!   perpendicular basis. Summing both reproduces the 2-D point.
//! - `Complex`: the path is transformed once as the complex signal `x + iy`.

use std::f64::consts::{FRAC_PI_2, TAU};

use rustfft::{num_complex::Complex, FftPlanner};

use crate::Point;

/// Which signal a component was computed from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Complex,
}

/// How a path is decomposed into spectra
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransformMode {
    /// Two real transforms (x and y), y lagging by π/2
    #[default]
    Paired,

    /// One complex transform of `x + iy`
    Complex,
}

/// One DFT bin expressed as a rotating vector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyComponent {
    /// Signed bin frequency (revolutions per path traversal)
    pub frequency: i64,

    /// Vector length, `|X[k]| / N`
    pub magnitude: f64,

    /// Starting angle in radians
    pub phase: f64,

    pub axis: Axis,
}

impl FrequencyComponent {
    /// Vector of this bin at virtual time `t`
    pub fn contribution(&self, t: f64, phase_offset: f64) -> Point {
        let (sin, cos) = (t * self.frequency as f64 + self.phase + phase_offset).sin_cos();
        Point::new(cos, sin) * self.magnitude
    }
}

/// Signed frequency of bin `index` in a length-`n` transform
///
/// Non-negative bins `0..⌈n/2⌉` come first, followed by `-⌊n/2⌋..-1`.
pub fn bin_frequency(index: usize, n: usize) -> i64 {
    let positive_bins = (n + 1) / 2;
    if index < positive_bins {
        index as i64
    } else {
        index as i64 - n as i64
    }
}

/// Full set of frequency components for one transformed signal
#[derive(Debug, Clone)]
pub struct Spectrum {
    components: Vec<FrequencyComponent>,
    sample_count: usize,
    phase_offset: f64,
    axis: Axis,
}

impl Spectrum {
    /// Transform a real-valued signal
    ///
    /// An empty signal still yields one zero-magnitude DC component.
    pub fn build(samples: &[f64], phase_offset: f64, axis: Axis) -> Self {
        let signal = samples.iter().map(|&s| Complex::new(s, 0.0)).collect();
        Self::from_signal(signal, phase_offset, axis)
    }

    /// Transform a path as the single complex signal `x + iy`
    pub fn build_complex(points: &[Point]) -> Self {
        let signal = points.iter().map(|p| Complex::new(p.x, p.y)).collect();
        Self::from_signal(signal, 0.0, Axis::Complex)
    }

    fn from_signal(mut signal: Vec<Complex<f64>>, phase_offset: f64, axis: Axis) -> Self {
        let n = signal.len();
        if n == 0 {
            return Self {
                components: vec![FrequencyComponent {
                    frequency: 0,
                    magnitude: 0.0,
                    phase: 0.0,
                    axis,
                }],
                sample_count: 0,
                phase_offset,
                axis,
            };
        }

        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(n);
        fft.process(&mut signal);

        let scale = 1.0 / n as f64;
        let components = signal
            .iter()
            .enumerate()
            .map(|(k, c)| FrequencyComponent {
                frequency: bin_frequency(k, n),
                magnitude: c.norm() * scale,
                phase: c.im.atan2(c.re),
                axis,
            })
            .collect();

        Self {
            components,
            sample_count: n,
            phase_offset,
            axis,
        }
    }

    pub fn components(&self) -> &[FrequencyComponent] {
        &self.components
    }

    /// Number of samples the spectrum was built from
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    pub fn phase_offset(&self) -> f64 {
        self.phase_offset
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Number of conjugate pairs available after the DC term (`⌊N/2⌋`)
    pub fn pair_count(&self) -> usize {
        self.sample_count / 2
    }

    /// Vector of the bin at `index` at virtual time `t`
    ///
    /// Indices past the last bin are clamped to it.
    pub fn contribution(&self, index: usize, t: f64) -> Point {
        // components always holds at least the DC bin
        let last = self.components.len() - 1;
        self.components[index.min(last)].contribution(t, self.phase_offset)
    }

    /// Virtual time at which the full reconstruction passes through sample `index`
    pub fn sample_time(&self, index: usize) -> f64 {
        sample_time(index, self.sample_count)
    }

    /// Squared-magnitude mass left out by a chain truncated to `pairs` pairs
    pub fn energy_beyond(&self, pairs: usize) -> f64 {
        let n = self.sample_count;
        self.components
            .iter()
            .enumerate()
            .filter(|&(k, _)| k != 0 && k.min(n - k) > pairs)
            .map(|(_, c)| c.magnitude * c.magnitude)
            .sum()
    }
}

fn sample_time(index: usize, sample_count: usize) -> f64 {
    if sample_count == 0 {
        return 0.0;
    }
    TAU * index as f64 / sample_count as f64
}

/// Decomposition of a whole path, as consumed by the epicycle chain
#[derive(Debug, Clone)]
pub enum PathSpectrum {
    Paired { x: Spectrum, y: Spectrum },
    Complex(Spectrum),
}

impl PathSpectrum {
    pub fn build(points: &[Point], mode: TransformMode) -> Self {
        match mode {
            TransformMode::Paired => Self::paired(points),
            TransformMode::Complex => Self::complex(points),
        }
    }

    /// Two real transforms; the y spectrum lags by a quarter turn
    pub fn paired(points: &[Point]) -> Self {
        let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
        let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
        Self::Paired {
            x: Spectrum::build(&xs, 0.0, Axis::X),
            y: Spectrum::build(&ys, FRAC_PI_2, Axis::Y),
        }
    }

    pub fn complex(points: &[Point]) -> Self {
        Self::Complex(Spectrum::build_complex(points))
    }

    pub fn sample_count(&self) -> usize {
        match self {
            Self::Paired { x, .. } => x.sample_count(),
            Self::Complex(spectrum) => spectrum.sample_count(),
        }
    }

    pub fn pair_count(&self) -> usize {
        self.sample_count() / 2
    }

    /// Summed vector of every spectrum at DFT index `index`
    pub fn contribution(&self, index: usize, t: f64) -> Point {
        match self {
            Self::Paired { x, y } => x.contribution(index, t) + y.contribution(index, t),
            Self::Complex(spectrum) => spectrum.contribution(index, t),
        }
    }

    pub fn sample_time(&self, index: usize) -> f64 {
        sample_time(index, self.sample_count())
    }

    pub fn energy_beyond(&self, pairs: usize) -> f64 {
        match self {
            Self::Paired { x, y } => x.energy_beyond(pairs) + y.energy_beyond(pairs),
            Self::Complex(spectrum) => spectrum.energy_beyond(pairs),
        }
    }
}
