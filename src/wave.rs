use std::f32::consts::{PI, TAU};

use crate::constants::{DEFAULT_AMPLITUDE, DEFAULT_PERIOD, DEFAULT_PHASE};

/// A sine wave described by its phase, amplitude and period, all in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveModel {
    pub phase: f32,
    pub amplitude: f32,
    pub period: f32,
}

impl Default for WaveModel {
    fn default() -> Self {
        Self::new(DEFAULT_PHASE, DEFAULT_AMPLITUDE, DEFAULT_PERIOD)
    }
}

impl WaveModel {
    pub fn new(phase: f32, amplitude: f32, period: f32) -> Self {
        Self { phase, amplitude, period }
    }

    /// Cycles per radian of the sample domain.
    /// A non-positive period yields zero frequency rather than dividing by zero.
    pub fn frequency(&self) -> f32 {
        if self.period > 0.0 {
            1.0 / self.period
        } else {
            0.0
        }
    }

    /// True when the period collapses the wave into a flat line.
    pub fn is_degenerate(&self) -> bool {
        self.period.is_nan() || self.period <= 0.0
    }

    /// Samples `period_count` periods of the wave at `2 * sample_count` samples per period.
    ///
    /// Sample `j` sits at the angle `PI * j / sample_count` and has the value
    /// `amplitude * sin(2PI * frequency * angle + phase)`.
    pub fn get_samples(&self, sample_count: usize, period_count: usize) -> SampleSet {
        let len = sample_count * 2 * period_count;
        let frequency = self.frequency();

        let points = (0..len)
            .map(|j| {
                let angle = PI * j as f32 / sample_count as f32;
                let value = self.amplitude * (TAU * frequency * angle + self.phase).sin();
                (angle, value)
            })
            .collect();

        SampleSet { points }
    }
}

/// Ordered `(angle, value)` pairs produced by [`WaveModel::get_samples`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleSet {
    points: Vec<(f32, f32)>,
}

impl SampleSet {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[(f32, f32)] {
        &self.points
    }

    pub fn values(&self) -> impl Iterator<Item = f32> + '_ {
        self.points.iter().map(|&(_, y)| y)
    }
}
