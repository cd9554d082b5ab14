use super::{SVector, DEFAULT_TOLERANCE_MULTIPLIER, MACHINE_EPSILON};

/// Tolerances used to snap near-`zero` components to exactly `zero`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChopTolerance {
    /// Value that close components are snapped to.
    pub zero: f64,
    /// Relative tolerance, scaled by `|zero|`.
    pub rtol: f64,
    /// Absolute tolerance as a multiple of machine epsilon.
    pub tolerance_multiplier: f64,
}

impl Default for ChopTolerance {
    fn default() -> Self {
        Self {
            zero: 0.0,
            rtol: 0.0,
            tolerance_multiplier: DEFAULT_TOLERANCE_MULTIPLIER,
        }
    }
}

impl ChopTolerance {
    #[must_use]
    pub fn with_zero(mut self, zero: f64) -> Self {
        self.zero = zero;
        self
    }

    #[must_use]
    pub fn with_rtol(mut self, rtol: f64) -> Self {
        self.rtol = rtol;
        self
    }

    #[must_use]
    pub fn with_tolerance_multiplier(mut self, tolerance_multiplier: f64) -> Self {
        self.tolerance_multiplier = tolerance_multiplier;
        self
    }

    /// Absolute tolerance, `tolerance_multiplier * ε`.
    #[must_use]
    pub fn atol(&self) -> f64 {
        self.tolerance_multiplier * MACHINE_EPSILON
    }

    /// Returns whether `value` is within tolerance of `zero`.
    #[must_use]
    pub fn is_close(&self, value: f64) -> bool {
        (value - self.zero).abs() <= self.atol() + self.rtol * self.zero.abs()
    }

    /// Snaps a single component.
    #[must_use]
    pub fn chop(&self, value: f64) -> f64 {
        if self.is_close(value) {
            self.zero
        } else {
            value
        }
    }
}

/// Returns a copy of `values` with every component close to `tolerance.zero`
/// replaced by exactly `tolerance.zero`.
#[must_use]
pub fn array_chop(values: &[f64], tolerance: &ChopTolerance) -> Vec<f64> {
    values.iter().map(|&v| tolerance.chop(v)).collect()
}

/// Fixed-size counterpart of [`array_chop`].
#[must_use]
pub fn chop_vector<const D: usize>(vector: &SVector<D>, tolerance: &ChopTolerance) -> SVector<D> {
    vector.map(|v| tolerance.chop(v))
}
