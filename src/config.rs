use super::error::{ConvertError, Result};
use super::{NativeFloat, Scalar};

/// All conversion parameters in one struct.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionConfig<T = NativeFloat> {
    /// Largest number of quadratic segments a single cubic may be replaced with.
    /// If no count up to this one meets `max_error`, the spline at this count is kept.
    pub max_segments: usize,
    /// Maximum sampled distance between a cubic and its quadratic spline, in font units.
    pub max_error: T,
    /// Convert corresponding curves of all fonts together so that they keep
    /// the same segment counts and stay interpolation-compatible.
    pub compatible: bool,
}

impl<T: Scalar> Default for ConversionConfig<T> {
    fn default() -> Self {
        Self {
            max_segments: 10,
            max_error: 5.0f32.into(),
            compatible: false,
        }
    }
}

impl<T: Scalar> ConversionConfig<T> {
    pub fn with_max_segments(mut self, max_segments: usize) -> Self {
        self.max_segments = max_segments;
        self
    }

    pub fn with_max_error(mut self, max_error: T) -> Self {
        self.max_error = max_error;
        self
    }

    pub fn with_compatible(mut self, compatible: bool) -> Self {
        self.compatible = compatible;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_segments == 0 {
            return Err(ConvertError::InvalidConfig(
                "max_segments must be at least 1".to_string(),
            ));
        }
        if !self.max_error.is_finite() || self.max_error < T::zero() {
            return Err(ConvertError::InvalidConfig(format!(
                "max_error must be a finite, non-negative distance, got {:?}",
                self.max_error
            )));
        }
        Ok(())
    }
}
