//! Baseline calibration.

use super::error::{EngineResult, require_finite};

/// Reference level established from a calibration sample set.
///
/// Defaults to `0.0` until the first successful calibration.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Baseline {
    level: f64,
    samples: usize,
}

impl Baseline {
    /// Sets the baseline to the arithmetic mean of `samples`.
    ///
    /// An empty slice leaves the baseline unchanged. A non-finite sample is
    /// rejected and the baseline is left unchanged.
    pub fn calibrate(&mut self, samples: &[f64]) -> EngineResult<()> {
        if samples.is_empty() {
            return Ok(());
        }
        for &s in samples {
            require_finite("calibration sample", s)?;
        }
        self.level = samples.iter().sum::<f64>() / samples.len() as f64;
        self.samples = samples.len();
        tracing::info!(baseline = self.level, samples = self.samples, "baseline calibrated");
        Ok(())
    }

    #[must_use]
    pub const fn level(&self) -> f64 {
        self.level
    }

    /// Number of samples behind the current level; 0 if never calibrated.
    #[must_use]
    pub const fn sample_count(&self) -> usize {
        self.samples
    }

    #[must_use]
    pub const fn is_calibrated(&self) -> bool {
        self.samples > 0
    }

    /// Absolute distance of `raw` from the baseline.
    #[must_use]
    pub fn deviation(&self, raw: f64) -> f64 {
        (raw - self.level).abs()
    }
}
