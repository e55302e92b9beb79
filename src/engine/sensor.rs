//! Helpers standing in for the sensor and audio collaborators.
//!
//! These produce the already-scaled inputs the engine expects: an EMF level
//! from a magnetometer sample, a drifting room temperature, and a synthetic
//! EVP (electronic voice phenomenon) probe result.

use serde::{Deserialize, Serialize};

use super::entropy::EntropySource;
use super::params::{
    COLD_SPOT_LEVEL, COLD_SPOT_MAX_DROP, EMF_MAGNITUDE_GAIN, EMF_MAGNITUDE_OFFSET,
    EVP_ANOMALY_THRESHOLD, EVP_CONFIDENCE_FLOOR, EVP_CONFIDENCE_SPAN, EVP_NOISE_CONFIDENCE,
    LEVEL_MAX, LEVEL_MIN, ROOM_TEMPERATURE_C, TEMPERATURE_VARIATION,
};

/// One 3-axis magnetometer sample, in microtesla.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MagneticSample {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl MagneticSample {
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Field strength `sqrt(x² + y² + z²)`.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        (self.x.powi(2) + self.y.powi(2) + self.z.powi(2)).sqrt()
    }

    /// Raw reading on the 0–100 scale fed to
    /// [`process_reading`](super::ParanormalEngine::process_reading).
    #[must_use]
    pub fn emf_level(&self) -> f64 {
        ((self.magnitude() - EMF_MAGNITUDE_OFFSET) * EMF_MAGNITUDE_GAIN).clamp(LEVEL_MIN, LEVEL_MAX)
    }
}

/// Synthetic room temperature that cools when activity runs high.
#[derive(Clone, Debug)]
pub struct TemperatureDrift {
    pub base: f64,
}

impl Default for TemperatureDrift {
    fn default() -> Self {
        Self {
            base: ROOM_TEMPERATURE_C,
        }
    }
}

impl TemperatureDrift {
    /// Next temperature reading given the current activity level.
    ///
    /// Draws the variation first, then the cold-spot drop when
    /// `level > COLD_SPOT_LEVEL`.
    pub fn sample<E: EntropySource + ?Sized>(&self, level: f64, entropy: &mut E) -> f64 {
        let variation = (entropy.next_unit() - 0.5) * TEMPERATURE_VARIATION;
        let cold_spot = if level > COLD_SPOT_LEVEL {
            -entropy.next_unit() * COLD_SPOT_MAX_DROP
        } else {
            0.0
        };
        self.base + variation + cold_spot
    }
}

/// Result of scanning a recording for voice anomalies.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvpReading {
    pub has_anomaly: bool,
    pub confidence: f64,
}

/// Placeholder EVP analyzer: flags roughly one clip in five.
#[derive(Clone, Copy, Debug, Default)]
pub struct EvpProbe;

impl EvpProbe {
    pub fn analyze<E: EntropySource + ?Sized>(&self, entropy: &mut E) -> EvpReading {
        let has_anomaly = entropy.next_unit() > EVP_ANOMALY_THRESHOLD;
        let confidence = if has_anomaly {
            EVP_CONFIDENCE_FLOOR + entropy.next_unit() * EVP_CONFIDENCE_SPAN
        } else {
            entropy.next_unit() * EVP_NOISE_CONFIDENCE
        };
        EvpReading {
            has_anomaly,
            confidence,
        }
    }
}
