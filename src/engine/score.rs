//! Session score aggregation.
//!
//! Four capped terms (EMF 40, temperature 20, audio 30, duration 10) are
//! summed and clamped to `[0, 100]`.

use serde::{Deserialize, Serialize};

use super::config::ScoreConfig;
use super::error::{EngineError, EngineResult, require_finite};
use super::params::{LEVEL_MAX, LEVEL_MIN};

/// The individual score terms, before summing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub emf: f64,
    pub temperature: f64,
    pub audio: f64,
    pub duration: f64,
}

impl ScoreBreakdown {
    /// Computes each term from its input.
    ///
    /// The activity level is clamped to `[0, 100]` before scaling, so the EMF
    /// term stays within `[0, emf_cap]`.
    ///
    /// Rejects non-finite `activity_level`/`temperature` and negative or
    /// non-finite `duration_ms`.
    pub fn compute(
        activity_level: f64,
        temperature: f64,
        audio_anomalies: u32,
        duration_ms: f64,
        config: &ScoreConfig,
    ) -> EngineResult<Self> {
        require_finite("activity_level", activity_level)?;
        require_finite("temperature", temperature)?;
        require_finite("duration_ms", duration_ms)?;
        if duration_ms < 0.0 {
            return Err(EngineError::negative("duration_ms", duration_ms));
        }

        let minutes = duration_ms / config.ms_per_minute;
        Ok(Self {
            emf: (activity_level.clamp(LEVEL_MIN, LEVEL_MAX) / LEVEL_MAX) * config.emf_cap,
            temperature: ((temperature - config.reference_temperature).abs()
                * config.temperature_gain)
                .min(config.temperature_cap),
            audio: (f64::from(audio_anomalies) * config.audio_per_anomaly).min(config.audio_cap),
            duration: (minutes * config.duration_per_minute).min(config.duration_cap),
        })
    }

    /// Sum of the terms, clamped to `[0, 100]`.
    #[must_use]
    pub fn total(&self) -> f64 {
        (self.emf + self.temperature + self.audio + self.duration).clamp(LEVEL_MIN, LEVEL_MAX)
    }
}

/// Score with the default weights.
pub fn calculate_score(
    activity_level: f64,
    temperature: f64,
    audio_anomalies: u32,
    duration_ms: f64,
) -> EngineResult<f64> {
    ScoreBreakdown::compute(
        activity_level,
        temperature,
        audio_anomalies,
        duration_ms,
        &ScoreConfig::default(),
    )
    .map(|b| b.total())
}
