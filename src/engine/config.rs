//! Engine configuration.
//!
//! Every tunable constant from [`params`](super::params) is mirrored here so a
//! session can be reconfigured from JSON or the environment without touching
//! the algorithms. The history capacity is the one exception: it is fixed at
//! compile time by [`HISTORY_CAPACITY`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{EngineError, EngineResult};
use super::params::{
    HISTORY_CAPACITY, MS_PER_MINUTE, PATTERN_BOOST_MAX, PATTERN_BOOST_MIN, RESPONSE_DRAW_GATE,
    RESPONSE_LEVEL_GATE, ROOM_TEMPERATURE_C, SCORE_AUDIO_CAP, SCORE_AUDIO_PER_ANOMALY,
    SCORE_DURATION_CAP, SCORE_DURATION_PER_MINUTE, SCORE_EMF_CAP, SCORE_TEMPERATURE_CAP,
    SCORE_TEMPERATURE_GAIN, SENTENCE_DRAW_HIGH, SENTENCE_DRAW_LOW, SENTENCE_LEVEL_GATE,
    SPIKE_COOLDOWN_MS, SPIKE_MAX, SPIKE_MIN, SPIKE_THRESHOLD, TREND_MIN_RISES, TREND_WINDOW,
};

/// Master configuration for a [`ParanormalEngine`](super::ParanormalEngine).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub anomaly: AnomalyConfig,
    pub trend: TrendConfig,
    pub response: ResponseConfig,
    pub score: ScoreConfig,
}

/// Spike injection settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnomalyConfig {
    /// Minimum time between two spikes
    pub cooldown_ms: u64,

    /// A spike fires when the draw strictly exceeds this
    pub spike_threshold: f64,

    /// Spike magnitude range `[min, max)`
    pub spike_min: f64,
    pub spike_max: f64,
}

impl Default for AnomalyConfig {
    fn default() -> Self {
        Self {
            cooldown_ms: SPIKE_COOLDOWN_MS,
            spike_threshold: SPIKE_THRESHOLD,
            spike_min: SPIKE_MIN,
            spike_max: SPIKE_MAX,
        }
    }
}

/// Rising-pattern detection settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrendConfig {
    /// Number of most recent readings inspected
    pub window: usize,

    /// Strict increases required among the `window - 1` adjacent pairs
    pub min_rises: usize,

    /// Boost added when a pattern is present, `[min, max)`
    pub boost_min: f64,
    pub boost_max: f64,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            window: TREND_WINDOW,
            min_rises: TREND_MIN_RISES,
            boost_min: PATTERN_BOOST_MIN,
            boost_max: PATTERN_BOOST_MAX,
        }
    }
}

/// Spirit response gates
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResponseConfig {
    /// Level must strictly exceed this before any draw happens
    pub level_gate: f64,

    /// Gate draw must strictly exceed this
    pub draw_gate: f64,

    /// Above this level the high sentence threshold applies
    pub sentence_level_gate: f64,
    pub sentence_draw_high: f64,
    pub sentence_draw_low: f64,
}

impl Default for ResponseConfig {
    fn default() -> Self {
        Self {
            level_gate: RESPONSE_LEVEL_GATE,
            draw_gate: RESPONSE_DRAW_GATE,
            sentence_level_gate: SENTENCE_LEVEL_GATE,
            sentence_draw_high: SENTENCE_DRAW_HIGH,
            sentence_draw_low: SENTENCE_DRAW_LOW,
        }
    }
}

/// Weights of the four score terms
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreConfig {
    pub emf_cap: f64,
    pub temperature_cap: f64,
    pub temperature_gain: f64,
    pub reference_temperature: f64,
    pub audio_cap: f64,
    pub audio_per_anomaly: f64,
    pub duration_cap: f64,
    pub duration_per_minute: f64,
    pub ms_per_minute: f64,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            emf_cap: SCORE_EMF_CAP,
            temperature_cap: SCORE_TEMPERATURE_CAP,
            temperature_gain: SCORE_TEMPERATURE_GAIN,
            reference_temperature: ROOM_TEMPERATURE_C,
            audio_cap: SCORE_AUDIO_CAP,
            audio_per_anomaly: SCORE_AUDIO_PER_ANOMALY,
            duration_cap: SCORE_DURATION_CAP,
            duration_per_minute: SCORE_DURATION_PER_MINUTE,
            ms_per_minute: MS_PER_MINUTE,
        }
    }
}

fn check_probability(name: &str, p: f64) -> EngineResult<()> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(EngineError::config(format!("{name} must be within [0, 1], got {p}")))
    }
}

fn check_range(name: &str, lo: f64, hi: f64) -> EngineResult<()> {
    if lo.is_finite() && hi.is_finite() && lo <= hi {
        Ok(())
    } else {
        Err(EngineError::config(format!("{name} range is invalid: [{lo}, {hi})")))
    }
}

fn check_additive_range(name: &str, lo: f64, hi: f64) -> EngineResult<()> {
    check_range(name, lo, hi)?;
    if lo < 0.0 {
        return Err(EngineError::config(format!("{name} must not start below 0, got {lo}")));
    }
    Ok(())
}

fn check_non_negative(name: &str, v: f64) -> EngineResult<()> {
    if v.is_finite() && v >= 0.0 {
        Ok(())
    } else {
        Err(EngineError::config(format!("{name} must be finite and >= 0, got {v}")))
    }
}

impl EngineConfig {
    /// Reject configurations the engine cannot run with.
    pub fn validate(&self) -> EngineResult<()> {
        let a = &self.anomaly;
        check_probability("anomaly.spike_threshold", a.spike_threshold)?;
        check_additive_range("anomaly.spike", a.spike_min, a.spike_max)?;

        let t = &self.trend;
        if !(2..=HISTORY_CAPACITY).contains(&t.window) {
            return Err(EngineError::config(format!(
                "trend.window must be within 2..={HISTORY_CAPACITY}, got {}",
                t.window
            )));
        }
        if t.min_rises > t.window - 1 {
            return Err(EngineError::config(format!(
                "trend.min_rises ({}) exceeds the {} comparisons in the window",
                t.min_rises,
                t.window - 1
            )));
        }
        check_additive_range("trend.boost", t.boost_min, t.boost_max)?;

        let r = &self.response;
        check_probability("response.draw_gate", r.draw_gate)?;
        check_probability("response.sentence_draw_high", r.sentence_draw_high)?;
        check_probability("response.sentence_draw_low", r.sentence_draw_low)?;
        if !r.level_gate.is_finite() || !r.sentence_level_gate.is_finite() {
            return Err(EngineError::config("response level gates must be finite"));
        }

        let s = &self.score;
        for (name, v) in [
            ("score.emf_cap", s.emf_cap),
            ("score.temperature_cap", s.temperature_cap),
            ("score.temperature_gain", s.temperature_gain),
            ("score.audio_cap", s.audio_cap),
            ("score.audio_per_anomaly", s.audio_per_anomaly),
            ("score.duration_cap", s.duration_cap),
            ("score.duration_per_minute", s.duration_per_minute),
        ] {
            check_non_negative(name, v)?;
        }
        if !s.reference_temperature.is_finite() {
            return Err(EngineError::config("score.reference_temperature must be finite"));
        }
        if !(s.ms_per_minute.is_finite() && s.ms_per_minute > 0.0) {
            return Err(EngineError::config("score.ms_per_minute must be > 0"));
        }
        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> EngineResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> EngineResult<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Create config from environment variables
    ///
    /// Reads:
    /// - `GHOST_COOLDOWN_MS`: spike cooldown (default: 10000)
    /// - `GHOST_SPIKE_THRESHOLD`: spike draw threshold (default: 0.97)
    /// - `GHOST_RESPONSE_GATE`: response draw gate (default: 0.7)
    /// - `GHOST_TREND_WINDOW`: trend window size (default: 10)
    /// - `GHOST_TREND_MIN_RISES`: rises needed for a pattern (default: 6)
    ///
    /// Unparsable values are ignored.
    pub fn from_env() -> EngineResult<Self> {
        fn env<T: std::str::FromStr>(key: &str) -> Option<T> {
            std::env::var(key).ok().and_then(|s| s.trim().parse().ok())
        }

        let mut config = Self::default();
        if let Some(v) = env("GHOST_COOLDOWN_MS") {
            config.anomaly.cooldown_ms = v;
        }
        if let Some(v) = env("GHOST_SPIKE_THRESHOLD") {
            config.anomaly.spike_threshold = v;
        }
        if let Some(v) = env("GHOST_RESPONSE_GATE") {
            config.response.draw_gate = v;
        }
        if let Some(v) = env("GHOST_TREND_WINDOW") {
            config.trend.window = v;
        }
        if let Some(v) = env("GHOST_TREND_MIN_RISES") {
            config.trend.min_rises = v;
        }
        config.validate()?;
        Ok(config)
    }
}
