//! Paranormal scoring engine.
//!
//! A [`ParanormalEngine`] owns all per-session state: the calibration
//! baseline, the bounded reading history and the spike cooldown. It is
//! explicitly constructed and owned by whoever drives the session; there is
//! no global instance.
//!
//! Calls are order-sensitive (trend detection and cooldown depend on arrival
//! order) and take `&mut self`, so a shared engine must be serialized behind
//! a lock by the caller.

pub mod anomaly;
pub mod calibration;
pub mod clock;
pub mod config;
pub mod entropy;
pub mod error;
pub mod history;
pub mod params;
pub mod response;
pub mod score;
pub mod sensor;
pub mod session;
pub mod trend;

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

pub use anomaly::AnomalyInjector;
pub use calibration::Baseline;
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use config::EngineConfig;
pub use entropy::{EntropySource, RngEntropy, ScriptedEntropy};
pub use error::{EngineError, EngineResult};
pub use history::ReadingHistory;
pub use response::{ResponseKind, SpiritResponse};
pub use score::{ScoreBreakdown, calculate_score};
pub use session::{ActivityEvent, EventKind, SessionLog, SessionSummary};

use error::require_finite;
use params::{LEVEL_MAX, LEVEL_MIN};

/// Everything that happened to one raw reading.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProcessedReading {
    pub raw: f64,
    /// Distance from the baseline; informational only
    pub deviation: f64,
    /// Spike magnitude, when one fired
    pub spike: Option<f64>,
    /// Pattern boost, when a rising pattern was present
    pub pattern_boost: Option<f64>,
    /// Enhanced activity level in `[0, 100]`
    pub level: f64,
}

/// Stateful stream processor turning raw readings into an activity level.
#[derive(Debug, Clone)]
pub struct ParanormalEngine<E = RngEntropy<StdRng>, C = MonotonicClock> {
    config: EngineConfig,
    baseline: Baseline,
    history: ReadingHistory,
    injector: AnomalyInjector,
    entropy: E,
    clock: C,
}

impl Default for ParanormalEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ParanormalEngine {
    /// Engine with default configuration, OS-seeded randomness and a
    /// monotonic clock.
    #[must_use]
    pub fn new() -> Self {
        Self::from_parts(
            EngineConfig::default(),
            RngEntropy::from_os(),
            MonotonicClock::new(),
        )
    }

    /// Engine with default configuration and reproducible randomness.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::from_parts(
            EngineConfig::default(),
            RngEntropy::seeded(seed),
            MonotonicClock::new(),
        )
    }
}

impl<E: EntropySource, C: Clock> ParanormalEngine<E, C> {
    /// Engine with caller-supplied configuration, randomness and clock.
    pub fn with_sources(config: EngineConfig, entropy: E, clock: C) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self::from_parts(config, entropy, clock))
    }

    fn from_parts(config: EngineConfig, entropy: E, clock: C) -> Self {
        Self {
            config,
            baseline: Baseline::default(),
            history: ReadingHistory::new(),
            injector: AnomalyInjector::new(),
            entropy,
            clock,
        }
    }

    /// Sets the baseline to the mean of `samples`.
    ///
    /// Meant to run once at session start. An empty slice is a no-op.
    pub fn calibrate_baseline(&mut self, samples: &[f64]) -> EngineResult<()> {
        self.baseline.calibrate(samples)
    }

    /// Processes one raw reading and returns the enhanced activity level.
    pub fn process_reading(&mut self, raw: f64) -> EngineResult<f64> {
        self.process_reading_detailed(raw).map(|r| r.level)
    }

    /// Processes one raw reading, reporting each enhancement step.
    ///
    /// 1. Append to history (evicting the oldest at capacity).
    /// 2. Attempt a cooldown-gated spike.
    /// 3. Add a pattern boost if the updated history shows a rising trend.
    /// 4. Clamp to `[0, 100]`.
    pub fn process_reading_detailed(&mut self, raw: f64) -> EngineResult<ProcessedReading> {
        require_finite("raw", raw)?;

        self.history.push(raw);
        let deviation = self.baseline.deviation(raw);
        let mut enhanced = raw;

        let now = self.clock.now_ms();
        let spike = self
            .injector
            .try_spike(now, &self.config.anomaly, &mut self.entropy);
        if let Some(s) = spike {
            enhanced += s;
        }

        let pattern_boost = if self.detect_pattern() {
            let t = &self.config.trend;
            let boost = self.entropy.next_in(t.boost_min..t.boost_max);
            tracing::debug!(raw, boost, "rising pattern boost");
            Some(boost)
        } else {
            None
        };
        if let Some(b) = pattern_boost {
            enhanced += b;
        }

        Ok(ProcessedReading {
            raw,
            deviation,
            spike,
            pattern_boost,
            level: enhanced.clamp(LEVEL_MIN, LEVEL_MAX),
        })
    }

    /// True when the newest readings form a rising pattern.
    pub fn detect_pattern(&self) -> bool {
        trend::detect_rising_pattern(&self.history, &self.config.trend)
    }

    /// Possibly produces a spirit response for `level`.
    ///
    /// `temperature` is currently inert.
    pub fn generate_response(&mut self, level: f64, temperature: f64) -> EngineResult<SpiritResponse> {
        require_finite("activity_level", level)?;
        require_finite("temperature", temperature)?;
        Ok(response::synthesize(
            level,
            temperature,
            &self.config.response,
            &mut self.entropy,
        ))
    }

    /// Session score in `[0, 100]` using this engine's weights.
    pub fn calculate_score(
        &self,
        level: f64,
        temperature: f64,
        audio_anomalies: u32,
        duration_ms: f64,
    ) -> EngineResult<f64> {
        self.score_breakdown(level, temperature, audio_anomalies, duration_ms)
            .map(|b| b.total())
    }

    /// The four score terms behind [`calculate_score`](Self::calculate_score).
    pub fn score_breakdown(
        &self,
        level: f64,
        temperature: f64,
        audio_anomalies: u32,
        duration_ms: f64,
    ) -> EngineResult<ScoreBreakdown> {
        ScoreBreakdown::compute(
            level,
            temperature,
            audio_anomalies,
            duration_ms,
            &self.config.score,
        )
    }

    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub const fn baseline(&self) -> &Baseline {
        &self.baseline
    }

    pub const fn history(&self) -> &ReadingHistory {
        &self.history
    }

    pub const fn last_spike_ms(&self) -> Option<u64> {
        self.injector.last_spike_ms()
    }

    pub fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }

    /// Randomness shared with collaborators driven alongside the engine.
    pub fn entropy_mut(&mut self) -> &mut E {
        &mut self.entropy
    }
}
