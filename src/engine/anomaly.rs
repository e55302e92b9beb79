//! Rate-limited anomaly spike injection.

use super::config::AnomalyConfig;
use super::entropy::EntropySource;

/// Tracks the cooldown between injected spikes.
#[derive(Debug, Clone, Default)]
pub struct AnomalyInjector {
    last_spike_ms: Option<u64>,
}

impl AnomalyInjector {
    #[must_use]
    pub const fn new() -> Self {
        Self { last_spike_ms: None }
    }

    /// Time of the last spike, if any has fired.
    #[must_use]
    pub const fn last_spike_ms(&self) -> Option<u64> {
        self.last_spike_ms
    }

    /// True when a spike may be attempted at `now_ms`.
    ///
    /// Before the first spike there is no cooldown. A clock reading earlier
    /// than the last spike never satisfies the cooldown.
    #[must_use]
    pub fn cooldown_elapsed(&self, now_ms: u64, config: &AnomalyConfig) -> bool {
        self.last_spike_ms
            .is_none_or(|last| now_ms.saturating_sub(last) >= config.cooldown_ms && now_ms >= last)
    }

    /// Attempts a spike at `now_ms`, returning its magnitude when one fires.
    ///
    /// No randomness is consumed while the cooldown is running.
    pub fn try_spike<E: EntropySource + ?Sized>(
        &mut self,
        now_ms: u64,
        config: &AnomalyConfig,
        entropy: &mut E,
    ) -> Option<f64> {
        if !self.cooldown_elapsed(now_ms, config) {
            return None;
        }
        if entropy.next_unit() <= config.spike_threshold {
            return None;
        }
        let magnitude = entropy.next_in(config.spike_min..config.spike_max);
        self.last_spike_ms = Some(now_ms);
        tracing::debug!(now_ms, magnitude, "anomaly spike injected");
        Some(magnitude)
    }
}
