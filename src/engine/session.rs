//! Session activity log.
//!
//! Accumulates what a session produced in the record shape the persistence
//! layer stores. Nothing here touches the filesystem.

use serde::{Deserialize, Serialize};

use super::clock::Clock;
use super::entropy::EntropySource;
use super::error::{EngineResult, require_finite};
use super::params::COLD_SPOT_EVENT_DROP;
use super::response::SpiritResponse;
use super::sensor::EvpReading;
use super::{ParanormalEngine, ProcessedReading};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Emf,
    Audio,
    Temperature,
    Spirit,
}

/// One timestamped entry of the activity log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActivityEvent {
    pub timestamp_ms: u64,
    pub kind: EventKind,
    /// Activity level at the time of the event
    pub level: f64,
    /// Latest temperature known when the event was logged
    pub temperature: Option<f64>,
    pub description: String,
}

/// Serializable end-of-session record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub id: String,
    pub started_at_ms: u64,
    pub duration_ms: u64,
    pub max_emf: f64,
    pub average_emf: f64,
    pub temperature_readings: Vec<f64>,
    pub audio_anomalies: u32,
    pub anomalies: Vec<ActivityEvent>,
}

/// Running statistics and events for one session.
#[derive(Clone, Debug, Default)]
pub struct SessionLog {
    started_at_ms: u64,
    readings: u64,
    level_sum: f64,
    max_level: f64,
    last_level: f64,
    temperature: Option<f64>,
    temperature_readings: Vec<f64>,
    audio_anomalies: u32,
    events: Vec<ActivityEvent>,
}

impl SessionLog {
    #[must_use]
    pub fn new(started_at_ms: u64) -> Self {
        Self {
            started_at_ms,
            ..Self::default()
        }
    }

    /// Records a processed reading; a spike or pattern boost becomes an EMF event.
    pub fn record_reading(&mut self, reading: &ProcessedReading, now_ms: u64) {
        self.readings += 1;
        self.level_sum += reading.level;
        self.max_level = self.max_level.max(reading.level);
        self.last_level = reading.level;

        let description = match (reading.spike, reading.pattern_boost) {
            (Some(spike), _) => format!("EMF spike detected (+{spike:.1})"),
            (None, Some(_)) => "Rising EMF pattern detected".to_string(),
            (None, None) => return,
        };
        self.push_event(now_ms, EventKind::Emf, reading.level, description);
    }

    /// Records a temperature sample. Non-finite samples are rejected.
    pub fn record_temperature(&mut self, celsius: f64, now_ms: u64) -> EngineResult<()> {
        require_finite("temperature", celsius)?;
        let previous = self.temperature.replace(celsius);
        self.temperature_readings.push(celsius);

        if let Some(prev) = previous {
            if prev - celsius >= COLD_SPOT_EVENT_DROP {
                let description = format!("Sudden cold spot ({prev:.1}°C -> {celsius:.1}°C)");
                self.push_event(now_ms, EventKind::Temperature, self.last_level(), description);
            }
        }
        Ok(())
    }

    /// Records an EVP probe result; only anomalies are logged.
    pub fn record_evp(&mut self, evp: &EvpReading, now_ms: u64) {
        if !evp.has_anomaly {
            return;
        }
        self.audio_anomalies = self.audio_anomalies.saturating_add(1);
        let description = format!("EVP anomaly ({:.0}% confidence)", evp.confidence * 100.0);
        self.push_event(now_ms, EventKind::Audio, self.last_level(), description);
    }

    /// Records a spirit response; silent responses are ignored.
    pub fn record_response(&mut self, response: &SpiritResponse, level: f64, now_ms: u64) {
        if !response.should_respond {
            return;
        }
        let description = format!("Spirit says: \"{}\"", response.message);
        self.push_event(now_ms, EventKind::Spirit, level, description);
    }

    fn push_event(&mut self, timestamp_ms: u64, kind: EventKind, level: f64, description: String) {
        self.events.push(ActivityEvent {
            timestamp_ms,
            kind,
            level,
            temperature: self.temperature,
            description,
        });
    }

    /// Level of the newest processed reading, or 0 before any reading.
    pub const fn last_level(&self) -> f64 {
        self.last_level
    }

    pub const fn started_at_ms(&self) -> u64 {
        self.started_at_ms
    }

    pub fn duration_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.started_at_ms)
    }

    pub const fn reading_count(&self) -> u64 {
        self.readings
    }

    pub const fn max_level(&self) -> f64 {
        self.max_level
    }

    /// Mean processed level, or 0 before any reading.
    pub fn average_level(&self) -> f64 {
        if self.readings == 0 {
            0.0
        } else {
            self.level_sum / self.readings as f64
        }
    }

    /// Latest temperature, if any was recorded.
    pub const fn temperature(&self) -> Option<f64> {
        self.temperature
    }

    pub const fn audio_anomalies(&self) -> u32 {
        self.audio_anomalies
    }

    pub fn events(&self) -> &[ActivityEvent] {
        &self.events
    }

    /// Newest `n` events, newest first.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &ActivityEvent> {
        self.events.iter().rev().take(n)
    }

    /// Session score at `now_ms` using `engine`'s weights.
    pub fn score<E: EntropySource, C: Clock>(
        &self,
        engine: &ParanormalEngine<E, C>,
        level: f64,
        now_ms: u64,
    ) -> EngineResult<f64> {
        let temperature = self.temperature.unwrap_or(engine.config().score.reference_temperature);
        engine.calculate_score(
            level,
            temperature,
            self.audio_anomalies,
            self.duration_ms(now_ms) as f64,
        )
    }

    /// Snapshot in the persisted record shape.
    pub fn summary(&self, id: impl Into<String>, now_ms: u64) -> SessionSummary {
        SessionSummary {
            id: id.into(),
            started_at_ms: self.started_at_ms,
            duration_ms: self.duration_ms(now_ms),
            max_emf: self.max_level,
            average_emf: self.average_level(),
            temperature_readings: self.temperature_readings.clone(),
            audio_anomalies: self.audio_anomalies,
            anomalies: self.events.clone(),
        }
    }
}
