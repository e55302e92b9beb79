//! Engine tuning constants.

// History
pub const HISTORY_CAPACITY: usize = 50;

// Activity level bounds
pub const LEVEL_MIN: f64 = 0.0;
pub const LEVEL_MAX: f64 = 100.0;

// Anomaly injection
pub const SPIKE_COOLDOWN_MS: u64 = 10_000;
pub const SPIKE_THRESHOLD: f64 = 0.97; // draw must exceed this (3% chance)
pub const SPIKE_MIN: f64 = 20.0;
pub const SPIKE_MAX: f64 = 60.0;

// Trend detection
pub const TREND_WINDOW: usize = 10;
pub const TREND_MIN_RISES: usize = 6; // of TREND_WINDOW - 1 comparisons
pub const PATTERN_BOOST_MIN: f64 = 5.0;
pub const PATTERN_BOOST_MAX: f64 = 20.0;

// Spirit responses
pub const RESPONSE_LEVEL_GATE: f64 = 60.0;
pub const RESPONSE_DRAW_GATE: f64 = 0.7;
pub const SENTENCE_LEVEL_GATE: f64 = 80.0;
pub const SENTENCE_DRAW_HIGH: f64 = 0.4; // used above SENTENCE_LEVEL_GATE
pub const SENTENCE_DRAW_LOW: f64 = 0.7;

// Score weights (caps sum to 100)
pub const SCORE_EMF_CAP: f64 = 40.0;
pub const SCORE_TEMPERATURE_CAP: f64 = 20.0;
pub const SCORE_TEMPERATURE_GAIN: f64 = 2.0;
pub const SCORE_AUDIO_CAP: f64 = 30.0;
pub const SCORE_AUDIO_PER_ANOMALY: f64 = 5.0;
pub const SCORE_DURATION_CAP: f64 = 10.0;
pub const SCORE_DURATION_PER_MINUTE: f64 = 0.5;
pub const ROOM_TEMPERATURE_C: f64 = 20.0;
pub const MS_PER_MINUTE: f64 = 60_000.0;

// Magnetometer mapping (microtesla)
pub const EMF_MAGNITUDE_OFFSET: f64 = 25.0;
pub const EMF_MAGNITUDE_GAIN: f64 = 2.0;

// Synthetic temperature drift
pub const TEMPERATURE_VARIATION: f64 = 4.0;
pub const COLD_SPOT_LEVEL: f64 = 70.0;
pub const COLD_SPOT_MAX_DROP: f64 = 5.0;

// Synthetic EVP analysis
pub const EVP_ANOMALY_THRESHOLD: f64 = 0.8;
pub const EVP_CONFIDENCE_FLOOR: f64 = 0.6;
pub const EVP_CONFIDENCE_SPAN: f64 = 0.4;
pub const EVP_NOISE_CONFIDENCE: f64 = 0.3;

// Session log
pub const COLD_SPOT_EVENT_DROP: f64 = 3.0; // °C between consecutive samples
pub const RECENT_EVENTS: usize = 10;
