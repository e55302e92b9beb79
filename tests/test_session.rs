//! Tests for the session activity log.

use ghost_meter::engine::sensor::EvpReading;
use ghost_meter::engine::{
    EngineConfig, EventKind, ManualClock, ParanormalEngine, ProcessedReading, ResponseKind,
    ScriptedEntropy, SessionLog, SpiritResponse,
};

fn reading(level: f64, spike: Option<f64>, pattern_boost: Option<f64>) -> ProcessedReading {
    ProcessedReading {
        raw: level,
        deviation: 0.0,
        spike,
        pattern_boost,
        level,
    }
}

#[test]
fn test_statistics_accumulate() {
    let mut log = SessionLog::new(1_000);
    assert_eq!(log.average_level(), 0.0);

    log.record_reading(&reading(20.0, None, None), 1_100);
    log.record_reading(&reading(60.0, None, None), 1_200);
    log.record_reading(&reading(40.0, None, None), 1_300);

    assert_eq!(log.reading_count(), 3);
    assert_eq!(log.max_level(), 60.0);
    assert_eq!(log.average_level(), 40.0);
    assert!(log.events().is_empty(), "plain readings are not events");
    assert_eq!(log.duration_ms(61_000), 60_000);
}

#[test]
fn test_spike_and_pattern_become_emf_events() {
    let mut log = SessionLog::new(0);
    log.record_reading(&reading(70.0, Some(35.0), None), 10);
    log.record_reading(&reading(30.0, None, Some(8.0)), 20);

    let events = log.events();
    assert_eq!(events.len(), 2);
    assert!(events.iter().all(|e| e.kind == EventKind::Emf));
    assert!(events[0].description.contains("spike"));
    assert!(events[1].description.contains("pattern"));
}

#[test]
fn test_cold_spot_logged_on_sharp_drop() {
    let mut log = SessionLog::new(0);
    log.record_temperature(20.0, 0).unwrap();
    log.record_temperature(19.0, 2_000).unwrap();
    assert!(log.events().is_empty());

    log.record_temperature(15.5, 4_000).unwrap();
    let event = log.events().last().unwrap();
    assert_eq!(event.kind, EventKind::Temperature);
    assert_eq!(event.temperature, Some(15.5));
    assert_eq!(log.temperature(), Some(15.5));
}

#[test]
fn test_non_finite_temperature_rejected() {
    let mut log = SessionLog::new(0);
    assert!(log.record_temperature(f64::NAN, 0).is_err());
    assert_eq!(log.temperature(), None);
}

#[test]
fn test_only_anomalous_evp_counts() {
    let mut log = SessionLog::new(0);
    log.record_evp(&EvpReading { has_anomaly: false, confidence: 0.2 }, 5);
    log.record_evp(&EvpReading { has_anomaly: true, confidence: 0.75 }, 6);
    assert_eq!(log.audio_anomalies(), 1);
    assert_eq!(log.events().len(), 1);
    assert_eq!(log.events()[0].kind, EventKind::Audio);
    assert!(log.events()[0].description.contains("75%"));
}

#[test]
fn test_events_use_current_level_after_spike() {
    let mut log = SessionLog::new(0);
    log.record_reading(&reading(95.0, Some(50.0), None), 1);
    for t in 2..102 {
        log.record_reading(&reading(10.0, None, None), t);
    }
    assert_eq!(log.last_level(), 10.0);

    log.record_evp(&EvpReading { has_anomaly: true, confidence: 0.7 }, 200);
    log.record_temperature(20.0, 201).unwrap();
    log.record_temperature(15.0, 202).unwrap();

    let events = log.events();
    assert_eq!(events.len(), 3);
    assert_eq!(events[1].kind, EventKind::Audio);
    assert_eq!(events[1].level, 10.0);
    assert_eq!(events[2].kind, EventKind::Temperature);
    assert_eq!(events[2].level, 10.0);
}

#[test]
fn test_silent_responses_ignored() {
    let mut log = SessionLog::new(0);
    log.record_response(&SpiritResponse::silent(), 90.0, 1);
    assert!(log.events().is_empty());

    let spoken = SpiritResponse {
        should_respond: true,
        message: "Cold".to_string(),
        kind: ResponseKind::Word,
    };
    log.record_response(&spoken, 90.0, 2);
    assert_eq!(log.events()[0].kind, EventKind::Spirit);
    assert_eq!(log.events()[0].level, 90.0);
}

#[test]
fn test_recent_is_newest_first() {
    let mut log = SessionLog::new(0);
    for i in 0..15u32 {
        log.record_reading(&reading(50.0, Some(f64::from(i)), None), u64::from(i));
    }
    let stamps: Vec<u64> = log.recent(10).map(|e| e.timestamp_ms).collect();
    assert_eq!(stamps, (5..15).rev().collect::<Vec<u64>>());
}

#[test]
fn test_score_from_log() {
    let engine = ParanormalEngine::with_sources(
        EngineConfig::default(),
        ScriptedEntropy::constant(0.0),
        ManualClock::new(0),
    )
    .unwrap();

    let mut log = SessionLog::new(0);
    // No temperature yet: the reference temperature contributes nothing
    assert_eq!(log.score(&engine, 100.0, 0).unwrap(), 40.0);

    log.record_temperature(40.0, 0).unwrap();
    for _ in 0..10 {
        log.record_evp(&EvpReading { has_anomaly: true, confidence: 0.9 }, 0);
    }
    assert_eq!(log.score(&engine, 0.0, 600_000).unwrap(), 55.0);
}

#[test]
fn test_summary_serializes() {
    let mut log = SessionLog::new(500);
    log.record_reading(&reading(80.0, Some(40.0), None), 600);
    log.record_temperature(18.0, 700).unwrap();

    let summary = log.summary("abc", 10_500);
    assert_eq!(summary.id, "abc");
    assert_eq!(summary.duration_ms, 10_000);
    assert_eq!(summary.max_emf, 80.0);
    assert_eq!(summary.temperature_readings, vec![18.0]);

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["anomalies"][0]["kind"], "emf");
    assert!(json["anomalies"][0]["temperature"].is_null());
}
