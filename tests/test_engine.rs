//! Behavioural tests for the engine's public operations.

use ghost_meter::engine::{
    EngineConfig, ManualClock, ParanormalEngine, ResponseKind, ScriptedEntropy,
};
use ghost_meter::engine::params::{HISTORY_CAPACITY, SPIKE_COOLDOWN_MS};
use ghost_meter::engine::response::SPIRIT_SENTENCES;

type TestEngine = ParanormalEngine<ScriptedEntropy, ManualClock>;

fn engine_with(entropy: ScriptedEntropy) -> (TestEngine, ManualClock) {
    let clock = ManualClock::new(0);
    let engine = ParanormalEngine::with_sources(EngineConfig::default(), entropy, clock.clone())
        .expect("default config is valid");
    (engine, clock)
}

fn feed(engine: &mut TestEngine, values: &[f64]) {
    for &v in values {
        engine.process_reading(v).unwrap();
    }
}

#[test]
fn test_pattern_on_strictly_rising_sequence() {
    let (mut engine, _) = engine_with(ScriptedEntropy::constant(0.0));
    feed(&mut engine, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]);
    assert!(engine.detect_pattern());
}

#[test]
fn test_no_pattern_on_falling_sequence() {
    let (mut engine, _) = engine_with(ScriptedEntropy::constant(0.0));
    feed(&mut engine, &[10.0, 9.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0]);
    assert!(!engine.detect_pattern());
}

#[test]
fn test_no_pattern_below_ten_entries() {
    let (mut engine, _) = engine_with(ScriptedEntropy::constant(0.0));
    for v in 1..10 {
        engine.process_reading(f64::from(v)).unwrap();
        assert!(!engine.detect_pattern());
    }
}

#[test]
fn test_pattern_boost_applies_on_tenth_rising_reading() {
    // Spike draws stay low; the boost draw of 0.0 maps to the 5.0 minimum
    let (mut engine, _) = engine_with(ScriptedEntropy::constant(0.0));
    feed(&mut engine, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);

    let r = engine.process_reading_detailed(10.0).unwrap();
    assert_eq!(r.pattern_boost, Some(5.0));
    assert_eq!(r.level, 15.0);
}

#[test]
fn test_pattern_boost_upper_range() {
    let (mut engine, _) = engine_with(ScriptedEntropy::constant(0.0));
    feed(&mut engine, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
    // spike draw (no spike), then boost draw
    engine.entropy_mut().push([0.5, 0.999_999]);

    let r = engine.process_reading_detailed(10.0).unwrap();
    let boost = r.pattern_boost.unwrap();
    assert!((5.0..20.0).contains(&boost));
    assert!(boost > 19.9);
}

#[test]
fn test_spike_cooldown_in_simulated_time() {
    let (mut engine, clock) = engine_with(ScriptedEntropy::constant(0.99));

    let first = engine.process_reading_detailed(10.0).unwrap();
    assert!(first.spike.is_some());

    clock.advance(SPIKE_COOLDOWN_MS - 1);
    let blocked = engine.process_reading_detailed(10.0).unwrap();
    assert!(blocked.spike.is_none());

    clock.advance(1);
    let again = engine.process_reading_detailed(10.0).unwrap();
    assert!(again.spike.is_some());
    assert_eq!(engine.last_spike_ms(), Some(SPIKE_COOLDOWN_MS));
}

#[test]
fn test_cooldown_suppresses_random_draw() {
    let (mut engine, _) = engine_with(ScriptedEntropy::constant(0.99));
    engine.process_reading(10.0).unwrap();
    let taken = engine.entropy_mut().taken();

    // Same instant: neither spike nor pattern may consume randomness
    engine.process_reading(12.0).unwrap();
    assert_eq!(engine.entropy_mut().taken(), taken);
}

#[test]
fn test_history_keeps_most_recent_fifty() {
    let (mut engine, _) = engine_with(ScriptedEntropy::constant(0.0));
    let inputs: Vec<f64> = (0..120).map(|i| f64::from(i % 97)).collect();
    feed(&mut engine, &inputs);

    assert_eq!(engine.history().len(), HISTORY_CAPACITY);
    assert_eq!(engine.history().to_vec(), &inputs[inputs.len() - HISTORY_CAPACITY..]);
}

#[test]
fn test_history_stores_raw_not_enhanced() {
    let (mut engine, _) = engine_with(ScriptedEntropy::new([0.99, 0.99]));
    let level = engine.process_reading(30.0).unwrap();
    assert!(level > 30.0);
    assert_eq!(engine.history().last(), Some(&30.0));
}

#[test]
fn test_calibration_is_informational() {
    let (mut engine, _) = engine_with(ScriptedEntropy::constant(0.0));
    engine.calibrate_baseline(&[]).unwrap();
    assert!(!engine.baseline().is_calibrated());

    engine.calibrate_baseline(&[40.0, 60.0]).unwrap();
    assert_eq!(engine.baseline().level(), 50.0);

    let r = engine.process_reading_detailed(20.0).unwrap();
    assert_eq!(r.deviation, 30.0);
    assert_eq!(r.level, 20.0);
}

#[test]
fn test_response_below_gate_is_silent() {
    let (mut engine, _) = engine_with(ScriptedEntropy::constant(0.99));
    for temperature in [-10.0, 20.0, 45.0] {
        let r = engine.generate_response(50.0, temperature).unwrap();
        assert!(!r.should_respond);
        assert!(r.message.is_empty());
    }
}

#[test]
fn test_maximal_draws_give_sentence() {
    let (mut engine, _) = engine_with(ScriptedEntropy::constant(0.999_999));
    let r = engine.generate_response(90.0, 20.0).unwrap();
    assert!(r.should_respond);
    assert_eq!(r.kind, ResponseKind::Sentence);
    assert!(SPIRIT_SENTENCES.contains(&r.message.as_str()));
}

#[test]
fn test_temperature_does_not_change_response() {
    // Temperature is an intentionally unused input
    let draws = [0.9, 0.5, 0.3];
    let (mut cold, _) = engine_with(ScriptedEntropy::new(draws));
    let (mut warm, _) = engine_with(ScriptedEntropy::new(draws));
    assert_eq!(
        cold.generate_response(85.0, -5.0).unwrap(),
        warm.generate_response(85.0, 35.0).unwrap()
    );
}

#[test]
fn test_score_examples() {
    let (engine, _) = engine_with(ScriptedEntropy::constant(0.0));
    assert_eq!(engine.calculate_score(100.0, 20.0, 0, 0.0).unwrap(), 40.0);
    assert_eq!(engine.calculate_score(0.0, 40.0, 10, 600_000.0).unwrap(), 55.0);
}

#[test]
fn test_invalid_inputs_rejected() {
    let (mut engine, _) = engine_with(ScriptedEntropy::constant(0.0));
    assert!(engine.process_reading(f64::NAN).is_err());
    assert!(engine.calibrate_baseline(&[f64::INFINITY]).is_err());
    assert!(engine.generate_response(f64::NAN, 20.0).is_err());
    assert!(engine.calculate_score(10.0, 20.0, 0, -1.0).is_err());
    assert!(engine.history().is_empty());
}

#[test]
fn test_independent_instances() {
    let (mut a, _) = engine_with(ScriptedEntropy::constant(0.0));
    let (b, _) = engine_with(ScriptedEntropy::constant(0.0));
    a.process_reading(12.0).unwrap();
    assert_eq!(a.history().len(), 1);
    assert!(b.history().is_empty());
}
