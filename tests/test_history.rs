//! Tests for the reading history buffer.

use ghost_meter::engine::history::{ReadingHistory, RingBuffer};
use ghost_meter::engine::params::HISTORY_CAPACITY;
use ghost_meter::engine::trend::{detect_rising_pattern, rising_steps};
use ghost_meter::engine::config::TrendConfig;

#[test]
fn test_ring_buffer_basic() {
    let mut buf: RingBuffer<i32, 4> = RingBuffer::new();
    assert!(buf.is_empty());
    assert_eq!(buf.capacity(), 4);

    buf.push(1);
    buf.push(2);
    buf.push(3);

    assert_eq!(buf.len(), 3);
    assert_eq!(*buf.get(0).unwrap(), 1);
    assert_eq!(*buf.get(2).unwrap(), 3);
}

#[test]
fn test_ring_buffer_overflow_ordering() {
    let mut buf: RingBuffer<i32, 3> = RingBuffer::new();
    let evicted: Vec<_> = (1..=5).filter_map(|v| buf.push(v)).collect();

    assert_eq!(evicted, vec![1, 2]);
    assert_eq!(buf.len(), 3);
    let items: Vec<_> = buf.iter().copied().collect();
    assert_eq!(items, vec![3, 4, 5]);
}

#[test]
fn test_reading_history_capacity() {
    let mut history = ReadingHistory::new();
    assert_eq!(history.capacity(), HISTORY_CAPACITY);

    for i in 0..HISTORY_CAPACITY {
        assert_eq!(history.push(i as f64), None);
    }
    assert!(history.is_full());
    assert_eq!(history.push(-1.0), Some(0.0));
    assert_eq!(history.get(0), Some(&1.0));
    assert_eq!(history.last(), Some(&-1.0));
}

#[test]
fn test_trend_reads_across_wraparound() {
    let config = TrendConfig::default();
    let mut history = ReadingHistory::new();
    // Fill with a falling run, then a rising run that wraps the buffer
    for i in 0..HISTORY_CAPACITY {
        history.push((HISTORY_CAPACITY - i) as f64);
    }
    assert!(!detect_rising_pattern(&history, &config));

    for i in 0..config.window {
        history.push(i as f64);
    }
    assert_eq!(rising_steps(history.tail(config.window)), config.window - 1);
    assert!(detect_rising_pattern(&history, &config));
}
