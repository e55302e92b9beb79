//! Rising-trend heuristic over the reading history.
//!
//! Not a statistical test: counts strict increases between adjacent readings
//! in the newest window and compares the count against a fixed threshold.

use super::config::TrendConfig;
use super::history::ReadingHistory;

/// Number of adjacent pairs `(a, b)` with `b > a`, in iteration order.
///
/// Ties and decreases do not count.
pub fn rising_steps<'a>(window: impl IntoIterator<Item = &'a f64>) -> usize {
    let mut iter = window.into_iter();
    let Some(mut prev) = iter.next() else {
        return 0;
    };
    let mut rises = 0;
    for v in iter {
        if v > prev {
            rises += 1;
        }
        prev = v;
    }
    rises
}

/// True when the newest `config.window` readings contain at least
/// `config.min_rises` strict increases. Histories shorter than the window
/// never form a pattern.
pub fn detect_rising_pattern(history: &ReadingHistory, config: &TrendConfig) -> bool {
    if history.len() < config.window {
        return false;
    }
    rising_steps(history.tail(config.window)) >= config.min_rises
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history_of(values: &[f64]) -> ReadingHistory {
        let mut h = ReadingHistory::new();
        for &v in values {
            h.push(v);
        }
        h
    }

    #[test]
    fn test_rising_steps_counts_strict_increases() {
        assert_eq!(rising_steps(&[1.0, 2.0, 2.0, 3.0, 1.0]), 2);
        assert_eq!(rising_steps(&[] as &[f64]), 0);
        assert_eq!(rising_steps(&[4.0]), 0);
    }

    #[test]
    fn test_short_history_never_matches() {
        let config = TrendConfig::default();
        let h = history_of(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        assert!(!detect_rising_pattern(&h, &config));
    }

    #[test]
    fn test_exact_threshold() {
        let config = TrendConfig::default();
        // 6 rises, 3 falls
        let six = history_of(&[0.0, 1.0, 2.0, 3.0, 0.0, 1.0, 0.0, 1.0, 2.0, 1.0]);
        assert_eq!(rising_steps(six.tail(10)), 6);
        assert!(detect_rising_pattern(&six, &config));

        // 5 rises: one rise turned into a tie
        let five = history_of(&[0.0, 1.0, 2.0, 3.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0]);
        assert_eq!(rising_steps(five.tail(10)), 5);
        assert!(!detect_rising_pattern(&five, &config));
    }

    #[test]
    fn test_only_newest_window_is_inspected() {
        let config = TrendConfig::default();
        let mut values: Vec<f64> = (0..10).map(f64::from).collect();
        values.extend((0..10).rev().map(f64::from));
        let h = history_of(&values);
        assert!(!detect_rising_pattern(&h, &config));
    }
}
