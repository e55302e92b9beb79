//! Terminal rendering for the EMF meter.

pub mod render;
pub mod trace;

pub use render::{draw_ui, level_color};
pub use trace::compute_trace_grid;

use crate::engine::ActivityEvent;

/// Formats an elapsed time as `MM:SS`, or `HH:MM:SS` from one hour on.
#[must_use]
pub fn format_elapsed(ms: u64) -> String {
    let total = ms / 1_000;
    let (hours, minutes, secs) = (total / 3_600, (total % 3_600) / 60, total % 60);
    if hours > 0 {
        format!("{hours:02}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes:02}:{secs:02}")
    }
}

/// Snapshot of everything the meter screen shows.
#[derive(Clone, Debug, Default)]
pub struct MeterView {
    pub level: f64,
    pub score: f64,
    pub temperature: f64,
    pub elapsed_ms: u64,
    pub pattern: bool,
    /// Pre-formatted log lines, newest first
    pub events: Vec<String>,
}

impl MeterView {
    #[must_use]
    pub fn hud_line(&self) -> String {
        format!(
            "Time: {} | EMF: {:.0}% | Temp: {:.1}°C | Score: {:.0} | Trend: {} | q: quit",
            format_elapsed(self.elapsed_ms),
            self.level,
            self.temperature,
            self.score,
            if self.pattern { "RISING" } else { "-" },
        )
    }

    /// Formats an event relative to the session start.
    #[must_use]
    pub fn event_line(event: &ActivityEvent, started_at_ms: u64) -> String {
        format!(
            "[{}] EMF {:>3.0}% {}",
            format_elapsed(event.timestamp_ms.saturating_sub(started_at_ms)),
            event.level,
            event.description
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(0), "00:00");
        assert_eq!(format_elapsed(65_999), "01:05");
        assert_eq!(format_elapsed(3_600_000), "01:00:00");
        assert_eq!(format_elapsed(3_725_000), "01:02:05");
    }
}
