use rayon::prelude::*;

use crate::engine::params::{LEVEL_MAX, LEVEL_MIN};

/// Partial fill glyphs, emptiest first; `#` marks a fully covered cell.
const CHARS: [char; 7] = [' ', '.', ':', '-', '=', '+', '*'];
const FULL: char = '#';

/// Renders `readings` as a column chart, newest reading in the right-most
/// column. Each row covers an equal slice of `[0, 100]`, top row highest.
#[must_use]
pub fn compute_trace_grid(readings: &[f64], rows: usize, cols: usize) -> Vec<String> {
    if rows == 0 || cols == 0 {
        return Vec::new();
    }

    let visible = &readings[readings.len().saturating_sub(cols)..];
    let offset = cols - visible.len();
    let band = (LEVEL_MAX - LEVEL_MIN) / rows as f64;

    (0..rows)
        .into_par_iter()
        .map(|r| {
            let floor = LEVEL_MIN + (rows - 1 - r) as f64 * band;
            let mut line = String::with_capacity(cols);
            for c in 0..cols {
                let Some(&v) = c.checked_sub(offset).and_then(|i| visible.get(i)) else {
                    line.push(' ');
                    continue;
                };
                let fill = ((v.clamp(LEVEL_MIN, LEVEL_MAX) - floor) / band).clamp(0.0, 1.0);
                if fill >= 1.0 {
                    line.push(FULL);
                } else {
                    let idx = (fill * (CHARS.len() - 1) as f64).round() as usize;
                    line.push(CHARS[idx.min(CHARS.len() - 1)]);
                }
            }
            line
        })
        .collect()
}
