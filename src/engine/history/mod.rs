//! Bounded history of raw readings.

mod ring_buffer;

pub use ring_buffer::RingBuffer;

use super::params::HISTORY_CAPACITY;

/// The most recent raw (pre-enhancement) readings, oldest first.
pub type ReadingHistory = RingBuffer<f64, HISTORY_CAPACITY>;
