//! Fixed-capacity FIFO window over recent readings.

/// A fixed-size circular buffer that evicts its oldest element when full.
///
/// Elements are addressed in arrival order: index 0 is the oldest entry,
/// `len() - 1` the newest.
#[derive(Debug, Clone)]
pub struct RingBuffer<T, const N: usize> {
    buffer: [T; N],
    head: usize,
    len: usize,
}

impl<T: Default + Copy, const N: usize> Default for RingBuffer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Default + Copy, const N: usize> RingBuffer<T, N> {
    /// Creates a new empty ring buffer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buffer: [T::default(); N],
            head: 0,
            len: 0,
        }
    }

    /// Appends `item`. When the buffer was already full, the oldest element
    /// is dropped and returned.
    pub fn push(&mut self, item: T) -> Option<T> {
        let evicted = (self.len == N).then(|| self.buffer[self.head]);
        self.buffer[self.head] = item;
        self.head = (self.head + 1) % N;
        if self.len < N {
            self.len += 1;
        }
        evicted
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Slot of the oldest element.
    const fn start(&self) -> usize {
        if self.len < N { 0 } else { self.head }
    }

    /// Gets an item by arrival index (0 = oldest).
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        (index < self.len).then(|| &self.buffer[(self.start() + index) % N])
    }

    /// Returns the most recently added item.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|i| self.get(i))
    }

    /// Iterates from oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator + '_ {
        let start = self.start();
        (0..self.len).map(move |i| &self.buffer[(start + i) % N])
    }

    /// Iterates over the newest `n` items (fewer if not yet filled), oldest first.
    pub fn tail(&self, n: usize) -> impl DoubleEndedIterator<Item = &T> + '_ {
        self.iter().skip(self.len.saturating_sub(n))
    }

    /// Copies the contents out in arrival order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().copied().collect()
    }

    pub fn clear(&mut self) {
        self.head = 0;
        self.len = 0;
    }
}
