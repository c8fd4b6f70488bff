//! Sliding Window Implementation

use serde::{Deserialize, Serialize};

/// Fixed-capacity FIFO window over samples of type `T`.
///
/// Once the window is full, each push evicts the oldest sample. Storage is
/// pre-allocated at construction; a long-running session never grows it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlidingWindow<T> {
    /// Pre-allocated storage, used as a ring
    storage: Vec<T>,
    /// Capacity of the window
    capacity: usize,
    /// Index of the oldest sample
    start: usize,
    /// Number of samples currently held
    len: usize,
}

impl<T: Clone> SlidingWindow<T> {
    /// Create a window holding at most `capacity` samples.
    ///
    /// Panics if `capacity` is zero; a zero-capacity window cannot hold a
    /// sample and indicates a misconfigured caller.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "sliding window capacity must be non-zero");
        Self {
            storage: Vec::with_capacity(capacity),
            capacity,
            start: 0,
            len: 0,
        }
    }

    /// Push a sample, evicting the oldest if the window is full.
    pub fn push(&mut self, value: T) {
        if self.storage.len() < self.capacity {
            self.storage.push(value);
            self.len += 1;
        } else {
            let write = (self.start + self.len) % self.capacity;
            self.storage[write] = value;
            if self.len == self.capacity {
                self.start = (self.start + 1) % self.capacity;
            } else {
                self.len += 1;
            }
        }
    }

    /// Number of samples currently in the window
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the window holds no samples
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if the window is at capacity
    pub fn is_full(&self) -> bool {
        self.len == self.capacity
    }

    /// Window capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Most recent sample, if any
    pub fn latest(&self) -> Option<&T> {
        if self.len == 0 {
            return None;
        }
        let idx = (self.start + self.len - 1) % self.capacity;
        Some(&self.storage[idx])
    }

    /// Iterate samples oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        (0..self.len).map(move |i| &self.storage[(self.start + i) % self.capacity])
    }

    /// Copy the window contents into a Vec, oldest first
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// Drop all samples
    pub fn clear(&mut self) {
        self.storage.clear();
        self.start = 0;
        self.len = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_push_and_iterate() {
        let mut window = SlidingWindow::with_capacity(10);
        for i in 0..5 {
            window.push(i);
        }

        assert_eq!(window.len(), 5);
        let values: Vec<i32> = window.iter().copied().collect();
        assert_eq!(values, vec![0, 1, 2, 3, 4]);
        assert_eq!(window.latest(), Some(&4));
    }

    #[test]
    fn test_evicts_oldest_first() {
        let mut window = SlidingWindow::with_capacity(5);
        for i in 0..9 {
            window.push(i);
        }

        assert_eq!(window.len(), 5);
        assert!(window.is_full());
        assert_eq!(window.to_vec(), vec![4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_clear() {
        let mut window = SlidingWindow::with_capacity(3);
        window.push(1.0);
        window.push(2.0);
        window.clear();

        assert!(window.is_empty());
        assert_eq!(window.latest(), None);

        window.push(3.0);
        assert_eq!(window.to_vec(), vec![3.0]);
    }

    #[test]
    #[should_panic(expected = "non-zero")]
    fn test_zero_capacity_rejected() {
        let _ = SlidingWindow::<f64>::with_capacity(0);
    }

    proptest! {
        #[test]
        fn never_exceeds_capacity(capacity in 1usize..64, pushes in 0usize..256) {
            let mut window = SlidingWindow::with_capacity(capacity);
            for i in 0..pushes {
                window.push(i);
            }
            prop_assert!(window.len() <= capacity);
            prop_assert_eq!(window.len(), pushes.min(capacity));
        }

        #[test]
        fn keeps_most_recent_in_order(capacity in 1usize..32, pushes in 1usize..128) {
            let mut window = SlidingWindow::with_capacity(capacity);
            for i in 0..pushes {
                window.push(i);
            }
            let expected: Vec<usize> =
                (pushes.saturating_sub(capacity)..pushes).collect();
            prop_assert_eq!(window.to_vec(), expected);
        }
    }
}
