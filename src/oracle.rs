//! Reference implementation of a draining ring buffer using standard library primitives.

use std::collections::VecDeque;

/// A fixed size draining ring buffer backed by [`VecDeque`].
///
/// Observable behavior is identical to [`SensorRing`](crate::SensorRing), it just
/// pays for it with a pop on every overflowing insert. Useful as a model to test
/// against.
#[derive(Debug, Clone)]
pub struct Oracle<T> {
    capacity: usize,
    deque: VecDeque<T>,
}

impl<T> Oracle<T> {
    /// Create a new instance of this ring buffer.
    ///
    /// # Panic
    ///
    /// * Ring buffer must have at least one item.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Maximum number of un-drained items this ring buffer can hold.
    #[track_caller]
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "Capacity must be > 0");

        Self {
            capacity,
            deque: VecDeque::with_capacity(capacity),
        }
    }

    /// Insert an item, evicting and returning the oldest one if already full.
    ///
    /// # Arguments
    ///
    /// * `item` - Item to insert into this ring buffer.
    pub fn insert(&mut self, item: T) -> Option<T> {
        let evicted = if self.deque.len() == self.capacity {
            self.deque.pop_front()
        } else {
            None
        };

        self.deque.push_back(item);
        evicted
    }

    /// Take every item inserted since the previous drain, oldest first.
    pub fn drain(&mut self) -> Vec<T> {
        self.deque.drain(..).collect()
    }

    /// Number of items that the next drain will return.
    #[inline]
    pub fn len(&self) -> usize {
        self.deque.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.deque.is_empty()
    }

    /// An iterator over all the un-drained items, oldest first.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.deque.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evicts_oldest() {
        let mut oracle = Oracle::with_capacity(2);
        assert_eq!(oracle.insert(1), None);
        assert_eq!(oracle.insert(2), None);
        assert_eq!(oracle.insert(3), Some(1));
        assert_eq!(oracle.iter().copied().collect::<Vec<_>>(), vec![2, 3]);

        assert_eq!(oracle.drain(), vec![2, 3]);
        assert!(oracle.is_empty());
        assert_eq!(oracle.drain(), Vec::<i32>::new());
    }

    #[test]
    #[should_panic]
    fn zero_capacity_panic() {
        Oracle::<u64>::with_capacity(0);
    }
}
