//! Definition of a draining ring buffer.

use crate::Reading;
use std::num::NonZeroUsize;
use thiserror::Error;

/// Different types of error that can happen when a [`SensorRing`] is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RingError {
    #[error("Ring capacity must be > 0, got: {0}")]
    InvalidCapacity(usize),
}

/// A fixed size ring buffer of [`Reading`]s that is drained in batches.
///
/// Works pretty much like any other overwriting ring buffer, few differences:
/// * Readings are consumed by [`SensorRing::drain`], each one is returned at most once.
/// * A drain returns everything inserted since the previous drain, oldest first.
/// * When more than `capacity` readings are inserted between drains, the oldest
///   un-drained reading is overwritten.
#[derive(Debug, Clone)]
pub struct SensorRing<T> {
    // Fixed length storage, an empty slot was never written or was already drained.
    slots: Box<[Option<Reading<T>>]>,

    // Index of the most recently written slot.
    // None until the very first insert.
    write_cursor: Option<usize>,

    // Index of the next slot to drain.
    read_cursor: usize,

    // Number of non-empty slots.
    pending: usize,

    // Number of un-drained readings lost to overwrites.
    evicted: u64,
}

impl<T> SensorRing<T> {
    /// Create a new ring buffer.
    ///
    /// All slots are allocated during initialization. It is guaranteed that no
    /// slot allocations happen after initialization.
    ///
    /// # Errors
    ///
    /// * [`RingError::InvalidCapacity`] if capacity is 0.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Maximum number of un-drained readings this ring buffer can hold.
    pub fn new(capacity: usize) -> Result<Self, RingError> {
        let capacity =
            NonZeroUsize::new(capacity).ok_or(RingError::InvalidCapacity(capacity))?;
        Ok(Self::with_capacity(capacity))
    }

    /// Create a new ring buffer from a capacity known to be valid.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Maximum number of un-drained readings this ring buffer can hold.
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        let slots = std::iter::repeat_with(|| None)
            .take(capacity.get())
            .collect();

        Self {
            slots,
            write_cursor: None,
            read_cursor: 0,
            pending: 0,
            evicted: 0,
        }
    }

    /// Maximum number of un-drained readings this ring buffer can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of readings the next drain will return.
    #[inline]
    pub fn len(&self) -> usize {
        self.pending
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pending == 0
    }

    /// True if the next insert will overwrite an un-drained reading.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.pending == self.capacity()
    }

    /// Total number of un-drained readings lost to overwrites so far.
    #[inline]
    pub fn evicted(&self) -> u64 {
        self.evicted
    }

    /// Insert a new reading into the ring buffer.
    ///
    /// If the ring buffer is full, the oldest un-drained reading is overwritten
    /// and returned. Ignoring the return value keeps plain overwrite-oldest
    /// semantics.
    ///
    /// # Arguments
    ///
    /// * `reading` - Reading to insert.
    pub fn insert(&mut self, reading: Reading<T>) -> Option<Reading<T>> {
        let capacity = self.capacity();

        // Advance to the slot after the previous write, first write goes to 0.
        let cursor = match self.write_cursor {
            Some(cursor) => (cursor + 1) % capacity,
            None => 0,
        };
        self.write_cursor = Some(cursor);

        // Slot under the read cursor is about to be overwritten.
        // Next drain has to start from the slot after it.
        if self.read_cursor == cursor {
            self.read_cursor = (self.read_cursor + 1) % capacity;
        }

        // Drained slots are always empty, so anything replaced here was never drained.
        let evicted = self.slots[cursor].replace(reading);
        match evicted {
            Some(_) => {
                self.evicted += 1;
                tracing::trace!(
                    slot = cursor,
                    evicted = self.evicted,
                    "overwrote un-drained reading"
                );
            }
            None => self.pending += 1,
        }

        evicted
    }

    /// Take every reading inserted since the previous drain, oldest first.
    ///
    /// Returns an empty Vec if nothing was inserted since the previous drain.
    pub fn drain(&mut self) -> Vec<Reading<T>> {
        let mut buf = Vec::with_capacity(self.pending);
        self.drain_into(&mut buf);
        buf
    }

    /// Take every reading inserted since the previous drain into a buffer, oldest first.
    ///
    /// * buf is cleared of any existing readings to make space for the drained readings.
    /// * Lets callers reuse a single allocation across drains.
    /// * Read cursor is left on the last written slot, not one past it.
    ///
    /// # Arguments
    ///
    /// * `buf` - Buffer to move drained readings into.
    pub fn drain_into(&mut self, buf: &mut Vec<Reading<T>>) {
        // Clear readings to make space for this drain.
        buf.clear();

        // Nothing was ever written.
        let Some(write_cursor) = self.write_cursor else {
            return;
        };

        // Walk from the read cursor up to and including the last write.
        // Empty slots on the way are skipped.
        loop {
            if let Some(reading) = self.slots[self.read_cursor].take() {
                buf.push(reading);
                self.pending -= 1;
            }

            // Cursor is parked on the last write, which is now empty.
            if self.read_cursor == write_cursor {
                break;
            }

            self.read_cursor = (self.read_cursor + 1) % self.capacity();
        }

        tracing::trace!(drained = buf.len(), "drained readings");
    }

    /// An iterator over the readings the next drain will return, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Reading<T>> {
        let capacity = self.capacity();

        // Same walk as drain, from read cursor to write cursor inclusive.
        let steps = match self.write_cursor {
            Some(write_cursor) => (write_cursor + capacity - self.read_cursor) % capacity + 1,
            None => 0,
        };

        (0..steps).filter_map(move |step| {
            let index = (self.read_cursor + step) % capacity;
            self.slots[index].as_ref()
        })
    }
}
