//! Definition of a timestamped sensor observation.

use std::time::SystemTime;

/// A single observation produced by a sensor.
///
/// The ring buffer is agnostic to the payload, any `T` can be stored. Once
/// constructed a reading cannot be modified, only taken apart.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reading<T> {
    timestamp: SystemTime,
    value: T,
}

impl<T> Reading<T> {
    /// Create a new reading.
    ///
    /// # Arguments
    ///
    /// * `timestamp` - Point in time the observation was produced.
    /// * `value` - Payload of the observation.
    pub fn new(timestamp: SystemTime, value: T) -> Self {
        Self { timestamp, value }
    }

    /// Create a new reading stamped with the current system time.
    ///
    /// # Arguments
    ///
    /// * `value` - Payload of the observation.
    pub fn now(value: T) -> Self {
        Self::new(SystemTime::now(), value)
    }

    /// Point in time the observation was produced.
    pub fn timestamp(&self) -> SystemTime {
        self.timestamp
    }

    /// Payload of the observation.
    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }

    pub fn into_parts(self) -> (SystemTime, T) {
        (self.timestamp, self.value)
    }
}
