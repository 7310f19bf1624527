//! # Sensor Ring
//!
//! Sensor Ring provides a fixed size ring buffer that retains the most recent readings
//! from a sensor and hands them out in batches.
//!
//! ## Reading
//!
//! A [`Reading`] is a timestamped payload. The ring buffer does not care about the type of
//! payload, it only moves readings in and out.
//!
//! ## SensorRing
//!
//! A [`SensorRing`] holds at most `capacity` un-drained readings. Inserting into a full ring
//! overwrites the oldest un-drained reading. [`SensorRing::drain`] returns everything inserted
//! since the previous drain, oldest first, and every reading is returned at most once.
//!
//! ```
//! use sensor_ring::{Reading, SensorRing};
//!
//! let mut ring = SensorRing::new(3)?;
//! for value in ["a", "b", "c", "d"] {
//!     ring.insert(Reading::now(value));
//! }
//!
//! let drained: Vec<_> = ring.drain().into_iter().map(Reading::into_value).collect();
//! assert_eq!(drained, ["b", "c", "d"]);
//! assert!(ring.drain().is_empty());
//! # Ok::<(), sensor_ring::RingError>(())
//! ```
//!
//! ### Features
//!
//! * `serde` - Derives `Serialize` and `Deserialize` for [`Reading`].

#[cfg(test)]
pub(crate) mod oracle;
pub(crate) mod reading;
pub(crate) mod ring;

// Externally exposed types.
pub use reading::Reading;
pub use ring::{RingError, SensorRing};
