//! Sensor Readings
//!
//! A [`Reading`] is one sensor's report at one instant: which sensor,
//! when, and a sparse [`Quality`] map of pollutant concentrations. A faulty
//! or partial sensor legitimately omits pollutants; the aggregation engine
//! skips absent entries without distorting the statistics of the pollutants
//! that are present.
//!
//! Readings are immutable once constructed: the builder-style [`Reading::with`]
//! calls happen before the value is handed to a store or the engine, and
//! nothing mutates it afterwards.
//!
//! ## Memory Model
//!
//! Sensor identifiers are stored inline (no heap) so a `Reading` is a flat
//! `Copy`-free but fixed-size value suitable for `no_std` collections.

use crate::errors::{ReadingError, ReadingResult};
use crate::pollutant::Pollutant;
use crate::time::{TimeSource, Timestamp};

/// Maximum length for inline sensor identifiers, in bytes
pub const MAX_SENSOR_ID: usize = 15;

/// Inline sensor identifier
///
/// Avoids heap allocation for common identifier lengths; longer identifiers
/// are rejected at construction.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SensorId {
    len: u8,
    data: [u8; MAX_SENSOR_ID],
}

impl SensorId {
    /// Create from a string slice
    pub fn new(id: &str) -> ReadingResult<Self> {
        let bytes = id.as_bytes();
        if bytes.len() > MAX_SENSOR_ID {
            return Err(ReadingError::SensorIdTooLong { len: bytes.len(), max: MAX_SENSOR_ID });
        }

        let mut data = [0u8; MAX_SENSOR_ID];
        data[..bytes.len()].copy_from_slice(bytes);

        Ok(Self { len: bytes.len() as u8, data })
    }

    /// Get as string slice
    pub fn as_str(&self) -> &str {
        // Only valid UTF-8 enters through new(), on char boundaries
        core::str::from_utf8(&self.data[..self.len as usize]).unwrap_or("")
    }
}

impl core::fmt::Debug for SensorId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}

impl core::fmt::Display for SensorId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<str> for SensorId {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for SensorId {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SensorId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SensorId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IdVisitor;

        impl serde::de::Visitor<'_> for IdVisitor {
            type Value = SensorId;

            fn expecting(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                write!(f, "a sensor id of at most {} bytes", MAX_SENSOR_ID)
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<SensorId, E> {
                SensorId::new(v).map_err(|_| E::invalid_length(v.len(), &self))
            }
        }

        deserializer.deserialize_str(IdVisitor)
    }
}

/// Sparse per-pollutant concentration map
///
/// A fixed struct over the closed pollutant enumeration; absent entries mean
/// the sensor did not report that pollutant, never that it reported zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quality {
    /// Ozone concentration, ppm
    #[cfg_attr(
        feature = "serde",
        serde(rename = "O3", default, skip_serializing_if = "Option::is_none")
    )]
    pub o3: Option<f64>,

    /// Carbon monoxide concentration, ppm
    #[cfg_attr(
        feature = "serde",
        serde(rename = "CO", default, skip_serializing_if = "Option::is_none")
    )]
    pub co: Option<f64>,

    /// Sulfur dioxide concentration, ppb
    #[cfg_attr(
        feature = "serde",
        serde(rename = "SO2", default, skip_serializing_if = "Option::is_none")
    )]
    pub so2: Option<f64>,

    /// Nitrogen dioxide concentration, ppb
    #[cfg_attr(
        feature = "serde",
        serde(rename = "NO2", default, skip_serializing_if = "Option::is_none")
    )]
    pub no2: Option<f64>,
}

impl Quality {
    /// Get the reported concentration for a pollutant, if present
    pub const fn get(&self, pollutant: Pollutant) -> Option<f64> {
        match pollutant {
            Pollutant::O3 => self.o3,
            Pollutant::CO => self.co,
            Pollutant::SO2 => self.so2,
            Pollutant::NO2 => self.no2,
        }
    }

    /// Set the concentration for a pollutant
    pub fn set(&mut self, pollutant: Pollutant, value: f64) {
        match pollutant {
            Pollutant::O3 => self.o3 = Some(value),
            Pollutant::CO => self.co = Some(value),
            Pollutant::SO2 => self.so2 = Some(value),
            Pollutant::NO2 => self.no2 = Some(value),
        }
    }

    /// Check whether no pollutant was reported at all
    pub const fn is_empty(&self) -> bool {
        self.o3.is_none() && self.co.is_none() && self.so2.is_none() && self.no2.is_none()
    }
}

/// One sensor report: identifier, instant, and sparse quality map
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Reading {
    sensor_id: SensorId,
    timestamp: Timestamp,
    quality: Quality,
}

impl Reading {
    /// Create an empty reading for a sensor at a given instant
    pub fn new(sensor_id: SensorId, timestamp: Timestamp) -> Self {
        Self { sensor_id, timestamp, quality: Quality::default() }
    }

    /// Create an empty reading stamped from a time source
    pub fn stamped(sensor_id: SensorId, clock: &dyn TimeSource) -> Self {
        Self::new(sensor_id, clock.now())
    }

    /// Add a pollutant concentration (builder style, construction only)
    #[must_use]
    pub fn with(mut self, pollutant: Pollutant, value: f64) -> Self {
        self.quality.set(pollutant, value);
        self
    }

    /// The reporting sensor's identifier
    pub fn sensor_id(&self) -> &SensorId {
        &self.sensor_id
    }

    /// When the reading was taken, in milliseconds since epoch
    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// The reported concentrations
    pub fn quality(&self) -> &Quality {
        &self.quality
    }
}
