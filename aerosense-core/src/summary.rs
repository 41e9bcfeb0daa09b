//! Streaming Aggregation Engine
//!
//! ## Overview
//!
//! Folds a sequence of readings into per-pollutant statistics: minimum and
//! maximum (each tagged with the timestamp it occurred at) and the running
//! average. Running totals go through [`crate::arith::add_pair`] so that
//! folding many decimal readings never accumulates binary representation
//! error — summing eight `0.1` readings yields exactly `0.8`, not
//! `0.7999999999999999`.
//!
//! ## Execution Model
//!
//! [`summarize`] is a full, stateless recomputation: accumulators are locals
//! allocated per call and nothing is carried between calls. Given a
//! consistent snapshot of the reading collection, the fold is a pure
//! function of it — concurrent summaries over independent snapshots need no
//! coordination. That is the whole concurrency story; there is no cached or
//! incremental aggregate to invalidate.
//!
//! ## Sparse Data
//!
//! A reading that omits a pollutant simply does not contribute to that
//! pollutant's statistics. A pollutant nobody reported comes back with all
//! statistics absent but its unit label still attached, so consumers can
//! always render a complete table.

use crate::arith;
use crate::pollutant::{Pollutant, PollutantDef, PollutantTable, Unit};
use crate::reading::Reading;
use crate::time::Timestamp;

/// An extreme value and the instant it was observed
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extreme {
    /// When the extreme was observed
    pub timestamp: Timestamp,
    /// The observed concentration
    pub value: f64,
}

/// Running statistics for one pollutant while folding
///
/// Built fresh per summarize call; never persisted.
#[derive(Debug, Clone, Copy)]
struct Accumulator {
    minimum: Option<Extreme>,
    maximum: Option<Extreme>,
    total: Option<f64>,
    count: u32,
}

impl Accumulator {
    const EMPTY: Self = Self { minimum: None, maximum: None, total: None, count: 0 };

    /// Fold one observed value into the statistics
    ///
    /// Strict comparisons: when several readings share the extreme value,
    /// the first one encountered keeps the timestamp.
    fn observe(&mut self, timestamp: Timestamp, value: f64) {
        self.count += 1;

        if self.minimum.map_or(true, |m| value < m.value) {
            self.minimum = Some(Extreme { timestamp, value });
        }

        if self.maximum.map_or(true, |m| value > m.value) {
            self.maximum = Some(Extreme { timestamp, value });
        }

        self.total = Some(match self.total {
            Some(total) => arith::add_pair(total, value),
            None => value,
        });
    }

    /// Finalize into the caller-facing summary for this pollutant
    fn finish(&self, def: &PollutantDef) -> PollutantSummary {
        let average = self.total.map(|total| arith::div_pair(total, self.count as f64));

        PollutantSummary {
            units: def.unit,
            minimum: self.minimum,
            maximum: self.maximum,
            average,
        }
    }
}

/// Statistics for one pollutant
///
/// With zero observed readings, `minimum`, `maximum`, and `average` are all
/// absent while `units` is still populated.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PollutantSummary {
    /// Unit label for this pollutant, always present
    pub units: Unit,
    /// Smallest observed value and when it occurred
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub minimum: Option<Extreme>,
    /// Largest observed value and when it occurred
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub maximum: Option<Extreme>,
    /// Decimal-safe running average
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub average: Option<f64>,
}

/// Per-pollutant statistics over a reading collection
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    /// Ozone statistics
    #[cfg_attr(feature = "serde", serde(rename = "O3"))]
    pub o3: PollutantSummary,
    /// Carbon monoxide statistics
    #[cfg_attr(feature = "serde", serde(rename = "CO"))]
    pub co: PollutantSummary,
    /// Sulfur dioxide statistics
    #[cfg_attr(feature = "serde", serde(rename = "SO2"))]
    pub so2: PollutantSummary,
    /// Nitrogen dioxide statistics
    #[cfg_attr(feature = "serde", serde(rename = "NO2"))]
    pub no2: PollutantSummary,
}

impl Summary {
    /// Get the statistics for a pollutant
    pub const fn get(&self, pollutant: Pollutant) -> &PollutantSummary {
        match pollutant {
            Pollutant::O3 => &self.o3,
            Pollutant::CO => &self.co,
            Pollutant::SO2 => &self.so2,
            Pollutant::NO2 => &self.no2,
        }
    }
}

/// Compute per-pollutant statistics over a reading collection
///
/// With `sensor` set, only readings whose identifier matches exactly are
/// folded; a filter matching nothing yields all-absent statistics with
/// units still populated. Iteration order decides tie-breaks (first extreme
/// wins) but nothing else.
pub fn summarize(readings: &[Reading], table: &PollutantTable, sensor: Option<&str>) -> Summary {
    let mut stats = [Accumulator::EMPTY; Pollutant::COUNT];

    for reading in readings {
        if let Some(id) = sensor {
            if reading.sensor_id().as_str() != id {
                continue;
            }
        }

        for pollutant in Pollutant::ALL {
            if let Some(value) = reading.quality().get(pollutant) {
                stats[pollutant.index()].observe(reading.timestamp(), value);
            }
        }
    }

    Summary {
        o3: stats[Pollutant::O3.index()].finish(table.def(Pollutant::O3)),
        co: stats[Pollutant::CO.index()].finish(table.def(Pollutant::CO)),
        so2: stats[Pollutant::SO2.index()].finish(table.def(Pollutant::SO2)),
        no2: stats[Pollutant::NO2.index()].finish(table.def(Pollutant::NO2)),
    }
}
