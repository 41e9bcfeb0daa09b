//! In-Memory Reading Store
//!
//! Append-only collection of validated readings, queried as a whole on each
//! summary request. This is the in-process boundary a serving layer calls;
//! durable persistence stays external.
//!
//! The store owns the [`PollutantTable`] it validates against and hands the
//! same table to the aggregation engine, so ingestion limits and summary
//! unit labels can never drift apart.
//!
//! ## Consistency
//!
//! [`ReadingStore::snapshot`] copies the collection so a caller can fold it
//! while new readings keep arriving elsewhere. Through `&self` the borrow
//! checker already guarantees a consistent view, which is why
//! [`ReadingStore::summarize`] folds the live collection directly.

use crate::errors::ReadingResult;
use crate::pollutant::PollutantTable;
use crate::reading::Reading;
use crate::summary::{self, Summary};
use crate::validate::validate_reading;

/// Append-only in-memory store of validated readings
#[derive(Debug, Clone, Default)]
pub struct ReadingStore {
    table: PollutantTable,
    readings: Vec<Reading>,
}

impl ReadingStore {
    /// Create an empty store with the default pollutant table
    pub fn new() -> Self {
        Self::with_table(PollutantTable::default())
    }

    /// Create an empty store validating against a custom table
    pub fn with_table(table: PollutantTable) -> Self {
        Self { table, readings: Vec::new() }
    }

    /// Validate and append a reading
    ///
    /// Rejected readings leave the store untouched.
    pub fn append(&mut self, reading: Reading) -> ReadingResult<()> {
        if let Err(err) = validate_reading(&reading, &self.table) {
            log::warn!("rejected reading from {}: {}", reading.sensor_id(), err);
            return Err(err);
        }

        log::debug!(
            "stored reading from {} at {}",
            reading.sensor_id(),
            reading.timestamp()
        );
        self.readings.push(reading);
        Ok(())
    }

    /// Number of stored readings
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// Check whether the store holds no readings
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// The table readings are validated against
    pub fn table(&self) -> &PollutantTable {
        &self.table
    }

    /// Consistent copy of the whole collection
    pub fn snapshot(&self) -> Vec<Reading> {
        self.readings.clone()
    }

    /// Summarize the stored readings, optionally filtered by sensor
    pub fn summarize(&self, sensor: Option<&str>) -> Summary {
        summary::summarize(&self.readings, &self.table, sensor)
    }
}
