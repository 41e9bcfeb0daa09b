//! Integration tests for the aggregation engine
//!
//! Exercises the complete flow from reading construction through validation,
//! storage, and summary generation, including the decimal-safe arithmetic
//! the running totals depend on.

use aerosense_core::{
    arith, summarize, Extreme, Pollutant, PollutantTable, Reading, ReadingError, ReadingStore,
    SensorId, Unit, Value,
};

use proptest::prelude::*;

fn reading(sensor: &str, timestamp: u64) -> Reading {
    Reading::new(SensorId::new(sensor).unwrap(), timestamp)
}

#[test]
fn sparse_readings_do_not_distort_statistics() {
    // Two O3 readings plus one reading omitting O3 entirely: the omitting
    // reading must not affect O3 but still counts for what it does provide.
    let table = PollutantTable::default();
    let readings = [
        reading("s1", 1000).with(Pollutant::O3, 0.2),
        reading("s1", 2000).with(Pollutant::O3, 0.6),
        reading("s1", 3000).with(Pollutant::CO, 4.5),
    ];

    let summary = summarize(&readings, &table, None);

    let o3 = summary.get(Pollutant::O3);
    assert_eq!(o3.minimum, Some(Extreme { timestamp: 1000, value: 0.2 }));
    assert_eq!(o3.maximum, Some(Extreme { timestamp: 2000, value: 0.6 }));
    assert_eq!(o3.average, Some(0.4));

    let co = summary.get(Pollutant::CO);
    assert_eq!(co.average, Some(4.5));
    assert_eq!(co.minimum.unwrap().timestamp, 3000);
}

#[test]
fn boundary_reading_aggregates_alone() {
    // A single NO2 reading at the declared upper bound.
    let table = PollutantTable::default();
    let readings = [reading("s1", 1000).with(Pollutant::NO2, 2049.0)];

    let summary = summarize(&readings, &table, None);
    let no2 = summary.get(Pollutant::NO2);

    assert_eq!(no2.minimum.unwrap().value, 2049.0);
    assert_eq!(no2.maximum.unwrap().value, 2049.0);
    assert_eq!(no2.average, Some(2049.0));
}

#[test]
fn unmatched_filter_yields_units_only() {
    let table = PollutantTable::default();
    let readings = [
        reading("s1", 1000).with(Pollutant::O3, 0.2),
        reading("s2", 2000).with(Pollutant::NO2, 35.0),
    ];

    let summary = summarize(&readings, &table, Some("s3"));

    for pollutant in Pollutant::ALL {
        let stat = summary.get(pollutant);
        assert_eq!(stat.minimum, None);
        assert_eq!(stat.maximum, None);
        assert_eq!(stat.average, None);
    }
    assert_eq!(summary.get(Pollutant::O3).units, Unit::Ppm);
    assert_eq!(summary.get(Pollutant::SO2).units, Unit::Ppb);
}

#[test]
fn store_validates_before_aggregating() {
    let mut store = ReadingStore::new();

    store.append(reading("s1", 1000).with(Pollutant::O3, 0.2)).unwrap();
    store.append(reading("s2", 2000).with(Pollutant::O3, 0.6)).unwrap();

    // Out of range: rejected without disturbing stored data.
    let err = store.append(reading("s3", 3000).with(Pollutant::O3, 0.7)).unwrap_err();
    assert!(matches!(err, ReadingError::OutOfRange { pollutant: Pollutant::O3, .. }));
    assert_eq!(store.len(), 2);

    let all = store.summarize(None);
    assert_eq!(all.get(Pollutant::O3).average, Some(0.4));

    let s1_only = store.summarize(Some("s1"));
    assert_eq!(s1_only.get(Pollutant::O3).average, Some(0.2));
    assert_eq!(s1_only.get(Pollutant::O3).maximum.unwrap().timestamp, 1000);
}

#[test]
fn long_decimal_folds_stay_exact() {
    // 0.1 summed ten times drifts to 0.9999999999999999 in naive binary
    // arithmetic; through the kernel it is exactly 1.0.
    let table = PollutantTable::default();
    let readings: Vec<Reading> = (0u64..10)
        .map(|i| reading("s1", i).with(Pollutant::O3, 0.1))
        .collect();

    let summary = summarize(&readings, &table, None);
    assert_eq!(summary.get(Pollutant::O3).average, Some(0.1));

    let values: Vec<Value> = core::iter::repeat(Value::Float(0.1)).take(10).collect();
    assert_eq!(arith::add(&values), 1.0);
}

proptest! {
    /// For any pollutant with at least one observation, the average lies
    /// between the extremes. One-fractional-digit values keep the kernel
    /// exact, so the comparison needs no tolerance.
    #[test]
    fn average_lies_between_extremes(tenths in prop::collection::vec(0i64..=6040, 1..40)) {
        let table = PollutantTable::default();
        let readings: Vec<Reading> = tenths
            .iter()
            .enumerate()
            .map(|(i, &m)| reading("s1", i as u64).with(Pollutant::SO2, m as f64 / 10.0))
            .collect();

        let summary = summarize(&readings, &table, None);
        let so2 = summary.get(Pollutant::SO2);

        let minimum = so2.minimum.unwrap().value;
        let maximum = so2.maximum.unwrap().value;
        let average = so2.average.unwrap();

        prop_assert!(minimum <= average);
        prop_assert!(average <= maximum);
    }

    /// Filtering never invents data: a summary over a single sensor's
    /// readings matches a summary of the pre-filtered collection.
    #[test]
    fn filter_matches_manual_partition(
        values in prop::collection::vec((0i64..=6040, prop::bool::ANY), 1..30),
    ) {
        let table = PollutantTable::default();
        let readings: Vec<Reading> = values
            .iter()
            .enumerate()
            .map(|(i, &(m, first))| {
                let sensor = if first { "s1" } else { "s2" };
                reading(sensor, i as u64).with(Pollutant::NO2, m as f64 / 10.0)
            })
            .collect();

        let filtered = summarize(&readings, &table, Some("s1"));

        let partition: Vec<Reading> = readings
            .iter()
            .filter(|r| r.sensor_id() == &SensorId::new("s1").unwrap())
            .cloned()
            .collect();
        let manual = summarize(&partition, &table, None);

        prop_assert_eq!(filtered, manual);
    }
}
