// Daily view construction - the day-selection use case's pure core
use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::measurement::{MeasurementRecord, MeasurementSeries};

/// One merged row of the day table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyRecord {
    pub timestamp: NaiveDateTime,
    pub pm25: f64,
    pub humidity: f64,
    pub temperature: f64,
}

/// How the three per-day subsequences are joined into rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MergeStrategy {
    /// Row i of each filtered series is assumed to describe the same instant,
    /// as in the source dashboard. A day with a gap in one series silently
    /// pairs rows from different times.
    #[default]
    Positional,
    /// Rows are joined on exact timestamp equality across all three series;
    /// an instant missing from any series is dropped.
    ByTimestamp,
}

/// Filter the three series to one calendar day and merge them into display
/// rows. Pure function; a day with no data yields an empty vector.
pub fn build_daily_view(
    pm25: &MeasurementSeries,
    humidity: &MeasurementSeries,
    temperature: &MeasurementSeries,
    date: NaiveDate,
    strategy: MergeStrategy,
) -> Vec<DailyRecord> {
    let pm25_day = pm25.for_day(date);
    let humidity_day = humidity.for_day(date);
    let temperature_day = temperature.for_day(date);

    match strategy {
        MergeStrategy::Positional => {
            merge_positional(&pm25_day, &humidity_day, &temperature_day)
        }
        MergeStrategy::ByTimestamp => {
            merge_by_timestamp(&pm25_day, &humidity_day, &temperature_day)
        }
    }
}

/// Zip by index, bounded by the shortest subsequence. Timestamps come from
/// the PM2.5 rows.
fn merge_positional(
    pm25: &[MeasurementRecord],
    humidity: &[MeasurementRecord],
    temperature: &[MeasurementRecord],
) -> Vec<DailyRecord> {
    let len = pm25.len().min(humidity.len()).min(temperature.len());
    (0..len)
        .map(|i| DailyRecord {
            timestamp: pm25[i].timestamp,
            pm25: pm25[i].value,
            humidity: humidity[i].value,
            temperature: temperature[i].value,
        })
        .collect()
}

/// Join on exact timestamps, keeping PM2.5 row order.
fn merge_by_timestamp(
    pm25: &[MeasurementRecord],
    humidity: &[MeasurementRecord],
    temperature: &[MeasurementRecord],
) -> Vec<DailyRecord> {
    let humidity_at: HashMap<NaiveDateTime, f64> =
        humidity.iter().map(|r| (r.timestamp, r.value)).collect();
    let temperature_at: HashMap<NaiveDateTime, f64> =
        temperature.iter().map(|r| (r.timestamp, r.value)).collect();

    pm25.iter()
        .filter_map(|r| {
            let humidity = *humidity_at.get(&r.timestamp)?;
            let temperature = *temperature_at.get(&r.timestamp)?;
            Some(DailyRecord {
                timestamp: r.timestamp,
                pm25: r.value,
                humidity,
                temperature,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn hourly(date: NaiveDate, hours: impl IntoIterator<Item = u32>, scale: f64) -> MeasurementSeries {
        let records = hours
            .into_iter()
            .map(|h| {
                MeasurementRecord::new(date.and_hms_opt(h, 0, 0).unwrap(), h as f64 * scale)
            })
            .collect();
        MeasurementSeries::new(records)
    }

    #[test]
    fn equal_day_counts_merge_row_for_row() {
        let pm25 = hourly(day(), 0..24, 1.0);
        let humidity = hourly(day(), 0..24, 2.0);
        let temperature = hourly(day(), 0..24, 3.0);

        let view = build_daily_view(&pm25, &humidity, &temperature, day(), MergeStrategy::Positional);

        assert_eq!(view.len(), 24);
        for (i, record) in view.iter().enumerate() {
            assert_eq!(record.timestamp.hour() as usize, i);
            assert_eq!(record.pm25, i as f64);
            assert_eq!(record.humidity, i as f64 * 2.0);
            assert_eq!(record.temperature, i as f64 * 3.0);
        }
    }

    #[test]
    fn absent_date_yields_an_empty_view_not_an_error() {
        let pm25 = hourly(day(), 0..24, 1.0);
        let humidity = hourly(day(), 0..24, 1.0);
        let temperature = hourly(day(), 0..24, 1.0);

        let missing = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let view = build_daily_view(&pm25, &humidity, &temperature, missing, MergeStrategy::Positional);
        assert!(view.is_empty());
    }

    #[test]
    fn other_days_do_not_leak_into_the_view() {
        let next = day().succ_opt().unwrap();
        let mut pm25 = hourly(day(), 0..3, 1.0);
        pm25.records.extend(hourly(next, 0..3, 10.0).records);
        let humidity = hourly(day(), 0..3, 1.0);
        let temperature = hourly(day(), 0..3, 1.0);

        let view = build_daily_view(&pm25, &humidity, &temperature, day(), MergeStrategy::Positional);
        assert_eq!(view.len(), 3);
        assert!(view.iter().all(|r| r.timestamp.date() == day()));
    }

    // series_humidity misses its 09:00 sample; the other two have 24 rows.
    fn gap_fixture() -> (MeasurementSeries, MeasurementSeries, MeasurementSeries) {
        let pm25 = hourly(day(), 0..24, 1.0);
        let humidity = hourly(day(), (0..24).filter(|h| *h != 9), 1.0);
        let temperature = hourly(day(), 0..24, 2.0);
        (pm25, humidity, temperature)
    }

    #[test]
    fn positional_merge_is_bounded_by_the_shortest_day_and_shifts_pairs() {
        let (pm25, humidity, temperature) = gap_fixture();

        let view = build_daily_view(&pm25, &humidity, &temperature, day(), MergeStrategy::Positional);

        assert_eq!(view.len(), 23);
        // From index 9 onward the humidity column is off by one hour: the
        // 09:00 row carries the 10:00 humidity sample.
        let shifted = &view[9];
        assert_eq!(shifted.timestamp.hour(), 9);
        assert_eq!(shifted.humidity, 10.0);
        assert_eq!(shifted.temperature, 18.0);
    }

    #[test]
    fn timestamp_merge_drops_the_missing_hour_and_pairs_correctly() {
        let (pm25, humidity, temperature) = gap_fixture();

        let view = build_daily_view(&pm25, &humidity, &temperature, day(), MergeStrategy::ByTimestamp);

        assert_eq!(view.len(), 23);
        assert!(view.iter().all(|r| r.timestamp.hour() != 9));
        assert!(view.iter().all(|r| r.humidity == r.timestamp.hour() as f64));
        assert!(view.iter().all(|r| r.temperature == r.timestamp.hour() as f64 * 2.0));
    }

    #[test]
    fn merge_strategy_deserializes_kebab_case() {
        let strategy: MergeStrategy = serde_json::from_str("\"by-timestamp\"").unwrap();
        assert_eq!(strategy, MergeStrategy::ByTimestamp);
        assert_eq!(MergeStrategy::default(), MergeStrategy::Positional);
    }
}
