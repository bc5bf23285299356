//! Trip records and the in-memory table the reports read from

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

use crate::core::filter::{DayFilter, MonthFilter};

/// One row of a city's trip extract
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TripRecord {
    pub(crate) start_time: NaiveDateTime,
    pub(crate) start_station: Option<String>,
    pub(crate) end_station: Option<String>,
    /// Seconds; some extracts store fractional values. `None` for a blank cell.
    pub(crate) trip_duration: Option<f64>,
    pub(crate) user_type: Option<String>,
    pub(crate) gender: Option<String>,
    pub(crate) birth_year: Option<i32>,
}

impl TripRecord {
    /// Calendar month (1-12) of the trip start
    pub(crate) fn month(&self) -> u32 {
        self.start_time.month()
    }

    pub(crate) fn day_of_week(&self) -> Weekday {
        self.start_time.weekday()
    }

    pub(crate) fn hour(&self) -> u32 {
        self.start_time.hour()
    }
}

/// Optional columns present in the source file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Columns {
    pub(crate) has_gender: bool,
    pub(crate) has_birth_year: bool,
}

/// Ordered trip rows for one query
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct TripTable {
    records: Vec<TripRecord>,
    columns: Columns,
}

impl TripTable {
    pub(crate) fn new(records: Vec<TripRecord>, columns: Columns) -> Self {
        Self { records, columns }
    }

    pub(crate) fn records(&self) -> &[TripRecord] {
        &self.records
    }

    pub(crate) fn columns(&self) -> Columns {
        self.columns
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Keep rows matching both filters (consumes the table to avoid cloning rows).
    /// Row order and column flags are preserved.
    pub(crate) fn filtered(self, month: MonthFilter, day: DayFilter) -> Self {
        if month == MonthFilter::All && day == DayFilter::All {
            return self;
        }
        let records = self
            .records
            .into_iter()
            .filter(|r| month.matches(r.month()) && day.matches(r.day_of_week()))
            .collect();
        Self {
            records,
            columns: self.columns,
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::utils::parse_timestamp;

    /// Build a record with the fields most tests care about
    pub(crate) fn trip(start: &str, from: &str, to: &str, duration: f64) -> TripRecord {
        TripRecord {
            start_time: parse_timestamp(start).unwrap(),
            start_station: Some(from.to_string()),
            end_station: Some(to.to_string()),
            trip_duration: Some(duration),
            user_type: Some("Subscriber".to_string()),
            gender: None,
            birth_year: None,
        }
    }

    pub(crate) fn table(records: Vec<TripRecord>) -> TripTable {
        TripTable::new(records, Columns::default())
    }
}
