//! CSV loader: city file → parsed, filtered `TripTable`

use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Instant;
use tracing::debug;

use crate::core::{Columns, FilterSpec, TripRecord, TripTable};
use crate::error::AppError;
use crate::utils::parse_timestamp;

const START_TIME: &str = "Start Time";
const END_TIME: &str = "End Time";
const START_STATION: &str = "Start Station";
const END_STATION: &str = "End Station";
const TRIP_DURATION: &str = "Trip Duration";
const USER_TYPE: &str = "User Type";
const GENDER: &str = "Gender";
const BIRTH_YEAR: &str = "Birth Year";

/// Column positions resolved from the header row
#[derive(Debug)]
struct HeaderIndex {
    start_time: usize,
    start_station: usize,
    end_station: usize,
    trip_duration: usize,
    user_type: usize,
    gender: Option<usize>,
    birth_year: Option<usize>,
}

impl HeaderIndex {
    fn from_headers(headers: &StringRecord, source_name: &str) -> Result<Self, AppError> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let require = |column: &'static str| {
            find(column).ok_or_else(|| AppError::MissingColumn {
                column,
                source_name: source_name.to_string(),
            })
        };

        let start_time = require(START_TIME)?;
        // Checked for presence only; no report reads the end time
        require(END_TIME)?;

        Ok(Self {
            start_time,
            start_station: require(START_STATION)?,
            end_station: require(END_STATION)?,
            trip_duration: require(TRIP_DURATION)?,
            user_type: require(USER_TYPE)?,
            gender: find(GENDER),
            birth_year: find(BIRTH_YEAR),
        })
    }

    fn columns(&self) -> Columns {
        Columns {
            has_gender: self.gender.is_some(),
            has_birth_year: self.birth_year.is_some(),
        }
    }

    fn parse_row(
        &self,
        row: &StringRecord,
        line: usize,
        source_name: &str,
    ) -> Result<TripRecord, AppError> {
        let invalid = |column: &'static str, value: &str| AppError::InvalidValue {
            column,
            value: value.to_string(),
            line,
            source_name: source_name.to_string(),
        };

        let raw_start = field(row, self.start_time);
        let start_time = parse_timestamp(raw_start).ok_or_else(|| invalid(START_TIME, raw_start))?;

        let raw_duration = field(row, self.trip_duration);
        let trip_duration =
            parse_duration(raw_duration).map_err(|()| invalid(TRIP_DURATION, raw_duration))?;

        let birth_year = match self.birth_year {
            Some(i) => {
                let raw = field(row, i);
                parse_birth_year(raw).map_err(|()| invalid(BIRTH_YEAR, raw))?
            }
            None => None,
        };

        Ok(TripRecord {
            start_time,
            start_station: non_empty(field(row, self.start_station)),
            end_station: non_empty(field(row, self.end_station)),
            trip_duration,
            user_type: non_empty(field(row, self.user_type)),
            gender: self.gender.and_then(|i| non_empty(field(row, i))),
            birth_year,
        })
    }
}

fn field(row: &StringRecord, i: usize) -> &str {
    row.get(i).map(str::trim).unwrap_or("")
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

/// Empty means missing; anything else must be a finite number of seconds
fn parse_duration(raw: &str) -> Result<Option<f64>, ()> {
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.parse::<f64>() {
        Ok(d) if d.is_finite() => Ok(Some(d)),
        _ => Err(()),
    }
}

/// Empty means missing; "1992" and "1992.0" both read as 1992
fn parse_birth_year(raw: &str) -> Result<Option<i32>, ()> {
    if raw.is_empty() {
        return Ok(None);
    }
    let value: f64 = raw.parse().map_err(|_| ())?;
    if !value.is_finite() || value.fract() != 0.0 || value.abs() > f64::from(i32::MAX) {
        return Err(());
    }
    Ok(Some(value as i32))
}

/// Parse every row of a trip extract. A bad start time or a non-numeric duration aborts the load.
pub(crate) fn read_trips<R: Read>(reader: R, source_name: &str) -> Result<TripTable, AppError> {
    let malformed = |source: csv::Error| AppError::MalformedSource {
        source_name: source_name.to_string(),
        source,
    };

    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);
    let headers = rdr.headers().map_err(malformed)?.clone();
    let index = HeaderIndex::from_headers(&headers, source_name)?;

    let mut records = Vec::new();
    for (i, row) in rdr.records().enumerate() {
        let row = row.map_err(malformed)?;
        // Header occupies line 1
        records.push(index.parse_row(&row, i + 2, source_name)?);
    }

    Ok(TripTable::new(records, index.columns()))
}

/// Load a city's trips from `data_dir` and apply the month/day filters
pub(crate) fn load(data_dir: &Path, filter: &FilterSpec) -> Result<TripTable, AppError> {
    let load_start = Instant::now();
    let path = data_dir.join(filter.city.file_name());
    let source_name = path.display().to_string();

    let file = File::open(&path).map_err(|source| AppError::DataSource {
        source_name: source_name.clone(),
        source,
    })?;
    let table = read_trips(file, &source_name)?;
    let total = table.len();
    let table = table.filtered(filter.month, filter.day);

    debug!(
        path = %source_name,
        total,
        kept = table.len(),
        month = %filter.month,
        day = %filter.day,
        elapsed_ms = load_start.elapsed().as_secs_f64() * 1000.0,
        "loaded trips"
    );

    Ok(table)
}
