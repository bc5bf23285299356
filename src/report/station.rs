use crate::core::{Counter, Mode, TripTable};
use crate::error::AppError;

/// Most popular stations and trip
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StationStats {
    pub(crate) start: Mode<String>,
    pub(crate) end: Mode<String>,
    /// (start station, end station) grouped jointly
    pub(crate) pair: Mode<(String, String)>,
}

/// Blank stations are skipped. Single-station ties go to the alphabetically first name;
/// pair ties go to the pair seen first.
pub(crate) fn station_stats(table: &TripTable) -> Result<StationStats, AppError> {
    if table.is_empty() {
        return Err(AppError::EmptyTable);
    }
    let records = table.records();
    let starts: Counter<&str> = records
        .iter()
        .filter_map(|r| r.start_station.as_deref())
        .collect();
    let ends: Counter<&str> = records
        .iter()
        .filter_map(|r| r.end_station.as_deref())
        .collect();
    let pairs: Counter<(&str, &str)> = records
        .iter()
        .filter_map(|r| Some((r.start_station.as_deref()?, r.end_station.as_deref()?)))
        .collect();

    let start = starts.mode_min().ok_or(AppError::NoValues {
        column: "Start Station",
    })?;
    let end = ends.mode_min().ok_or(AppError::NoValues {
        column: "End Station",
    })?;
    let pair = pairs.mode().ok_or(AppError::NoValues {
        column: "Start Station and End Station",
    })?;

    Ok(StationStats {
        start: start.map(str::to_string),
        end: end.map(str::to_string),
        pair: pair.map(|(from, to)| (from.to_string(), to.to_string())),
    })
}
