use chrono::Weekday;

use crate::core::{Counter, Mode, TripTable};
use crate::error::AppError;
use crate::utils::weekday_name;

/// Most frequent times of travel
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TimeStats {
    /// 1-based calendar month
    pub(crate) month: Mode<u32>,
    pub(crate) day: Mode<Weekday>,
    /// Hour of day, 0-23
    pub(crate) hour: Mode<u32>,
}

pub(crate) fn time_stats(table: &TripTable) -> Result<TimeStats, AppError> {
    let records = table.records();
    let months: Counter<u32> = records.iter().map(|r| r.month()).collect();
    let days: Counter<Weekday> = records.iter().map(|r| r.day_of_week()).collect();
    let hours: Counter<u32> = records.iter().map(|r| r.hour()).collect();

    // Ties go to the lowest month and hour, and to the alphabetically first day name
    Ok(TimeStats {
        month: months.mode_min().ok_or(AppError::EmptyTable)?,
        day: days
            .mode_by_key(|d| weekday_name(*d))
            .ok_or(AppError::EmptyTable)?,
        hour: hours.mode_min().ok_or(AppError::EmptyTable)?,
    })
}
