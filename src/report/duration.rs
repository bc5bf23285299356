use crate::core::TripTable;
use crate::error::AppError;

/// Total and mean trip duration
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DurationStats {
    /// Trips with a recorded duration
    pub(crate) trips: usize,
    pub(crate) total_seconds: f64,
    pub(crate) mean_seconds: f64,
}

pub(crate) fn duration_stats(table: &TripTable) -> Result<DurationStats, AppError> {
    if table.is_empty() {
        return Err(AppError::EmptyTable);
    }
    // Blank durations are left out of both the sum and the mean
    let durations: Vec<f64> = table
        .records()
        .iter()
        .filter_map(|r| r.trip_duration)
        .collect();
    if durations.is_empty() {
        return Err(AppError::NoValues {
            column: "Trip Duration",
        });
    }
    let trips = durations.len();
    let total_seconds: f64 = durations.iter().sum();
    Ok(DurationStats {
        trips,
        total_seconds,
        mean_seconds: total_seconds / trips as f64,
    })
}
