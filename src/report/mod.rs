//! The four read-only reports over a filtered trip table
//!
//! Reports share nothing but the immutable table, so they run in parallel.

mod duration;
mod station;
mod time;
mod user;

use std::time::Instant;
use tracing::debug;

use crate::core::TripTable;
use crate::error::AppError;

pub(crate) use duration::{DurationStats, duration_stats};
pub(crate) use station::{StationStats, station_stats};
pub(crate) use time::{TimeStats, time_stats};
pub(crate) use user::{BirthYearSummary, UserStats, user_stats};

/// A report value with its computation time
#[derive(Debug)]
pub(crate) struct Timed<T> {
    pub(crate) value: T,
    pub(crate) elapsed_ms: f64,
}

fn timed<T>(name: &'static str, f: impl FnOnce() -> T) -> Timed<T> {
    let start = Instant::now();
    let value = f();
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    debug!(report = name, elapsed_ms, "report computed");
    Timed { value, elapsed_ms }
}

/// All four reports for one query. A failed report does not affect the others.
#[derive(Debug)]
pub(crate) struct Reports {
    pub(crate) time: Timed<Result<TimeStats, AppError>>,
    pub(crate) station: Timed<Result<StationStats, AppError>>,
    pub(crate) duration: Timed<Result<DurationStats, AppError>>,
    pub(crate) user: Timed<UserStats>,
}

pub(crate) fn run_all(table: &TripTable) -> Reports {
    let ((time, station), (duration, user)) = rayon::join(
        || {
            rayon::join(
                || timed("time", || time_stats(table)),
                || timed("station", || station_stats(table)),
            )
        },
        || {
            rayon::join(
                || timed("duration", || duration_stats(table)),
                || timed("user", || user_stats(table)),
            )
        },
    );

    Reports {
        time,
        station,
        duration,
        user,
    }
}
