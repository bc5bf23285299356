//! Core module - filter vocabulary, trip table and counting helpers

mod filter;
mod stats;
mod types;

pub(crate) use filter::{City, DayFilter, FilterSpec, MonthFilter};
pub(crate) use stats::{Counter, Mode};
pub(crate) use types::{Columns, TripRecord, TripTable};

#[cfg(test)]
pub(crate) use types::test_support;
