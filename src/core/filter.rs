//! Query filters: which city to load and which months/days to keep
//!
//! Every value is drawn from a closed vocabulary; `FromStr` is the only way in.

use chrono::Weekday;
use std::fmt;
use std::str::FromStr;

use crate::consts::{ALL, DAYS, MONTHS};
use crate::error::AppError;
use crate::utils::weekday_name;

/// Cities with a bundled trip extract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub(crate) const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    pub(crate) fn name(self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    /// CSV file holding this city's trips, relative to the data directory
    pub(crate) fn file_name(self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            City::Chicago => &["chi"],
            City::NewYorkCity => &["nyc", "new york", "new_york_city"],
            City::Washington => &["dc", "washington dc"],
        }
    }
}

impl FromStr for City {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        City::ALL
            .into_iter()
            .find(|c| c.name() == needle || c.aliases().contains(&needle.as_str()))
            .ok_or_else(|| AppError::InvalidCity {
                input: s.trim().to_string(),
            })
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Month filter; `Only` holds a 1-based month within January..June
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum MonthFilter {
    #[default]
    All,
    Only(u32),
}

impl MonthFilter {
    pub(crate) fn matches(self, month: u32) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Only(m) => m == month,
        }
    }
}

impl FromStr for MonthFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        if needle == ALL {
            return Ok(MonthFilter::All);
        }
        MONTHS
            .iter()
            .position(|m| *m == needle)
            .map(|i| MonthFilter::Only(i as u32 + 1))
            .ok_or_else(|| AppError::InvalidMonth {
                input: s.trim().to_string(),
            })
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => f.write_str(ALL),
            MonthFilter::Only(m) => f.write_str(MONTHS[(*m - 1) as usize]),
        }
    }
}

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Day-of-week filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum DayFilter {
    #[default]
    All,
    Only(Weekday),
}

impl DayFilter {
    pub(crate) fn matches(self, day: Weekday) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Only(d) => d == day,
        }
    }
}

impl FromStr for DayFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case(ALL) {
            return Ok(DayFilter::All);
        }
        // Compare against title-cased weekday names, ignoring case
        WEEKDAYS
            .into_iter()
            .find(|d| weekday_name(*d).eq_ignore_ascii_case(trimmed))
            .map(DayFilter::Only)
            .ok_or_else(|| AppError::InvalidDay {
                input: trimmed.to_string(),
            })
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayFilter::All => f.write_str(ALL),
            DayFilter::Only(d) => f.write_str(DAYS[d.num_days_from_monday() as usize]),
        }
    }
}

/// The (city, month, day) selection for one query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FilterSpec {
    pub(crate) city: City,
    pub(crate) month: MonthFilter,
    pub(crate) day: DayFilter,
}

impl FilterSpec {
    pub(crate) fn new(city: City, month: MonthFilter, day: DayFilter) -> Self {
        Self { city, month, day }
    }

    pub(crate) fn parse(city: &str, month: &str, day: &str) -> Result<Self, AppError> {
        Ok(Self::new(city.parse()?, month.parse()?, day.parse()?))
    }
}
