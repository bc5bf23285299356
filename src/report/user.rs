use crate::core::{Counter, TripTable};

/// Earliest, most recent and most common birth year
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BirthYearSummary {
    pub(crate) earliest: i32,
    pub(crate) most_recent: i32,
    pub(crate) most_common: i32,
}

/// Rider demographics. `genders` and `birth_years` are `None` when the
/// source has no such column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct UserStats {
    pub(crate) user_types: Vec<(String, usize)>,
    pub(crate) genders: Option<Vec<(String, usize)>>,
    pub(crate) birth_years: Option<BirthYearSummary>,
}

fn ranked<'a>(values: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    values
        .collect::<Counter<&str>>()
        .into_ranked()
        .into_iter()
        .map(|(v, n)| (v.to_string(), n))
        .collect()
}

fn birth_year_summary(table: &TripTable) -> Option<BirthYearSummary> {
    let years: Vec<i32> = table.records().iter().filter_map(|r| r.birth_year).collect();
    let earliest = years.iter().copied().min()?;
    let most_recent = years.iter().copied().max()?;
    let most_common = years.iter().copied().collect::<Counter<i32>>().mode_min()?.value;
    Some(BirthYearSummary {
        earliest,
        most_recent,
        most_common,
    })
}

pub(crate) fn user_stats(table: &TripTable) -> UserStats {
    let records = table.records();
    let columns = table.columns();

    let user_types = ranked(records.iter().filter_map(|r| r.user_type.as_deref()));
    let genders = columns
        .has_gender
        .then(|| ranked(records.iter().filter_map(|r| r.gender.as_deref())));
    let birth_years = if columns.has_birth_year {
        birth_year_summary(table)
    } else {
        None
    };

    UserStats {
        user_types,
        genders,
        birth_years,
    }
}
