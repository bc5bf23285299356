/// Months covered by the trip extracts, in calendar order
pub(crate) const MONTHS: [&str; 6] = ["january", "february", "march", "april", "may", "june"];

/// Day-of-week filter vocabulary, Monday first
pub(crate) const DAYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Filter value that disables month or day filtering
pub(crate) const ALL: &str = "all";

/// Width of the dashed line printed between reports
pub(crate) const SEPARATOR_WIDTH: usize = 40;
