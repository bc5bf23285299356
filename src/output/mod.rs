mod format;
mod json;
mod table;

pub(crate) use json::output_reports_json;
pub(crate) use table::{TextOptions, print_reports, print_selection};
