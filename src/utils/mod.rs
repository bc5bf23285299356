pub(crate) mod date;
pub(crate) mod logging;

pub(crate) use date::{month_name, parse_timestamp, weekday_name};
pub(crate) use logging::init_logging;
