mod loader;

pub(crate) use loader::{load, read_trips};
