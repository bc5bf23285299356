use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid city \"{input}\" (expected chicago, new york city or washington)")]
    InvalidCity { input: String },

    #[error("Invalid month \"{input}\" (expected january to june, or all)")]
    InvalidMonth { input: String },

    #[error("Invalid day \"{input}\" (expected monday to sunday, or all)")]
    InvalidDay { input: String },

    #[error("Cannot open {source_name}: {source}")]
    DataSource {
        source_name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed CSV in {source_name}: {source}")]
    MalformedSource {
        source_name: String,
        #[source]
        source: csv::Error,
    },

    #[error("Missing column \"{column}\" in {source_name}")]
    MissingColumn {
        column: &'static str,
        source_name: String,
    },

    #[error("Invalid {column} \"{value}\" on line {line} of {source_name}")]
    InvalidValue {
        column: &'static str,
        value: String,
        line: usize,
        source_name: String,
    },

    #[error("No trips match the selected filters")]
    EmptyTable,

    #[error("No {column} values among the selected trips")]
    NoValues { column: &'static str },

    #[error("Failed to read input: {0}")]
    Input(#[from] std::io::Error),
}

impl AppError {
    /// Source file missing or unreadable as CSV
    pub(crate) fn is_data_source(&self) -> bool {
        matches!(
            self,
            AppError::DataSource { .. } | AppError::MalformedSource { .. }
        )
    }

    /// Required column absent or holding a value that does not parse
    pub(crate) fn is_schema(&self) -> bool {
        matches!(
            self,
            AppError::MissingColumn { .. } | AppError::InvalidValue { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_city_display() {
        let e = AppError::InvalidCity {
            input: "boston".to_string(),
        };
        assert_eq!(
            e.to_string(),
            r#"Invalid city "boston" (expected chicago, new york city or washington)"#
        );
    }

    #[test]
    fn missing_column_display() {
        let e = AppError::MissingColumn {
            column: "Start Time",
            source_name: "chicago.csv".to_string(),
        };
        assert_eq!(e.to_string(), r#"Missing column "Start Time" in chicago.csv"#);
        assert!(e.is_schema());
        assert!(!e.is_data_source());
    }

    #[test]
    fn invalid_value_display() {
        let e = AppError::InvalidValue {
            column: "Start Time",
            value: "yesterday".to_string(),
            line: 3,
            source_name: "washington.csv".to_string(),
        };
        assert_eq!(
            e.to_string(),
            r#"Invalid Start Time "yesterday" on line 3 of washington.csv"#
        );
    }

    #[test]
    fn data_source_classification() {
        let e = AppError::DataSource {
            source_name: "missing.csv".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(e.is_data_source());
        assert!(!e.is_schema());
        assert!(e.to_string().starts_with("Cannot open missing.csv"));
    }

    #[test]
    fn empty_table_display() {
        assert_eq!(
            AppError::EmptyTable.to_string(),
            "No trips match the selected filters"
        );
    }

    #[test]
    fn no_values_display() {
        let e = AppError::NoValues {
            column: "Trip Duration",
        };
        assert_eq!(e.to_string(), "No Trip Duration values among the selected trips");
        assert!(!e.is_schema());
    }
}
