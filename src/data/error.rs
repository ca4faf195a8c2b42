use thiserror::Error;

/// Validation failures raised while building the dataset or updating the selection.
///
/// None of these leave partial state behind: a failed reshape produces no dataset and a
/// rejected selection update keeps the previous selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    #[error("malformed value {value:?}{}", describe_cell(.cell))]
    MalformedValue {
        value: String,
        /// `(country, year)` of the offending cell, when known.
        cell: Option<(String, i32)>,
    },

    #[error("column header {0:?} is not a four-digit year")]
    MalformedYear(String),

    #[error("year {0} appears more than once")]
    DuplicateYear(i32),

    #[error("country {0:?} appears more than once")]
    DuplicateCountry(String),

    #[error("dataset has no year columns")]
    NoYears,

    #[error("unknown country {0:?}")]
    UnknownCountry(String),

    #[error("invalid year range {low}..={high}")]
    InvalidRange { low: i32, high: i32 },
}

fn describe_cell(cell: &Option<(String, i32)>) -> String {
    match cell {
        Some((country, year)) => format!(" for {country} in {year}"),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, DataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_value_message_names_the_cell() {
        let err = DataError::MalformedValue {
            value: "abc".into(),
            cell: Some(("France".into(), 1850)),
        };
        assert_eq!(err.to_string(), "malformed value \"abc\" for France in 1850");

        let bare = DataError::MalformedValue { value: "abc".into(), cell: None };
        assert_eq!(bare.to_string(), "malformed value \"abc\"");
    }
}
