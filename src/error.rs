use std::path::PathBuf;

/// Failures raised while turning one documentation page into a table.
/// Every variant is scoped to a single schema; the driver decides
/// whether a failure aborts the whole run.
#[derive(Debug)]
pub enum Error {
    /// Statement text does not open with a management command prefix.
    Malformed(String),
    /// Declared column type has no Kusto counterpart.
    Unmapped { schema: String, kind: String },
    /// No "Column name | Data type | Description" header in the page.
    MissingHeader { schema: String, path: PathBuf },
    /// Table row with too few cells or an empty column name.
    Row { line: usize, text: String },
    /// Column appended after the statement was closed.
    Closed(String),
    /// Table name was empty.
    Unnamed,
    Io { path: PathBuf, source: std::io::Error },
    Store(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(q) => write!(f, "invalid mgmt syntax: '{}...'", q.trim_end()),
            Self::Unmapped { schema, kind } => {
                write!(f, "{}: unmapped data type '{}'", schema, kind)
            }
            Self::MissingHeader { schema, path } => {
                write!(f, "{}: no column table in {}", schema, path.display())
            }
            Self::Row { line, text } => write!(f, "malformed row at line {}: {}", line + 1, text),
            Self::Closed(table) => write!(f, "{}: statement already closed", table),
            Self::Unnamed => write!(f, "table name must not be empty"),
            Self::Io { path, source } => write!(f, "{}: {}", path.display(), source),
            Self::Store(e) => write!(f, "store: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Self::Store(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmapped_names_schema_and_type() {
        let e = Error::Unmapped {
            schema: "DeviceInfo".into(),
            kind: "unknownthing".into(),
        };
        assert_eq!(e.to_string(), "DeviceInfo: unmapped data type 'unknownthing'");
    }

    #[test]
    fn row_numbers_are_one_based() {
        let e = Error::Row {
            line: 4,
            text: "| |".into(),
        };
        assert!(e.to_string().starts_with("malformed row at line 5"));
    }
}
