use super::*;

/// Cell separator of a markdown table.
pub const SEPARATOR: char = '|';
/// Inline code marker wrapping names and types in the docs.
pub const CODE: char = '`';
/// Emphasis marker occasionally wrapping column names.
pub const EMPHASIS: char = '*';
/// Degenerate row the docs use as spacing inside tables.
pub const EMPTY_ROW: &str = "||||";

const HEADERS: [&str; 3] = ["Column name", "Data type", "Description"];

/// What to do with a line once inside the column table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row {
    /// Separator row, spacing, or anything else that carries no column.
    Skip,
    /// First line past the table; not consumed.
    End,
    Data,
}

/// The "| Column name | Data type | Description |" header row.
pub fn is_header(line: &str) -> bool {
    line.contains(SEPARATOR) && HEADERS.iter().all(|h| line.contains(h))
}

/// Rules apply in order: the line right after the header, then noise,
/// then end of table. `start` is the index of the header line.
pub fn classify(index: usize, start: usize, line: &str) -> Row {
    if index == start + 1 {
        return Row::Skip;
    }
    if is_noise(line) {
        return Row::Skip;
    }
    if !line.starts_with(SEPARATOR) {
        return Row::End;
    }
    Row::Data
}

/// Rows with inline code always count as data. Anything else is spacing
/// unless it still carries a usable name and type cell; a repeated header
/// or a `|---|` delimiter never does.
fn is_noise(line: &str) -> bool {
    if line == EMPTY_ROW {
        return true;
    }
    if line.contains(CODE) {
        return false;
    }
    is_header(line) || is_delimiter(line) || Column::parse(line).is_none()
}

fn is_delimiter(line: &str) -> bool {
    line.starts_with(SEPARATOR)
        && line
            .chars()
            .all(|c| matches!(c, '|' | '-' | ':') || c.is_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "| Column name | Data type | Description |";

    #[test]
    fn header_needs_all_markers() {
        assert!(is_header(HEADER));
        assert!(is_header("|Column name|Data type|Description|"));
        assert!(!is_header("Column name, Data type, Description"));
        assert!(!is_header("| Column name | Data type |"));
        assert!(!is_header("| Column | Type | Description |"));
    }

    #[test]
    fn row_after_header_always_skipped() {
        assert_eq!(classify(4, 3, "|---|---|---|"), Row::Skip);
        assert_eq!(classify(4, 3, "| `Foo` | `string` | bar |"), Row::Skip);
        assert_eq!(classify(4, 3, "not a row"), Row::Skip);
    }

    #[test]
    fn spacing_rows_skipped() {
        assert_eq!(classify(9, 3, EMPTY_ROW), Row::Skip);
        assert_eq!(classify(9, 3, "| done"), Row::Skip);
        assert_eq!(classify(9, 3, "|"), Row::Skip);
    }

    #[test]
    fn prose_without_code_skipped() {
        assert_eq!(classify(9, 3, "trailing"), Row::Skip);
        assert_eq!(classify(9, 3, ""), Row::Skip);
        assert_eq!(classify(9, 3, "## Related topics"), Row::Skip);
        assert_eq!(classify(9, 3, HEADER), Row::Skip);
        assert_eq!(classify(9, 3, "|---|:---:|---|"), Row::Skip);
    }

    #[test]
    fn end_of_table() {
        assert_eq!(classify(9, 3, "see `Foo` for details"), Row::End);
        assert_eq!(classify(9, 3, "- `Bar`: related"), Row::End);
    }

    #[test]
    fn data_rows() {
        assert_eq!(classify(9, 3, "| `Foo` | `string` | bar |"), Row::Data);
        assert_eq!(classify(9, 3, "| Timestamp | datetime | when |"), Row::Data);
    }
}
