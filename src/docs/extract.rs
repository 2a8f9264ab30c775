use super::*;
use crate::Error;
use crate::kql::DataType;

/// Ordered column set, unique by name. The first definition of a name
/// wins; later rows with the same name are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Columns(Vec<(String, DataType)>);

impl Columns {
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|(n, _)| n == name)
    }
    /// Returns false if the name was already present.
    pub fn insert(&mut self, name: String, kind: DataType) -> bool {
        match self.contains(&name) {
            true => false,
            false => {
                self.0.push((name, kind));
                true
            }
        }
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &(String, DataType)> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Columns {
    type Item = &'a (String, DataType);
    type IntoIter = std::slice::Iter<'a, (String, DataType)>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Result of one pass over a documentation page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Line index of the column table header, if one was found.
    pub header: Option<usize>,
    pub columns: Columns,
}

#[derive(Debug, Clone, Copy)]
enum Mode {
    Searching,
    Table(usize),
}

/// Walk the lines of one schema page and collect its column table.
///
/// Lines before the header are ignored. Running off the end of the
/// table or the end of the file both end the pass normally. A missing
/// header is not an error here; the caller sees `header == None`.
pub fn extract<S>(schema: &str, lines: &[S]) -> crate::Result<Extraction>
where
    S: AsRef<str>,
{
    let mut mode = Mode::Searching;
    let mut extraction = Extraction::default();
    for (index, line) in lines.iter().enumerate() {
        let line: &str = line.as_ref();
        match mode {
            Mode::Searching => {
                if is_header(line) {
                    log::debug!("{}: column table header at line {}", schema, index + 1);
                    extraction.header = Some(index);
                    mode = Mode::Table(index);
                }
            }
            Mode::Table(start) => match classify(index, start, line) {
                Row::Skip => continue,
                Row::End => break,
                Row::Data => {
                    let column = Column::parse(line).ok_or_else(|| Error::Row {
                        line: index,
                        text: line.to_string(),
                    })?;
                    if extraction.columns.contains(&column.name) {
                        log::debug!("{}: duplicate column {} dropped", schema, column.name);
                        continue;
                    }
                    let kind = DataType::resolve(schema, &column.kind)?;
                    extraction.columns.insert(column.name, kind);
                }
            },
        }
    }
    Ok(extraction)
}
