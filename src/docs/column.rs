use super::*;

/// One documented column: the name cell and the declared type cell,
/// stripped of markdown decoration but otherwise as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub kind: String,
}

impl Column {
    /// Read the second and third cells of a table row.
    /// Names are cut at the first whitespace so prose like
    /// "Timestamp (see note)" yields "Timestamp".
    pub fn parse(line: &str) -> Option<Self> {
        let mut cells = line.split(SEPARATOR).skip(1);
        let name = cells.next()?;
        let kind = cells.next()?;
        let name = name
            .replace([CODE, EMPHASIS], "")
            .split_whitespace()
            .next()?
            .to_string();
        let kind = kind.replace([CODE, EMPHASIS], "").trim().to_string();
        match kind.is_empty() {
            true => None,
            false => Some(Self { name, kind }),
        }
    }
}
