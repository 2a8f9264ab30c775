use super::*;
use crate::Error;
use crate::store::Response;
use crate::store::Store;

/// Prefix every `.create table` command starts with.
pub const CREATE_TABLE: &str = ".create table";

/// `.create table` command under construction.
///
/// Columns accumulate while open; closing is idempotent and leaves the
/// text balanced with no trailing separator:
///
/// ```text
/// .create table T (
/// 	a: string,
/// 	b: datetime
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTable {
    table: String,
    columns: Vec<(String, DataType)>,
    closed: bool,
}

impl CreateTable {
    pub fn new(table: &str) -> crate::Result<Self> {
        if table.trim().is_empty() {
            return Err(Error::Unnamed);
        }
        let this = Self {
            table: table.to_string(),
            columns: Vec::new(),
            closed: false,
        };
        match Self::verify(&this.opening()) {
            true => Ok(this),
            false => Err(Error::Malformed(this.opening())),
        }
    }

    /// Management commands are the ones starting with a dot.
    pub fn verify(query: &str) -> bool {
        query.trim().starts_with('.')
    }

    pub fn table(&self) -> &str {
        &self.table
    }
    pub fn columns(&self) -> &[(String, DataType)] {
        &self.columns
    }
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn add(&mut self, name: &str, kind: DataType) -> crate::Result<&mut Self> {
        if self.closed {
            return Err(Error::Closed(self.table.clone()));
        }
        self.columns.push((name.to_string(), kind));
        Ok(self)
    }

    pub fn close(&mut self) -> &mut Self {
        self.closed = true;
        self
    }

    pub fn render(&self) -> String {
        let mut query = self.opening();
        match self.closed {
            false => self
                .columns
                .iter()
                .for_each(|(name, kind)| query.push_str(&format!("\t{}: {},\n", name, kind))),
            true => {
                let body = self
                    .columns
                    .iter()
                    .map(|(name, kind)| format!("\t{}: {}", name, kind))
                    .collect::<Vec<String>>()
                    .join(",\n");
                query.push_str(&body);
                if !body.is_empty() {
                    query.push('\n');
                }
                query.push(')');
            }
        }
        query
    }

    /// Close if still open, then hand the finished text to the store.
    pub async fn execute<S>(&mut self, store: &S, database: &str) -> crate::Result<Response>
    where
        S: Store + ?Sized,
    {
        if !self.closed {
            log::debug!("closing {} before execution", self.table);
            self.close();
        }
        store.execute(database, &self.render()).await
    }

    fn opening(&self) -> String {
        format!("{} {} (\n", CREATE_TABLE, self.table)
    }
}

impl std::fmt::Display for CreateTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}
