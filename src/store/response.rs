use serde::Deserialize;
use serde_json::Value;

/// Kusto v1 REST response: a list of result tables.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Response {
    #[serde(rename = "Tables", default)]
    pub tables: Vec<Table>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Table {
    #[serde(rename = "TableName", default)]
    pub name: String,
    #[serde(rename = "Columns", default)]
    pub columns: Vec<Field>,
    #[serde(rename = "Rows", default)]
    pub rows: Vec<Vec<Value>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Field {
    #[serde(rename = "ColumnName")]
    pub name: String,
    #[serde(rename = "DataType", default)]
    pub kind: String,
}

impl Response {
    /// First table, which carries the command's result.
    pub fn primary(&self) -> Option<&Table> {
        self.tables.first()
    }
}

impl Table {
    /// String values of the first cell of every row.
    pub fn first_column(&self) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .filter_map(|row| row.first())
            .filter_map(Value::as_str)
    }
}
