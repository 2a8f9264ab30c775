use crate::Error;

/// Kusto scalar types a documented column can be declared as.
///
/// Rendering goes through an explicit table rather than the variant name,
/// so `List` and `Bool` exist for completeness but are never produced by
/// parsing: `"list"` normalizes to `Dynamic` and `"bool"` to `Boolean`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Bool,
    DateTime,
    Dynamic,
    Guid,
    Int,
    Long,
    Real,
    String,
    Timespan,
    Decimal,
    Boolean,
    List,
}

impl DataType {
    pub const fn all() -> [Self; 12] {
        [
            Self::Bool,
            Self::DateTime,
            Self::Dynamic,
            Self::Guid,
            Self::Int,
            Self::Long,
            Self::Real,
            Self::String,
            Self::Timespan,
            Self::Decimal,
            Self::Boolean,
            Self::List,
        ]
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::DateTime => "datetime",
            Self::Dynamic => "dynamic",
            Self::Guid => "guid",
            Self::Int => "int",
            Self::Long => "long",
            Self::Real => "real",
            Self::String => "string",
            Self::Timespan => "timespan",
            Self::Decimal => "decimal",
            Self::Boolean => "boolean",
            Self::List => "list",
        }
    }
}

impl TryFrom<&str> for DataType {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "string" => Ok(Self::String),
            "datetime" => Ok(Self::DateTime),
            "dynamic" => Ok(Self::Dynamic),
            "guid" => Ok(Self::Guid),
            "int" => Ok(Self::Int),
            "long" => Ok(Self::Long),
            "real" => Ok(Self::Real),
            "timespan" => Ok(Self::Timespan),
            "decimal" => Ok(Self::Decimal),
            "boolean" | "bool" => Ok(Self::Boolean),
            "list" => Ok(Self::Dynamic),
            _ => Err(s.to_string()),
        }
    }
}

impl DataType {
    /// Resolve a declared type on behalf of a schema, keeping the schema
    /// name in the error so the failure is attributable.
    pub fn resolve(schema: &str, declared: &str) -> crate::Result<Self> {
        Self::try_from(declared).map_err(|kind| Error::Unmapped {
            schema: schema.to_string(),
            kind,
        })
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DECLARED: [&str; 12] = [
        "string", "datetime", "dynamic", "guid", "int", "long", "real", "timespan", "decimal",
        "boolean", "bool", "list",
    ];

    #[test]
    fn total_over_documented_types() {
        assert!(DECLARED.iter().all(|s| DataType::try_from(*s).is_ok()));
    }

    #[test]
    fn deterministic() {
        assert!(
            DECLARED
                .iter()
                .all(|s| DataType::try_from(*s) == DataType::try_from(*s))
        );
    }

    #[test]
    fn list_is_dynamic() {
        assert_eq!(DataType::try_from("list"), Ok(DataType::Dynamic));
    }

    #[test]
    fn bool_aliases_boolean() {
        assert_eq!(DataType::try_from("bool"), Ok(DataType::Boolean));
        assert_eq!(DataType::try_from("boolean"), Ok(DataType::Boolean));
    }

    #[test]
    fn case_sensitive() {
        assert!(DataType::try_from("String").is_err());
        assert!(DataType::try_from("DateTime").is_err());
    }

    #[test]
    fn unknown_is_unmapped() {
        match DataType::resolve("T", "unknownthing") {
            Err(Error::Unmapped { schema, kind }) => {
                assert_eq!(schema, "T");
                assert_eq!(kind, "unknownthing");
            }
            other => panic!("expected unmapped, got {:?}", other),
        }
    }

    #[test]
    fn renders_lowercase() {
        assert!(
            DataType::all()
                .iter()
                .all(|t| t.to_string() == t.to_string().to_lowercase())
        );
        assert_eq!(DataType::DateTime.to_string(), "datetime");
        assert_eq!(DataType::Timespan.to_string(), "timespan");
    }
}
