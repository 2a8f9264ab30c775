use crate::store::DATABASE;

/// Run-wide settings handed to the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Target database for every table.
    pub database: String,
    /// Render statements without touching the store.
    pub dry_run: bool,
    /// Stop at the first schema that fails.
    pub fail_fast: bool,
    /// Ingest a sample row into `EmailUrlInfo` after creation.
    pub sample: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: DATABASE.to_string(),
            dry_run: false,
            fail_fast: false,
            sample: true,
        }
    }
}
