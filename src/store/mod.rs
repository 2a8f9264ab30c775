mod kusto;
mod response;

pub use kusto::*;
pub use response::*;

use const_format::concatcp;
use std::sync::Arc;

/// Database the Advanced Hunting tables are created in.
pub const DATABASE: &str = "AdvancedHunting";
/// Default Kustainer endpoint.
pub const URL: &str = "http://localhost:8080";

pub const SHOW_DATABASES: &str = ".show databases";
/// Sample row pushed into `EmailUrlInfo` once the tables exist.
pub const SAMPLE_INGEST: &str = concatcp!(
    ".ingest inline into table EmailUrlInfo <| ",
    "2017-02-13T11:09:36.7992775Z,Network Message3,http://test3.nl,test3,007"
);

/// Store defines the management surface the tool needs from Kusto.
/// Commands go through unmodified; result interpretation stays with callers.
#[async_trait::async_trait]
pub trait Store: Send + Sync {
    async fn execute(&self, database: &str, command: &str) -> crate::Result<Response>;

    async fn exists(&self, database: &str) -> crate::Result<bool> {
        Ok(self
            .execute("", SHOW_DATABASES)
            .await?
            .primary()
            .map_or(false, |t| t.first_column().any(|db| db == database)))
    }

    /// Create a persistent database unless one with this name exists.
    /// Returns whether it was created.
    async fn bootstrap(&self, database: &str) -> crate::Result<bool> {
        if self.exists(database).await? {
            log::info!("database {} exists", database);
            return Ok(false);
        }
        log::info!("creating database {}", database);
        let ref command = format!(
            ".create database {db} persist (\n\t@\"/kustodata/dbs/{db}/md\",\n\t@\"/kustodata/dbs/{db}/data\"\n)",
            db = database
        );
        self.execute("", command).await?;
        Ok(true)
    }
}

#[async_trait::async_trait]
impl<S> Store for Arc<S>
where
    S: Store + ?Sized,
{
    async fn execute(&self, database: &str, command: &str) -> crate::Result<Response> {
        self.as_ref().execute(database, command).await
    }
}
