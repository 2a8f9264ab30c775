use super::*;
use crate::Error;
use crate::docs::Catalog;
use crate::docs::extract;
use crate::docs::read;
use crate::kql::CreateTable;
use crate::kql::highlight;
use crate::store::SAMPLE_INGEST;
use crate::store::Store;

/// Table the sample row is ingested into.
const SAMPLE_TABLE: &str = "EmailUrlInfo";

/// Walks the catalog one schema at a time: read the page, extract its
/// column table, build the `.create table` command, run it.
pub struct Ingestion<S> {
    store: S,
    catalog: Catalog,
    config: Config,
}

impl<S> Ingestion<S>
where
    S: Store,
{
    pub fn new(store: S, catalog: Catalog, config: Config) -> Self {
        Self {
            store,
            catalog,
            config,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Closed `.create table` command for one schema, without executing it.
    pub fn prepare(&self, schema: &str) -> crate::Result<CreateTable> {
        let ref path = self.catalog.path(schema);
        log::info!("parsing {} schema from {}", schema, path.display());
        let lines = read(path)?;
        let extraction = extract(schema, &lines)?;
        if extraction.header.is_none() {
            return Err(Error::MissingHeader {
                schema: schema.to_string(),
                path: path.clone(),
            });
        }
        if extraction.columns.is_empty() {
            log::warn!("{}: column table has no rows", schema);
        }
        log::debug!("{}: {} columns", schema, extraction.columns.len());
        let mut query = CreateTable::new(schema)?;
        for (name, kind) in extraction.columns.iter() {
            query.add(name, *kind)?;
        }
        query.close();
        Ok(query)
    }

    /// Prepare and execute one schema.
    pub async fn ingest(&self, schema: &str) -> crate::Result<CreateTable> {
        let mut query = self.prepare(schema)?;
        log::info!("executing following data explorer management command:");
        log::info!("\n{}", highlight(&query));
        if !self.config.dry_run {
            query.execute(&self.store, &self.config.database).await?;
        }
        Ok(query)
    }

    /// Every schema in catalog order. A failing schema is logged and
    /// recorded; with `fail_fast` it ends the run instead.
    pub async fn run(&self) -> crate::Result<Report> {
        if !self.config.dry_run {
            self.store.bootstrap(&self.config.database).await?;
        }
        let mut report = Report::default();
        for schema in self.catalog.schemas() {
            match self.ingest(schema).await {
                Ok(_) => report.created.push(schema.clone()),
                Err(e) if self.config.fail_fast => {
                    log::error!("{}", e);
                    return Err(e);
                }
                Err(e) => {
                    log::error!("{}", e);
                    report.failed.push((schema.clone(), e));
                }
            }
        }
        self.sample(&report).await;
        Ok(report)
    }

    /// Push a sample row once its table exists. Failure only warns.
    async fn sample(&self, report: &Report) {
        if !self.config.sample || self.config.dry_run {
            return;
        }
        if !report.created.iter().any(|t| t == SAMPLE_TABLE) {
            return;
        }
        log::info!("ingesting sample row into {}", SAMPLE_TABLE);
        if let Err(e) = self
            .store
            .execute(&self.config.database, SAMPLE_INGEST)
            .await
        {
            log::warn!("sample ingest failed: {}", e);
        }
    }
}
