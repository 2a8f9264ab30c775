//! Create one Kusto table per Advanced Hunting schema page.

mod cli;

use anyhow::Context;
use clap::Parser;
use mdkql::ingest::Ingestion;
use mdkql::store::Kusto;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    mdkql::log()?;
    let ref args = cli::Cli::parse();
    let catalog = args.catalog().context("load catalog")?;
    log::info!(
        "{} schemas from {}",
        catalog.len(),
        catalog.root().display()
    );
    let ingestion = Ingestion::new(Kusto::new(&args.url), catalog, args.config());
    let report = ingestion.run().await?;
    log::info!("{}", report);
    match report.succeeded() {
        true => Ok(()),
        false => Err(anyhow::anyhow!("{} schemas failed", report.failed.len())),
    }
}
