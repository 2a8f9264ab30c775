//! Materialize Advanced Hunting schemas as Kusto tables.
//!
//! Each schema page in the Microsoft 365 documentation carries a markdown
//! table of columns. This crate finds that table, turns it into a
//! `.create table` management command, and runs it against a Kusto engine.
//!
//! ## Parsing
//!
//! - [`docs::Catalog`] — Schema names and where their pages live
//! - [`docs::extract()`] — Column table state machine over page lines
//! - [`docs::Column`] — One table row, decoration stripped
//!
//! ## Commands
//!
//! - [`kql::DataType`] — Documented type names mapped to Kusto scalars
//! - [`kql::CreateTable`] — `.create table` builder
//! - [`kql::highlight()`] — Terminal coloring of a command
//!
//! ## Execution
//!
//! - [`store::Store`] — Management command surface
//! - [`store::Kusto`] — REST client for a Kusto engine
//! - [`ingest::Ingestion`] — Catalog-wide driver
pub mod docs;
pub mod error;
pub mod ingest;
pub mod kql;
pub mod store;

pub use error::*;

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
pub fn log() -> anyhow::Result<()> {
    use anyhow::Context;
    std::fs::create_dir_all("logs").context("create logs directory")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .context("time moves slow")?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).context("create log file")?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).context("initialize logger")
}
