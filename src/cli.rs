use clap::Parser;
use mdkql::docs::Catalog;
use mdkql::docs::SCHEMAS;
use mdkql::ingest::Config;
use mdkql::store::DATABASE;
use mdkql::store::URL;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[arg(long, env = "KUSTO_URL", default_value = URL, help = "Kusto engine endpoint")]
    pub url: String,
    #[arg(long, env = "KUSTO_DATABASE", default_value = DATABASE, help = "Database to create tables in")]
    pub database: String,
    #[arg(long, env = "DOCS_ROOT", default_value = SCHEMAS, help = "Directory of schema pages")]
    pub docs: PathBuf,
    #[arg(long, help = "File listing schema names, one per line")]
    pub catalog: Option<PathBuf>,
    #[arg(long, help = "Render commands without executing them")]
    pub dry_run: bool,
    #[arg(long, help = "Abort on the first failing schema")]
    pub fail_fast: bool,
    #[arg(long, help = "Skip the sample EmailUrlInfo ingest")]
    pub no_sample: bool,
}

impl Cli {
    pub fn config(&self) -> Config {
        Config {
            database: self.database.clone(),
            dry_run: self.dry_run,
            fail_fast: self.fail_fast,
            sample: !self.no_sample,
        }
    }

    pub fn catalog(&self) -> mdkql::Result<Catalog> {
        match self.catalog {
            Some(ref path) => Catalog::from_file(self.docs.clone(), path),
            None => Ok(Catalog::new(
                self.docs.clone(),
                mdkql::docs::ADVANCED_HUNTING,
            )),
        }
    }
}
