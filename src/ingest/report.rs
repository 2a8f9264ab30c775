use crate::Error;

/// Tally of one run over the catalog.
#[derive(Debug, Default)]
pub struct Report {
    pub created: Vec<String>,
    pub failed: Vec<(String, Error)>,
}

impl Report {
    pub fn succeeded(&self) -> bool {
        self.failed.is_empty()
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} tables created, {} schemas failed",
            self.created.len(),
            self.failed.len()
        )?;
        for (schema, error) in self.failed.iter() {
            write!(f, "\n  {:<40} {}", schema, error)?;
        }
        Ok(())
    }
}
