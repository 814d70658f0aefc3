use crate::domain::model::DomainSet;
use crate::domain::ports::DomainSource;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Desired-state source backed by a local CSV file. The first field of every
/// record is one domain; there is no header row handling.
pub struct CsvFileSource {
    path: String,
}

impl CsvFileSource {
    pub fn new(path: String) -> Self {
        Self { path }
    }
}

#[async_trait]
impl DomainSource for CsvFileSource {
    fn describe(&self) -> String {
        format!("CSV file '{}'", self.path)
    }

    async fn load(&self) -> Result<DomainSet> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)?;

        let mut domains = DomainSet::new();
        for record in reader.records() {
            let record = record?;
            if let Some(first) = record.get(0) {
                if !first.is_empty() {
                    domains.insert(first.to_string());
                }
            }
        }

        tracing::debug!("Loaded {} domains from {}", domains.len(), self.path);
        Ok(domains)
    }
}
