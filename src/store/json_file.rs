//! Local JSON-file backend: one array of records, appended per audit.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::warn;

use crate::errors::AuditError;
use crate::models::{AuditReport, PatientRecord, RecordSummary};

use super::{stamp, Store};

pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// A missing file is an empty store; a corrupt file is treated the
    /// same rather than poisoning every later save.
    async fn load(&self) -> Result<Vec<PatientRecord>, AuditError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = tokio::fs::read_to_string(&self.path).await?;
        match serde_json::from_str(&content) {
            Ok(records) => Ok(records),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Record file unreadable, starting fresh");
                Ok(Vec::new())
            }
        }
    }

    async fn write(&self, records: &[PatientRecord]) -> Result<(), AuditError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let json = serde_json::to_string_pretty(records)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }
}

#[async_trait]
impl Store for JsonFileStore {
    async fn save(&self, report: &AuditReport) -> Result<PatientRecord, AuditError> {
        let mut records = self.load().await?;
        let record = stamp(report);
        records.push(record.clone());
        self.write(&records).await?;
        Ok(record)
    }

    async fn list_all(&self) -> Result<Vec<RecordSummary>, AuditError> {
        Ok(self.load().await?.iter().map(RecordSummary::from).collect())
    }

    async fn export_all(&self) -> Result<Vec<PatientRecord>, AuditError> {
        self.load().await
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}
