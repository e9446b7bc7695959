//! Record persistence behind an injected `Store` abstraction.
//!
//! The backend is chosen once at startup from configuration; nothing in
//! the audit path ever reaches for a global. Persistence is best-effort:
//! a failed save is reported to the caller but never blocks the report.

pub mod json_file;
pub mod memory;
pub mod remote;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::config::{StoreBackend, StoreConfig};
use crate::errors::AuditError;
use crate::models::{AuditReport, PatientRecord, RecordSummary};

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use remote::RemoteStore;

#[async_trait]
pub trait Store: Send + Sync {
    /// Persist one report, assigning its `patient_id` and `created_at`.
    async fn save(&self, report: &AuditReport) -> Result<PatientRecord, AuditError>;

    /// Summaries of every persisted record, oldest first. An
    /// unconfigured or empty backend yields an empty list, not an error.
    async fn list_all(&self) -> Result<Vec<RecordSummary>, AuditError>;

    /// Full records, for the admin export.
    async fn export_all(&self) -> Result<Vec<PatientRecord>, AuditError>;

    fn backend_name(&self) -> &'static str;
}

/// Stamp a report into a persistable record. Called by every backend so
/// id/timestamp assignment happens in exactly one place.
pub(crate) fn stamp(report: &AuditReport) -> PatientRecord {
    PatientRecord {
        patient_id: format!("pat_{}", Uuid::new_v4().simple()),
        created_at: Utc::now(),
        report: report.clone(),
    }
}

pub fn open_store(config: &StoreConfig) -> Result<Arc<dyn Store>, AuditError> {
    let store: Arc<dyn Store> = match config.backend {
        StoreBackend::File => Arc::new(JsonFileStore::new(&config.path)),
        StoreBackend::Remote => {
            let endpoint = config.endpoint.as_deref().ok_or_else(|| {
                AuditError::Config("store.endpoint is required for the remote backend".into())
            })?;
            Arc::new(RemoteStore::new(endpoint)?)
        }
        StoreBackend::Memory => Arc::new(MemoryStore::default()),
    };
    Ok(store)
}

/// Best-effort admin notification on save. Log-only stand-in for the
/// outbound email hook.
pub fn notify_admin(record: &PatientRecord) {
    info!(
        patient_id = %record.patient_id,
        hospital = %record.report.hospital_info.name,
        health_score = record.report.health_score,
        "New digital biopsy recorded, admin notified"
    );
}
