//! In-process backend for tests and dry runs.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::errors::AuditError;
use crate::models::{AuditReport, PatientRecord, RecordSummary};

use super::{stamp, Store};

#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<Vec<PatientRecord>>,
}

#[async_trait]
impl Store for MemoryStore {
    async fn save(&self, report: &AuditReport) -> Result<PatientRecord, AuditError> {
        let record = stamp(report);
        self.records
            .lock()
            .map_err(|_| AuditError::Store("Record lock poisoned".into()))?
            .push(record.clone());
        Ok(record)
    }

    async fn list_all(&self) -> Result<Vec<RecordSummary>, AuditError> {
        Ok(self
            .records
            .lock()
            .map_err(|_| AuditError::Store("Record lock poisoned".into()))?
            .iter()
            .map(RecordSummary::from)
            .collect())
    }

    async fn export_all(&self) -> Result<Vec<PatientRecord>, AuditError> {
        Ok(self
            .records
            .lock()
            .map_err(|_| AuditError::Store("Record lock poisoned".into()))?
            .clone())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AnalyzerOutcome, DigitalBiopsy, HospitalInfo, Verdict};

    fn sample_report() -> AuditReport {
        let outcome = AnalyzerOutcome::new(80);
        AuditReport {
            hospital_info: HospitalInfo::new("Mem Clinic", "https://example.com"),
            health_score: 80,
            verdict: Verdict::from_score(80),
            digital_biopsy: DigitalBiopsy {
                structural_integrity: outcome.clone(),
                public_pulse: outcome.clone(),
                conversion_circulation: outcome.clone(),
                meta_profile: outcome,
            },
        }
    }

    #[tokio::test]
    async fn test_empty_store_lists_empty() {
        let store = MemoryStore::default();
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_records_get_unique_ids() {
        let store = MemoryStore::default();
        let a = store.save(&sample_report()).await.unwrap();
        let b = store.save(&sample_report()).await.unwrap();
        assert_ne!(a.patient_id, b.patient_id);
        assert_eq!(store.list_all().await.unwrap().len(), 2);
    }
}
