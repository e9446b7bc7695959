//! Remote document-store backend.
//!
//! Speaks plain JSON to a collection endpoint: POST one record to
//! append, GET the collection to list. Pointing `store.endpoint` at a
//! document database's REST facade is all the integration there is.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::errors::AuditError;
use crate::models::{AuditReport, PatientRecord, RecordSummary};

use super::{stamp, Store};

pub struct RemoteStore {
    client: reqwest::Client,
    endpoint: String,
}

impl RemoteStore {
    pub fn new(endpoint: &str) -> Result<Self, AuditError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| AuditError::Store(format!("Failed to build store client: {}", e)))?;
        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl Store for RemoteStore {
    async fn save(&self, report: &AuditReport) -> Result<PatientRecord, AuditError> {
        let record = stamp(report);
        let resp = self
            .client
            .post(&self.endpoint)
            .json(&record)
            .send()
            .await
            .map_err(|e| AuditError::Store(format!("Remote save failed: {}", e)))?;

        if !resp.status().is_success() {
            return Err(AuditError::Store(format!(
                "Remote store rejected record: status {}",
                resp.status()
            )));
        }
        debug!(patient_id = %record.patient_id, "Record pushed to remote store");
        Ok(record)
    }

    async fn list_all(&self) -> Result<Vec<RecordSummary>, AuditError> {
        Ok(self.export_all().await?.iter().map(RecordSummary::from).collect())
    }

    async fn export_all(&self) -> Result<Vec<PatientRecord>, AuditError> {
        let resp = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| AuditError::Store(format!("Remote list failed: {}", e)))?;

        if !resp.status().is_success() {
            return Err(AuditError::Store(format!(
                "Remote store list failed: status {}",
                resp.status()
            )));
        }

        resp.json()
            .await
            .map_err(|e| AuditError::Store(format!("Remote store returned invalid JSON: {}", e)))
    }

    fn backend_name(&self) -> &'static str {
        "remote"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_trailing_slash_stripped() {
        let store = RemoteStore::new("https://records.example.com/audits/").unwrap();
        assert_eq!(store.endpoint, "https://records.example.com/audits");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_errors_as_store() {
        let store = RemoteStore::new("https://records.invalid/audits").unwrap();
        let err = store.export_all().await.unwrap_err();
        assert!(matches!(err, AuditError::Store(_)));
    }
}
