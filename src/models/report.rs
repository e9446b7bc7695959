use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::hospital::HospitalInfo;
use super::outcome::AnalyzerOutcome;

/// Overall condition banner derived from the health score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Stable,
    Critical,
    Emergency,
}

impl Verdict {
    pub fn from_score(score: u8) -> Self {
        if score > 80 {
            Verdict::Stable
        } else if score > 50 {
            Verdict::Critical
        } else {
            Verdict::Emergency
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Verdict::Stable => "STABLE. Minimal intervention required.",
            Verdict::Critical => "CRITICAL. Several vitals are weak.",
            Verdict::Emergency => "EMERGENCY. Immediate structural resuscitation needed.",
        }
    }
}

/// The four weighted diagnostic categories composing the health score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DigitalBiopsy {
    pub structural_integrity: AnalyzerOutcome,
    pub public_pulse: AnalyzerOutcome,
    pub conversion_circulation: AnalyzerOutcome,
    pub meta_profile: AnalyzerOutcome,
}

/// Root aggregate produced by one audit run. Never mutated after
/// construction; a re-run produces a new report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditReport {
    pub hospital_info: HospitalInfo,
    pub health_score: u8,
    pub verdict: Verdict,
    pub digital_biopsy: DigitalBiopsy,
}

/// A persisted audit report. `patient_id` and `created_at` are assigned
/// by the store at save time, never by the audit engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    pub patient_id: String,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub report: AuditReport,
}

/// One row of the admin listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordSummary {
    pub patient_id: String,
    pub created_at: DateTime<Utc>,
    pub hospital: String,
    pub health_score: u8,
}

impl From<&PatientRecord> for RecordSummary {
    fn from(record: &PatientRecord) -> Self {
        Self {
            patient_id: record.patient_id.clone(),
            created_at: record.created_at,
            hospital: record.report.hospital_info.name.clone(),
            health_score: record.report.health_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_thresholds() {
        assert_eq!(Verdict::from_score(100), Verdict::Stable);
        assert_eq!(Verdict::from_score(81), Verdict::Stable);
        assert_eq!(Verdict::from_score(80), Verdict::Critical);
        assert_eq!(Verdict::from_score(51), Verdict::Critical);
        assert_eq!(Verdict::from_score(50), Verdict::Emergency);
        assert_eq!(Verdict::from_score(0), Verdict::Emergency);
    }
}
