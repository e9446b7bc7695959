use crate::models::{AnalyzerOutcome, AuditReport, MetricValue, PatientRecord, RecordSummary};

fn format_metric(value: &MetricValue) -> String {
    match value {
        MetricValue::Bool(v) => v.to_string(),
        MetricValue::Int(v) => v.to_string(),
        MetricValue::Float(v) => format!("{:.1}", v),
        MetricValue::Text(v) => v.clone(),
    }
}

pub fn format_category_markdown(title: &str, outcome: &AnalyzerOutcome) -> String {
    let mut section = format!("### {}\n\n**Score:** {}/100\n", title, outcome.score);

    if !outcome.metrics.is_empty() {
        section.push_str("\n| Signal | Value |\n|---|---|\n");
        for (key, value) in &outcome.metrics {
            section.push_str(&format!("| {} | {} |\n", key, format_metric(value)));
        }
    }

    if outcome.symptoms.is_empty() {
        section.push_str("\nNo symptoms detected.\n");
    } else {
        section.push_str("\n**Symptoms:**\n");
        for symptom in &outcome.symptoms {
            section.push_str(&format!("- {}\n", symptom));
        }
    }

    section
}

pub fn format_report_markdown(report: &AuditReport) -> String {
    let biopsy = &report.digital_biopsy;
    let mut out = format!(
        "# Digital Health Biopsy: {}\n\n**Website:** {}\n**Health Score:** {}/100\n**Condition:** {}\n\n---\n\n",
        report.hospital_info.name,
        report.hospital_info.website,
        report.health_score,
        report.verdict.describe(),
    );

    for (title, outcome) in [
        ("1. Structural Integrity (SEO & Speed)", &biopsy.structural_integrity),
        ("2. Public Pulse (Reputation)", &biopsy.public_pulse),
        ("3. Conversion Circulation (Leads)", &biopsy.conversion_circulation),
        ("4. Meta Profile (Analytics)", &biopsy.meta_profile),
    ] {
        out.push_str(&format_category_markdown(title, outcome));
        out.push_str("\n---\n\n");
    }

    out
}

/// Admin listing: one row per persisted record.
pub fn format_records_table(summaries: &[RecordSummary]) -> String {
    let mut out = String::from("| Date | Hospital | Score | Patient ID |\n|---|---|---|---|\n");
    for s in summaries {
        out.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            s.created_at.format("%Y-%m-%d"),
            s.hospital,
            s.health_score,
            s.patient_id,
        ));
    }
    out
}

/// Lossless structured export of one persisted record.
pub fn export_record_json(record: &PatientRecord) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(record)
}
