use std::path::PathBuf;

use console::style;
use tracing::{info, warn};

use crate::audit::AuditEngine;
use crate::cli::commands::ScanArgs;
use crate::config::{self, ClinicpulseConfig};
use crate::errors::AuditError;
use crate::models::{HospitalInfo, SocialLinks, Verdict};
use crate::reporting;
use crate::store::{self, notify_admin, Store};

pub async fn handle_scan(args: ScanArgs) -> Result<(), AuditError> {
    if args.name.trim().is_empty() || args.website.trim().is_empty() {
        return Err(AuditError::InvalidTarget(
            "A practice name and website URL are both required".into(),
        ));
    }

    let config = load_config(args.config.as_deref()).await?;
    let intake = HospitalInfo {
        name: args.name.clone(),
        website: args.website.clone(),
        contact_mobile: args.mobile.clone(),
        contact_email: args.email.clone(),
        social: SocialLinks {
            instagram: args.instagram.clone(),
            facebook: args.facebook.clone(),
        },
        gmb_link: args.gmb.clone(),
    };

    let engine = AuditEngine::new(&config)?;
    let report = engine.perform_audit(intake).await;

    println!("{}", reporting::format_report_markdown(&report));
    let verdict_line = format!("Condition: {}", report.verdict.describe());
    let styled = match report.verdict {
        Verdict::Stable => style(verdict_line).green(),
        Verdict::Critical => style(verdict_line).yellow(),
        Verdict::Emergency => style(verdict_line).red().bold(),
    };
    println!("{}", styled);

    // Persistence is best-effort: a failed save is logged, never fatal.
    let record = if args.no_save {
        None
    } else {
        let store = store::open_store(&config.store)?;
        match store.save(&report).await {
            Ok(record) => {
                info!(
                    patient_id = %record.patient_id,
                    backend = store.backend_name(),
                    "Audit record saved"
                );
                notify_admin(&record);
                Some(record)
            }
            Err(e) => {
                warn!(error = %e, "Failed to persist audit record, report shown anyway");
                None
            }
        }
    };

    if let Some(output) = &args.output {
        let json = match &record {
            Some(record) => reporting::export_record_json(record)?,
            None => serde_json::to_string_pretty(&report)?,
        };
        tokio::fs::write(output, json).await?;
        info!(path = %output, "Structured export written");
    }

    Ok(())
}

pub(crate) async fn load_config(path: Option<&str>) -> Result<ClinicpulseConfig, AuditError> {
    match path {
        Some(path) => config::parse_config(&PathBuf::from(path)).await,
        None => Ok(ClinicpulseConfig::default()),
    }
}
