//! Runs the six analyzers concurrently and composes the audit report.
//!
//! Dispatch is bounded by a semaphore; composition only happens after
//! every analyzer has joined. A panicking analyzer is isolated into a
//! zero-score outcome so the report is always fully populated.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::{JoinError, JoinHandle};
use tracing::{info, warn};

use crate::analyzers::{conversion, reputation, seo, social, speed, tracking};
use crate::audit::score;
use crate::config::ClinicpulseConfig;
use crate::errors::AuditError;
use crate::fetch::Fetcher;
use crate::models::{AnalyzerOutcome, AuditReport, DigitalBiopsy, HospitalInfo, Verdict};

pub struct AuditEngine {
    fetcher: Arc<Fetcher>,
    parallelism: usize,
}

impl AuditEngine {
    pub fn new(config: &ClinicpulseConfig) -> Result<Self, AuditError> {
        Ok(Self {
            fetcher: Arc::new(Fetcher::new(&config.fetch)?),
            parallelism: config.audit.parallelism,
        })
    }

    /// Run the full digital biopsy for one intake.
    ///
    /// Infallible by contract: every fetch failure has already been
    /// folded into its analyzer's outcome by the time scores compose.
    pub async fn perform_audit(&self, intake: HospitalInfo) -> AuditReport {
        info!(hospital = %intake.name, website = %intake.website, "Audit started");

        let limiter = Arc::new(Semaphore::new(self.parallelism));

        let seo_task = {
            let fetcher = self.fetcher.clone();
            let url = intake.website.clone();
            dispatch(limiter.clone(), async move { seo::analyze(&fetcher, &url).await })
        };
        let speed_task = {
            let fetcher = self.fetcher.clone();
            let url = intake.website.clone();
            dispatch(limiter.clone(), async move { speed::analyze(&fetcher, &url).await })
        };
        let social_task = {
            let fetcher = self.fetcher.clone();
            let links = intake.social.clone();
            dispatch(limiter.clone(), async move {
                social::analyze(&fetcher, &links).await
            })
        };
        let reputation_task = {
            let fetcher = self.fetcher.clone();
            let gmb = intake.gmb_link.clone();
            dispatch(limiter.clone(), async move {
                reputation::analyze(&fetcher, gmb.as_deref()).await
            })
        };
        let conversion_task = {
            let fetcher = self.fetcher.clone();
            let url = intake.website.clone();
            dispatch(limiter.clone(), async move {
                conversion::analyze(&fetcher, &url).await
            })
        };
        let tracking_task = {
            let fetcher = self.fetcher.clone();
            let url = intake.website.clone();
            dispatch(limiter, async move { tracking::analyze(&fetcher, &url).await })
        };

        // Full join before any composition; no partial result escapes.
        let (seo, speed, social, reputation, conversion, tracking) = tokio::join!(
            seo_task,
            speed_task,
            social_task,
            reputation_task,
            conversion_task,
            tracking_task
        );

        let seo = recover("structural", seo);
        let speed = recover("speed", speed);
        let social = recover("social", social);
        let reputation = recover("reputation", reputation);
        let conversion = recover("conversion", conversion);
        let tracking = recover("tracking", tracking);

        let structural = score::merge_category(speed, seo);
        let pulse = score::merge_category(social, reputation);
        let health_score = score::overall_health(
            structural.score,
            pulse.score,
            conversion.score,
            tracking.score,
        );

        info!(
            hospital = %intake.name,
            health_score,
            structural = structural.score,
            pulse = pulse.score,
            conversion = conversion.score,
            tracking = tracking.score,
            "Audit complete"
        );

        AuditReport {
            hospital_info: intake,
            health_score,
            verdict: Verdict::from_score(health_score),
            digital_biopsy: DigitalBiopsy {
                structural_integrity: structural,
                public_pulse: pulse,
                conversion_circulation: conversion,
                meta_profile: tracking,
            },
        }
    }
}

fn dispatch<F>(limiter: Arc<Semaphore>, task: F) -> JoinHandle<AnalyzerOutcome>
where
    F: Future<Output = AnalyzerOutcome> + Send + 'static,
{
    tokio::spawn(async move {
        let _permit = limiter.acquire_owned().await.expect("semaphore closed");
        task.await
    })
}

/// Substitute a descriptive zero-score outcome when an analyzer task
/// panicked, so one bad analyzer never aborts the audit.
fn recover(name: &'static str, joined: Result<AnalyzerOutcome, JoinError>) -> AnalyzerOutcome {
    match joined {
        Ok(outcome) => outcome,
        Err(e) => {
            warn!(analyzer = name, error = %e, "Analyzer task failed, substituting zero outcome");
            let mut outcome = AnalyzerOutcome::new(0);
            outcome.symptom(format!("Internal error during {} scan.", name));
            outcome
        }
    }
}
