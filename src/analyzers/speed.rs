//! Speed analyzer: fetch latency plus resource weight as a lab-data proxy.
//!
//! No real page-speed lab run happens here; the elapsed fetch time and
//! the count of render-relevant tags stand in for it.

use crate::fetch::{Document, FetchResult, Fetcher};
use crate::models::AnalyzerOutcome;

const SLOW_THRESHOLD_S: f64 = 1.0;
const CRITICAL_THRESHOLD_S: f64 = 2.5;
const HEAVY_RESOURCE_COUNT: usize = 80;

/// A reachable page never scores below this, so "slow" stays
/// distinguishable from "down".
const REACHABLE_FLOOR: u8 = 10;

pub async fn analyze(fetcher: &Fetcher, url: &str) -> AnalyzerOutcome {
    score_speed(&fetcher.fetch_default(url).await)
}

pub fn score_speed<D: Document>(fetched: &FetchResult<D>) -> AnalyzerOutcome {
    let Some(doc) = fetched.document.as_ref().filter(|_| fetched.reachable) else {
        let mut outcome = AnalyzerOutcome::unreachable("Site unreachable for speed scan.");
        outcome.metric("status", "unreachable");
        return outcome;
    };

    let mut score: i32 = 100;
    let mut outcome = AnalyzerOutcome::new(0);

    if fetched.elapsed > CRITICAL_THRESHOLD_S {
        score -= 40;
        outcome.symptom(format!(
            "Critically slow server response ({:.2}s).",
            fetched.elapsed
        ));
    } else if fetched.elapsed > SLOW_THRESHOLD_S {
        score -= 15;
        outcome.symptom(format!("Sluggish server response ({:.2}s).", fetched.elapsed));
    }

    let resources = doc.resource_counts();
    if resources.total() > HEAVY_RESOURCE_COUNT {
        score -= 20;
        outcome.symptom(format!(
            "Heavy page: {} external resources slow the first paint.",
            resources.total()
        ));
    }

    outcome.metric("load_time", format!("{:.2}s", fetched.elapsed));
    outcome.metric("resource_count", resources.total());
    outcome.metric("script_count", resources.scripts);
    outcome.metric("image_count", resources.images);
    outcome.score = score.clamp(REACHABLE_FLOOR as i32, 100) as u8;
    outcome
}
