//! Reputation analyzer over the practice's Google Business Profile.
//!
//! Maps pages often strip the rating for anonymous scrapers; a confirmed
//! maps page with a hidden rating soft-fails to partial credit.

use std::sync::LazyLock;

use regex::Regex;

use crate::fetch::{Document, FetchResult, Fetcher};
use crate::models::AnalyzerOutcome;

static RATING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d\.\d)\s+stars").unwrap());

const MAPS_TITLE_SUFFIX: &str = " - Google Maps";

pub async fn analyze(fetcher: &Fetcher, gmb_link: Option<&str>) -> AnalyzerOutcome {
    let Some(link) = gmb_link.filter(|l| !l.trim().is_empty()) else {
        return AnalyzerOutcome::unreachable("No Google Business Profile link provided.");
    };
    score_reputation(&fetcher.fetch_default(link).await)
}

pub fn score_reputation<D: Document>(fetched: &FetchResult<D>) -> AnalyzerOutcome {
    let Some(doc) = fetched.document.as_ref().filter(|_| fetched.reachable) else {
        return AnalyzerOutcome::unreachable("Google Business Profile link unreachable.");
    };

    let mut outcome = AnalyzerOutcome::new(0);
    let title = doc.title().unwrap_or_default();
    let is_maps_page = title.contains("Google Maps");
    let business_name = title.trim_end_matches(MAPS_TITLE_SUFFIX).trim();
    if !business_name.is_empty() {
        outcome.metric("business_name", business_name);
    }

    let rating = RATING_RE
        .captures(doc.text())
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok());

    match rating {
        Some(rating) => {
            outcome.metric("rating", rating);
            if rating < 4.0 {
                outcome.score = 40;
                outcome.symptom(format!("Low reputation: {:.1} star rating.", rating));
            } else {
                outcome.score = 95;
            }
        }
        None if is_maps_page => {
            outcome.score = 70;
            outcome.symptom("Rating hidden from public scan.");
        }
        None => {
            outcome.score = 0;
            outcome.symptom("Could not verify Google Business Profile.");
        }
    }

    outcome
}
