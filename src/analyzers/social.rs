//! Social-presence analyzer for Instagram and Facebook.
//!
//! Platform pages routinely hide stats behind login walls while still
//! proving the account exists, so a reachable-but-unparseable profile
//! earns partial credit instead of zero ("soft-fail"). The score deltas
//! here are product policy; change them deliberately, not in passing.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::fetch::{Document, FetchResult, Fetcher};
use crate::models::{AnalyzerOutcome, SocialLinks};
use crate::utils::text::parse_compact_count;

static FOLLOWERS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d[\d,.]*[km]?)\s+followers").unwrap());
static POSTS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d[\d,.]*[km]?)\s+posts").unwrap());

/// Accept a full profile URL, an `@handle`, or a bare handle.
pub fn expand_instagram_url(value: &str) -> String {
    let value = value.trim();
    if value.contains("instagram.com") {
        value.to_string()
    } else {
        format!(
            "https://www.instagram.com/{}/",
            value.trim_start_matches('@')
        )
    }
}

pub async fn analyze(fetcher: &Fetcher, links: &SocialLinks) -> AnalyzerOutcome {
    let mut outcome = AnalyzerOutcome::new(0);
    let mut total: i32 = 0;

    match links.instagram.as_deref().filter(|l| !l.trim().is_empty()) {
        Some(link) => {
            let url = expand_instagram_url(link);
            let fetched = fetcher.fetch(&url, 1).await;
            total += grade_instagram(&fetched, &mut outcome);
        }
        None => outcome.symptom("No Instagram profile provided."),
    }

    match links.facebook.as_deref().filter(|l| !l.trim().is_empty()) {
        Some(link) => {
            let fetched = fetcher.fetch(link, 1).await;
            total += grade_facebook(&fetched, &mut outcome);
        }
        None => outcome.symptom("No Facebook page provided."),
    }

    outcome.score = total.clamp(0, 100) as u8;
    debug!(score = outcome.score, "Social presence graded");
    outcome
}

/// Instagram contribution: 50 for verifiable followers (minus 10 when
/// the account has zero posts), 40 when the page exists but hides stats.
pub fn grade_instagram<D: Document>(
    fetched: &FetchResult<D>,
    outcome: &mut AnalyzerOutcome,
) -> i32 {
    let Some(doc) = fetched.document.as_ref().filter(|_| fetched.reachable) else {
        outcome.symptom("Instagram unreachable.");
        return 0;
    };

    let meta = doc
        .meta_content("og:description")
        .or_else(|| doc.meta_content("description"));

    match meta {
        Some(meta) => {
            if let Some(followers) = FOLLOWERS_RE
                .captures(meta)
                .and_then(|c| c.get(1))
                .map(|m| m.as_str().to_string())
            {
                outcome.metric("instagram_followers", followers);
                outcome.metric("instagram_status", "Active");

                let mut points = 50;
                let posts = POSTS_RE
                    .captures(meta)
                    .and_then(|c| c.get(1))
                    .and_then(|m| parse_compact_count(m.as_str()));
                if posts == Some(0.0) {
                    points -= 10;
                    outcome.symptom("Instagram account has 0 posts.");
                }
                points
            } else {
                outcome.metric("instagram_status", "Active (Private)");
                40
            }
        }
        None => {
            outcome.metric("instagram_status", "Active (Login Block)");
            40
        }
    }
}

/// Facebook contribution: 50 with meta evidence, 45 when only the page
/// title confirms it, 40 when merely reachable.
pub fn grade_facebook<D: Document>(
    fetched: &FetchResult<D>,
    outcome: &mut AnalyzerOutcome,
) -> i32 {
    let Some(doc) = fetched.document.as_ref().filter(|_| fetched.reachable) else {
        outcome.symptom("Facebook unreachable.");
        return 0;
    };

    let has_meta = doc
        .meta_content("og:description")
        .or_else(|| doc.meta_content("description"))
        .is_some();

    if has_meta {
        outcome.metric("facebook_status", "Active");
        50
    } else if doc
        .title()
        .is_some_and(|t| t.to_lowercase().contains("facebook"))
    {
        outcome.metric("facebook_status", "Verified Page (Hidden Stats)");
        45
    } else {
        outcome.metric("facebook_status", "Page Accessible (Stats Hidden)");
        40
    }
}
