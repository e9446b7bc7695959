//! Tracking analyzer: does the site measure anything at all?
//!
//! Looks for the Meta Pixel and Google tag call signatures in the raw
//! page source. Script bodies are often minified, so this is a substring
//! scan rather than a parse.

use crate::fetch::{Document, FetchResult, Fetcher};
use crate::models::AnalyzerOutcome;

const PIXEL_SIGNATURES: &[&str] = &["fbq(", "connect.facebook.net/en_US/fbevents.js"];
const ANALYTICS_SIGNATURES: &[&str] = &["gtag(", "googletagmanager.com", "google-analytics.com"];

pub async fn analyze(fetcher: &Fetcher, url: &str) -> AnalyzerOutcome {
    score_tracking(&fetcher.fetch_default(url).await)
}

pub fn score_tracking<D: Document>(fetched: &FetchResult<D>) -> AnalyzerOutcome {
    let Some(doc) = fetched.document.as_ref().filter(|_| fetched.reachable) else {
        // Unreachable tracking scan stays silent: the structural scan
        // already carries the outage symptom.
        return AnalyzerOutcome::new(0);
    };

    let mut score: i32 = 50;
    let mut outcome = AnalyzerOutcome::new(0);

    let pixel = PIXEL_SIGNATURES.iter().any(|sig| doc.raw().contains(sig));
    if pixel {
        score += 25;
    } else {
        outcome.symptom("No Facebook Pixel detected.");
    }

    let analytics = ANALYTICS_SIGNATURES.iter().any(|sig| doc.raw().contains(sig));
    if analytics {
        score += 25;
    } else {
        outcome.symptom("No Google Analytics detected.");
    }

    outcome.metric("fb_pixel", pixel);
    outcome.metric("google_analytics", analytics);
    outcome.score = score.clamp(0, 100) as u8;
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::PageDocument;

    fn reached(html: &str) -> FetchResult {
        FetchResult::reached(PageDocument::parse(html), 0.5)
    }

    #[test]
    fn test_both_tags_score_100() {
        let outcome = score_tracking(&reached(
            r#"<html><head><script>fbq('init','123');gtag('config','G-1');</script></head></html>"#,
        ));
        assert_eq!(outcome.score, 100);
        assert!(outcome.symptoms.is_empty());
    }

    #[test]
    fn test_script_src_signatures_count() {
        let outcome = score_tracking(&reached(
            r#"<html><head>
            <script src="https://connect.facebook.net/en_US/fbevents.js"></script>
            <script src="https://www.googletagmanager.com/gtag/js?id=G-1"></script>
            </head></html>"#,
        ));
        assert_eq!(outcome.score, 100);
    }

    #[test]
    fn test_untracked_site_scores_base_50() {
        let outcome = score_tracking(&reached("<html><body>hello</body></html>"));
        assert_eq!(outcome.score, 50);
        assert_eq!(
            outcome.symptoms,
            vec!["No Facebook Pixel detected.", "No Google Analytics detected."]
        );
        assert_eq!(outcome.metrics["fb_pixel"], false.into());
    }

    #[test]
    fn test_pixel_only() {
        let outcome = score_tracking(&reached(
            "<html><head><script>fbq('init','1');</script></head></html>",
        ));
        assert_eq!(outcome.score, 75);
        assert_eq!(outcome.symptoms, vec!["No Google Analytics detected."]);
    }

    #[test]
    fn test_unreachable_is_silent_zero() {
        let outcome = score_tracking(&FetchResult::<PageDocument>::unreachable(5.0));
        assert_eq!(outcome.score, 0);
        assert!(outcome.symptoms.is_empty());
        assert!(outcome.metrics.is_empty());
    }
}
