//! Conversion-readiness analyzer: can a visitor actually become a patient?

use crate::fetch::{Document, FetchResult, Fetcher};
use crate::models::AnalyzerOutcome;
use crate::utils::text::contains_any;

const BOOKING_KEYWORDS: &[&str] = &["book", "appointment", "schedule"];
const CHAT_KEYWORDS: &[&str] = &["whatsapp", "chat"];

pub async fn analyze(fetcher: &Fetcher, url: &str) -> AnalyzerOutcome {
    score_conversion(&fetcher.fetch_default(url).await)
}

pub fn score_conversion<D: Document>(fetched: &FetchResult<D>) -> AnalyzerOutcome {
    let Some(doc) = fetched.document.as_ref().filter(|_| fetched.reachable) else {
        return AnalyzerOutcome::unreachable("Site unreachable for conversion scan.");
    };

    let mut score: i32 = 40;
    let mut outcome = AnalyzerOutcome::new(0);

    let click_to_call = doc.has_tel_link();
    if click_to_call {
        score += 20;
    } else {
        outcome.symptom("No click-to-call (tel:) link found.");
    }

    let booking = contains_any(doc.text(), BOOKING_KEYWORDS);
    if booking {
        score += 20;
    } else {
        outcome.symptom("No booking or appointment affordance detected.");
    }

    let chat = contains_any(doc.text(), CHAT_KEYWORDS);
    if chat {
        score += 20;
    } else {
        outcome.symptom("No chat or WhatsApp channel detected.");
    }

    outcome.metric("click_to_call", click_to_call);
    outcome.metric("booking_keywords", booking);
    outcome.metric("chat_channel", chat);
    outcome.score = score.clamp(0, 100) as u8;
    outcome
}
