//! Best-effort scraping client.
//!
//! One GET per attempt with a rotated User-Agent/Referer pair, a short
//! timeout, and a fixed delay between retries. Failures never propagate:
//! every outcome collapses into a `FetchResult`, and `reachable = false`
//! is the only failure signal analyzers ever see.

use std::time::{Duration, Instant};

use rand::seq::SliceRandom;
use reqwest::header::{REFERER, USER_AGENT};
use reqwest::StatusCode;
use tracing::debug;

use crate::config::FetchConfig;
use crate::errors::AuditError;

use super::document::{Document, PageDocument};

/// Outcome of one fetch attempt sequence. `elapsed` covers the whole
/// sequence and doubles as the latency proxy downstream.
#[derive(Debug, Clone)]
pub struct FetchResult<D: Document = PageDocument> {
    pub document: Option<D>,
    pub elapsed: f64,
    pub reachable: bool,
}

impl<D: Document> FetchResult<D> {
    pub fn reached(document: D, elapsed: f64) -> Self {
        Self {
            document: Some(document),
            elapsed,
            reachable: true,
        }
    }

    pub fn unreachable(elapsed: f64) -> Self {
        Self {
            document: None,
            elapsed,
            reachable: false,
        }
    }
}

/// Rotated to keep trivial bot-blocking from zeroing every audit.
const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/130.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.5 Safari/605.1.15",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:132.0) Gecko/20100101 Firefox/132.0",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/129.0.0.0 Safari/537.36",
];

const REFERERS: &[&str] = &[
    "https://www.google.com/",
    "https://www.bing.com/",
    "https://duckduckgo.com/",
];

/// Prefix a scheme when the intake value omits one.
pub fn normalize_url(url: &str) -> String {
    let trimmed = url.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}

pub struct Fetcher {
    client: reqwest::Client,
    retry_delay: Duration,
    default_retries: u32,
}

enum AttemptOutcome {
    Ok(String),
    /// 404 means the target definitively does not exist; never retried.
    Gone,
}

impl Fetcher {
    pub fn new(config: &FetchConfig) -> Result<Self, AuditError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .redirect(reqwest::redirect::Policy::limited(5))
            .cookie_store(true)
            // Marketing pages with broken cert chains still carry signal.
            .danger_accept_invalid_certs(true)
            .build()
            .map_err(|e| AuditError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            retry_delay: Duration::from_millis(config.retry_delay_ms),
            default_retries: config.retries,
        })
    }

    /// Fetch with the configured default retry budget.
    pub async fn fetch_default(&self, url: &str) -> FetchResult {
        self.fetch(url, self.default_retries).await
    }

    /// GET `url`, retrying transient failures up to `retries` times
    /// after the initial attempt.
    ///
    /// Never returns an error: exhausted retries, hard 4xx/5xx and
    /// transport failures all collapse into `reachable = false`.
    pub async fn fetch(&self, url: &str, retries: u32) -> FetchResult {
        let url = normalize_url(url);
        let attempts = retries + 1;
        let start = Instant::now();

        for attempt in 0..attempts {
            match self.attempt(&url).await {
                Ok(AttemptOutcome::Ok(body)) => {
                    let elapsed = start.elapsed().as_secs_f64();
                    debug!(url = %url, elapsed_s = format!("{:.2}", elapsed), "Fetch succeeded");
                    return FetchResult::reached(PageDocument::parse(&body), elapsed);
                }
                Ok(AttemptOutcome::Gone) => {
                    debug!(url = %url, "Target returned 404, not retrying");
                    return FetchResult::unreachable(start.elapsed().as_secs_f64());
                }
                Err(e) => {
                    debug!(url = %url, attempt = attempt + 1, max = attempts, error = %e, "Fetch attempt failed");
                    if attempt + 1 < attempts {
                        tokio::time::sleep(self.retry_delay).await;
                    }
                }
            }
        }

        FetchResult::unreachable(start.elapsed().as_secs_f64())
    }

    async fn attempt(&self, url: &str) -> Result<AttemptOutcome, AuditError> {
        let (ua, referer) = {
            let mut rng = rand::thread_rng();
            (
                *USER_AGENTS.choose(&mut rng).unwrap_or(&USER_AGENTS[0]),
                *REFERERS.choose(&mut rng).unwrap_or(&REFERERS[0]),
            )
        };

        let resp = self
            .client
            .get(url)
            .header(USER_AGENT, ua)
            .header(REFERER, referer)
            .send()
            .await
            .map_err(|e| AuditError::Network(format!("Request failed: {}", e)))?;

        match resp.status() {
            StatusCode::OK => {
                let body = resp
                    .text()
                    .await
                    .map_err(|e| AuditError::Network(format!("Body read failed: {}", e)))?;
                Ok(AttemptOutcome::Ok(body))
            }
            StatusCode::NOT_FOUND => Ok(AttemptOutcome::Gone),
            status => Err(AuditError::Network(format!(
                "Unexpected status {} from {}",
                status, url
            ))),
        }
    }
}
