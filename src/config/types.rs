use serde::{Deserialize, Serialize};

/// Top-level configuration, loaded from YAML and overridable per-flag.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ClinicpulseConfig {
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub audit: EngineConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Default attempt budget per fetch.
    pub retries: u32,
    /// Fixed delay between attempts.
    pub retry_delay_ms: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 5,
            retries: 2,
            retry_delay_ms: 1000,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Concurrent analyzer slots per audit.
    pub parallelism: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { parallelism: 5 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Append records to a local JSON file.
    #[default]
    File,
    /// POST records to a remote document-store endpoint.
    Remote,
    /// Keep records in-process only (testing, dry runs).
    Memory,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    /// Record file path for the `file` backend.
    pub path: String,
    /// Collection endpoint for the `remote` backend.
    pub endpoint: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::File,
            path: "clinicpulse_records.json".to_string(),
            endpoint: None,
        }
    }
}
