use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single scalar diagnostic metric attached to an analyzer outcome.
///
/// Untagged so the JSON export reads as plain values and round-trips
/// exactly (integers stay integers, floats stay floats).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<bool> for MetricValue {
    fn from(v: bool) -> Self {
        MetricValue::Bool(v)
    }
}

impl From<i64> for MetricValue {
    fn from(v: i64) -> Self {
        MetricValue::Int(v)
    }
}

impl From<usize> for MetricValue {
    fn from(v: usize) -> Self {
        MetricValue::Int(v as i64)
    }
}

impl From<f64> for MetricValue {
    fn from(v: f64) -> Self {
        MetricValue::Float(v)
    }
}

impl From<&str> for MetricValue {
    fn from(v: &str) -> Self {
        MetricValue::Text(v.to_string())
    }
}

impl From<String> for MetricValue {
    fn from(v: String) -> Self {
        MetricValue::Text(v)
    }
}

/// Result of one analyzer pass: a normalized score plus diagnostics.
///
/// `symptoms` are human-readable deficiency notes in detection order;
/// `metrics` hold the raw signals the score was derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerOutcome {
    pub score: u8,
    pub metrics: BTreeMap<String, MetricValue>,
    pub symptoms: Vec<String>,
}

impl AnalyzerOutcome {
    pub fn new(score: u8) -> Self {
        Self {
            score,
            metrics: BTreeMap::new(),
            symptoms: Vec::new(),
        }
    }

    /// Outcome for a target that could not be reached at all.
    pub fn unreachable(symptom: impl Into<String>) -> Self {
        let mut outcome = Self::new(0);
        outcome.symptoms.push(symptom.into());
        outcome
    }

    pub fn metric(&mut self, key: &str, value: impl Into<MetricValue>) {
        self.metrics.insert(key.to_string(), value.into());
    }

    pub fn symptom(&mut self, text: impl Into<String>) {
        self.symptoms.push(text.into());
    }
}

/// Clamp a running signed score into the 0-100 band.
pub fn clamp_score(raw: i32) -> u8 {
    raw.clamp(0, 100) as u8
}
