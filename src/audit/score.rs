//! Fixed category weights and score composition.

use crate::models::AnalyzerOutcome;

pub const WEIGHT_STRUCTURAL: f64 = 0.30;
pub const WEIGHT_PULSE: f64 = 0.30;
pub const WEIGHT_CONVERSION: f64 = 0.20;
pub const WEIGHT_TRACKING: f64 = 0.20;

/// Fold two analyzer outcomes into one category: scores averaged and
/// rounded, metrics and symptoms concatenated in argument order.
pub fn merge_category(first: AnalyzerOutcome, second: AnalyzerOutcome) -> AnalyzerOutcome {
    let score = ((first.score as f64 + second.score as f64) / 2.0).round() as u8;
    let mut metrics = first.metrics;
    metrics.extend(second.metrics);
    let mut symptoms = first.symptoms;
    symptoms.extend(second.symptoms);
    AnalyzerOutcome {
        score,
        metrics,
        symptoms,
    }
}

/// Weighted composite over the four category scores, rounded once.
pub fn overall_health(structural: u8, pulse: u8, conversion: u8, tracking: u8) -> u8 {
    let weighted = structural as f64 * WEIGHT_STRUCTURAL
        + pulse as f64 * WEIGHT_PULSE
        + conversion as f64 * WEIGHT_CONVERSION
        + tracking as f64 * WEIGHT_TRACKING;
    weighted.round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_one() {
        let sum = WEIGHT_STRUCTURAL + WEIGHT_PULSE + WEIGHT_CONVERSION + WEIGHT_TRACKING;
        assert!((sum - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_overall_health_extremes() {
        assert_eq!(overall_health(0, 0, 0, 0), 0);
        assert_eq!(overall_health(100, 100, 100, 100), 100);
    }

    #[test]
    fn test_overall_health_rounds_once() {
        // 60*0.3 + 70*0.3 + 55*0.2 + 45*0.2 = 18 + 21 + 11 + 9 = 59
        assert_eq!(overall_health(60, 70, 55, 45), 59);
        // 61*0.3 + 70*0.3 + 55*0.2 + 45*0.2 = 59.3 -> 59
        assert_eq!(overall_health(61, 70, 55, 45), 59);
        // 62*0.3 -> 59.6 -> 60
        assert_eq!(overall_health(62, 70, 55, 45), 60);
    }

    #[test]
    fn test_merge_category_averages_and_orders() {
        let mut a = AnalyzerOutcome::new(95);
        a.metric("load_time", "0.40s");
        a.symptom("first");
        let mut b = AnalyzerOutcome::new(60);
        b.metric("h1_count", 2usize);
        b.symptom("second");

        let merged = merge_category(a, b);
        // (95 + 60) / 2 = 77.5 -> 78
        assert_eq!(merged.score, 78);
        assert_eq!(merged.symptoms, vec!["first", "second"]);
        assert!(merged.metrics.contains_key("load_time"));
        assert!(merged.metrics.contains_key("h1_count"));
    }
}
