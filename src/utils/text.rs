/// Truncate to `max` characters, appending an ellipsis when cut.
pub fn truncate_with_ellipsis(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{}...", cut.trim_end())
    }
}

/// Parse social-style compact counts: "1,204", "1.2k", "3M", "0".
///
/// Returns `None` when nothing numeric leads the string.
pub fn parse_compact_count(value: &str) -> Option<f64> {
    let value = value.trim();
    let digits: String = value
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .collect();
    if digits.is_empty() || !digits.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        return None;
    }

    let number: f64 = digits.replace(',', "").parse().ok()?;
    let multiplier = match value[digits.len()..].chars().next() {
        Some('k') | Some('K') => 1_000.0,
        Some('m') | Some('M') => 1_000_000.0,
        _ => 1.0,
    };
    Some(number * multiplier)
}

/// Case-insensitive "any of these substrings" check.
pub fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    let lower = haystack.to_lowercase();
    needles.iter().any(|n| lower.contains(&n.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string_untouched() {
        assert_eq!(truncate_with_ellipsis("City Dental", 50), "City Dental");
    }

    #[test]
    fn test_truncate_long_string() {
        let long = "a".repeat(60);
        let cut = truncate_with_ellipsis(&long, 50);
        assert_eq!(cut.len(), 53);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn test_parse_compact_count_plain_and_commas() {
        assert_eq!(parse_compact_count("1204"), Some(1204.0));
        assert_eq!(parse_compact_count("1,204"), Some(1204.0));
        assert_eq!(parse_compact_count("0"), Some(0.0));
    }

    #[test]
    fn test_parse_compact_count_suffixes() {
        assert_eq!(parse_compact_count("1.2k"), Some(1200.0));
        assert_eq!(parse_compact_count("3M"), Some(3_000_000.0));
        assert_eq!(parse_compact_count("12K"), Some(12_000.0));
    }

    #[test]
    fn test_parse_compact_count_garbage() {
        assert_eq!(parse_compact_count("followers"), None);
        assert_eq!(parse_compact_count(""), None);
        assert_eq!(parse_compact_count(".5"), None);
    }

    #[test]
    fn test_contains_any() {
        assert!(contains_any("Book an Appointment now", &["book", "schedule"]));
        assert!(!contains_any("Our services", &["book", "schedule"]));
    }
}
