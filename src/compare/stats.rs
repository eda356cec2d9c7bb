//! Numeric parsing for the head-to-head stats
//!
//! OMDb reports everything as display strings ("$206,863,479", "N/A",
//! "Won 1 Oscar. 14 wins & 79 nominations total"); scoring needs plain
//! numbers and must treat "N/A" as absent rather than zero.

/// Parse a dollar amount like "$206,863,479"
pub fn parse_dollars(value: &str) -> Option<f64> {
    let cleaned: String = value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse().ok()
}

/// Parse a comma-grouped count like "1,614,082"
pub fn parse_count(value: &str) -> Option<f64> {
    let cleaned: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse().ok()
}

/// Parse a plain decimal like "8.2" or "70"
pub fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse().ok()
}

/// Sum every number in an awards sentence: "Won 1 Oscar. 14 wins & 79
/// nominations total" scores 94.
pub fn parse_awards(value: &str) -> Option<f64> {
    let mut total = 0.0;
    let mut found = false;
    for word in value.split_whitespace() {
        let trimmed = word.trim_matches(|c: char| !c.is_ascii_digit());
        if let Ok(n) = trimmed.parse::<f64>() {
            total += n;
            found = true;
        }
    }
    found.then_some(total)
}
