use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex pattern to detect a complete dimension token
    /// Matches: optional sign + number (optional decimal) + a recognized CSS unit, nothing else
    /// Examples: "320px", "1.5rem", "-2em", "50%", "100vw"
    static ref DIMENSION_PATTERN: Regex = Regex::new(
        r"^-?(\d+(\.\d*)?|\.\d+)(px|rem|em|%|vw|vh)$"
    ).unwrap();
}

/// Check if a string is a single well-formed dimension with a unit suffix
pub fn looks_like_dimension(s: &str) -> bool {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return false;
    }

    DIMENSION_PATTERN.is_match(trimmed)
}
