use crate::unit::types::{Dimension, Unit};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Leading "<number><unit>" token; anything after it is ignored
    static ref LEADING_DIMENSION: Regex =
        Regex::new(r"^(-?[0-9.]+)(px|rem|em|%|vw|vh)?").unwrap();

    /// Longest float prefix of the captured number text ("1.2.3" reads as 1.2)
    static ref FLOAT_PREFIX: Regex = Regex::new(r"^-?(\d+\.?\d*|\.\d+)").unwrap();

    /// Lenient read used when the text does not start with a number token,
    /// e.g. " 12" or "+5"
    static ref LENIENT_FLOAT: Regex =
        Regex::new(r"^\s*([+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?)").unwrap();
}

/// Parse a field value such as "320px" or "1.5rem"
///
/// Returns `None` when no number can be read from the start of the text.
pub fn parse_unit(raw: &str) -> Option<Dimension> {
    if let Some(caps) = LEADING_DIMENSION.captures(raw) {
        let magnitude = read_float_prefix(&caps[1])?;
        let unit = caps.get(2).and_then(|m| m.as_str().parse::<Unit>().ok());
        return Some(Dimension::new(magnitude, unit));
    }

    let caps = LENIENT_FLOAT.captures(raw)?;
    caps[1].parse::<f64>().ok().map(Dimension::from)
}

fn read_float_prefix(text: &str) -> Option<f64> {
    let m = FLOAT_PREFIX.find(text)?;
    m.as_str().parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_units() {
        let dim = parse_unit("320px").unwrap();
        assert_eq!(dim.magnitude, 320.0);
        assert_eq!(dim.unit, Some(Unit::Px));

        let dim = parse_unit("1.5rem").unwrap();
        assert_eq!(dim.magnitude, 1.5);
        assert_eq!(dim.unit, Some(Unit::Rem));

        assert_eq!(parse_unit("2em").unwrap().unit, Some(Unit::Em));
        assert_eq!(parse_unit("50%").unwrap().unit, Some(Unit::Percent));
        assert_eq!(parse_unit("100vw").unwrap().unit, Some(Unit::Vw));
        assert_eq!(parse_unit("100vh").unwrap().unit, Some(Unit::Vh));
    }

    #[test]
    fn test_parse_without_unit() {
        let dim = parse_unit("320").unwrap();
        assert_eq!(dim.magnitude, 320.0);
        assert_eq!(dim.unit, None);

        // Unknown suffix is ignored, not rejected
        let dim = parse_unit("12pt").unwrap();
        assert_eq!(dim.magnitude, 12.0);
        assert_eq!(dim.unit, None);
    }

    #[test]
    fn test_parse_negative_and_fractional() {
        let dim = parse_unit("-2.25rem").unwrap();
        assert_eq!(dim.magnitude, -2.25);
        assert_eq!(dim.unit, Some(Unit::Rem));

        assert_eq!(parse_unit(".5rem").unwrap().magnitude, 0.5);
        assert_eq!(parse_unit("5.px").unwrap().magnitude, 5.0);
    }

    #[test]
    fn test_trailing_text_ignored() {
        let dim = parse_unit("320px wide").unwrap();
        assert_eq!(dim.magnitude, 320.0);
        assert_eq!(dim.unit, Some(Unit::Px));

        // Only the first fractional part counts
        let dim = parse_unit("1.2.3px").unwrap();
        assert_eq!(dim.magnitude, 1.2);
        assert_eq!(dim.unit, Some(Unit::Px));
    }

    #[test]
    fn test_lenient_fallback() {
        let dim = parse_unit("  12px").unwrap();
        assert_eq!(dim.magnitude, 12.0);
        assert_eq!(dim.unit, None);

        assert_eq!(parse_unit("+5").unwrap().magnitude, 5.0);
    }

    #[test]
    fn test_no_number() {
        assert!(parse_unit("").is_none());
        assert!(parse_unit("px").is_none());
        assert!(parse_unit("abc").is_none());
        assert!(parse_unit(".").is_none());
        assert!(parse_unit("-.rem").is_none());
    }
}
