use crate::clamp::formatter::format_clamp;
use crate::clamp::model::round4;
use crate::unit::types::format_number;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref REM_TOKEN: Regex = Regex::new(r"(-?[0-9.]+)rem").unwrap();
    static ref VW_TOKEN: Regex = Regex::new(r"(-?[0-9.]+)vw").unwrap();
}

/// Re-render a rem clamp expression in pixels by reading its numbers back
///
/// Works on text only. Anything that does not carry three rem numbers and a
/// vw number is returned unchanged. Prefer `FluidClamp::render` when the
/// structured result is at hand.
pub fn to_pixel_expression(expr: &str, root: u32) -> String {
    if expr.is_empty() {
        return String::new();
    }

    let rems: Vec<f64> = REM_TOKEN
        .captures_iter(expr)
        .take(3)
        .filter_map(|caps| caps[1].parse::<f64>().ok())
        .collect();
    if rems.len() < 3 {
        return expr.to_string();
    }

    // The vw coefficient is carried through as written
    let vw = match VW_TOKEN.captures(expr) {
        Some(caps) => caps[1].to_string(),
        None => return expr.to_string(),
    };

    let px: Vec<String> = rems
        .iter()
        .map(|rem| format_number(round4(rem * f64::from(root))))
        .collect();

    format_clamp(&px[0], &px[1], &vw, &px[2], "px")
}
