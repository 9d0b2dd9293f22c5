use crate::clamp::error::ClampError;
use crate::clamp::model::{round4, Configuration, Field, FluidClamp, LinearModel, OutputUnit};
use crate::unit::{parse_unit, Dimension, Unit};
use tracing::{debug, warn};

/// Build the structured clamp result for a configuration
///
/// Fails when a field is empty or zero, a field has no readable number, or
/// both widths normalize to the same value.
pub fn build_clamp(config: &Configuration) -> Result<FluidClamp, ClampError> {
    // Every required value is checked before any arithmetic
    for field in Field::INPUTS {
        let raw = config.field(field).unwrap_or_default();
        if is_missing(raw) {
            return Err(ClampError::MissingField(field));
        }
    }
    if config.root == 0 {
        return Err(ClampError::MissingField(Field::Root));
    }

    let min_font_size = to_rem(config, Field::MinFontSize)?;
    let max_font_size = to_rem(config, Field::MaxFontSize)?;
    let min_width = to_rem(config, Field::MinWidth)?;
    let max_width = to_rem(config, Field::MaxWidth)?;

    if max_width == min_width {
        return Err(ClampError::DegenerateWidthRange);
    }

    let slope = (max_font_size - min_font_size) / (max_width - min_width);
    let y_axis_intersection = round4(-min_width * slope + min_font_size);

    debug!(slope, y_axis_intersection, "computed linear model");

    Ok(FluidClamp {
        min: min_font_size,
        preferred: y_axis_intersection,
        vw: round4(slope * 100.0),
        max: max_font_size,
        root: config.root,
        model: LinearModel {
            slope,
            y_axis_intersection,
        },
    })
}

/// rem rendering of the configuration, or an empty string when it cannot be built
pub fn build_clamp_expression(config: &Configuration) -> String {
    match build_clamp(config) {
        Ok(clamp) => clamp.render(OutputUnit::Rem),
        Err(e) => {
            warn!("no clamp expression: {}", e);
            String::new()
        }
    }
}

/// Normalize a dimension to rem. rem values pass through untouched; every
/// other unit (and a bare number) counts as pixels.
pub fn normalize_to_rem(dim: Dimension, root: u32) -> f64 {
    match dim.unit {
        Some(Unit::Rem) => dim.magnitude,
        _ => round4(dim.magnitude / f64::from(root)),
    }
}

fn is_missing(raw: &str) -> bool {
    if raw.trim().is_empty() {
        return true;
    }
    matches!(parse_unit(raw), Some(dim) if dim.magnitude == 0.0)
}

fn to_rem(config: &Configuration, field: Field) -> Result<f64, ClampError> {
    let raw = config.field(field).unwrap_or_default();
    let invalid = || ClampError::InvalidDimension {
        field,
        value: raw.to_string(),
    };

    let dim = parse_unit(raw).ok_or_else(invalid)?;
    let rem = normalize_to_rem(dim, config.root);
    if !rem.is_finite() {
        return Err(invalid());
    }
    Ok(rem)
}
