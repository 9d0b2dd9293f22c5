use crate::clamp::model::{round4, FluidClamp, OutputUnit};
use crate::unit::types::format_number;

impl FluidClamp {
    /// Magnitudes in the requested unit: (min, preferred, max)
    pub fn magnitudes(&self, unit: OutputUnit) -> (f64, f64, f64) {
        match unit {
            OutputUnit::Rem => (self.min, self.preferred, self.max),
            OutputUnit::Px => {
                let root = f64::from(self.root);
                (
                    round4(self.min * root),
                    round4(self.preferred * root),
                    round4(self.max * root),
                )
            }
        }
    }

    /// `clamp(<min>, <preferred> + <vw>vw, <max>)` in the requested unit
    ///
    /// The vw coefficient is the same in both renderings.
    pub fn render(&self, unit: OutputUnit) -> String {
        let (min, preferred, max) = self.magnitudes(unit);
        format_clamp(
            &format_number(min),
            &format_number(preferred),
            &format_number(self.vw),
            &format_number(max),
            unit.suffix(),
        )
    }
}

pub(crate) fn format_clamp(min: &str, preferred: &str, vw: &str, max: &str, unit: &str) -> String {
    format!("clamp({min}{unit}, {preferred}{unit} + {vw}vw, {max}{unit})")
}

/// Both renderings of one result, for JSON output
#[derive(Debug, Clone, serde::Serialize)]
pub struct RenderedClamp {
    pub rem: String,
    pub px: String,
    #[serde(flatten)]
    pub clamp: FluidClamp,
}

impl From<FluidClamp> for RenderedClamp {
    fn from(clamp: FluidClamp) -> Self {
        Self {
            rem: clamp.render(OutputUnit::Rem),
            px: clamp.render(OutputUnit::Px),
            clamp,
        }
    }
}
