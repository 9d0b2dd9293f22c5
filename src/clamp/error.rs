use crate::clamp::model::Field;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClampError {
    /// Empty, zero or absent value
    #[error("{0} is required and must be non-zero")]
    MissingField(Field),
    #[error("{field} has no readable number: '{value}'")]
    InvalidDimension { field: Field, value: String },
    #[error("min width and max width are equal, no interpolation range")]
    DegenerateWidthRange,
}
