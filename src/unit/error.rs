use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    #[error("Invalid unit: {0} (expected px, rem, em, %, vw or vh)")]
    InvalidUnit(String),
}
