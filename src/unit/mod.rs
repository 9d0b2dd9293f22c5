// CSS length parsing for the clamp builder
// Reads "<number><unit>" field text into a Dimension

pub mod detector;
pub mod error;
pub mod parser;
pub mod types;

pub use detector::looks_like_dimension;
pub use error::UnitError;
pub use parser::parse_unit;
pub use types::{Dimension, Unit};
