// Fluid typography: two (width, font-size) points -> CSS clamp()

pub mod builder;
pub mod error;
pub mod formatter;
pub mod model;
pub mod reexpress;


pub use builder::*;
pub use error::ClampError;
pub use formatter::*;
pub use model::*;
pub use reexpress::to_pixel_expression;
