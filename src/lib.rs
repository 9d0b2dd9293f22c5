pub mod clamp;
pub mod session;
pub mod unit;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use clamp::{build_clamp, build_clamp_expression, to_pixel_expression};
pub use unit::parse_unit;
