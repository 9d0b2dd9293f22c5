// Form state, startup settings and input checks around the clamp builder

#[cfg(not(target_arch = "wasm32"))]
pub mod clipboard;
pub mod config;
pub mod state;
pub mod validation;

pub use config::{ConfigError, Settings};
pub use state::{CopyFeedback, Session, SessionMsg, COPY_FEEDBACK_MS};
pub use validation::{validate_configuration, FieldWarning, ValidationResult};
