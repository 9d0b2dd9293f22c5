//! Session state for the generator form
//!
//! The configuration is owned by a `Session` and only changes through
//! `Session::update`. The clamp result is recomputed lazily, once per change.

use crate::clamp::builder::build_clamp;
use crate::clamp::error::ClampError;
use crate::clamp::model::{Configuration, Field, FluidClamp, OutputUnit};
use crate::unit::{parse_unit, Unit};
use tracing::debug;

/// How long the "copied" indicator stays on after a copy
pub const COPY_FEEDBACK_MS: f64 = 2000.0;

/// Every state change the form can make
#[derive(Debug, Clone, PartialEq)]
pub enum SessionMsg {
    /// Replace a field's full text ("320px")
    SetField(Field, String),
    /// Replace only the number, keeping the field's current unit label
    SetFieldNumber(Field, String),
    /// Swap the unit label, keeping the number ("320px" -> "320rem")
    ToggleFieldUnit(Field, Unit),
    /// Choose the result rendering
    SetResultUnit(OutputUnit),
    /// Copy pressed at the given time in milliseconds
    Copied { now_ms: f64 },
}

/// "Copied" indicator with a fixed window from the latest copy
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CopyFeedback {
    copied_at_ms: Option<f64>,
}

impl CopyFeedback {
    /// Start (or restart) the window
    pub fn mark(&mut self, now_ms: f64) {
        self.copied_at_ms = Some(now_ms);
    }

    pub fn is_active(&self, now_ms: f64) -> bool {
        match self.copied_at_ms {
            Some(at) => now_ms >= at && now_ms - at < COPY_FEEDBACK_MS,
            None => false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    config: Configuration,
    result_unit: OutputUnit,
    copy_feedback: CopyFeedback,
    cached: Option<Result<FluidClamp, ClampError>>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Configuration::default())
    }
}

impl Session {
    pub fn new(config: Configuration) -> Self {
        Self {
            config,
            result_unit: OutputUnit::default(),
            copy_feedback: CopyFeedback::default(),
            cached: None,
        }
    }

    pub fn with_result_unit(mut self, unit: OutputUnit) -> Self {
        self.result_unit = unit;
        self
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn result_unit(&self) -> OutputUnit {
        self.result_unit
    }

    /// Apply one message. Returns true if anything changed.
    pub fn update(&mut self, msg: SessionMsg) -> bool {
        match msg {
            SessionMsg::SetField(field, value) => self.set_field(field, value),
            SessionMsg::SetFieldNumber(field, number) => {
                let unit = self
                    .config
                    .field(field)
                    .and_then(parse_unit)
                    .and_then(|dim| dim.unit);
                let value = match unit {
                    Some(unit) => format!("{}{}", number, unit),
                    None => number,
                };
                self.set_field(field, value)
            }
            SessionMsg::ToggleFieldUnit(field, unit) => {
                let toggled = self
                    .config
                    .field(field)
                    .and_then(parse_unit)
                    .map(|dim| dim.with_unit(unit).to_string());
                match toggled {
                    Some(value) => self.set_field(field, value),
                    // Nothing to relabel
                    None => false,
                }
            }
            SessionMsg::SetResultUnit(unit) => {
                let changed = self.result_unit != unit;
                self.result_unit = unit;
                changed
            }
            SessionMsg::Copied { now_ms } => {
                self.copy_feedback.mark(now_ms);
                true
            }
        }
    }

    fn set_field(&mut self, field: Field, value: String) -> bool {
        if self.config.field(field) == Some(value.as_str()) {
            return false;
        }
        if !self.config.set_field(field, value) {
            return false;
        }
        self.cached = None;
        true
    }

    /// Current structured result, recomputed only after a field change
    pub fn clamp(&mut self) -> Result<FluidClamp, ClampError> {
        if let Some(cached) = &self.cached {
            return cached.clone();
        }
        debug!("recomputing clamp for {:?}", self.config);
        let result = build_clamp(&self.config);
        self.cached = Some(result.clone());
        result
    }

    /// Rendering in the given unit, empty when the configuration does not build
    pub fn expression(&mut self, unit: OutputUnit) -> String {
        self.clamp()
            .map(|clamp| clamp.render(unit))
            .unwrap_or_default()
    }

    /// Rendering in the selected result unit
    pub fn displayed(&mut self) -> String {
        self.expression(self.result_unit)
    }

    /// Text to put on the clipboard. Marks the copy feedback when there is
    /// something to copy.
    pub fn copy(&mut self, now_ms: f64) -> Option<String> {
        let text = self.displayed();
        if text.is_empty() {
            return None;
        }
        self.update(SessionMsg::Copied { now_ms });
        Some(text)
    }

    pub fn is_copied(&self, now_ms: f64) -> bool {
        self.copy_feedback.is_active(now_ms)
    }

    #[cfg(test)]
    fn is_cached(&self) -> bool {
        self.cached.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_session() {
        let mut session = Session::default();
        assert_eq!(session.result_unit(), OutputUnit::Rem);
        assert_eq!(
            session.displayed(),
            "clamp(1rem, 0.1739rem + 4.1304vw, 3.375rem)"
        );
        session.update(SessionMsg::SetResultUnit(OutputUnit::Px));
        assert_eq!(
            session.displayed(),
            "clamp(16px, 2.7824px + 4.1304vw, 54px)"
        );
    }

    #[test]
    fn test_recompute_only_on_change() {
        let mut session = Session::default();
        assert!(!session.is_cached());
        session.clamp().unwrap();
        assert!(session.is_cached());

        // Same value, no invalidation
        assert!(!session.update(SessionMsg::SetField(Field::MinWidth, "320px".to_string())));
        assert!(session.is_cached());

        // Result unit does not touch the configuration
        session.update(SessionMsg::SetResultUnit(OutputUnit::Px));
        assert!(session.is_cached());

        assert!(session.update(SessionMsg::SetField(Field::MinWidth, "360px".to_string())));
        assert!(!session.is_cached());
        session.clamp().unwrap();
        assert!(session.is_cached());
    }

    #[test]
    fn test_toggle_field_unit() {
        let mut session = Session::default();
        assert!(session.update(SessionMsg::ToggleFieldUnit(Field::MinWidth, Unit::Rem)));
        assert_eq!(session.config().min_width, "320rem");

        // Toggling to the current unit changes nothing
        assert!(!session.update(SessionMsg::ToggleFieldUnit(Field::MinWidth, Unit::Rem)));
    }

    #[test]
    fn test_toggle_unreadable_field() {
        let mut session = Session::default();
        session.update(SessionMsg::SetField(Field::MaxWidth, "wide".to_string()));
        assert!(!session.update(SessionMsg::ToggleFieldUnit(Field::MaxWidth, Unit::Px)));
        assert_eq!(session.config().max_width, "wide");
        assert_eq!(session.displayed(), "");
    }

    #[test]
    fn test_set_field_number_keeps_unit() {
        let mut session = Session::default();
        session.update(SessionMsg::SetFieldNumber(Field::MaxFontSize, "60".to_string()));
        assert_eq!(session.config().max_font_size, "60px");

        session.update(SessionMsg::SetField(Field::MinFontSize, "1".to_string()));
        session.update(SessionMsg::SetFieldNumber(Field::MinFontSize, "2".to_string()));
        assert_eq!(session.config().min_font_size, "2");
    }

    #[test]
    fn test_root_not_editable() {
        let mut session = Session::default();
        assert!(!session.update(SessionMsg::SetField(Field::Root, "20".to_string())));
        assert_eq!(session.config().root, 16);
    }

    #[test]
    fn test_invalid_field_displays_nothing() {
        let mut session = Session::default();
        session.update(SessionMsg::SetField(Field::MinFontSize, "0px".to_string()));
        assert_eq!(session.displayed(), "");
        assert_eq!(
            session.clamp(),
            Err(ClampError::MissingField(Field::MinFontSize))
        );
        assert_eq!(session.copy(0.0), None);
        assert!(!session.is_copied(0.0));
    }

    #[test]
    fn test_copy_feedback_window() {
        let mut session = Session::default();
        let text = session.copy(1000.0).unwrap();
        assert_eq!(text, "clamp(1rem, 0.1739rem + 4.1304vw, 3.375rem)");
        assert!(session.is_copied(1000.0));
        assert!(session.is_copied(2999.0));
        assert!(!session.is_copied(3000.0));
    }

    #[test]
    fn test_copy_restarts_window() {
        let mut session = Session::default();
        session.copy(0.0);
        session.copy(1500.0);
        assert!(session.is_copied(2500.0));
        assert!(session.is_copied(3499.0));
        assert!(!session.is_copied(3500.0));
    }

    #[test]
    fn test_copy_uses_displayed_unit() {
        let mut session = Session::default().with_result_unit(OutputUnit::Px);
        assert_eq!(
            session.copy(0.0).as_deref(),
            Some("clamp(16px, 2.7824px + 4.1304vw, 54px)")
        );
    }
}
