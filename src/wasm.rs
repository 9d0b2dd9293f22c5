// WebAssembly bindings for the clamp generator page
use crate::clamp;
use crate::clamp::model::{Configuration, Field, OutputUnit};
use crate::clamp::RenderedClamp;
use crate::session::{Session, SessionMsg};
use crate::unit::Unit;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct ClampWasm {
    session: Session,
}

impl Default for ClampWasm {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_field(name: &str) -> Result<Field, JsValue> {
    name.parse::<Field>().map_err(|e| JsValue::from_str(&e))
}

fn parse_output_unit(unit: &str) -> Result<OutputUnit, JsValue> {
    unit.parse::<OutputUnit>().map_err(|e| JsValue::from_str(&e))
}

#[wasm_bindgen]
impl ClampWasm {
    /// Session with the default fields (320px, 1240px, 16px, 54px)
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            session: Session::default(),
        }
    }

    /// Current text of a field ("minWidth", "maxWidth", "minFontSize", "maxFontSize")
    #[wasm_bindgen]
    pub fn field(&self, name: &str) -> Result<String, JsValue> {
        let field = parse_field(name)?;
        self.session
            .config()
            .field(field)
            .map(str::to_string)
            .ok_or_else(|| JsValue::from_str(&format!("'{}' has no text value", name)))
    }

    /// Replace a field's full text. Returns whether the value changed.
    #[wasm_bindgen]
    pub fn set_field(&mut self, name: &str, value: &str) -> Result<bool, JsValue> {
        let field = parse_field(name)?;
        Ok(self
            .session
            .update(SessionMsg::SetField(field, value.to_string())))
    }

    /// Replace only the number typed into a field, keeping its unit
    #[wasm_bindgen]
    pub fn set_field_number(&mut self, name: &str, number: &str) -> Result<bool, JsValue> {
        let field = parse_field(name)?;
        Ok(self
            .session
            .update(SessionMsg::SetFieldNumber(field, number.to_string())))
    }

    /// Swap a field's unit label ("px" or "rem") without rescaling
    #[wasm_bindgen]
    pub fn toggle_field_unit(&mut self, name: &str, unit: &str) -> Result<bool, JsValue> {
        let field = parse_field(name)?;
        let unit = unit
            .parse::<Unit>()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(self.session.update(SessionMsg::ToggleFieldUnit(field, unit)))
    }

    #[wasm_bindgen]
    pub fn set_result_unit(&mut self, unit: &str) -> Result<(), JsValue> {
        let unit = parse_output_unit(unit)?;
        self.session.update(SessionMsg::SetResultUnit(unit));
        Ok(())
    }

    #[wasm_bindgen]
    pub fn result_unit(&self) -> String {
        self.session.result_unit().to_string()
    }

    /// Expression in the selected result unit, empty when the fields do not build
    #[wasm_bindgen]
    pub fn result(&mut self) -> String {
        self.session.displayed()
    }

    #[wasm_bindgen]
    pub fn rem_expression(&mut self) -> String {
        self.session.expression(OutputUnit::Rem)
    }

    #[wasm_bindgen]
    pub fn px_expression(&mut self) -> String {
        self.session.expression(OutputUnit::Px)
    }

    /// Both renderings and the linear model as JSON, or the build error
    #[wasm_bindgen]
    pub fn result_json(&mut self) -> Result<String, JsValue> {
        let clamp = self
            .session
            .clamp()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        serde_json::to_string(&RenderedClamp::from(clamp))
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize result: {}", e)))
    }

    /// Start the "copied" window and return the text the page should write
    /// to the clipboard. `None` when there is nothing to copy.
    #[wasm_bindgen]
    pub fn copy_value(&mut self) -> Option<String> {
        self.session.copy(js_sys::Date::now())
    }

    #[wasm_bindgen]
    pub fn is_copied(&self) -> bool {
        self.session.is_copied(js_sys::Date::now())
    }
}

/// One-shot rem expression from four field values, empty when invalid
#[wasm_bindgen]
pub fn build_clamp(
    min_width: &str,
    max_width: &str,
    min_font_size: &str,
    max_font_size: &str,
    root: u32,
) -> String {
    let config = Configuration::new(min_width, max_width, min_font_size, max_font_size, root);
    clamp::build_clamp_expression(&config)
}

/// Pixel rendering of a rem expression produced by `build_clamp`
#[wasm_bindgen]
pub fn to_pixel_expression(expr: &str, root: u32) -> String {
    clamp::to_pixel_expression(expr, root)
}
