//! WASM bindings for insurance claim field extraction.
//!
//! OCR runs on the host side (e.g. tesseract.js); these bindings take the
//! recognized text and return the structured claim record.

use wasm_bindgen::prelude::*;

use claimscan_core::claim::rules::{detect_document_type, detect_payment_method, PAYMENT_RULES};
use claimscan_core::{extract_claim_info, ExtractionResult};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Extract claim fields from OCR text as a JS object.
///
/// Absent fields are `null`; the object always has the same keys.
#[wasm_bindgen]
pub fn extract_claim_from_text(text: &str) -> Result<JsValue, JsValue> {
    to_js(&extract_claim_info(text))
}

/// Extract claim fields from OCR text as a JSON string.
#[wasm_bindgen]
pub fn extract_claim_json(text: &str) -> Result<String, JsValue> {
    serde_json::to_string(&extract_claim_info(text)).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Document type label, if the text looks like a claim form.
#[wasm_bindgen]
pub fn detect_document_type_label(text: &str) -> Option<String> {
    detect_document_type(text).map(|t| t.to_string())
}

/// Payment method label, if one is mentioned.
#[wasm_bindgen]
pub fn detect_payment_method_label(text: &str) -> Option<String> {
    detect_payment_method(text).map(|m| m.label().to_string())
}

/// Payment method labels in detection priority order.
#[wasm_bindgen]
pub fn payment_methods() -> js_sys::Array {
    PAYMENT_RULES
        .iter()
        .map(|rule| JsValue::from_str(rule.method.label()))
        .collect()
}

/// Claim extractor class for browser use.
///
/// Keeps the recognized text alongside the extraction so callers can offer
/// the raw OCR output for download.
#[wasm_bindgen]
pub struct ClaimScan {
    text: String,
    result: ExtractionResult,
}

#[wasm_bindgen]
impl ClaimScan {
    /// Run extraction over recognized text.
    #[wasm_bindgen(constructor)]
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            result: extract_claim_info(text),
        }
    }

    /// The recognized text this scan was built from.
    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.text.clone()
    }

    /// Whether no field was recognized.
    #[wasm_bindgen(getter)]
    pub fn empty(&self) -> bool {
        self.result.is_empty()
    }

    /// FPS phone number with the +852 prefix, if present.
    #[wasm_bindgen(getter)]
    pub fn fps_phone_display(&self) -> Option<String> {
        self.result
            .fps_phone
            .as_ref()
            .map(|phone| format!("+852 {}", phone))
    }

    /// The extracted record as a JS object.
    #[wasm_bindgen]
    pub fn result(&self) -> Result<JsValue, JsValue> {
        to_js(&self.result)
    }
}

fn to_js(result: &ExtractionResult) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_missing_as_null(true);
    serde::Serialize::serialize(result, &serializer).map_err(|e| JsValue::from_str(&e.to_string()))
}
