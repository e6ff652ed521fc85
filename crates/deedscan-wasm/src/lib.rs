//! WASM bindings for purchase-agreement field extraction.
//!
//! This crate provides WebAssembly bindings for use in browsers and Node.js.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use deedscan_core::{
    AgreementParser, ExtractedRecord, FieldResolution, PurchaseAgreementParser, SellerPhrase,
};

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

/// Extract the five fields from recognized text.
///
/// Returns an object keyed `buyerName`, `sellerName`, `propertyAddress`,
/// `offerPrice` and `keyDates`; missing fields hold `"Not Found"`.
#[wasm_bindgen]
pub fn extract_fields(text: &str) -> Result<JsValue, JsValue> {
    to_js(&deedscan_core::extract_fields(text))
}

/// Collapse whitespace runs to single spaces and trim.
#[wasm_bindgen]
pub fn normalize(text: &str) -> String {
    deedscan_core::normalize_whitespace(text).into_inner()
}

/// Convert an English number phrase ("two hundred thousand") to digits.
#[wasm_bindgen]
pub fn words_to_number(phrase: &str) -> Option<String> {
    deedscan_core::words_to_number(phrase)
        .ok()
        .map(|n| n.to_string())
}

/// Agreement extractor class for browser use.
#[wasm_bindgen]
pub struct AgreementExtractor {
    parser: PurchaseAgreementParser,
}

#[wasm_bindgen]
impl AgreementExtractor {
    /// Create a new agreement extractor.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            parser: PurchaseAgreementParser::new(),
        }
    }

    /// Choose the seller introduction phrase: "observed", "corrected" or "lenient".
    #[wasm_bindgen(js_name = setSellerPhrase)]
    pub fn set_seller_phrase(&mut self, phrase: &str) -> Result<(), JsValue> {
        let phrase = SellerPhrase::from_str(phrase)
            .ok_or_else(|| JsValue::from_str(&format!("Unknown seller phrase: {}", phrase)))?;
        self.parser = PurchaseAgreementParser::new().with_seller_phrase(phrase);
        Ok(())
    }

    /// Extract the five fields from text.
    #[wasm_bindgen]
    pub fn extract(&self, text: &str) -> Result<JsValue, JsValue> {
        to_js(&self.parser.parse(text).record)
    }

    /// Get extraction result with the winning rule per field.
    #[wasm_bindgen(js_name = extractWithMetadata)]
    pub fn extract_with_metadata(&self, text: &str) -> Result<JsValue, JsValue> {
        let result = self.parser.parse(text);

        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct ExtractResult {
            record: ExtractedRecord,
            normalized_text: String,
            rules: Vec<FieldResolution>,
            warnings: Vec<String>,
            processing_time_ms: u64,
        }

        to_js(&ExtractResult {
            record: result.record,
            normalized_text: result.normalized_text,
            rules: result.resolutions,
            warnings: result.warnings,
            processing_time_ms: result.processing_time_ms,
        })
    }
}

impl Default for AgreementExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}
