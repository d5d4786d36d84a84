use serde::Deserialize;
use serde_json::Value;

use crate::{
    domain::{LanguageCode, LanguagePair},
    error::TranslationFailure,
};

/// A snapshot of what the session asked to translate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub text: String,
    pub pair: LanguagePair,
}

impl TranslationRequest {
    pub fn new(text: impl Into<String>, source: LanguageCode, target: LanguageCode) -> Self {
        Self {
            text: text.into(),
            pair: LanguagePair::new(source, target),
        }
    }
}

/// Query parameters of the `get` endpoint.
#[derive(Debug, Clone)]
pub struct TranslateQuery {
    pub q: String,
    pub langpair: String,
}

impl From<&TranslationRequest> for TranslateQuery {
    fn from(request: &TranslationRequest) -> Self {
        Self {
            q: request.text.clone(),
            langpair: request.pair.as_query_value(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseData {
    #[serde(rename = "translatedText")]
    pub translated_text: String,
}

/// Body returned by the endpoint. Only `responseData.translatedText` is
/// required; the status fields are kept for diagnostics.
#[derive(Debug, Clone, Deserialize)]
pub struct TranslateResponse {
    #[serde(rename = "responseData")]
    pub response_data: ResponseData,
    #[serde(rename = "responseStatus", default)]
    pub response_status: Option<Value>,
    #[serde(rename = "responseDetails", default)]
    pub response_details: Option<Value>,
}

impl TranslateResponse {
    /// Parses a raw body, distinguishing non-JSON bodies from JSON of the wrong shape.
    pub fn parse(body: &str) -> Result<Self, TranslationFailure> {
        let value: Value = serde_json::from_str(body)
            .map_err(|err| TranslationFailure::malformed(format!("body is not JSON: {err}")))?;
        serde_json::from_value(value).map_err(|_| TranslationFailure::missing_translated_text())
    }

    /// `responseStatus` as a number. The endpoint sends it either as a JSON
    /// number or as a numeric string.
    pub fn in_band_status(&self) -> Option<u64> {
        match self.response_status.as_ref()? {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}
