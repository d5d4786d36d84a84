//! Outbound translation requests against the MyMemory `get` endpoint.

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use reqwest::Client;
use shared::{
    error::{FailureKind, TranslationFailure},
    protocol::{TranslateQuery, TranslateResponse, TranslationRequest},
};
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://api.mymemory.translated.net/get";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, request: &TranslationRequest) -> Result<String, TranslationFailure>;
}

#[async_trait]
impl<T: Translator + ?Sized> Translator for Arc<T> {
    async fn translate(&self, request: &TranslationRequest) -> Result<String, TranslationFailure> {
        self.as_ref().translate(request).await
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub endpoint: String,
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid endpoint url '{endpoint}': {source}")]
    InvalidEndpoint {
        endpoint: String,
        source: url::ParseError,
    },
    #[error("endpoint url '{0}' must use http or https")]
    UnsupportedScheme(String),
    #[error("request timeout must be greater than zero")]
    ZeroTimeout,
    #[error("failed to build http client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

fn parse_endpoint(raw: &str) -> Result<Url, ConfigError> {
    let endpoint = raw.trim();
    let url = Url::parse(endpoint).map_err(|source| ConfigError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        source,
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(ConfigError::UnsupportedScheme(endpoint.to_string())),
    }
}

/// Appends `q` and `langpair` to the endpoint, percent-encoding both values.
pub fn build_query_url(endpoint: &Url, request: &TranslationRequest) -> Url {
    let query = TranslateQuery::from(request);
    let mut url = endpoint.clone();
    url.query_pairs_mut()
        .append_pair("q", &query.q)
        .append_pair("langpair", &query.langpair);
    url
}

pub struct MyMemoryTranslator {
    http: Client,
    endpoint: Url,
}

impl MyMemoryTranslator {
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        if config.request_timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }
        let endpoint = parse_endpoint(&config.endpoint)?;
        let http = Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

fn describe_send_error(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        format!("request timed out: {err}")
    } else if err.is_connect() {
        format!("failed to connect: {err}")
    } else {
        format!("request failed: {err}")
    }
}

#[async_trait]
impl Translator for MyMemoryTranslator {
    async fn translate(&self, request: &TranslationRequest) -> Result<String, TranslationFailure> {
        let url = build_query_url(&self.endpoint, request);
        debug!(
            langpair = %request.pair.as_query_value(),
            chars = request.text.chars().count(),
            "requesting translation"
        );

        let res = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|err| TranslationFailure::transport(describe_send_error(&err)))?;
        let status = res.status();
        if !status.is_success() {
            return Err(TranslationFailure::status(status.as_u16()));
        }

        let body = res
            .text()
            .await
            .map_err(|err| TranslationFailure::transport(describe_send_error(&err)))?;
        let parsed = TranslateResponse::parse(&body)?;

        // The endpoint reports quota and pair errors in-band with HTTP 200.
        if let Some(code) = parsed.in_band_status() {
            if code != 200 {
                warn!(
                    response_status = code,
                    details = ?parsed.response_details,
                    "endpoint reported a non-200 status in the body"
                );
            }
        }

        Ok(parsed.response_data.translated_text)
    }
}

/// Stands in when the configured endpoint could not be turned into a client.
/// Every request fails with the startup error.
pub struct UnavailableTranslator {
    reason: String,
}

impl UnavailableTranslator {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl Translator for UnavailableTranslator {
    async fn translate(&self, _request: &TranslationRequest) -> Result<String, TranslationFailure> {
        Err(TranslationFailure::new(
            FailureKind::InvalidEndpoint,
            self.reason.clone(),
        ))
    }
}

#[cfg(test)]
#[path = "tests/translator_tests.rs"]
mod tests;
