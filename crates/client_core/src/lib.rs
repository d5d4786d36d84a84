//! Client-side translation logic: the HTTP translator and the session state machine.

pub mod session;
pub mod translator;

pub use session::{SessionPhase, SessionState, TranslationSession};
pub use shared::{
    domain::{LanguageCode, LanguagePair},
    error::{FailureKind, TranslationFailure, TRANSLATION_ERROR_MESSAGE},
    protocol::TranslationRequest,
};
pub use translator::{
    build_query_url, ClientConfig, ConfigError, MyMemoryTranslator, Translator,
    UnavailableTranslator, DEFAULT_ENDPOINT, DEFAULT_REQUEST_TIMEOUT,
};
