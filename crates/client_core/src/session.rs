//! Translation session state and its request lifecycle.
//!
//! The session is the only mutator of [`SessionState`]. A translation runs
//! `Idle -> Requesting -> Idle`; while requesting, further translate calls are
//! rejected rather than queued, so at most one response can ever write the
//! output.

use shared::{
    domain::LanguageCode,
    error::{TranslationFailure, TRANSLATION_ERROR_MESSAGE},
    protocol::TranslationRequest,
};
use tracing::{debug, error, warn};

use crate::translator::Translator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Requesting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub source_language: LanguageCode,
    pub target_language: LanguageCode,
    pub input_text: String,
    pub output_text: String,
    pub is_request_in_flight: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            source_language: LanguageCode::DEFAULT_SOURCE,
            target_language: LanguageCode::DEFAULT_TARGET,
            input_text: String::new(),
            output_text: String::new(),
            is_request_in_flight: false,
        }
    }
}

impl SessionState {
    pub fn phase(&self) -> SessionPhase {
        if self.is_request_in_flight {
            SessionPhase::Requesting
        } else {
            SessionPhase::Idle
        }
    }

    fn has_translatable_input(&self) -> bool {
        !self.input_text.trim().is_empty()
    }
}

#[derive(Debug, Default)]
pub struct TranslationSession {
    state: SessionState,
}

impl TranslationSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.state.input_text = text.into();
    }

    pub fn set_source_language(&mut self, code: LanguageCode) {
        self.state.source_language = code;
    }

    pub fn set_target_language(&mut self, code: LanguageCode) {
        self.state.target_language = code;
    }

    /// Exchanges both the language pair and the two texts, so the previous
    /// output becomes the next input.
    pub fn swap(&mut self) {
        let state = &mut self.state;
        std::mem::swap(&mut state.source_language, &mut state.target_language);
        std::mem::swap(&mut state.input_text, &mut state.output_text);
    }

    pub fn can_translate(&self) -> bool {
        !self.state.is_request_in_flight && self.state.has_translatable_input()
    }

    /// Enters `Requesting` and returns what to send, or `None` if the input is
    /// blank or a request is already outstanding.
    pub fn begin_translate(&mut self) -> Option<TranslationRequest> {
        if self.state.is_request_in_flight {
            debug!("translate ignored: request already in flight");
            return None;
        }
        if !self.state.has_translatable_input() {
            debug!("translate ignored: input is blank");
            return None;
        }

        self.state.is_request_in_flight = true;
        Some(TranslationRequest::new(
            self.state.input_text.clone(),
            self.state.source_language,
            self.state.target_language,
        ))
    }

    /// Applies the outcome of the outstanding request and returns to `Idle`.
    pub fn resolve(&mut self, outcome: Result<String, TranslationFailure>) {
        if !self.state.is_request_in_flight {
            warn!("dropping translation result: no request in flight");
            return;
        }

        self.state.output_text = match outcome {
            Ok(translated) => translated,
            Err(err) => {
                error!(kind = ?err.kind, "translation error: {err}");
                TRANSLATION_ERROR_MESSAGE.to_string()
            }
        };
        self.state.is_request_in_flight = false;
    }

    /// Runs one full request cycle against `translator`. Never fails; the
    /// outcome is visible only through [`TranslationSession::state`].
    pub async fn translate<T: Translator + ?Sized>(&mut self, translator: &T) {
        let Some(request) = self.begin_translate() else {
            return;
        };
        let outcome = translator.translate(&request).await;
        self.resolve(outcome);
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
