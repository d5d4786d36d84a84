use thiserror::Error;

/// Text shown in the output area whenever a translation fails, whatever the cause.
pub const TRANSLATION_ERROR_MESSAGE: &str = "Translation error occurred. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    InvalidEndpoint,
    Transport,
    Status,
    Malformed,
    MissingTranslatedText,
}

impl FailureKind {
    pub fn label(self) -> &'static str {
        match self {
            FailureKind::InvalidEndpoint => "invalid endpoint",
            FailureKind::Transport => "transport",
            FailureKind::Status => "http status",
            FailureKind::Malformed => "malformed body",
            FailureKind::MissingTranslatedText => "missing translated text",
        }
    }
}

/// Diagnostic detail for a failed translation. Never shown to the end user;
/// the session replaces it with [`TRANSLATION_ERROR_MESSAGE`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}: {message}", .kind.label())]
pub struct TranslationFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl TranslationFailure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Transport, message)
    }

    pub fn status(code: u16) -> Self {
        Self::new(
            FailureKind::Status,
            format!("endpoint responded with status {code}"),
        )
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Malformed, message)
    }

    pub fn missing_translated_text() -> Self {
        Self::new(
            FailureKind::MissingTranslatedText,
            "response has no string at responseData.translatedText",
        )
    }
}
