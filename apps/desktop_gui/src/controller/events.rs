//! Events delivered from the backend worker to the UI thread.

use shared::error::TranslationFailure;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Info(String),
    TranslationResolved(Result<String, TranslationFailure>),
    BackendUnavailable(String),
}

/// Status line text after a translation resolves. Failure detail stays in the log.
pub fn resolution_status(outcome: &Result<String, TranslationFailure>) -> &'static str {
    match outcome {
        Ok(_) => "Translation complete",
        Err(_) => "Translation failed; press Translate to retry",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_status_does_not_leak_diagnostics() {
        let status = resolution_status(&Err(TranslationFailure::transport(
            "failed to connect: 127.0.0.1:9 refused",
        )));
        assert!(!status.contains("127.0.0.1"));
        assert!(status.contains("retry"));
    }
}
