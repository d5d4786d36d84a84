//! Backend commands queued from UI to backend worker.

use shared::protocol::TranslationRequest;

#[derive(Debug)]
pub enum BackendCommand {
    Translate { request: TranslationRequest },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::Translate { .. } => "translate",
        }
    }
}
