//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

/// Queues `cmd` without blocking the UI thread. Returns `false` and writes a
/// status message when the worker cannot take it.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) -> bool {
    let cmd_name = cmd.name();

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            true
        }
        Err(TrySendError::Full(_)) => {
            tracing::warn!(command = cmd_name, "backend command queue is full");
            *status = "UI command queue is full; please retry".to_string();
            false
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::error!(command = cmd_name, "backend command processor disconnected");
            *status = "Translation worker is not running; restart the app".to_string();
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;
    use shared::{domain::LanguageCode, protocol::TranslationRequest};

    fn translate_cmd() -> BackendCommand {
        BackendCommand::Translate {
            request: TranslationRequest::new("hi", LanguageCode::English, LanguageCode::Hindi),
        }
    }

    #[test]
    fn reports_full_queue_in_status() {
        let (tx, _rx) = bounded(1);
        let mut status = String::new();
        assert!(dispatch_backend_command(&tx, translate_cmd(), &mut status));
        assert!(!dispatch_backend_command(&tx, translate_cmd(), &mut status));
        assert!(status.contains("full"));
    }

    #[test]
    fn reports_disconnected_worker_in_status() {
        let (tx, rx) = bounded(1);
        drop(rx);
        let mut status = String::new();
        assert!(!dispatch_backend_command(&tx, translate_cmd(), &mut status));
        assert!(status.contains("not running"));
    }
}
