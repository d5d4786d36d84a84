//! Worker thread that owns the tokio runtime and answers UI commands.

use std::{sync::Arc, thread};

use client_core::Translator;
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

pub fn launch(
    translator: Arc<dyn Translator>,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || run_worker(translator, cmd_rx, ui_tx))
}

fn run_worker(
    translator: Arc<dyn Translator>,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) {
    let _ = ui_tx.try_send(UiEvent::Info("Backend worker starting...".to_string()));
    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            tracing::error!("failed to build backend runtime: {err}");
            let _ = ui_tx.try_send(UiEvent::BackendUnavailable(format!(
                "backend worker startup failure: {err}"
            )));
            return;
        }
    };

    runtime.block_on(async move {
        let _ = ui_tx.try_send(UiEvent::Info("Ready".to_string()));

        while let Ok(cmd) = cmd_rx.recv() {
            match cmd {
                BackendCommand::Translate { request } => {
                    let outcome = translator.translate(&request).await;
                    if let Err(err) = &outcome {
                        tracing::warn!(kind = ?err.kind, "translate command failed: {err}");
                    }
                    // Blocking send: the session stays in-flight until this arrives.
                    if ui_tx.send(UiEvent::TranslationResolved(outcome)).is_err() {
                        tracing::info!("ui event receiver dropped; stopping backend worker");
                        break;
                    }
                }
            }
        }
    });
    tracing::debug!("backend worker exited");
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use async_trait::async_trait;
    use crossbeam_channel::bounded;
    use shared::{
        domain::LanguageCode, error::TranslationFailure, protocol::TranslationRequest,
    };

    use super::*;

    struct EchoTranslator;

    #[async_trait]
    impl Translator for EchoTranslator {
        async fn translate(
            &self,
            request: &TranslationRequest,
        ) -> Result<String, TranslationFailure> {
            if request.text == "fail" {
                return Err(TranslationFailure::transport("connection reset"));
            }
            Ok(format!("{}:{}", request.pair.as_query_value(), request.text))
        }
    }

    fn next_resolution(ui_rx: &Receiver<UiEvent>) -> Result<String, TranslationFailure> {
        loop {
            match ui_rx
                .recv_timeout(Duration::from_secs(5))
                .expect("worker event")
            {
                UiEvent::TranslationResolved(outcome) => return outcome,
                UiEvent::Info(_) => continue,
                UiEvent::BackendUnavailable(reason) => panic!("worker unavailable: {reason}"),
            }
        }
    }

    #[test]
    fn answers_each_translate_command_once_in_order() {
        let (cmd_tx, cmd_rx) = bounded(4);
        let (ui_tx, ui_rx) = bounded(16);
        let worker = launch(Arc::new(EchoTranslator), cmd_rx, ui_tx);

        for text in ["hello", "fail"] {
            cmd_tx
                .send(BackendCommand::Translate {
                    request: TranslationRequest::new(
                        text,
                        LanguageCode::English,
                        LanguageCode::Spanish,
                    ),
                })
                .expect("queue");
        }

        assert_eq!(next_resolution(&ui_rx), Ok("en|es:hello".to_string()));
        let failure = next_resolution(&ui_rx).expect_err("second fails");
        assert_eq!(failure.message, "connection reset");

        drop(cmd_tx);
        worker.join().expect("worker exits when commands close");
        assert!(ui_rx.try_iter().all(|event| matches!(event, UiEvent::Info(_))));
    }
}
