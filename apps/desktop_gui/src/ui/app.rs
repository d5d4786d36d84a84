use std::time::Duration;

use client_core::TranslationSession;
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::error::TranslationFailure;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{resolution_status, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;
use crate::ui::widgets::{language_selector, translate_button_label};

const TEXT_PANE_ROWS: usize = 10;
pub const SWAP_LABEL: &str = "Swap";

pub struct TranslatorApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    session: TranslationSession,
    status: String,
}

impl TranslatorApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            session: TranslationSession::new(),
            status: "Starting...".to_string(),
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    self.status = message;
                }
                UiEvent::TranslationResolved(outcome) => {
                    self.status = resolution_status(&outcome).to_string();
                    self.session.resolve(outcome);
                }
                UiEvent::BackendUnavailable(reason) => {
                    tracing::error!("translation worker unavailable: {reason}");
                    self.status = "Translation worker failed to start".to_string();
                }
            }
        }
    }

    fn try_translate(&mut self) {
        let Some(request) = self.session.begin_translate() else {
            return;
        };

        if dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::Translate { request },
            &mut self.status,
        ) {
            self.status = "Translating...".to_string();
        } else {
            // Nothing will answer this request, so resolve it here.
            self.session.resolve(Err(TranslationFailure::transport(
                "translate command could not be queued",
            )));
        }
    }

    fn show_language_bar(&mut self, ui: &mut egui::Ui) {
        let source = self.session.state().source_language;
        let target = self.session.state().target_language;

        ui.horizontal(|ui| {
            if let Some(code) = language_selector(ui, "source_language", source) {
                self.session.set_source_language(code);
            }
            if ui
                .button(SWAP_LABEL)
                .on_hover_text("Swap languages and text")
                .clicked()
            {
                self.session.swap();
            }
            if let Some(code) = language_selector(ui, "target_language", target) {
                self.session.set_target_language(code);
            }
        });
    }

    fn show_text_panes(&mut self, ui: &mut egui::Ui) {
        let mut input = self.session.state().input_text.clone();
        let mut submit = false;

        ui.columns(2, |columns| {
            let response = columns[0].add(
                egui::TextEdit::multiline(&mut input)
                    .hint_text("Enter text to translate...")
                    .desired_rows(TEXT_PANE_ROWS)
                    .desired_width(f32::INFINITY),
            );
            // Ctrl/Cmd+Enter submits from the input pane.
            submit = response.has_focus()
                && columns[0].input(|i| i.key_pressed(egui::Key::Enter) && i.modifiers.command);

            let mut output = self.session.state().output_text.as_str();
            columns[1].add(
                egui::TextEdit::multiline(&mut output)
                    .hint_text("Translation will appear here...")
                    .desired_rows(TEXT_PANE_ROWS)
                    .desired_width(f32::INFINITY),
            );
        });

        if input != self.session.state().input_text {
            self.session.set_input(input);
        }
        if submit {
            self.try_translate();
        }
    }

    fn show_translate_button(&mut self, ui: &mut egui::Ui) {
        let in_flight = self.session.state().is_request_in_flight;
        let enabled = self.session.can_translate();

        ui.vertical_centered(|ui| {
            let button = egui::Button::new(
                egui::RichText::new(translate_button_label(in_flight))
                    .strong()
                    .size(16.0),
            )
            .min_size(egui::vec2(180.0, 40.0));

            if ui.add_enabled(enabled, button).clicked() {
                self.try_translate();
            }
        });
    }
}

impl eframe::App for TranslatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.small(egui::RichText::new(&self.status).weak());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.small("Powered by MyMemory Translation API");
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Language Translator");
            });
            ui.add_space(12.0);
            self.show_language_bar(ui);
            ui.add_space(8.0);
            self.show_text_panes(ui);
            ui.add_space(12.0);
            self.show_translate_button(ui);
        });

        // Worker results arrive over a channel; poll for them.
        if self.session.state().is_request_in_flight {
            ctx.request_repaint_after(Duration::from_millis(16));
        } else {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
