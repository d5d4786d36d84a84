use std::sync::Arc;

mod backend_bridge;
mod config;
mod controller;
mod ui;

use anyhow::anyhow;
use clap::Parser;
use client_core::{MyMemoryTranslator, Translator, UnavailableTranslator};
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::TranslatorApp;

const APP_TITLE: &str = "Language Translator";

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn build_translator(settings: &config::Settings) -> Arc<dyn Translator> {
    match MyMemoryTranslator::new(settings.client_config()) {
        Ok(translator) => {
            tracing::info!(endpoint = %translator.endpoint(), "translator configured");
            Arc::new(translator)
        }
        Err(err) => {
            tracing::error!("translator unavailable, every request will fail: {err}");
            Arc::new(UnavailableTranslator::new(err.to_string()))
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = config::Args::parse();
    let settings = config::load_settings(&args)?;
    init_tracing(&settings.log_filter);

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    backend_bridge::runtime::launch(build_translator(&settings), cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([900.0, 560.0])
            .with_min_inner_size([640.0, 420.0]),
        ..Default::default()
    };
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |cc| {
            ui::fonts::install_fallback_fonts(&cc.egui_ctx);
            Ok(Box::new(TranslatorApp::new(cmd_tx, ui_rx)))
        }),
    )
    .map_err(|err| anyhow!("desktop window failed: {err}"))
}
