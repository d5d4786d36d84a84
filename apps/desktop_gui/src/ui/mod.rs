//! UI layer for the desktop translator: app shell and widgets.

pub mod app;
pub mod fonts;
pub mod widgets;

pub use app::TranslatorApp;
