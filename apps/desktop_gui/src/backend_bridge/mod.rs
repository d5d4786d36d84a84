//! Bridge between the UI thread and the async translation worker.

pub mod commands;
pub mod runtime;
