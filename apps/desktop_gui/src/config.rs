use std::{
    fs, io,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context;
use clap::Parser;
use client_core::{ClientConfig, DEFAULT_ENDPOINT, DEFAULT_REQUEST_TIMEOUT};
use serde::Deserialize;

pub const CONFIG_FILE_NAME: &str = "translator.toml";

#[derive(Parser, Debug, Default)]
#[command(name = "translator", about = "Translate text between languages")]
pub struct Args {
    /// Path to a TOML settings file (defaults to ./translator.toml when present).
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Translation endpoint base URL.
    #[arg(long)]
    pub endpoint: Option<String>,
    #[arg(long)]
    pub timeout_secs: Option<u64>,
    /// tracing filter directive, e.g. `info` or `client_core=debug`.
    #[arg(long)]
    pub log_filter: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub endpoint: String,
    pub request_timeout_secs: u64,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT.as_secs(),
            log_filter: "info".into(),
        }
    }
}

impl Settings {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            endpoint: self.endpoint.clone(),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }
}

/// Defaults, then the settings file, then `TRANSLATOR_*` env vars, then flags.
pub fn load_settings(args: &Args) -> anyhow::Result<Settings> {
    let mut settings = match &args.config {
        Some(path) => read_settings_file(path)?,
        None => match read_settings_file(Path::new(CONFIG_FILE_NAME)) {
            Ok(settings) => settings,
            Err(err) if is_not_found(&err) => Settings::default(),
            Err(err) => return Err(err),
        },
    };

    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());
    apply_arg_overrides(&mut settings, args);
    Ok(settings)
}

fn read_settings_file(path: &Path) -> anyhow::Result<Settings> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file '{}'", path.display()))?;
    toml::from_str(&raw)
        .with_context(|| format!("failed to parse settings file '{}'", path.display()))
}

fn is_not_found(err: &anyhow::Error) -> bool {
    err.downcast_ref::<io::Error>()
        .map(|io_err| io_err.kind() == io::ErrorKind::NotFound)
        .unwrap_or(false)
}

fn apply_env_overrides(settings: &mut Settings, env: impl Fn(&str) -> Option<String>) {
    if let Some(v) = env("TRANSLATOR_ENDPOINT") {
        settings.endpoint = v;
    }
    if let Some(v) = env("TRANSLATOR_TIMEOUT_SECS") {
        if let Ok(parsed) = v.trim().parse::<u64>() {
            settings.request_timeout_secs = parsed;
        }
    }
}

fn apply_arg_overrides(settings: &mut Settings, args: &Args) {
    if let Some(v) = &args.endpoint {
        settings.endpoint = v.clone();
    }
    if let Some(v) = args.timeout_secs {
        settings.request_timeout_secs = v;
    }
    if let Some(v) = &args.log_filter {
        settings.log_filter = v.clone();
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, io::Write};

    use super::*;

    #[test]
    fn defaults_point_at_public_endpoint() {
        let settings = Settings::default();
        assert_eq!(settings.endpoint, "https://api.mymemory.translated.net/get");
        assert_eq!(settings.client_config().request_timeout, Duration::from_secs(15));
    }

    #[test]
    fn partial_settings_file_keeps_remaining_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "request_timeout_secs = 4").expect("write");

        let settings = read_settings_file(file.path()).expect("parse");
        assert_eq!(settings.request_timeout_secs, 4);
        assert_eq!(settings.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn explicit_missing_settings_file_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let args = Args {
            config: Some(dir.path().join("absent.toml")),
            ..Args::default()
        };
        let err = load_settings(&args).expect_err("must fail");
        assert!(is_not_found(&err));
    }

    #[test]
    fn env_overrides_file_and_flags_override_env() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("TRANSLATOR_ENDPOINT", "http://127.0.0.1:9000/get"),
            ("TRANSLATOR_TIMEOUT_SECS", "not-a-number"),
        ]);
        let mut settings = Settings::default();
        apply_env_overrides(&mut settings, |name| env.get(name).map(|v| v.to_string()));
        assert_eq!(settings.endpoint, "http://127.0.0.1:9000/get");
        assert_eq!(settings.request_timeout_secs, 15);

        let args = Args {
            timeout_secs: Some(3),
            log_filter: Some("debug".into()),
            ..Args::default()
        };
        apply_arg_overrides(&mut settings, &args);
        assert_eq!(settings.endpoint, "http://127.0.0.1:9000/get");
        assert_eq!(settings.request_timeout_secs, 3);
        assert_eq!(settings.log_filter, "debug");
    }
}
