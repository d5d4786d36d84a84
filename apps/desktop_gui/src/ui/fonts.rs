//! Fallback fonts for scripts egui's bundled fonts do not cover.
//!
//! The default egui fonts only render Latin and Cyrillic. Hindi, Telugu, Tamil
//! and Chinese text is drawn with fonts picked up from the system font
//! directories at startup. A script with no installed font is reported and
//! falls back to replacement boxes.

use std::{
    collections::{BTreeMap, HashSet},
    env, fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use ab_glyph::{Font as _, FontRef};
use egui::{FontData, FontDefinitions, FontFamily};
use shared::domain::LanguageCode;
use tracing::{debug, info, warn};

const MAX_SCAN_DEPTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Script {
    Latin,
    Cyrillic,
    Devanagari,
    Telugu,
    Tamil,
    Han,
}

impl Script {
    pub fn for_language(language: LanguageCode) -> Self {
        match language {
            LanguageCode::English
            | LanguageCode::Spanish
            | LanguageCode::French
            | LanguageCode::German
            | LanguageCode::Italian
            | LanguageCode::Portuguese => Script::Latin,
            LanguageCode::Russian => Script::Cyrillic,
            LanguageCode::Hindi => Script::Devanagari,
            LanguageCode::Telugu => Script::Telugu,
            LanguageCode::Tamil => Script::Tamil,
            LanguageCode::Chinese => Script::Han,
        }
    }

    /// A letter that any font claiming the script must have.
    pub fn sample(self) -> char {
        match self {
            Script::Latin => 'a',
            Script::Cyrillic => 'П',
            Script::Devanagari => 'न',
            Script::Telugu => 'న',
            Script::Tamil => 'வ',
            Script::Han => '你',
        }
    }

    pub fn covered_by_default_fonts(self) -> bool {
        matches!(self, Script::Latin | Script::Cyrillic)
    }

    fn font_key(self) -> &'static str {
        match self {
            Script::Latin => "fallback-latin",
            Script::Cyrillic => "fallback-cyrillic",
            Script::Devanagari => "fallback-devanagari",
            Script::Telugu => "fallback-telugu",
            Script::Tamil => "fallback-tamil",
            Script::Han => "fallback-han",
        }
    }

    /// File names of common fonts for the script, most preferred first.
    /// Matched case-insensitively.
    pub fn candidate_files(self) -> &'static [&'static str] {
        match self {
            Script::Latin | Script::Cyrillic => &[],
            Script::Devanagari => &[
                "NotoSansDevanagari-Regular.ttf",
                "NotoSansDevanagari-Regular.otf",
                "NotoSansDevanagariUI-Regular.ttf",
                "Lohit-Devanagari.ttf",
                "gargi.ttf",
                "Mangal.ttf",
                "Nirmala.ttf",
                "Kohinoor.ttc",
            ],
            Script::Telugu => &[
                "NotoSansTelugu-Regular.ttf",
                "NotoSansTelugu-Regular.otf",
                "NotoSansTeluguUI-Regular.ttf",
                "Lohit-Telugu.ttf",
                "Pothana2000.ttf",
                "Gautami.ttf",
                "Nirmala.ttf",
                "KohinoorTelugu.ttc",
            ],
            Script::Tamil => &[
                "NotoSansTamil-Regular.ttf",
                "NotoSansTamil-Regular.otf",
                "NotoSansTamilUI-Regular.ttf",
                "Lohit-Tamil.ttf",
                "Latha.ttf",
                "Nirmala.ttf",
                "Tamil Sangam MN.ttc",
            ],
            Script::Han => &[
                "NotoSansCJK-Regular.ttc",
                "NotoSansCJKsc-Regular.otf",
                "NotoSansSC-Regular.otf",
                "NotoSansSC-Regular.ttf",
                "wqy-microhei.ttc",
                "wqy-zenhei.ttc",
                "droidsansfallbackfull.ttf",
                "msyh.ttc",
                "simsun.ttc",
                "PingFang.ttc",
                "Hiragino Sans GB.ttc",
                "STHeiti Light.ttc",
            ],
        }
    }
}

/// Font files found under the scanned directories, keyed by lowercase file name.
#[derive(Debug, Default)]
pub struct FontIndex {
    files: BTreeMap<String, PathBuf>,
}

impl FontIndex {
    pub fn scan<I, P>(dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut index = Self::default();
        for dir in dirs {
            index.scan_dir(dir.as_ref(), 0);
        }
        index
    }

    fn scan_dir(&mut self, dir: &Path, depth: usize) {
        let Ok(entries) = fs::read_dir(dir) else {
            return;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                if depth < MAX_SCAN_DEPTH {
                    self.scan_dir(&path, depth + 1);
                }
                continue;
            }
            if let Some(name) = path.file_name().and_then(|name| name.to_str()) {
                // First hit wins, so earlier directories take priority.
                self.files.entry(name.to_lowercase()).or_insert(path);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn candidates(&self, script: Script) -> Vec<PathBuf> {
        script
            .candidate_files()
            .iter()
            .filter_map(|name| self.files.get(&name.to_lowercase()).cloned())
            .collect()
    }
}

/// Per-user and system font directories for the current platform.
pub fn system_font_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    let home = env::var_os("HOME").map(PathBuf::from);

    if let Some(data_home) = env::var_os("XDG_DATA_HOME") {
        dirs.push(PathBuf::from(data_home).join("fonts"));
    }
    if let Some(home) = &home {
        dirs.push(home.join(".local/share/fonts"));
        dirs.push(home.join(".fonts"));
        dirs.push(home.join("Library/Fonts"));
    }
    dirs.extend(
        [
            "/usr/share/fonts",
            "/usr/local/share/fonts",
            "/System/Library/Fonts",
            "/Library/Fonts",
        ]
        .into_iter()
        .map(PathBuf::from),
    );
    if let Some(local) = env::var_os("LOCALAPPDATA") {
        dirs.push(PathBuf::from(local).join("Microsoft\\Windows\\Fonts"));
    }
    if let Some(windir) = env::var_os("WINDIR") {
        dirs.push(PathBuf::from(windir).join("Fonts"));
    }
    dirs
}

/// Reads the first file in `paths` that parses as a font and has a glyph for
/// `sample`.
pub fn first_covering_font(paths: &[PathBuf], sample: char) -> Option<(PathBuf, Vec<u8>)> {
    paths.iter().find_map(|path| {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) => {
                debug!(path = %path.display(), "skipping unreadable font: {err}");
                return None;
            }
        };
        let covers = FontRef::try_from_slice_and_index(&bytes, 0)
            .map(|font| font.glyph_id(sample).0 != 0)
            .unwrap_or(false);
        if covers {
            Some((path.clone(), bytes))
        } else {
            debug!(path = %path.display(), %sample, "font does not cover script");
            None
        }
    })
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct FontCoverage {
    pub loaded: Vec<(Script, PathBuf)>,
    pub missing: Vec<Script>,
}

/// Scripts used by the language table that the default fonts cannot draw,
/// in selector order.
pub fn scripts_needing_fallback() -> Vec<Script> {
    let mut scripts = Vec::new();
    for language in LanguageCode::ALL {
        let script = Script::for_language(*language);
        if !script.covered_by_default_fonts() && !scripts.contains(&script) {
            scripts.push(script);
        }
    }
    scripts
}

/// egui's default definitions with one fallback per covered script appended
/// to both the proportional and monospace families.
pub fn fallback_definitions(index: &FontIndex) -> (FontDefinitions, FontCoverage) {
    let mut definitions = FontDefinitions::default();
    let mut coverage = FontCoverage::default();
    let mut registered: HashSet<PathBuf> = HashSet::new();

    for script in scripts_needing_fallback() {
        let Some((path, bytes)) = first_covering_font(&index.candidates(script), script.sample())
        else {
            coverage.missing.push(script);
            continue;
        };

        // One file can serve several scripts (Nirmala covers all Indic ones).
        if registered.insert(path.clone()) {
            let key = script.font_key().to_string();
            definitions
                .font_data
                .insert(key.clone(), Arc::new(FontData::from_owned(bytes)));
            for family in [FontFamily::Proportional, FontFamily::Monospace] {
                definitions
                    .families
                    .entry(family)
                    .or_default()
                    .push(key.clone());
            }
        }
        coverage.loaded.push((script, path));
    }

    (definitions, coverage)
}

/// Installs fallback fonts found on this machine into `ctx`. Takes effect on
/// the next frame.
pub fn install_fallback_fonts(ctx: &egui::Context) -> FontCoverage {
    let index = FontIndex::scan(system_font_dirs());
    let (definitions, coverage) = fallback_definitions(&index);
    ctx.set_fonts(definitions);

    for (script, path) in &coverage.loaded {
        info!(?script, path = %path.display(), "fallback font loaded");
    }
    if !coverage.missing.is_empty() {
        warn!(
            missing = ?coverage.missing,
            scanned_files = index.len(),
            "no installed font covers these scripts; their text will not render"
        );
    }
    coverage
}
