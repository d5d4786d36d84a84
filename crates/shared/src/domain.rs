use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

macro_rules! language_table {
    ($($variant:ident => ($code:literal, $name:literal)),+ $(,)?) => {
        /// Languages offered by the selectors. The set is fixed at compile time.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum LanguageCode {
            $(
                #[serde(rename = $code)]
                $variant,
            )+
        }

        impl LanguageCode {
            /// Every supported language, in selector order.
            pub const ALL: &'static [LanguageCode] = &[$(LanguageCode::$variant),+];

            pub fn code(self) -> &'static str {
                match self {
                    $(LanguageCode::$variant => $code,)+
                }
            }

            pub fn display_name(self) -> &'static str {
                match self {
                    $(LanguageCode::$variant => $name,)+
                }
            }

            pub fn from_code(code: &str) -> Option<Self> {
                let code = code.trim();
                $(
                    if code.eq_ignore_ascii_case($code) {
                        return Some(LanguageCode::$variant);
                    }
                )+
                None
            }
        }
    };
}

language_table! {
    English => ("en", "English"),
    Hindi => ("hi", "Hindi"),
    Telugu => ("te", "Telugu"),
    Tamil => ("ta", "Tamil"),
    Spanish => ("es", "Spanish"),
    French => ("fr", "French"),
    German => ("de", "German"),
    Italian => ("it", "Italian"),
    Portuguese => ("pt", "Portuguese"),
    Russian => ("ru", "Russian"),
    Chinese => ("zh", "Chinese"),
}

impl LanguageCode {
    pub const DEFAULT_SOURCE: LanguageCode = LanguageCode::English;
    pub const DEFAULT_TARGET: LanguageCode = LanguageCode::Hindi;
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported language code '{0}'")]
pub struct UnknownLanguageCode(pub String);

impl FromStr for LanguageCode {
    type Err = UnknownLanguageCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| UnknownLanguageCode(s.to_string()))
    }
}

/// Source/target pair as sent in the `langpair` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguagePair {
    pub source: LanguageCode,
    pub target: LanguageCode,
}

impl LanguagePair {
    pub fn new(source: LanguageCode, target: LanguageCode) -> Self {
        Self { source, target }
    }

    pub fn as_query_value(self) -> String {
        format!("{}|{}", self.source.code(), self.target.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lists_every_language_once_in_selector_order() {
        let codes: Vec<&str> = LanguageCode::ALL.iter().map(|l| l.code()).collect();
        assert_eq!(
            codes,
            vec!["en", "hi", "te", "ta", "es", "fr", "de", "it", "pt", "ru", "zh"]
        );
        assert_eq!(LanguageCode::Telugu.display_name(), "Telugu");
        assert_eq!(LanguageCode::Chinese.display_name(), "Chinese");
    }

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!("EN".parse::<LanguageCode>(), Ok(LanguageCode::English));
        assert_eq!(" pt ".parse::<LanguageCode>(), Ok(LanguageCode::Portuguese));
        assert_eq!(
            "xx".parse::<LanguageCode>(),
            Err(UnknownLanguageCode("xx".to_string()))
        );
    }

    #[test]
    fn serializes_as_lowercase_code() {
        let json = serde_json::to_string(&LanguageCode::Russian).expect("serialize");
        assert_eq!(json, "\"ru\"");
        let parsed: LanguageCode = serde_json::from_str("\"ta\"").expect("deserialize");
        assert_eq!(parsed, LanguageCode::Tamil);
    }

    #[test]
    fn pair_formats_with_pipe_separator() {
        let pair = LanguagePair::new(LanguageCode::DEFAULT_SOURCE, LanguageCode::DEFAULT_TARGET);
        assert_eq!(pair.as_query_value(), "en|hi");
        let pair = LanguagePair::new(LanguageCode::Chinese, LanguageCode::Tamil);
        assert_eq!(pair.as_query_value(), "zh|ta");
    }
}
