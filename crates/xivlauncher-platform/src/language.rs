use serde::{Deserialize, Serialize};

/// Game client language as stored in launcher settings.
///
/// Persisted as the launcher's numeric id. Ids this build does not know about
/// are kept in [`ClientLanguage::Other`] so they survive a settings round-trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
#[non_exhaustive]
pub enum ClientLanguage {
    Japanese,
    #[default]
    English,
    German,
    French,
    Other(u8),
}

impl ClientLanguage {
    pub fn from_id(id: u8) -> Self {
        match id {
            0 => Self::Japanese,
            1 => Self::English,
            2 => Self::German,
            3 => Self::French,
            other => Self::Other(other),
        }
    }

    pub fn id(self) -> u8 {
        match self {
            Self::Japanese => 0,
            Self::English => 1,
            Self::German => 2,
            Self::French => 3,
            Self::Other(id) => id,
        }
    }

    /// Locale code sent to the frontier web pages.
    ///
    /// Anything that is not one of the four shipped languages gets `en-gb`.
    pub fn locale_code(self) -> &'static str {
        match self {
            Self::Japanese => "ja",
            Self::English => "en-gb",
            Self::German => "de",
            Self::French => "fr",
            Self::Other(_) => "en-gb",
        }
    }

    /// Parse a locale code back into a language (case-insensitive).
    pub fn from_locale_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "ja" => Some(Self::Japanese),
            "en-gb" | "en" => Some(Self::English),
            "de" => Some(Self::German),
            "fr" => Some(Self::French),
            _ => None,
        }
    }
}

impl From<u8> for ClientLanguage {
    fn from(id: u8) -> Self {
        Self::from_id(id)
    }
}

impl From<ClientLanguage> for u8 {
    fn from(language: ClientLanguage) -> Self {
        language.id()
    }
}

/// Free-function form of [`ClientLanguage::locale_code`].
pub fn locale_code(language: ClientLanguage) -> &'static str {
    language.locale_code()
}

/// Source of the currently configured client language.
pub trait LanguageSource {
    fn language(&self) -> ClientLanguage;
}

impl LanguageSource for ClientLanguage {
    fn language(&self) -> ClientLanguage {
        *self
    }
}
