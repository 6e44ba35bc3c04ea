use crate::prefs::{
    media::SystemPreferences,
    storage::{KeyValueStore, read_best_effort, write_best_effort},
};

pub const LANGUAGE_KEY: &str = "language";

/// Languages the page ships translations for.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ru,
    Am,
}

impl Language {
    pub const ALL: [Self; 3] = [Self::En, Self::Ru, Self::Am];

    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ru => "ru",
            Self::Am => "am",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            "ru" => Some(Self::Ru),
            // `hy` is the ISO 639-1 code browsers report for Armenian.
            "am" | "hy" => Some(Self::Am),
            _ => None,
        }
    }

    /// Self-name shown in the language switcher.
    pub fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Ru => "Русский",
            Self::Am => "Հայերեն",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Self::En => "🇬🇧",
            Self::Ru => "🇷🇺",
            Self::Am => "🇦🇲",
        }
    }
}

/// Display language. Stored value wins, then the browser language, then English.
#[derive(Clone, Debug, Default)]
pub struct LanguageStore {
    language: Language,
}

impl LanguageStore {
    pub fn init(storage: &dyn KeyValueStore, system: &SystemPreferences) -> Self {
        let language = read_best_effort(storage, LANGUAGE_KEY)
            .and_then(|s| Language::from_code(&s))
            .or_else(|| {
                system
                    .primary_language()
                    .and_then(|code| Language::from_code(&code))
            })
            .unwrap_or_default();
        Self { language }
    }
}

impl LanguageStore {
    pub fn get(&self) -> Language {
        self.language
    }

    pub fn set(&mut self, value: Language, storage: &mut dyn KeyValueStore) {
        if self.language != value {
            tracing::debug!(from = self.language.code(), to = value.code(), "language changed");
        }
        self.language = value;
        write_best_effort(storage, LANGUAGE_KEY, value.code());
    }
}
