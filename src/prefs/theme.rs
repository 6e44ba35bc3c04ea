use crate::prefs::{
    PreferenceStore,
    media::SystemPreferences,
    storage::{KeyValueStore, read_best_effort, write_best_effort},
};

pub const THEME_KEY: &str = "theme-mode";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Light/dark theme. Stored value wins, then the system color scheme, then dark.
#[derive(Clone, Debug)]
pub struct ThemeStore {
    theme: Theme,
}

impl ThemeStore {
    /// Resolves the theme and writes it back, so a later toggle pair lands on
    /// the same stored string it started from.
    pub fn init(storage: &mut dyn KeyValueStore, system: &SystemPreferences) -> Self {
        let stored = read_best_effort(storage, THEME_KEY).and_then(|s| Theme::parse(&s));
        let theme = match stored {
            Some(t) => t,
            None if system.prefers_light_scheme => Theme::Light,
            None => Theme::Dark,
        };
        write_best_effort(storage, THEME_KEY, theme.as_str());
        Self { theme }
    }
}

impl PreferenceStore for ThemeStore {
    type Value = Theme;

    fn get(&self) -> Theme {
        self.theme
    }

    fn set(&mut self, value: Theme, storage: &mut dyn KeyValueStore) {
        if self.theme != value {
            tracing::debug!(from = self.theme.as_str(), to = value.as_str(), "theme changed");
        }
        self.theme = value;
        write_best_effort(storage, THEME_KEY, value.as_str());
    }

    fn toggle(&mut self, storage: &mut dyn KeyValueStore) {
        self.set(self.theme.flipped(), storage);
    }
}
