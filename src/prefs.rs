//! Process-wide presentation preferences.
//!
//! Each preference is its own small store with explicit `init`/`get`/`set`/
//! `toggle`. None of them hold the durable storage: [`Preferences`] owns it at
//! the application root and lends it to whichever store is being written, so
//! every write goes through one persistence channel.

pub mod contrast;
pub mod language;
pub mod media;
pub mod motion;
pub mod storage;
pub mod theme;

use contrast::HighContrastStore;
use language::{Language, LanguageStore};
use media::SystemPreferences;
use motion::ReducedMotionStore;
use storage::KeyValueStore;
use theme::{Theme, ThemeStore};

/// A persisted preference with a binary (or two-state) toggle.
///
/// `toggle` is an involution: toggling twice restores both the value and the
/// stored string.
pub trait PreferenceStore {
    type Value: Copy + PartialEq;

    fn get(&self) -> Self::Value;
    fn set(&mut self, value: Self::Value, storage: &mut dyn KeyValueStore);
    fn toggle(&mut self, storage: &mut dyn KeyValueStore);
}

/// Snapshot of every preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PreferenceState {
    pub reduced_motion: bool,
    pub high_contrast: bool,
    pub theme: Theme,
    pub language: Language,
}

/// Global document attributes derived from the preferences.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentMarkers {
    pub lang: &'static str,
    pub classes: Vec<&'static str>,
    pub reduced_motion: bool,
}

impl DocumentMarkers {
    pub fn class_attr(&self) -> String {
        self.classes.join(" ")
    }
}

pub struct Preferences {
    storage: Box<dyn KeyValueStore>,
    theme: ThemeStore,
    contrast: HighContrastStore,
    motion: ReducedMotionStore,
    language: LanguageStore,
}

impl std::fmt::Debug for Preferences {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Preferences")
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

impl Preferences {
    /// Resolves every preference. The boolean and theme stores write their
    /// resolved value back; the language is only stored once chosen.
    pub fn init(mut storage: Box<dyn KeyValueStore>, system: &SystemPreferences) -> Self {
        let theme = ThemeStore::init(storage.as_mut(), system);
        let contrast = HighContrastStore::init(storage.as_mut());
        let motion = ReducedMotionStore::init(storage.as_mut(), system);
        let language = LanguageStore::init(storage.as_ref(), system);
        let prefs = Self {
            storage,
            theme,
            contrast,
            motion,
            language,
        };
        tracing::debug!(state = ?prefs.state(), "preferences initialized");
        prefs
    }

    pub fn state(&self) -> PreferenceState {
        PreferenceState {
            reduced_motion: self.motion.get(),
            high_contrast: self.contrast.get(),
            theme: self.theme.get(),
            language: self.language.get(),
        }
    }

    pub fn storage(&self) -> &dyn KeyValueStore {
        self.storage.as_ref()
    }

    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme.set(theme, self.storage.as_mut());
    }

    pub fn toggle_theme(&mut self) {
        self.theme.toggle(self.storage.as_mut());
    }

    pub fn high_contrast(&self) -> bool {
        self.contrast.get()
    }

    pub fn set_high_contrast(&mut self, enabled: bool) {
        self.contrast.set(enabled, self.storage.as_mut());
    }

    pub fn toggle_high_contrast(&mut self) {
        self.contrast.toggle(self.storage.as_mut());
    }

    pub fn reduced_motion(&self) -> bool {
        self.motion.get()
    }

    pub fn reduced_motion_store(&self) -> &ReducedMotionStore {
        &self.motion
    }

    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.motion.set(enabled, self.storage.as_mut());
    }

    pub fn toggle_reduced_motion(&mut self) {
        self.motion.toggle(self.storage.as_mut());
    }

    pub fn on_system_reduced_motion(&mut self, matches: bool) {
        self.motion.on_system_change(matches);
    }

    pub fn language(&self) -> Language {
        self.language.get()
    }

    pub fn set_language(&mut self, language: Language) {
        self.language.set(language, self.storage.as_mut());
    }

    pub fn markers(&self) -> DocumentMarkers {
        let mut classes = vec![self.theme().as_str()];
        if self.high_contrast() {
            classes.push("high-contrast");
        }
        if self.reduced_motion() {
            classes.push("reduce-motion");
        }
        DocumentMarkers {
            lang: self.language().code(),
            classes,
            reduced_motion: self.reduced_motion(),
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/prefs/prefs.rs"]
mod tests;
