use crate::prefs::{
    PreferenceStore,
    storage::{KeyValueStore, read_best_effort, write_best_effort},
};

pub const HIGH_CONTRAST_KEY: &str = "high-contrast";

/// High-contrast flag. Stored value wins; there is no system fallback.
#[derive(Clone, Debug, Default)]
pub struct HighContrastStore {
    enabled: bool,
}

impl HighContrastStore {
    pub fn init(storage: &mut dyn KeyValueStore) -> Self {
        let enabled = read_best_effort(storage, HIGH_CONTRAST_KEY)
            .map(|s| s.trim() == "true")
            .unwrap_or(false);
        write_best_effort(storage, HIGH_CONTRAST_KEY, if enabled { "true" } else { "false" });
        Self { enabled }
    }
}

impl PreferenceStore for HighContrastStore {
    type Value = bool;

    fn get(&self) -> bool {
        self.enabled
    }

    fn set(&mut self, value: bool, storage: &mut dyn KeyValueStore) {
        self.enabled = value;
        write_best_effort(storage, HIGH_CONTRAST_KEY, if value { "true" } else { "false" });
    }

    fn toggle(&mut self, storage: &mut dyn KeyValueStore) {
        self.set(!self.enabled, storage);
    }
}
