use crate::prefs::{
    PreferenceStore,
    media::SystemPreferences,
    storage::{KeyValueStore, read_best_effort, write_best_effort},
};

pub const REDUCED_MOTION_KEY: &str = "reduced-motion";

/// Reduced-motion preference.
///
/// The effective value is `system || user`: the user can force reduced motion
/// on at any time, but cannot turn it off while the system query matches.
/// `set`/`toggle` operate on the user's own choice, which is what gets stored.
#[derive(Clone, Debug, Default)]
pub struct ReducedMotionStore {
    system: bool,
    user: bool,
}

impl ReducedMotionStore {
    pub fn init(storage: &mut dyn KeyValueStore, system: &SystemPreferences) -> Self {
        let user = read_best_effort(storage, REDUCED_MOTION_KEY)
            .map(|s| s.trim() == "true")
            .unwrap_or(false);
        write_best_effort(storage, REDUCED_MOTION_KEY, if user { "true" } else { "false" });
        Self {
            system: system.prefers_reduced_motion,
            user,
        }
    }

    /// The system query matches, so the effective value is locked on.
    pub fn system_locked(&self) -> bool {
        self.system
    }

    pub fn user_choice(&self) -> bool {
        self.user
    }

    /// The platform media query changed.
    pub fn on_system_change(&mut self, matches: bool) {
        if self.system != matches {
            tracing::debug!(matches, "system reduced-motion preference changed");
        }
        self.system = matches;
    }
}

impl PreferenceStore for ReducedMotionStore {
    type Value = bool;

    fn get(&self) -> bool {
        self.system || self.user
    }

    fn set(&mut self, value: bool, storage: &mut dyn KeyValueStore) {
        self.user = value;
        write_best_effort(storage, REDUCED_MOTION_KEY, if value { "true" } else { "false" });
    }

    fn toggle(&mut self, storage: &mut dyn KeyValueStore) {
        self.set(!self.user, storage);
    }
}
