use super::*;
use crate::prefs::storage::MemoryStore;

fn system() -> SystemPreferences {
    SystemPreferences::default()
}

fn stored(prefs: &Preferences, key: &str) -> Option<String> {
    prefs.storage().get(key).unwrap()
}

#[test]
fn theme_prefers_storage_then_system_then_dark() {
    let p = Preferences::init(Box::new(MemoryStore::new()), &system());
    assert_eq!(p.theme(), Theme::Dark);

    let light_system = SystemPreferences {
        prefers_light_scheme: true,
        ..system()
    };
    let p = Preferences::init(Box::new(MemoryStore::new()), &light_system);
    assert_eq!(p.theme(), Theme::Light);

    let store = MemoryStore::with_entries([("theme-mode", "dark")]);
    let p = Preferences::init(Box::new(store), &light_system);
    assert_eq!(p.theme(), Theme::Dark);
}

#[test]
fn garbage_in_storage_falls_back_to_defaults() {
    let store = MemoryStore::with_entries([
        ("theme-mode", "sepia"),
        ("high-contrast", "maybe"),
        ("language", "fr"),
    ]);
    let p = Preferences::init(Box::new(store), &system());
    assert_eq!(p.theme(), Theme::Dark);
    assert!(!p.high_contrast());
    assert_eq!(p.language(), Language::En);
}

#[test]
fn toggling_twice_restores_value_and_storage() {
    let store = MemoryStore::with_entries([("theme-mode", "light"), ("high-contrast", "false")]);
    let mut p = Preferences::init(Box::new(store), &system());

    p.toggle_theme();
    assert_eq!(p.theme(), Theme::Dark);
    assert_eq!(stored(&p, "theme-mode").as_deref(), Some("dark"));
    p.toggle_theme();
    assert_eq!(p.theme(), Theme::Light);
    assert_eq!(stored(&p, "theme-mode").as_deref(), Some("light"));

    p.toggle_high_contrast();
    p.toggle_high_contrast();
    assert!(!p.high_contrast());
    assert_eq!(stored(&p, "high-contrast").as_deref(), Some("false"));

    p.set_reduced_motion(false);
    p.toggle_reduced_motion();
    assert!(p.reduced_motion());
    p.toggle_reduced_motion();
    assert!(!p.reduced_motion());
    assert_eq!(stored(&p, "reduced-motion").as_deref(), Some("false"));
}

#[test]
fn init_writes_resolved_values_back() {
    let light_system = SystemPreferences {
        prefers_light_scheme: true,
        ..system()
    };
    let p = Preferences::init(Box::new(MemoryStore::new()), &light_system);
    assert_eq!(stored(&p, "theme-mode").as_deref(), Some("light"));
    assert_eq!(stored(&p, "high-contrast").as_deref(), Some("false"));
    assert_eq!(stored(&p, "reduced-motion").as_deref(), Some("false"));
    assert_eq!(stored(&p, "language"), None);

    let store = MemoryStore::with_entries([("theme-mode", "sepia")]);
    let p = Preferences::init(Box::new(store), &system());
    assert_eq!(stored(&p, "theme-mode").as_deref(), Some("dark"));
}

#[test]
fn system_reduced_motion_cannot_be_forced_off() {
    let sys = SystemPreferences {
        prefers_reduced_motion: true,
        ..system()
    };
    let mut p = Preferences::init(Box::new(MemoryStore::new()), &sys);
    assert!(p.reduced_motion());
    p.set_reduced_motion(false);
    assert!(p.reduced_motion());
    assert!(p.reduced_motion_store().system_locked());

    // Once the query stops matching the user's own choice applies.
    p.on_system_reduced_motion(false);
    assert!(!p.reduced_motion());
}

#[test]
fn user_can_force_reduced_motion_on() {
    let mut p = Preferences::init(Box::new(MemoryStore::new()), &system());
    assert!(!p.reduced_motion());
    p.set_reduced_motion(true);
    assert!(p.reduced_motion());
    assert_eq!(stored(&p, "reduced-motion").as_deref(), Some("true"));
}

#[test]
fn language_prefers_storage_then_browser() {
    let sys = SystemPreferences {
        browser_language: Some("ru-RU".to_string()),
        ..system()
    };
    let p = Preferences::init(Box::new(MemoryStore::new()), &sys);
    assert_eq!(p.language(), Language::Ru);

    let p = Preferences::init(
        Box::new(MemoryStore::with_entries([("language", "am")])),
        &sys,
    );
    assert_eq!(p.language(), Language::Am);

    let mut p = Preferences::init(Box::new(MemoryStore::new()), &system());
    p.set_language(Language::Am);
    assert_eq!(stored(&p, "language").as_deref(), Some("am"));
}

#[test]
fn markers_reflect_state() {
    let mut p = Preferences::init(Box::new(MemoryStore::new()), &system());
    assert_eq!(p.markers().class_attr(), "dark");
    p.set_theme(Theme::Light);
    p.set_high_contrast(true);
    p.set_reduced_motion(true);
    let m = p.markers();
    assert_eq!(m.class_attr(), "light high-contrast reduce-motion");
    assert_eq!(m.lang, "en");
    assert!(m.reduced_motion);
}
