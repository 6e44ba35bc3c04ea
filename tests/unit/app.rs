use super::*;
use crate::{
    page::{background::CROSSFADE_MS, contact::SubmitStatus, modal::ModalPhase},
    prefs::{
        language::LANGUAGE_KEY,
        storage::MemoryStore,
        theme::{THEME_KEY, Theme},
    },
};

fn app_with(system: SystemPreferences) -> PortfolioApp {
    PortfolioApp::new(SiteConfig::default(), Box::new(MemoryStore::new()), &system).unwrap()
}

fn app() -> PortfolioApp {
    app_with(SystemPreferences::default())
}

fn reduced() -> SystemPreferences {
    SystemPreferences {
        prefers_reduced_motion: true,
        ..SystemPreferences::default()
    }
}

#[test]
fn starts_at_the_top_on_the_hero() {
    let app = app();
    assert_eq!(app.active_section(), SectionId::Hero);
    assert_eq!(app.background().shown(), BackgroundVariant::Aurora);
    assert!(!app.background().is_transitioning());
    let snap = app.snapshot();
    assert_eq!(snap.revealed, vec![SectionId::Hero]);
    assert_eq!(snap.at_ms, 0);
    assert_eq!(app.scheduler().active_count(), 0);
    assert_eq!(app.language(), Language::En);
    assert_eq!(app.t("nav.about"), "About");
}

#[test]
fn stored_preferences_win() {
    let store = MemoryStore::with_entries([(THEME_KEY, "light"), (LANGUAGE_KEY, "ru")]);
    let app = PortfolioApp::new(
        SiteConfig::default(),
        Box::new(store),
        &SystemPreferences::default(),
    )
    .unwrap();
    assert_eq!(app.prefs().theme(), Theme::Light);
    assert_eq!(app.language(), Language::Ru);
    assert_eq!(app.t("nav.about"), "Обо мне");
}

#[test]
fn configured_default_language_applies_without_a_browser_hint() {
    let config = SiteConfig {
        default_language: Language::Am,
        ..SiteConfig::default()
    };
    let app = PortfolioApp::new(config, Box::new(MemoryStore::new()), &SystemPreferences::default())
        .unwrap();
    assert_eq!(app.language(), Language::Am);
}

#[test]
fn navigating_crossfades_the_background() {
    let mut app = app();
    app.navigate(SectionId::Skills, Millis(100)).unwrap();
    assert_eq!(app.scroll_y(), 1800.0);
    assert_eq!(app.active_section(), SectionId::Skills);
    assert_eq!(app.background().target(), BackgroundVariant::Grid);
    assert_eq!(app.background().shown(), BackgroundVariant::Aurora);

    app.tick(Millis(900)).unwrap();
    assert_eq!(app.background().shown(), BackgroundVariant::Grid);
    // The grid's tick timer is the only one running.
    assert_eq!(app.scheduler().active_count(), 1);
    assert!(app.reveal(SectionId::Skills).is_triggered());
    assert!(!app.reveal(SectionId::About).is_triggered());
}

#[test]
fn small_scrolls_keep_the_active_section() {
    let mut app = app();
    app.scroll_to(200.0, Millis(16)).unwrap();
    assert_eq!(app.active_section(), SectionId::Hero);
    assert_eq!(app.background().target(), BackgroundVariant::Aurora);
}

#[test]
fn scroll_is_clamped() {
    let mut app = app();
    app.scroll_to(1e9, Millis(1)).unwrap();
    assert_eq!(app.scroll_y(), app.layout().max_scroll());
    app.scroll_to(f64::NAN, Millis(2)).unwrap();
    assert_eq!(app.scroll_y(), 0.0);
}

#[test]
fn reduced_motion_swaps_instantly_without_timers() {
    let mut app = app_with(reduced());
    app.navigate(SectionId::Skills, Millis(10)).unwrap();
    assert_eq!(app.background().shown(), BackgroundVariant::Grid);
    assert_eq!(app.scheduler().active_count(), 0);
    assert!(app.spotlight_frame().pinned);
    assert_eq!(app.overlay().blur_opacity, None);
}

#[test]
fn toggling_reduced_motion_rearms_timers() {
    let mut app = app();
    app.navigate(SectionId::Skills, Millis::ZERO).unwrap();
    app.tick(Millis(800)).unwrap();
    app.select_skill("redux").unwrap();
    assert_eq!(app.scheduler().active_count(), 2);

    app.set_reduced_motion(true).unwrap();
    assert_eq!(app.scheduler().active_count(), 0);
    assert_eq!(app.background().duration_ms(), 0);

    app.toggle_reduced_motion().unwrap();
    assert_eq!(app.scheduler().active_count(), 2);
    assert_eq!(app.background().duration_ms(), CROSSFADE_MS);
}

#[test]
fn system_reduced_motion_locks_the_value_on() {
    let mut app = app();
    app.on_system_reduced_motion(true).unwrap();
    assert!(app.prefs().reduced_motion());
    app.set_reduced_motion(false).unwrap();
    assert!(app.prefs().reduced_motion());
}

#[test]
fn open_case_study_locks_scroll() {
    let mut app = app();
    app.scroll_to(4000.0, Millis(10)).unwrap();
    app.open_project("mobile-app", Millis(20)).unwrap();
    app.scroll_to(100.0, Millis(30)).unwrap();
    assert_eq!(app.scroll_y(), 4000.0);

    assert!(app.key("Escape", Millis(400)).unwrap());
    assert!(matches!(app.projects().modal().phase(), ModalPhase::Closing { .. }));
    app.tick(Millis(700)).unwrap();
    assert!(app.projects().selected().is_none());
    app.scroll_to(100.0, Millis(710)).unwrap();
    assert_eq!(app.scroll_y(), 100.0);
}

#[test]
fn contact_submission_runs_on_the_app_clock() {
    let mut app = app();
    app.set_contact_field(Field::Name, "Jane");
    app.set_contact_field(Field::Email, "jane@example.com");
    app.set_contact_field(Field::Message, "Hello");
    assert_eq!(app.submit_contact(Millis(100)).unwrap(), SubmitOutcome::Started);

    app.tick(Millis(1600)).unwrap();
    assert_eq!(app.contact().status(), SubmitStatus::Success);
    app.tick(Millis(4600)).unwrap();
    assert_eq!(app.contact().status(), SubmitStatus::Idle);
}

#[test]
fn time_never_runs_backwards() {
    let mut app = app();
    app.tick(Millis(500)).unwrap();
    app.tick(Millis(100)).unwrap();
    assert_eq!(app.now(), Millis(500));
}

#[test]
fn language_choice_persists() {
    let mut app = app();
    app.header_mut().toggle_language_menu();
    app.choose_language(Language::Ru);
    assert_eq!(app.language(), Language::Ru);
    assert!(!app.header().is_language_menu_open());
    assert_eq!(app.prefs().storage().get(LANGUAGE_KEY).unwrap().as_deref(), Some("ru"));
}

#[test]
fn teardown_stops_everything() {
    let mut app = app();
    app.navigate(SectionId::Skills, Millis::ZERO).unwrap();
    app.tick(Millis(800)).unwrap();
    app.teardown();
    assert!(app.is_torn_down());
    assert_eq!(app.scheduler().active_count(), 0);

    app.scroll_to(0.0, Millis(900)).unwrap();
    assert_eq!(app.scroll_y(), 1800.0);
    assert_eq!(app.now(), Millis(800));
    app.teardown();
}

#[test]
fn one_very_long_tick_lands_springs_on_their_targets() {
    let mut app = app();
    app.scroll_to(3000.0, Millis(0)).unwrap();
    let late = Millis(u64::MAX / 2);
    app.tick(late).unwrap();

    assert_eq!(app.now(), late);
    assert_eq!(app.spotlight().position(), app.spotlight().target());
    assert!(!app.background().is_transitioning());
}
