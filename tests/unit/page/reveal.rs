use super::*;

fn vp() -> Viewport {
    Viewport::default()
}

#[test]
fn hero_plays_on_mount_and_others_wait() {
    let hero = SectionReveal::new(SectionId::Hero, Millis(40));
    assert_eq!(hero.triggered_at(), Some(Millis(40)));

    let about = SectionReveal::new(SectionId::About, Millis(40));
    assert!(!about.is_triggered());
    let frame = about.item(0, Millis(10_000), false);
    assert_eq!(frame.opacity, 0.0);
    assert_eq!(frame.offset_y, 40.0);
    assert_eq!(about.container_opacity(Millis(10_000), false), 0.0);
}

#[test]
fn trigger_needs_to_cross_the_inset_root() {
    let mut about = SectionReveal::new(SectionId::About, Millis::ZERO);
    // Top edge exactly on the inset bottom: no overlap yet.
    assert!(!about.observe(Rect::new(0.0, 800.0, 1440.0, 1700.0), vp(), Millis(5)));
    assert!(about.observe(Rect::new(0.0, 700.0, 1440.0, 1600.0), vp(), Millis(10)));
    assert_eq!(about.triggered_at(), Some(Millis(10)));
}

#[test]
fn reveal_is_one_shot() {
    let mut about = SectionReveal::new(SectionId::About, Millis::ZERO);
    assert!(about.observe(Rect::new(0.0, 0.0, 1440.0, 900.0), vp(), Millis(100)));
    // Leaving and coming back does not restart it.
    assert!(!about.observe(Rect::new(0.0, -5000.0, 1440.0, -4100.0), vp(), Millis(200)));
    assert!(!about.observe(Rect::new(0.0, 0.0, 1440.0, 900.0), vp(), Millis(300)));
    assert_eq!(about.triggered_at(), Some(Millis(100)));
}

#[test]
fn children_stagger_after_trigger() {
    let mut about = SectionReveal::new(SectionId::About, Millis::ZERO);
    about.observe(Rect::new(0.0, 0.0, 1440.0, 900.0), vp(), Millis(1000));

    let first = about.item(0, Millis(1300), false);
    assert!(first.opacity > 0.0 && first.opacity < 1.0);
    assert!(first.offset_y > 0.0 && first.offset_y < 40.0);

    // Second child starts 150ms later.
    let second = about.item(1, Millis(1100), false);
    assert_eq!(second.opacity, 0.0);

    assert!(!about.is_settled(3, Millis(1899), false));
    assert!(about.is_settled(3, Millis(1900), false));
}

#[test]
fn reduced_motion_shows_everything_at_once() {
    let about = SectionReveal::new(SectionId::About, Millis::ZERO);
    assert!(about.item(4, Millis::ZERO, true).is_visible());
    assert_eq!(about.container_opacity(Millis::ZERO, true), 1.0);
    assert!(about.is_settled(10, Millis::ZERO, true));
    assert!(about.item(0, Millis::ZERO, true).css().is_empty());
}

#[test]
fn degenerate_viewport_never_triggers() {
    let mut about = SectionReveal::new(SectionId::About, Millis::ZERO);
    let tiny = Viewport::new(150.0, 150.0).unwrap();
    assert!(!about.observe(Rect::new(0.0, 0.0, 150.0, 150.0), tiny, Millis(1)));
}
