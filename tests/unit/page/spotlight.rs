use super::*;
use crate::{
    foundation::core::Viewport,
    page::{layout::PageLayout, visibility::VisibilityObservation},
};

fn obs(section: SectionId, ratio: f64, rect: Rect) -> VisibilityObservation {
    VisibilityObservation { section, ratio, rect }
}

#[test]
fn focal_point_is_clamped_into_safe_ranges() {
    let vp = Viewport::default();
    let p = SpotlightPosition::focal(Rect::new(0.0, -450.0, 1440.0, 450.0), vp, 450.0, 7940.0);
    assert_eq!(p.x, 50.0);
    assert_eq!(p.y, Y_RANGE.0);

    let p = SpotlightPosition::focal(Rect::new(1400.0, 0.0, 1440.0, 10.0), vp, 7900.0, 7940.0);
    assert_eq!(p.x, X_RANGE.1);
    assert_eq!(p.y, Y_RANGE.1);
    assert!(p.in_bounds());
}

#[test]
fn nan_focal_coordinates_land_mid_range() {
    let p = SpotlightPosition::focal(Rect::new(0.0, 0.0, 100.0, 100.0), Viewport::default(), 0.0, f64::NAN);
    assert_eq!(p.y, 50.0);
    assert!(p.in_bounds());
}

#[test]
fn weak_batches_do_not_move_the_target() {
    let mut s = Spotlight::new(Spring::SPOTLIGHT);
    let vp = Viewport::default();
    let entries = [obs(SectionId::About, 0.2, Rect::new(0.0, 0.0, 1440.0, 900.0))];
    assert_eq!(s.observe(&entries, vp, 900.0, 7940.0), None);
    assert_eq!(s.target(), SpotlightPosition::CENTER);
    assert_eq!(s.section(), SectionId::Hero);
}

#[test]
fn strong_batch_retargets_and_spring_follows() {
    let layout = PageLayout::standard(Viewport::default());
    let mut s = Spotlight::new(Spring::SPOTLIGHT);
    let rect = layout.client_rect(SectionId::Projects, 4600.0);
    let target = s
        .observe(&[obs(SectionId::Projects, 0.8, rect)], layout.viewport(), 4600.0, layout.scroll_height())
        .unwrap();
    assert_eq!(s.section(), SectionId::Projects);
    assert!(target.in_bounds());

    s.step(1.0 / 60.0, false);
    let early = s.position();
    assert!(early.y > 50.0 && early.y < target.y);
    for _ in 0..600 {
        s.step(1.0 / 60.0, false);
    }
    assert!((s.position().y - target.y).abs() < 1e-6);
    assert!(!s.frame(false).pinned);
}

#[test]
fn reduced_motion_pins_the_spotlight() {
    let mut s = Spotlight::new(Spring::SPOTLIGHT);
    let rect = Rect::new(0.0, 0.0, 1440.0, 900.0);
    s.observe(&[obs(SectionId::Contact, 1.0, rect)], Viewport::default(), 7040.0, 7940.0);
    s.step(1.0, true);
    assert_eq!(s.position(), SpotlightPosition::CENTER);
    let frame = s.frame(true);
    assert_eq!(frame.position, SpotlightPosition::CENTER);
    assert_eq!(frame.opacity, PINNED_OPACITY);
    assert!(frame.pinned);
}
