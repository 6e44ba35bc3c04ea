use super::*;

fn hero_rect() -> Rect {
    Rect::new(0.0, 0.0, 1000.0, 800.0)
}

#[test]
fn starts_centred() {
    assert_eq!(HeroParallax::new().offset(false), Vec2::ZERO);
}

#[test]
fn pointer_at_corner_converges_to_full_range() {
    let mut p = HeroParallax::new();
    p.pointer_moved(Point::new(1000.0, 0.0), hero_rect(), false);
    let first = {
        p.step(1.0 / 60.0);
        p.offset(false)
    };
    assert!(first.x > 0.0 && first.x < PARALLAX_RANGE_PX);
    assert!(first.y < 0.0 && first.y > -PARALLAX_RANGE_PX);
    for _ in 0..600 {
        p.step(1.0 / 60.0);
    }
    let settled = p.offset(false);
    assert!((settled.x - 20.0).abs() < 1e-6);
    assert!((settled.y + 20.0).abs() < 1e-6);
}

#[test]
fn reduced_motion_ignores_pointer() {
    let mut p = HeroParallax::new();
    p.pointer_moved(Point::new(0.0, 0.0), hero_rect(), true);
    p.step(1.0);
    assert_eq!(p.offset(false), Vec2::ZERO);

    p.pointer_moved(Point::new(0.0, 0.0), hero_rect(), false);
    p.step(1.0);
    assert_eq!(p.offset(true), Vec2::ZERO);
}

#[test]
fn degenerate_rect_is_ignored() {
    let mut p = HeroParallax::new();
    p.pointer_moved(Point::new(10.0, 10.0), Rect::new(0.0, 0.0, 0.0, 100.0), false);
    p.step(1.0);
    assert_eq!(p.offset(false), Vec2::ZERO);
}
