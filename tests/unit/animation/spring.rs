use super::*;

fn run(v: &mut SpringValue, secs: f64) {
    let frames = (secs * 60.0) as usize;
    for _ in 0..frames {
        v.step(1.0 / 60.0);
    }
}

#[test]
fn converges_to_target() {
    let mut v = SpringValue::new(Spring::SPOTLIGHT, 50.0);
    v.set_target(80.0);
    run(&mut v, 5.0);
    assert!(v.is_settled());
    assert_eq!(v.value(), 80.0);
}

#[test]
fn moves_gradually_not_instantly() {
    let mut v = SpringValue::new(Spring::SPOTLIGHT, 50.0);
    v.set_target(80.0);
    let first = v.step(1.0 / 60.0);
    assert!(first > 50.0);
    assert!(first < 60.0);
}

#[test]
fn overdamped_spotlight_does_not_overshoot() {
    assert!(Spring::SPOTLIGHT.damping_ratio() > 1.0);
    let mut v = SpringValue::new(Spring::SPOTLIGHT, 20.0);
    v.set_target(80.0);
    for _ in 0..600 {
        let x = v.step(1.0 / 60.0);
        assert!(x <= 80.0 + 1e-9);
    }
}

#[test]
fn snap_bypasses_the_spring() {
    let mut v = SpringValue::new(Spring::PARALLAX, 0.0);
    v.set_target(10.0);
    v.step(0.016);
    v.snap(50.0);
    assert_eq!(v.value(), 50.0);
    assert_eq!(v.velocity(), 0.0);
    assert!(v.is_settled());
}

#[test]
fn zero_or_invalid_dt_is_a_no_op() {
    let mut v = SpringValue::new(Spring::SPOTLIGHT, 1.0);
    v.set_target(2.0);
    assert_eq!(v.step(0.0), 1.0);
    assert_eq!(v.step(f64::NAN), 1.0);
}

#[test]
fn validate_rejects_non_positive_constants() {
    assert!(Spring::new(0.0, 1.0, 1.0).validate().is_err());
    assert!(Spring::new(1.0, -1.0, 1.0).validate().is_err());
    assert!(Spring::SPOTLIGHT.validate().is_ok());
}

#[test]
fn long_gap_settles_without_integrating() {
    let mut v = SpringValue::new(Spring::SPOTLIGHT, 20.0);
    v.set_target(80.0);
    assert_eq!(v.step(1.0e15), 80.0);
    assert!(v.is_settled());

    let mut v = SpringValue::new(Spring::SCROLL_PROGRESS, 0.0);
    v.set_target(1.0);
    v.step(9.0);
    assert!((v.value() - 1.0).abs() < 0.05);
}
