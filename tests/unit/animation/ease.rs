use super::*;

const ALL: [Ease; 4] = [Ease::Linear, Ease::EaseIn, Ease::EaseOut, Ease::EaseInOut];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b, "{ease:?}");
        assert!(b < c, "{ease:?}");
    }
}

#[test]
fn ease_in_out_is_symmetric() {
    let mid = Ease::EaseInOut.apply(0.5);
    assert!((mid - 0.5).abs() < 1e-4);
    let a = Ease::EaseInOut.apply(0.2);
    let b = Ease::EaseInOut.apply(0.8);
    assert!((a + b - 1.0).abs() < 1e-4);
}

#[test]
fn ease_in_starts_slow_and_ease_out_starts_fast() {
    assert!(Ease::EaseIn.apply(0.25) < 0.25);
    assert!(Ease::EaseOut.apply(0.25) > 0.25);
}

#[test]
fn out_of_range_input_is_clamped() {
    assert_eq!(Ease::EaseOut.apply(-3.0), 0.0);
    assert_eq!(Ease::EaseIn.apply(7.0), 1.0);
}
