use super::*;

#[test]
fn open_then_settle() {
    let mut m = Modal::new();
    assert!(m.is_closed());
    assert!(!m.locks_scroll());
    assert_eq!(m.frame(Millis::ZERO), ModalFrame::HIDDEN);

    assert!(m.open(Millis(100), false));
    assert_eq!(m.phase(), ModalPhase::Opening { since: Millis(100) });
    assert!(m.locks_scroll());
    assert!(!m.open(Millis(150), false));

    let mid = m.frame(Millis(250));
    assert!(mid.opacity > 0.0 && mid.opacity < 1.0);
    assert!(mid.scale > 0.9 && mid.scale < 1.0);

    m.tick(Millis(400));
    assert!(m.is_open());
    assert_eq!(m.frame(Millis(400)), ModalFrame::SHOWN);
}

#[test]
fn close_keeps_scroll_locked_until_done() {
    let mut m = Modal::new();
    m.open(Millis::ZERO, false);
    m.tick(Millis(300));
    assert!(m.close(CloseReason::Backdrop, Millis(1000), false));
    assert!(m.locks_scroll());
    m.tick(Millis(1299));
    assert!(m.locks_scroll());
    m.tick(Millis(1300));
    assert!(m.is_closed());
    assert!(!m.close(CloseReason::CloseButton, Millis(1400), false));
}

#[test]
fn escape_closes_other_keys_do_not() {
    let mut m = Modal::new();
    m.open(Millis::ZERO, true);
    assert!(!m.key("Enter", Millis(10), true));
    assert!(m.is_open());
    assert!(m.key("Escape", Millis(10), true));
    assert!(m.is_closed());
}

#[test]
fn reversing_mid_transition_keeps_progress() {
    let mut m = Modal::new();
    m.open(Millis(1000), false);
    // 100ms into opening, close: only 100ms of closing remain.
    m.close(CloseReason::Escape, Millis(1100), false);
    assert_eq!(m.phase(), ModalPhase::Closing { since: Millis(900) });
    m.tick(Millis(1199));
    assert!(!m.is_closed());
    m.tick(Millis(1200));
    assert!(m.is_closed());
}

#[test]
fn reduced_motion_skips_transitions() {
    let mut m = Modal::new();
    m.open(Millis(5), true);
    assert!(m.is_open());
    assert_eq!(m.frame(Millis(5)), ModalFrame::SHOWN);
    m.close(CloseReason::CloseButton, Millis(6), true);
    assert!(m.is_closed());
}
