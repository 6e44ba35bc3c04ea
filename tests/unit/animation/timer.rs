use super::*;

#[test]
fn one_shot_fires_once() {
    let mut s = Scheduler::new(Millis(0));
    let h = s.after(100);
    assert!(s.advance(Millis(99)).is_empty());
    assert_eq!(s.advance(Millis(100)), vec![h]);
    assert!(s.advance(Millis(500)).is_empty());
    assert!(!s.is_active(h));
}

#[test]
fn periodic_rearms_and_coalesces_missed_periods() {
    let mut s = Scheduler::new(Millis(0));
    let h = s.every(1500).unwrap();
    assert_eq!(s.advance(Millis(1500)), vec![h]);
    assert!(s.advance(Millis(2000)).is_empty());
    // Jumping past several deadlines fires once.
    assert_eq!(s.advance(Millis(9000)), vec![h]);
    assert!(s.advance(Millis(9001)).is_empty());
    assert_eq!(s.advance(Millis(10_500)), vec![h]);
}

#[test]
fn due_timers_come_back_in_deadline_order() {
    let mut s = Scheduler::new(Millis(0));
    let late = s.after(300);
    let early = s.after(100);
    assert_eq!(s.advance(Millis(1000)), vec![early, late]);
}

#[test]
fn cancel_prevents_firing() {
    let mut s = Scheduler::new(Millis(0));
    let a = s.every(10).unwrap();
    let b = s.after(10);
    assert!(s.cancel(a));
    assert!(!s.cancel(a));
    assert_eq!(s.advance(Millis(10)), vec![b]);
    assert_eq!(s.active_count(), 0);
}

#[test]
fn cancel_all_leaves_nothing_behind() {
    let mut s = Scheduler::new(Millis(0));
    s.every(10).unwrap();
    s.every(20).unwrap();
    s.after(5);
    s.cancel_all();
    assert_eq!(s.active_count(), 0);
    assert!(s.advance(Millis(1000)).is_empty());
}

#[test]
fn zero_period_is_rejected() {
    let mut s = Scheduler::new(Millis(0));
    assert!(s.every(0).is_err());
}

#[test]
fn clock_never_runs_backwards() {
    let mut s = Scheduler::new(Millis(50));
    s.advance(Millis(10));
    assert_eq!(s.now(), Millis(50));
}
