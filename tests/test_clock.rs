use std::time::Duration;

use bridge_legends::clock::{next_deadline, Timer};

#[test]
fn disarmed_timer_never_fires() {
    let mut t = Timer::new(Duration::from_secs(1));
    assert!(!t.advance(Duration::from_secs(10)));
    assert!(!t.is_armed());
}

#[test]
fn fires_exactly_at_period() {
    let mut t = Timer::new(Duration::from_secs(1));
    t.arm();
    assert!(!t.advance(Duration::from_millis(999)));
    assert!(t.advance(Duration::from_millis(1)));
    assert!(!t.is_armed()); // one-shot until re-armed
}

#[test]
fn cancel_drops_pending_fire() {
    let mut t = Timer::new(Duration::from_secs(1));
    t.arm();
    t.advance(Duration::from_millis(900));
    t.cancel();
    assert!(!t.advance(Duration::from_millis(200)));
}

#[test]
fn rearm_discards_partial_progress() {
    let mut t = Timer::new(Duration::from_secs(1));
    t.arm();
    t.advance(Duration::from_millis(700));
    t.arm();
    assert_eq!(t.remaining(), Some(t.period()));
}

#[test]
fn next_deadline_skips_disarmed() {
    let mut a = Timer::new(Duration::from_secs(1));
    let mut b = Timer::new(Duration::from_millis(1500));
    assert_eq!(next_deadline(&[&a, &b]), None);
    b.arm();
    assert_eq!(next_deadline(&[&a, &b]), Some(Duration::from_millis(1500)));
    a.arm();
    assert_eq!(next_deadline(&[&a, &b]), Some(Duration::from_secs(1)));
}
