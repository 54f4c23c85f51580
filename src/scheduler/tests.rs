use super::*;
use std::time::Duration;

fn queue() -> (ManualClock, TimerQueue<ManualClock>) {
    let clock = ManualClock::new();
    (clock.clone(), TimerQueue::new(clock))
}

#[test]
fn zero_delay_timer_is_due_immediately() {
    let (_clock, mut q) = queue();
    let id = q.schedule(Duration::ZERO);
    assert_eq!(q.pop_due(), Some(id));
    assert_eq!(q.pop_due(), None);
    assert_eq!(q.pending(), 0);
}

#[test]
fn delayed_timer_waits_for_its_deadline() {
    let (clock, mut q) = queue();
    let id = q.schedule(Duration::from_millis(1000));
    clock.advance(Duration::from_millis(999));
    assert_eq!(q.pop_due(), None);
    clock.advance(Duration::from_millis(1));
    assert_eq!(q.pop_due(), Some(id));
}

#[test]
fn due_timers_come_out_earliest_first() {
    let (clock, mut q) = queue();
    let late = q.schedule(Duration::from_millis(300));
    let early = q.schedule(Duration::from_millis(100));
    let same_a = q.schedule(Duration::from_millis(200));
    let same_b = q.schedule(Duration::from_millis(200));
    clock.advance(Duration::from_secs(1));

    assert_eq!(q.pop_due(), Some(early));
    assert_eq!(q.pop_due(), Some(same_a));
    assert_eq!(q.pop_due(), Some(same_b));
    assert_eq!(q.pop_due(), Some(late));
}

#[test]
fn cancel_removes_timer_and_ignores_unknown_ids() {
    let (clock, mut q) = queue();
    let a = q.schedule(Duration::from_millis(10));
    let b = q.schedule(Duration::from_millis(10));
    q.cancel(a);
    q.cancel(a);
    assert!(!q.is_pending(a));
    assert!(q.is_pending(b));

    clock.advance(Duration::from_millis(10));
    assert_eq!(q.pop_due(), Some(b));
    q.cancel(b);
    assert_eq!(q.pending(), 0);
}

#[test]
fn ids_are_never_reused() {
    let (_clock, mut q) = queue();
    let a = q.schedule(Duration::ZERO);
    q.cancel(a);
    let b = q.schedule(Duration::ZERO);
    assert_ne!(a, b);
}

#[test]
fn next_deadline_tracks_soonest_timer() {
    let (clock, mut q) = queue();
    assert!(q.next_deadline().is_none());
    q.schedule(Duration::from_millis(500));
    q.schedule(Duration::from_millis(50));
    let expected = clock.now() + Duration::from_millis(50);
    assert_eq!(q.next_deadline(), Some(expected));
}
