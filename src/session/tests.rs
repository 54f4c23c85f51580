use super::*;
use crate::catalog::{Catalog, Track};
use crate::render::{Invalidate, WidgetId};
use crate::scheduler::{ManualClock, TimerQueue};
use std::time::Duration;

type TestSession = Session<TimerQueue<ManualClock>>;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn tracks(n: usize, duration_ms: u64) -> Catalog {
    let tracks = (0..n)
        .map(|i| Track::new(&format!("Track {i}"), "Artist", duration_ms, "cover"))
        .collect();
    Catalog::new(tracks).unwrap()
}

fn session(catalog: Catalog, options: SessionOptions) -> (ManualClock, TestSession) {
    let clock = ManualClock::new();
    let s = Session::new(catalog, TimerQueue::new(clock.clone()), options).unwrap();
    (clock, s)
}

fn seeded() -> SessionOptions {
    SessionOptions {
        seed: Some(7),
        ..SessionOptions::default()
    }
}

/// Fire every due timer, like one turn of the event loop.
fn drain(s: &mut TestSession) -> Vec<Invalidate> {
    let mut fired = Vec::new();
    while let Some(id) = s.scheduler_mut().pop_due() {
        if let Some(inv) = s.fire(id) {
            fired.push(inv);
        }
    }
    fired
}

/// Advance the clock by `total` in small steps, draining timers as they come due.
fn run_for(clock: &ManualClock, s: &mut TestSession, total: Duration) {
    drain(s);
    let step = ms(10);
    let mut left = total;
    while !left.is_zero() {
        let d = step.min(left);
        clock.advance(d);
        left -= d;
        drain(s);
    }
}

#[test]
fn new_session_starts_stopped_at_start_index() {
    let (_clock, s) = session(
        tracks(3, 5000),
        SessionOptions {
            start_index: 2,
            repeat: true,
            ..seeded()
        },
    );
    assert_eq!(s.state().track_index, 2);
    assert_eq!(s.state().phase(), Phase::Stopped);
    assert!(s.state().is_repeat);
    assert_eq!(s.state().elapsed, Duration::ZERO);
    assert!(s.pending_tick().is_none());
}

#[test]
fn new_session_rejects_bad_options() {
    let clock = ManualClock::new();
    let err = Session::new(
        tracks(3, 5000),
        TimerQueue::new(clock.clone()),
        SessionOptions {
            start_index: 3,
            ..seeded()
        },
    )
    .err()
    .unwrap();
    assert_eq!(err, SessionError::TrackOutOfRange { index: 3, len: 3 });

    let err = Session::new(
        tracks(3, 5000),
        TimerQueue::new(clock),
        SessionOptions {
            quantum: Duration::ZERO,
            ..seeded()
        },
    )
    .err()
    .unwrap();
    assert_eq!(err, SessionError::ZeroQuantum);
}

#[test]
fn toggle_playback_arms_and_cancels_tick() {
    let (_clock, mut s) = session(tracks(3, 5000), seeded());

    assert_eq!(s.toggle_playback(), Invalidate::PLAY_PAUSE);
    assert_eq!(s.state().phase(), Phase::Playing);
    assert_eq!(s.scheduler().pending(), 1);

    s.toggle_playback();
    assert_eq!(s.state().phase(), Phase::Stopped);
    assert_eq!(s.scheduler().pending(), 0);
    assert!(s.pending_tick().is_none());
}

#[test]
fn ticks_advance_one_quantum_per_quantum() {
    let (clock, mut s) = session(tracks(3, 60_000), seeded());
    s.toggle_playback();

    // First tick runs on the next loop turn, then every second.
    run_for(&clock, &mut s, ms(3000));
    assert_eq!(s.state().elapsed, ms(4000));
    assert!(s.state().is_playing);
}

#[test]
fn rearming_never_stacks_two_loops() {
    let (clock, mut s) = session(tracks(3, 60_000), seeded());
    s.toggle_playback();
    s.arm(Duration::ZERO);
    s.arm(Duration::ZERO);
    assert_eq!(s.scheduler().pending(), 1);

    run_for(&clock, &mut s, ms(3000));
    assert_eq!(s.state().elapsed, ms(4000));

    // Off and on again within the same quantum still leaves a single loop.
    s.toggle_playback();
    s.toggle_playback();
    assert_eq!(s.scheduler().pending(), 1);
}

#[test]
fn stale_tick_after_stop_is_ignored() {
    let (_clock, mut s) = session(tracks(3, 60_000), seeded());
    s.toggle_playback();
    let id = s.pending_tick().unwrap();
    s.toggle_playback();

    assert_eq!(s.fire(id), None);
    assert_eq!(s.state().elapsed, Duration::ZERO);
    assert_eq!(s.scheduler().pending(), 0);
}

#[test]
fn tick_invalidates_progress_widgets_only() {
    let (_clock, mut s) = session(tracks(3, 60_000), seeded());
    s.toggle_playback();
    let fired = drain(&mut s);
    assert_eq!(fired, vec![Invalidate::PROGRESS]);
    assert!(fired[0].covers(WidgetId::Slider));
    assert!(!fired[0].covers(WidgetId::Title));
}

#[test]
fn exhausted_track_advances_and_keeps_playing() {
    let (clock, mut s) = session(tracks(3, 5000), seeded());
    s.toggle_playback();

    run_for(&clock, &mut s, ms(5000));
    assert_eq!(s.state().track_index, 1);
    assert_eq!(s.state().elapsed, Duration::ZERO);
    assert!(s.state().is_playing);
    assert_eq!(s.scheduler().pending(), 1);

    // The loop carries on into the new track.
    run_for(&clock, &mut s, ms(2000));
    assert_eq!(s.state().track_index, 1);
    assert_eq!(s.state().elapsed, ms(2000));
}

#[test]
fn last_track_stops_at_the_end_without_wrapping() {
    let (clock, mut s) = session(
        tracks(2, 2000),
        SessionOptions {
            start_index: 1,
            ..seeded()
        },
    );
    s.toggle_playback();
    run_for(&clock, &mut s, ms(5000));

    assert_eq!(s.state().track_index, 1);
    assert!(!s.state().is_playing);
    assert_eq!(s.state().elapsed, ms(2000));
    assert_eq!(s.scheduler().pending(), 0);
}

#[test]
fn last_track_stops_even_with_repeat_on() {
    let (clock, mut s) = session(
        tracks(3, 2000),
        SessionOptions {
            start_index: 2,
            repeat: true,
            ..seeded()
        },
    );
    s.toggle_playback();
    run_for(&clock, &mut s, ms(5000));

    assert!(!s.state().is_playing);
    assert_eq!(s.state().track_index, 2);
    assert_eq!(s.state().elapsed, ms(2000));
    assert_eq!(s.scheduler().pending(), 0);
    assert!(s.pending_tick().is_none());
}

#[test]
fn auto_advance_with_repeat_picks_any_track_and_keeps_playing() {
    for seed in 0..20 {
        let (clock, mut s) = session(
            tracks(3, 2000),
            SessionOptions {
                repeat: true,
                seed: Some(seed),
                ..SessionOptions::default()
            },
        );
        s.toggle_playback();
        // Ticks at 0s and 1s fill the track, the one at 2s advances.
        run_for(&clock, &mut s, ms(2000));

        assert!(s.state().track_index < 3);
        assert_eq!(s.state().elapsed, Duration::ZERO);
        assert!(s.state().is_playing);
        assert_eq!(s.scheduler().pending(), 1);
    }
}

#[test]
fn partial_last_quantum_counts_as_exhausted() {
    let (clock, mut s) = session(tracks(2, 2500), seeded());
    s.toggle_playback();
    run_for(&clock, &mut s, ms(1000));
    assert_eq!(s.state().elapsed, ms(2000));

    run_for(&clock, &mut s, ms(1000));
    assert_eq!(s.state().track_index, 1);
    assert_eq!(s.state().elapsed, Duration::ZERO);
}

#[test]
fn play_next_moves_forward_and_resets_elapsed() {
    let (_clock, mut s) = session(tracks(3, 60_000), seeded());
    s.seek_to(ms(12_000));

    assert_eq!(s.play_next(), Ok(Invalidate::Full));
    assert_eq!(s.state().track_index, 1);
    assert_eq!(s.state().elapsed, Duration::ZERO);
}

#[test]
fn play_next_at_last_track_is_rejected() {
    let (_clock, mut s) = session(
        tracks(3, 60_000),
        SessionOptions {
            start_index: 2,
            ..seeded()
        },
    );
    s.seek_to(ms(3000));

    assert_eq!(s.play_next(), Err(SessionError::NoNextTrack));
    assert_eq!(s.state().track_index, 2);
    assert_eq!(s.state().elapsed, ms(3000));
}

#[test]
fn play_next_with_repeat_picks_any_track() {
    let (_clock, mut s) = session(
        tracks(3, 60_000),
        SessionOptions {
            start_index: 2,
            repeat: true,
            ..seeded()
        },
    );
    for _ in 0..50 {
        s.seek_to(ms(1000));
        assert!(s.play_next().is_ok());
        assert!(s.state().track_index < 3);
        assert_eq!(s.state().elapsed, Duration::ZERO);
    }
}

#[test]
fn repeat_picks_are_reproducible_with_a_seed() {
    let picks = |seed| {
        let (_clock, mut s) = session(
            tracks(5, 60_000),
            SessionOptions {
                repeat: true,
                seed: Some(seed),
                ..SessionOptions::default()
            },
        );
        (0..20)
            .map(|_| {
                s.play_next().unwrap();
                s.state().track_index
            })
            .collect::<Vec<_>>()
    };
    assert_eq!(picks(42), picks(42));
}

#[test]
fn play_previous_moves_back_and_rejects_first_track() {
    let (_clock, mut s) = session(
        tracks(3, 60_000),
        SessionOptions {
            start_index: 1,
            ..seeded()
        },
    );
    s.seek_to(ms(4000));

    assert_eq!(s.play_previous(), Ok(Invalidate::Full));
    assert_eq!(s.state().track_index, 0);
    assert_eq!(s.state().elapsed, Duration::ZERO);

    assert_eq!(s.play_previous(), Err(SessionError::NoPreviousTrack));
    assert_eq!(s.state().track_index, 0);
}

#[test]
fn toggle_repeat_twice_restores_flag() {
    let (_clock, mut s) = session(tracks(3, 60_000), seeded());
    assert_eq!(s.toggle_repeat(), Invalidate::REPEAT);
    assert!(s.state().is_repeat);
    s.toggle_repeat();
    assert!(!s.state().is_repeat);
}

#[test]
fn toggle_like_flips_only_current_track() {
    let (_clock, mut s) = session(
        tracks(3, 60_000),
        SessionOptions {
            start_index: 1,
            ..seeded()
        },
    );
    assert_eq!(s.toggle_like(), Invalidate::Full);

    let flags: Vec<bool> = s.catalog().iter().map(|t| t.favorited).collect();
    assert_eq!(flags, vec![false, true, false]);

    s.toggle_like();
    assert!(s.catalog().iter().all(|t| !t.favorited));
}

#[test]
fn seek_clamps_and_leaves_playback_alone() {
    let (_clock, mut s) = session(tracks(3, 5000), seeded());
    s.toggle_playback();
    let tick = s.pending_tick();

    assert_eq!(s.seek_to(ms(99_000)), Invalidate::PROGRESS);
    assert_eq!(s.state().elapsed, ms(5000));
    assert!(s.state().is_playing);
    assert_eq!(s.pending_tick(), tick);

    s.seek_to(ms(1234));
    assert_eq!(s.state().elapsed, ms(1234));
}

#[test]
fn seek_near_end_lets_next_tick_advance() {
    let (clock, mut s) = session(tracks(3, 5000), seeded());
    s.seek_to(ms(4500));
    s.toggle_playback();
    run_for(&clock, &mut s, Duration::ZERO);

    assert_eq!(s.state().track_index, 1);
    assert_eq!(s.state().elapsed, Duration::ZERO);
}

#[test]
fn teardown_cancels_pending_tick() {
    let (clock, mut s) = session(tracks(3, 5000), seeded());
    s.toggle_playback();
    s.teardown();
    assert_eq!(s.scheduler().pending(), 0);

    run_for(&clock, &mut s, ms(3000));
    assert_eq!(s.state().elapsed, Duration::ZERO);
}

#[test]
fn view_reflects_session_state() {
    let (_clock, mut s) = session(tracks(3, 75_000), seeded());
    s.toggle_playback();
    s.seek_to(ms(61_000));
    let view = s.view();
    assert_eq!(view.title, "Track 0");
    assert_eq!(view.elapsed_label, "1:01");
    assert_eq!(view.duration_label, "1:15");
    assert!(!view.previous_enabled);
    assert!(view.next_enabled);
}
