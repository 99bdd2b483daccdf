#![allow(clippy::float_cmp)]

use std::f64::consts::PI;

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;

// =============================================================
// Helpers
// =============================================================

fn state_with(count: usize) -> WheelState {
    let mut state = WheelState::new();
    for i in 0..count {
        assert!(state.options.add(&format!("option {i}")).is_some());
    }
    state
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5EED)
}

fn started(count: usize, now_ms: f64) -> (SpinScheduler, WheelState, ActiveSpin) {
    let mut scheduler = SpinScheduler::default();
    let mut state = state_with(count);
    let spin = scheduler
        .start(&mut state, now_ms, &mut rng())
        .expect("spin starts with enough options");
    (scheduler, state, spin)
}

// =============================================================
// ease_out
// =============================================================

#[test]
fn ease_out_hits_endpoints_exactly() {
    assert_eq!(ease_out(0.0, 3.5), 0.0);
    assert_eq!(ease_out(1.0, 3.5), 1.0);
}

#[test]
fn ease_out_is_monotone_and_never_overshoots() {
    let mut prev = 0.0;
    for step in 0..=1000 {
        let value = ease_out(f64::from(step) / 1000.0, 3.5);
        assert!(value >= prev);
        assert!(value <= 1.0);
        prev = value;
    }
}

#[test]
fn ease_out_decelerates() {
    let early = ease_out(0.1, 3.5) - ease_out(0.0, 3.5);
    let late = ease_out(1.0, 3.5) - ease_out(0.9, 3.5);
    assert!(early > late);
}

#[test]
fn ease_out_clamps_progress() {
    assert_eq!(ease_out(-0.5, 3.5), 0.0);
    assert_eq!(ease_out(2.0, 3.5), 1.0);
}

// =============================================================
// start
// =============================================================

#[test]
fn start_rejects_fewer_than_two_options() {
    let mut scheduler = SpinScheduler::default();
    for count in [0, 1] {
        let mut state = state_with(count);
        let err = scheduler.start(&mut state, 0.0, &mut rng());
        assert_eq!(err, Err(SpinRejected::TooFewOptions { count }));
        assert!(!state.spinning);
        assert!(!scheduler.is_running());
    }
}

#[test]
fn start_rejects_while_running() {
    let (mut scheduler, mut state, spin) = started(3, 0.0);
    let err = scheduler.start(&mut state, 10.0, &mut rng());
    assert_eq!(err, Err(SpinRejected::AlreadySpinning));
    assert_eq!(scheduler.active(), Some(&spin));
}

#[test]
fn start_sets_spinning_and_picks_delta_in_turn_range() {
    let mut scheduler = SpinScheduler::default();
    let mut rng = rng();
    for _ in 0..200 {
        let mut state = state_with(2);
        let spin = scheduler.start(&mut state, 0.0, &mut rng).expect("spin starts");
        assert!(state.spinning);
        assert!(spin.total_delta >= 10.0 * PI);
        assert!(spin.total_delta < 14.0 * PI);
        assert!(scheduler.cancel(&mut state));
    }
}

#[test]
fn start_continues_from_current_rotation() {
    let mut scheduler = SpinScheduler::default();
    let mut state = state_with(4);
    state.rotation = 2.5;
    let spin = scheduler.start(&mut state, 100.0, &mut rng()).expect("spin starts");
    assert_eq!(spin.start_rotation, 2.5);
    assert_eq!(spin.started_ms, 100.0);
}

// =============================================================
// tick
// =============================================================

#[test]
fn tick_without_spin_is_idle() {
    let mut scheduler = SpinScheduler::default();
    let mut state = state_with(3);
    assert_eq!(scheduler.tick(&mut state, 50.0), Tick::Idle);
}

#[test]
fn rotation_at_endpoints_is_exact() {
    let (scheduler, _, spin) = started(4, 0.0);
    let config = scheduler.config();
    assert_eq!(spin.rotation_at(0.0, config), spin.start_rotation);
    assert_eq!(spin.rotation_at(config.duration_ms, config), spin.start_rotation + spin.total_delta);
}

#[test]
fn tick_coalesces_frames_faster_than_sixty_hertz() {
    let (mut scheduler, mut state, _) = started(4, 1000.0);
    assert_eq!(scheduler.tick(&mut state, 1005.0), Tick::Coalesced);
    assert_eq!(scheduler.tick(&mut state, 1010.0), Tick::Coalesced);
    assert!(matches!(scheduler.tick(&mut state, 1017.0), Tick::Frame { .. }));
    assert_eq!(scheduler.tick(&mut state, 1020.0), Tick::Coalesced);
}

#[test]
fn tick_rotation_depends_on_wall_clock_not_tick_count() {
    let start = 0.0;
    let (mut fast, mut fast_state, spin) = started(5, start);
    let (mut slow, mut slow_state, _) = started(5, start);

    // 240 Hz host versus 30 Hz host, both sampled at t = 1000 ms.
    let mut t = start;
    while t < 1000.0 {
        t += 1000.0 / 240.0;
        fast.tick(&mut fast_state, t.min(1000.0));
    }
    let mut t = start;
    while t < 1000.0 {
        t += 1000.0 / 30.0;
        slow.tick(&mut slow_state, t.min(1000.0));
    }

    let expected = spin.rotation_at(1000.0, fast.config());
    let tolerance = spin.rotation_at(1000.0, fast.config()) - spin.rotation_at(1000.0 - 17.0, fast.config());
    assert!((fast_state.rotation - expected).abs() <= tolerance);
    assert!((slow_state.rotation - expected).abs() <= tolerance);
}

#[test]
fn tick_frames_sample_the_easing_curve() {
    let (mut scheduler, mut state, spin) = started(3, 0.0);
    for t in [20.0, 400.0, 1200.0, 3000.0] {
        match scheduler.tick(&mut state, t) {
            Tick::Frame { rotation } => {
                assert_eq!(rotation, spin.rotation_at(t, scheduler.config()));
                assert_eq!(state.rotation, rotation);
            }
            other => panic!("expected a frame at {t}, got {other:?}"),
        }
    }
}

#[test]
fn tick_rotation_is_monotone_even_if_clock_steps_back() {
    let (mut scheduler, mut state, _) = started(3, 0.0);
    assert!(matches!(scheduler.tick(&mut state, 1000.0), Tick::Frame { .. }));
    let before = state.rotation;
    scheduler.tick(&mut state, 500.0);
    assert!(state.rotation >= before);
}

#[test]
fn tick_finishes_at_exact_terminal_rotation() {
    let (mut scheduler, mut state, spin) = started(4, 250.0);
    scheduler.tick(&mut state, 1000.0);
    let outcome = scheduler.tick(&mut state, 250.0 + 3500.0);
    let terminal = spin.start_rotation + spin.total_delta;
    assert_eq!(outcome, Tick::Finished { rotation: terminal });
    assert_eq!(state.rotation, terminal);
    assert!(!state.spinning);
    assert!(!scheduler.is_running());
    assert_eq!(scheduler.tick(&mut state, 5000.0), Tick::Idle);
}

#[test]
fn tick_finishes_even_inside_a_coalesced_window() {
    let (mut scheduler, mut state, _) = started(4, 0.0);
    assert!(matches!(scheduler.tick(&mut state, 3495.0), Tick::Frame { .. }));
    assert!(matches!(scheduler.tick(&mut state, 3500.0), Tick::Finished { .. }));
}

// =============================================================
// cancel
// =============================================================

#[test]
fn cancel_resets_spinning_and_is_idempotent() {
    let (mut scheduler, mut state, _) = started(3, 0.0);
    scheduler.tick(&mut state, 500.0);
    let mid_rotation = state.rotation;

    assert!(scheduler.cancel(&mut state));
    assert!(!state.spinning);
    assert_eq!(state.rotation, mid_rotation);
    assert!(!scheduler.cancel(&mut state));
}

#[test]
fn tick_after_cancel_never_resumes() {
    let (mut scheduler, mut state, _) = started(3, 0.0);
    scheduler.cancel(&mut state);
    assert_eq!(scheduler.tick(&mut state, 3600.0), Tick::Idle);
    assert!(!state.spinning);
}

#[test]
fn cancel_allows_a_fresh_start() {
    let (mut scheduler, mut state, _) = started(3, 0.0);
    scheduler.cancel(&mut state);
    assert!(scheduler.start(&mut state, 10.0, &mut rng()).is_ok());
}

#[test]
fn new_rejects_config_that_cannot_sample_turns() {
    let config = SpinConfig { min_turns: 5.0, max_turns: 5.0, ..SpinConfig::default() };
    assert!(matches!(SpinScheduler::new(config), Err(ConfigError::Turns { .. })));
}

#[test]
fn new_accepts_default_config() {
    let scheduler = SpinScheduler::new(SpinConfig::default()).expect("defaults are valid");
    assert!(!scheduler.is_running());
    assert_eq!(scheduler.config(), &SpinConfig::default());
}
