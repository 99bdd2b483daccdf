#![allow(clippy::float_cmp)]

use std::f64::consts::FRAC_PI_2;

use rand::SeedableRng;
use rand::rngs::StdRng;
use uuid::Uuid;

use super::*;
use crate::storage::{MemoryStore, load_options};

// =============================================================
// Helpers
// =============================================================

fn rng() -> StdRng {
    StdRng::seed_from_u64(11)
}

fn core_with(labels: &[&str]) -> WheelCore {
    let mut core = WheelCore::new();
    for label in labels {
        assert_eq!(core.add_option(label), vec![Action::RenderNeeded, Action::Persist]);
    }
    core
}

fn texts(core: &WheelCore) -> Vec<&str> {
    core.options().iter().map(|o| o.text.as_str()).collect()
}

/// Run a spin to completion and return the actions of the final tick.
fn run_spin(core: &mut WheelCore, start_ms: f64) -> Vec<Action> {
    assert_eq!(core.start_spin(start_ms, &mut rng()), vec![Action::SpinStarted, Action::RenderNeeded]);
    let mut t = start_ms;
    loop {
        t += 16.0;
        let actions = core.tick(t);
        if !core.is_spinning() {
            return actions;
        }
        assert!(t < start_ms + 10_000.0, "spin never finished");
    }
}

fn finished(actions: &[Action]) -> Option<SpinResult> {
    actions.iter().find_map(|a| match a {
        Action::SpinFinished(result) => Some(*result),
        _ => None,
    })
}

// =============================================================
// Construction and hydrate
// =============================================================

#[test]
fn new_core_is_idle_and_empty() {
    let core = WheelCore::new();
    assert!(core.options().is_empty());
    assert!(!core.is_spinning());
    assert!(!core.can_spin());
    assert_eq!(core.rotation(), 0.0);
    assert!(!core.auto_remove);
}

#[test]
fn hydrate_without_records_seeds_localized_defaults() {
    let mut core = WheelCore::new();
    let actions = core.hydrate(None, Language::De);
    assert_eq!(actions, vec![Action::RenderNeeded, Action::Persist]);
    assert_eq!(texts(&core), Language::De.default_options().to_vec());
    assert!(core.can_spin());
}

#[test]
fn hydrate_with_records_restores_them() {
    let records = vec![
        WheelOption { id: Uuid::new_v4(), text: "Saved".to_owned(), color_index: 7 },
        WheelOption { id: Uuid::new_v4(), text: "Again".to_owned(), color_index: 8 },
    ];
    let mut core = WheelCore::new();
    assert_eq!(core.hydrate(Some(records.clone()), Language::En), vec![Action::RenderNeeded]);
    assert_eq!(core.options(), records.as_slice());
}

#[test]
fn hydrate_with_empty_saved_list_stays_empty() {
    let mut core = WheelCore::new();
    core.hydrate(Some(Vec::new()), Language::En);
    assert!(core.options().is_empty());
}

#[test]
fn hydrate_from_malformed_storage_seeds_defaults() {
    let mut store = MemoryStore::new();
    store.set(storage::OPTIONS_KEY, "][").expect("write");
    let mut core = WheelCore::new();
    core.hydrate(load_options(&store), Language::En);
    assert_eq!(core.options().len(), Language::En.default_options().len());
}

// =============================================================
// Option mutations
// =============================================================

#[test]
fn add_blank_option_produces_no_actions() {
    let mut core = WheelCore::new();
    assert!(core.add_option("   ").is_empty());
    assert!(core.options().is_empty());
}

#[test]
fn spin_enabled_tracks_option_count() {
    let mut core = core_with(&["A"]);
    assert!(!core.can_spin());
    core.add_option("B");
    assert!(core.can_spin());
    let id = core.options()[0].id;
    core.remove_option(&id);
    assert!(!core.can_spin());
}

#[test]
fn remove_option_preserves_order() {
    let mut core = core_with(&["A", "B", "C"]);
    let b = core.options()[1].id;
    assert_eq!(core.remove_option(&b), vec![Action::RenderNeeded, Action::Persist]);
    assert_eq!(texts(&core), vec!["A", "C"]);
}

#[test]
fn remove_unknown_option_is_noop() {
    let mut core = core_with(&["A", "B"]);
    assert!(core.remove_option(&Uuid::new_v4()).is_empty());
    assert_eq!(texts(&core), vec!["A", "B"]);
}

#[test]
fn shuffle_keeps_the_same_options() {
    let mut core = core_with(&["A", "B", "C", "D", "E"]);
    let mut before = texts(&core).into_iter().map(str::to_owned).collect::<Vec<_>>();
    assert_eq!(core.shuffle(&mut rng()), vec![Action::RenderNeeded, Action::Persist]);
    let mut after = texts(&core).into_iter().map(str::to_owned).collect::<Vec<_>>();
    before.sort();
    after.sort();
    assert_eq!(before, after);
}

#[test]
fn clear_resets_options_rotation_and_persisted_list() {
    let mut core = core_with(&["A", "B", "C", "D", "E"]);
    run_spin(&mut core, 0.0);
    assert!(core.rotation() > 0.0);

    let mut store = MemoryStore::new();
    core.persist(&mut store);
    assert_eq!(load_options(&store).map(|r| r.len()), Some(5));

    let actions = core.clear();
    assert!(actions.contains(&Action::Persist));
    core.persist(&mut store);

    assert!(core.options().is_empty());
    assert_eq!(core.rotation(), 0.0);
    assert_eq!(load_options(&store), Some(Vec::new()));
}

// =============================================================
// Guards while spinning
// =============================================================

#[test]
fn mutations_are_noops_while_spinning() {
    let mut core = core_with(&["A", "B", "C"]);
    core.start_spin(0.0, &mut rng());
    let snapshot = core.options().to_vec();
    let first = snapshot[0].id;

    assert!(core.remove_option(&first).is_empty());
    assert!(core.shuffle(&mut rng()).is_empty());
    assert!(core.clear().is_empty());
    assert!(core.add_option("D").is_empty());

    assert_eq!(core.options(), snapshot.as_slice());
    assert!(core.is_spinning());
}

#[test]
fn start_spin_is_ignored_when_already_spinning() {
    let mut core = core_with(&["A", "B"]);
    core.start_spin(0.0, &mut rng());
    assert!(core.start_spin(5.0, &mut rng()).is_empty());
}

#[test]
fn start_spin_is_ignored_with_one_option() {
    let mut core = core_with(&["A"]);
    assert!(core.start_spin(0.0, &mut rng()).is_empty());
    assert!(!core.is_spinning());
}

// =============================================================
// Spin lifecycle
// =============================================================

#[test]
fn spin_reports_the_segment_under_the_pointer() {
    let mut core = core_with(&["A", "B", "C", "D", "E", "F", "G"]);
    let actions = run_spin(&mut core, 100.0);
    let result = finished(&actions).expect("spin produced a result");

    assert_eq!(result.final_rotation, core.rotation());
    let expected = geometry::resolve_winner(result.final_rotation, 7, POINTER_ANGLE);
    assert_eq!(Some(result.winner_index), expected);
    assert_eq!(core.options()[result.winner_index].id, result.winner_id);
    assert_eq!(core.winner(&result).map(|o| o.id), Some(result.winner_id));
    assert!(core.can_spin());
}

#[test]
fn spin_rotation_never_decreases() {
    let mut core = core_with(&["A", "B", "C"]);
    core.start_spin(0.0, &mut rng());
    let mut last = core.rotation();
    let mut t = 0.0;
    while core.is_spinning() {
        t += 7.0;
        core.tick(t);
        assert!(core.rotation() >= last);
        last = core.rotation();
    }
}

#[test]
fn consecutive_spins_accumulate_rotation() {
    let mut core = core_with(&["A", "B"]);
    run_spin(&mut core, 0.0);
    let after_first = core.rotation();
    run_spin(&mut core, 10_000.0);
    assert!(core.rotation() > after_first);
}

#[test]
fn quarter_turn_on_four_options_picks_third_option() {
    let mut core = core_with(&["A", "B", "C", "D"]);
    core.state.rotation = FRAC_PI_2;
    let actions = core.finish(FRAC_PI_2);
    let result = finished(&actions).expect("result");
    assert_eq!(result.winner_index, 2);
    assert_eq!(core.winner(&result).map(|o| o.text.as_str()), Some("C"));
}

#[test]
fn finish_on_empty_wheel_reports_nothing() {
    let mut core = WheelCore::new();
    assert_eq!(core.finish(1.0), vec![Action::RenderNeeded]);
}

#[test]
fn cancel_spin_resets_without_result() {
    let mut core = core_with(&["A", "B", "C"]);
    core.start_spin(0.0, &mut rng());
    core.tick(500.0);
    assert_eq!(core.cancel_spin(), vec![Action::RenderNeeded]);
    assert!(!core.is_spinning());
    assert!(core.can_spin());
    assert!(core.tick(4000.0).is_empty());
    assert!(core.cancel_spin().is_empty());
}

// =============================================================
// Auto-remove
// =============================================================

#[test]
fn auto_remove_off_schedules_nothing() {
    let mut core = core_with(&["A", "B", "C"]);
    let actions = run_spin(&mut core, 0.0);
    assert!(!actions.iter().any(|a| matches!(a, Action::ScheduleAutoRemove { .. })));
}

#[test]
fn auto_remove_flag_is_read_at_completion() {
    let mut core = core_with(&["A", "B", "C"]);
    core.start_spin(0.0, &mut rng());
    core.tick(1000.0);
    core.set_auto_remove(true);
    let mut t = 1000.0;
    let actions = loop {
        t += 16.0;
        let actions = core.tick(t);
        if !core.is_spinning() {
            break actions;
        }
    };
    let result = finished(&actions).expect("result");
    assert!(actions.contains(&Action::ScheduleAutoRemove { id: result.winner_id, delay_ms: 2000 }));
}

#[test]
fn apply_auto_remove_removes_winner_once() {
    let mut core = core_with(&["A", "B", "C"]);
    core.set_auto_remove(true);
    let result = finished(&run_spin(&mut core, 0.0)).expect("result");

    assert_eq!(core.apply_auto_remove(&result.winner_id), vec![Action::RenderNeeded, Action::Persist]);
    assert_eq!(core.options().len(), 2);
    assert!(core.winner(&result).is_none());
    assert!(core.apply_auto_remove(&result.winner_id).is_empty());
}

#[test]
fn apply_auto_remove_tolerates_manual_removal() {
    let mut core = core_with(&["A", "B", "C"]);
    core.set_auto_remove(true);
    let result = finished(&run_spin(&mut core, 0.0)).expect("result");
    core.remove_option(&result.winner_id);
    assert!(core.apply_auto_remove(&result.winner_id).is_empty());
    assert_eq!(core.options().len(), 2);
}

#[test]
fn apply_auto_remove_bypasses_spinning_guard() {
    let mut core = core_with(&["A", "B", "C", "D"]);
    core.set_auto_remove(true);
    let result = finished(&run_spin(&mut core, 0.0)).expect("result");
    core.start_spin(10_000.0, &mut rng());
    assert!(!core.apply_auto_remove(&result.winner_id).is_empty());
    assert_eq!(core.options().len(), 3);
}

#[test]
fn custom_config_changes_duration_and_delay() {
    let config = SpinConfig { duration_ms: 100.0, auto_remove_delay_ms: 50, ..SpinConfig::default() };
    let mut core = WheelCore::with_config(config).expect("valid config");
    core.add_option("A");
    core.add_option("B");
    core.set_auto_remove(true);
    core.start_spin(0.0, &mut rng());
    let actions = core.tick(100.0);
    let result = finished(&actions).expect("result");
    assert!(actions.contains(&Action::ScheduleAutoRemove { id: result.winner_id, delay_ms: 50 }));
}

#[test]
fn with_config_rejects_empty_turn_range() {
    let config = SpinConfig { min_turns: 6.0, max_turns: 6.0, ..SpinConfig::default() };
    assert!(config.validate().is_err());
    let err = WheelCore::with_config(config).expect_err("empty turn range");
    assert!(matches!(err, ConfigError::Turns { .. }));
}

#[test]
fn with_config_rejects_inverted_turn_range() {
    let config = SpinConfig { min_turns: 7.0, max_turns: 5.0, ..SpinConfig::default() };
    assert!(WheelCore::with_config(config).is_err());
}

#[test]
fn validated_narrow_turn_range_spins_safely() {
    let config = SpinConfig { min_turns: 6.0, max_turns: 6.000_001, ..SpinConfig::default() };
    let mut core = WheelCore::with_config(config).expect("valid config");
    core.add_option("A");
    core.add_option("B");
    assert!(core.start_spin(0.0, &mut rng()).contains(&Action::SpinStarted));
    let actions = core.tick(core.config().duration_ms);
    assert!(finished(&actions).is_some());
}
