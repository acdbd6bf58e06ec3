use crate::host::{Deleted, ResidentFlags, Temp};
use crate::settings::RiderControlSettings;
use crate::test_harness::TestRiderCity;

#[test]
fn ten_residents_with_cap_three_mark_over_four_frames() {
    let mut city = TestRiderCity::with_batch_cap(3);
    city.spawn_residents(10, None);

    let mut applied = Vec::new();
    let mut marked = Vec::new();
    for _ in 0..4 {
        city.tick();
        applied.push(city.activity().applied);
        marked.push(city.marked_count());
    }

    assert_eq!(applied, vec![3, 3, 3, 1]);
    assert_eq!(marked, vec![3, 6, 9, 10]);
    assert_eq!(city.ignore_taxi_count(), 10);

    city.tick();
    assert_eq!(city.activity().applied, 0, "converged population is left alone");
}

#[test]
fn disabling_drains_marks_in_batches() {
    let mut city = TestRiderCity::with_batch_cap(3);
    city.spawn_residents(10, None);
    city.tick_n(4);
    assert_eq!(city.marked_count(), 10);

    city.settings_mut().set_enabled(false);
    let mut unmarked = Vec::new();
    let mut remaining = Vec::new();
    for _ in 0..4 {
        city.tick();
        unmarked.push(city.activity().unmarked);
        remaining.push(city.marked_count());
    }

    assert_eq!(unmarked, vec![3, 3, 3, 1]);
    assert_eq!(remaining, vec![7, 4, 1, 0]);
    assert_eq!(city.ignore_taxi_count(), 0);
}

#[test]
fn marking_is_reversible_for_preset_residents() {
    let mut city = TestRiderCity::new();
    let preset = city.spawn_resident_with_flags(None, ResidentFlags::IGNORE_TAXI);
    let plain = city.spawn_resident(None);

    city.tick();
    assert!(city.is_marked(preset));
    assert!(city.is_preset(preset));
    assert!(city.is_marked(plain));
    assert!(!city.is_preset(plain));

    city.settings_mut().set_enabled(false);
    city.tick();

    assert!(!city.is_marked(preset));
    assert!(!city.is_preset(preset));
    assert!(
        city.resident(preset).ignores_taxi(),
        "host-set IGNORE_TAXI survives release"
    );
    assert!(!city.resident(plain).ignores_taxi());
}

#[test]
fn enable_disable_round_trip_restores_flags() {
    let mut city = TestRiderCity::new();
    let residents = city.spawn_residents(5, None);
    let before: Vec<_> = residents.iter().map(|&r| city.resident(r).flags).collect();

    city.tick();
    city.settings_mut().set_enabled(false);
    city.tick();

    let after: Vec<_> = residents.iter().map(|&r| city.resident(r).flags).collect();
    assert_eq!(before, after);
    assert_eq!(city.marked_count(), 0);
}

#[test]
fn cleared_bit_is_reapplied_next_frame() {
    let mut city = TestRiderCity::new();
    let resident = city.spawn_resident(None);
    city.tick();

    city.get_mut::<crate::host::Resident>(resident)
        .unwrap()
        .flags
        .remove(ResidentFlags::IGNORE_TAXI);
    city.tick();

    assert!(city.resident(resident).ignores_taxi());
    assert_eq!(city.activity().reapplied, 1);

    city.tick();
    assert_eq!(city.activity().reapplied, 0);
}

#[test]
fn repeated_frames_are_idempotent() {
    let mut city = TestRiderCity::new();
    let residents = city.spawn_residents(4, None);
    city.tick();
    let first: Vec<_> = residents.iter().map(|&r| city.resident(r).flags).collect();
    city.tick_n(5);
    let later: Vec<_> = residents.iter().map(|&r| city.resident(r).flags).collect();
    assert_eq!(first, later);
    assert_eq!(city.marked_count(), 4);
}

#[test]
fn exempt_commuters_are_skipped_without_using_the_batch() {
    let mut city = TestRiderCity::with_batch_cap(3).with_settings(RiderControlSettings {
        exempt_commuters: true,
        ..Default::default()
    });
    let commuters = city.spawn_commuter_household();
    let commuter_residents = city.spawn_residents(5, Some(commuters));
    let locals = city.spawn_residents(2, None);

    city.tick();

    let activity = city.activity();
    assert_eq!(activity.applied, 2);
    assert_eq!(activity.skipped_commuters, 5);
    assert_eq!(activity.skipped_tourists, 0);
    for r in commuter_residents {
        assert!(!city.is_marked(r));
        assert!(!city.resident(r).ignores_taxi());
    }
    for r in locals {
        assert!(city.is_marked(r));
    }
}

#[test]
fn exempt_tourists_leaves_commuters_suppressed() {
    let mut city = TestRiderCity::new().with_settings(RiderControlSettings {
        exempt_tourists: true,
        ..Default::default()
    });
    let tourists = city.spawn_tourist_household();
    let commuters = city.spawn_commuter_household();
    let tourist = city.spawn_resident(Some(tourists));
    let commuter = city.spawn_resident(Some(commuters));

    city.tick();

    assert!(!city.is_marked(tourist));
    assert!(city.is_marked(commuter));
    assert_eq!(city.activity().skipped_tourists, 1);
}

#[test]
fn resident_with_vanished_household_is_not_exempt() {
    let mut city = TestRiderCity::new().with_settings(RiderControlSettings {
        exempt_commuters: true,
        exempt_tourists: true,
        ..Default::default()
    });
    let commuters = city.spawn_commuter_household();
    let resident = city.spawn_resident(Some(commuters));
    city.despawn(commuters);

    city.tick();
    assert!(city.is_marked(resident));
}

#[test]
fn turning_on_an_exemption_does_not_unmark() {
    let mut city = TestRiderCity::new();
    let commuters = city.spawn_commuter_household();
    let commuter = city.spawn_resident(Some(commuters));
    city.tick();
    assert!(city.is_marked(commuter));

    city.settings_mut().exempt_commuters = true;
    city.tick_n(3);

    assert!(city.is_marked(commuter));
    assert!(city.resident(commuter).ignores_taxi());
}

#[test]
fn deleted_and_temp_residents_are_ignored() {
    let mut city = TestRiderCity::new();
    let deleted = city.spawn_resident(None);
    let temp = city.spawn_resident(None);
    city.world_mut().entity_mut(deleted).insert(Deleted);
    city.world_mut().entity_mut(temp).insert(Temp);

    city.tick();

    assert!(!city.is_marked(deleted));
    assert!(!city.is_marked(temp));
    assert_eq!(city.activity().applied, 0);
}

#[test]
fn zero_batch_cap_marks_nothing() {
    let mut city = TestRiderCity::with_batch_cap(0);
    city.spawn_residents(3, None);
    city.tick_n(3);
    assert_eq!(city.marked_count(), 0);
}
