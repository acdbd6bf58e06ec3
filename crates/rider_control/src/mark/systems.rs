use bevy::prelude::*;

use crate::activity::RiderActivity;
use crate::households::HouseholdLookup;
use crate::host::{Deleted, Resident, ResidentFlags, Temp};
use crate::settings::{RiderControlSettings, RiderControlTuning};

use super::types::{decide_mark, IgnoreTaxiMark, MarkDecision, PresetIgnoreTaxi};

/// Mark up to one batch of unmarked, non-exempt residents.
#[allow(clippy::type_complexity)]
pub fn apply_suppression(
    settings: Res<RiderControlSettings>,
    tuning: Res<RiderControlTuning>,
    mut commands: Commands,
    mut unmarked: Query<
        (Entity, &mut Resident),
        (Without<IgnoreTaxiMark>, Without<Deleted>, Without<Temp>),
    >,
    households: HouseholdLookup,
    mut activity: ResMut<RiderActivity>,
) {
    if !settings.enabled {
        return;
    }

    let cap = tuning.mark_batch_per_tick;
    let mut applied = 0usize;
    let mut skipped_commuters = 0u32;
    let mut skipped_tourists = 0u32;

    for (entity, mut resident) in &mut unmarked {
        if applied >= cap {
            break;
        }
        match decide_mark(&resident, households.class_of(resident.citizen), &settings) {
            MarkDecision::SkipCommuter => skipped_commuters += 1,
            MarkDecision::SkipTourist => skipped_tourists += 1,
            MarkDecision::Mark { preset: true } => {
                commands
                    .entity(entity)
                    .insert((IgnoreTaxiMark, PresetIgnoreTaxi));
                applied += 1;
            }
            MarkDecision::Mark { preset: false } => {
                resident.flags.insert(ResidentFlags::IGNORE_TAXI);
                commands.entity(entity).insert(IgnoreTaxiMark);
                applied += 1;
            }
        }
    }

    activity.applied = applied as u32;
    activity.skipped_commuters = skipped_commuters;
    activity.skipped_tourists = skipped_tourists;
    activity.unmarked = 0;

    if applied > 0 {
        debug!(
            "Rider control: marked {} residents (skipped {} commuters, {} tourists)",
            applied, skipped_commuters, skipped_tourists
        );
    }
}

/// Restore `IGNORE_TAXI` on marked residents the host has since cleared.
pub fn reapply_suppression(
    settings: Res<RiderControlSettings>,
    mut marked: Query<&mut Resident, (With<IgnoreTaxiMark>, Without<Deleted>, Without<Temp>)>,
    mut activity: ResMut<RiderActivity>,
) {
    if !settings.enabled {
        return;
    }

    let mut reapplied = 0u32;
    for mut resident in &mut marked {
        if !resident.ignores_taxi() {
            resident.flags.insert(ResidentFlags::IGNORE_TAXI);
            reapplied += 1;
        }
    }
    activity.reapplied = reapplied;
}

/// Release up to one batch of marked residents while the controller is off.
pub fn release_suppression(
    settings: Res<RiderControlSettings>,
    tuning: Res<RiderControlTuning>,
    mut commands: Commands,
    mut marked: Query<(Entity, &mut Resident, Has<PresetIgnoreTaxi>), With<IgnoreTaxiMark>>,
    mut activity: ResMut<RiderActivity>,
) {
    if settings.enabled {
        return;
    }

    let cap = tuning.mark_batch_per_tick;
    let mut unmarked = 0usize;

    for (entity, mut resident, preset) in &mut marked {
        if unmarked >= cap {
            break;
        }
        if !preset {
            resident.flags.remove(ResidentFlags::IGNORE_TAXI);
        }
        commands
            .entity(entity)
            .remove::<(IgnoreTaxiMark, PresetIgnoreTaxi)>();
        unmarked += 1;
    }

    activity.applied = 0;
    activity.skipped_commuters = 0;
    activity.skipped_tourists = 0;
    activity.reapplied = 0;
    activity.unmarked = unmarked as u32;

    if unmarked > 0 {
        debug!("Rider control: released {} residents", unmarked);
    }
}
