//! Let residents of departing households use public transport again.
//!
//! The host sets `IGNORE_TRANSPORT` on members of a household that is moving
//! away, so they try to walk to the outside connection and often never make
//! it. On each moving-away interval this pass clears the bit and asks for a
//! new path.

use bevy::prelude::*;

use crate::activity::RiderActivity;
use crate::households::HouseholdLookup;
use crate::host::{Deleted, PathOwner, Resident, ResidentFlags, Temp};
use crate::scheduler::RiderControlTimers;
use crate::settings::RiderControlSettings;

pub fn release_moving_away_walkers(
    settings: Res<RiderControlSettings>,
    timers: Res<RiderControlTimers>,
    mut residents: Query<(&mut Resident, &mut PathOwner), (Without<Deleted>, Without<Temp>)>,
    households: HouseholdLookup,
    mut activity: ResMut<RiderActivity>,
) {
    if !settings.fix_moving_away_walkers || !timers.moving_away_due() {
        return;
    }

    let mut cleared = 0u32;
    for (mut resident, mut path) in &mut residents {
        if !resident.flags.contains(ResidentFlags::IGNORE_TRANSPORT) {
            continue;
        }
        let moving_away = households
            .class_of(resident.citizen)
            .is_some_and(|class| class.moving_away);
        if !moving_away {
            continue;
        }
        resident.flags.remove(ResidentFlags::IGNORE_TRANSPORT);
        path.mark_obsolete();
        cleared += 1;
    }

    activity.moving_away_cleared = cleared;
    if cleared > 0 {
        debug!(
            "Rider control: {} moving-away residents may use transit again",
            cleared
        );
    }
}

pub struct MovingAwayPlugin;

impl Plugin for MovingAwayPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RiderActivity>().add_systems(
            Update,
            release_moving_away_walkers.in_set(crate::RiderControlSet::Repair),
        );
    }
}
