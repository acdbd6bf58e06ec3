//! Per-city state reset.

use bevy::prelude::*;

use crate::activity::RiderActivity;
use crate::scheduler::RiderControlTimers;
use crate::status::RiderStatus;

/// Sent by the host after a city finished loading.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct CityLoaded;

/// Restart intervals, clear counters and drop the previous city's snapshot.
pub fn reset_on_city_loaded(
    mut events: EventReader<CityLoaded>,
    mut timers: ResMut<RiderControlTimers>,
    mut status: ResMut<RiderStatus>,
    mut activity: ResMut<RiderActivity>,
) {
    if events.read().count() == 0 {
        return;
    }
    timers.reset();
    status.reset();
    *activity = RiderActivity::default();
    info!("Rider control: state reset for newly loaded city");
}

pub struct CityLoadPlugin;

impl Plugin for CityLoadPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<CityLoaded>().add_systems(
            Update,
            reset_on_city_loaded.before(crate::RiderControlSet::Timers),
        );
    }
}
