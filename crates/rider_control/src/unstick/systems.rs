use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::activity::RiderActivity;
use crate::host::{
    BoardingVehicle, CreatureLaneFlags, Deleted, HumanCurrentLane, PathOwner, Resident,
    ResidentFlags, RideNeeder, Taxi, TaxiStand, Temp,
};
use crate::scheduler::RiderControlTimers;
use crate::settings::RiderControlSettings;

use super::types::{classify_wait_state, UnstickPass, WaitState};

/// Answers "is this queue entity taxi-related?".
#[derive(SystemParam)]
pub struct TaxiQueueLookup<'w, 's> {
    stands: Query<'w, 's, (), With<TaxiStand>>,
    taxis: Query<'w, 's, (), With<Taxi>>,
    boarding: Query<'w, 's, &'static BoardingVehicle>,
}

impl TaxiQueueLookup<'_, '_> {
    pub fn is_taxi_queue(&self, queue: Entity) -> bool {
        if self.stands.contains(queue) {
            return true;
        }
        self.boarding
            .get(queue)
            .ok()
            .and_then(|b| b.vehicle)
            .is_some_and(|v| self.taxis.contains(v))
    }
}

#[allow(clippy::type_complexity)]
pub fn unstick_taxi_waiters(
    settings: Res<RiderControlSettings>,
    timers: Res<RiderControlTimers>,
    mut agents: Query<
        (
            &mut Resident,
            &mut HumanCurrentLane,
            &mut PathOwner,
            Option<&mut RideNeeder>,
        ),
        (Without<Deleted>, Without<Temp>),
    >,
    queues: TaxiQueueLookup,
    mut activity: ResMut<RiderActivity>,
) {
    if !settings.enabled || !timers.unstick_due() {
        return;
    }

    let mut pass = UnstickPass::default();
    for (mut resident, mut lane, mut path, ride) in &mut agents {
        match classify_wait_state(&resident, &lane, |q| queues.is_taxi_queue(q)) {
            WaitState::Idle => continue,
            WaitState::OnTaxiLane => {
                lane.flags.remove(CreatureLaneFlags::TAXI_WAIT);
                lane.queue = None;
                if let Some(mut ride) = ride {
                    if ride.ride_request.is_some() {
                        ride.ride_request = None;
                        pass.cleared_ride_needs += 1;
                    }
                }
                pass.cleared_lane_waiting += 1;
            }
            WaitState::InTaxiQueue => {
                resident.flags.remove(ResidentFlags::WAITING_TRANSPORT);
                lane.flags.remove(CreatureLaneFlags::TAXI_WAIT);
                lane.queue = None;
                pass.cleared_stand_waiting += 1;
            }
        }
        path.mark_obsolete();
    }

    activity.record_unstick(pass);
    if pass.total() > 0 {
        debug!(
            "Rider control: unstuck {} on taxi lanes, {} in taxi queues",
            pass.cleared_lane_waiting, pass.cleared_stand_waiting
        );
    }
}
