use bevy::ecs::entity::EntityHashSet;
use bevy::prelude::*;

use crate::activity::RiderActivity;
use crate::host::{
    CurrentRoute, Deleted, PathOwner, RouteVehicles, TaxiRequest, TaxiRequestKind, TaxiStand,
    TaxiStandFlags, Temp, WaitingPassengers,
};
use crate::scheduler::RiderControlTimers;
use crate::settings::RiderControlSettings;

use super::types::StandNeutralization;

pub type StandQuery<'w, 's> = Query<
    'w,
    's,
    (
        Entity,
        &'static mut TaxiStand,
        &'static mut WaitingPassengers,
        Option<&'static mut RouteVehicles>,
    ),
    (Without<Deleted>, Without<Temp>),
>;

/// Any entity a stand may have staged. A `get_mut` error means the vehicle
/// is gone.
pub type StandVehicleQuery<'w, 's> = Query<
    'w,
    's,
    (
        Option<&'static mut CurrentRoute>,
        Option<&'static mut PathOwner>,
    ),
>;

#[allow(clippy::too_many_arguments)]
pub fn neutralize_stand_demand(
    settings: Res<RiderControlSettings>,
    timers: Res<RiderControlTimers>,
    mut commands: Commands,
    mut stands: StandQuery,
    any_stand: Query<(), With<TaxiStand>>,
    requests: Query<(Entity, &TaxiRequest), (Without<Deleted>, Without<Temp>)>,
    mut vehicles: StandVehicleQuery,
    lifecycle: Query<Has<Deleted>>,
    mut activity: ResMut<RiderActivity>,
) {
    if !settings.stand_neutralization_active() || !timers.stand_due() {
        return;
    }

    let mut report = StandNeutralization::default();

    // Requests a stand filed for itself, including stands already on their
    // way out.
    let mut doomed: EntityHashSet = requests
        .iter()
        .filter(|(_, r)| r.kind == TaxiRequestKind::Stand)
        .filter(|(_, r)| r.seeker.is_some_and(|s| any_stand.contains(s)))
        .map(|(e, _)| e)
        .collect();

    for (stand_entity, mut stand, mut waiting, staged) in &mut stands {
        report.cleared_waiting_passengers = report
            .cleared_waiting_passengers
            .saturating_add(waiting.count);
        if !waiting.is_clear() {
            *waiting = WaitingPassengers::default();
        }
        if stand.flags.contains(TaxiStandFlags::REQUIRE_VEHICLES) {
            stand.flags.remove(TaxiStandFlags::REQUIRE_VEHICLES);
        }
        if let Some(request) = stand.taxi_request {
            stand.taxi_request = None;
            doomed.insert(request);
        }

        let Some(mut staged) = staged else {
            continue;
        };
        if staged.0.is_empty() {
            continue;
        }
        for vehicle in staged.0.drain(..) {
            let Ok((route, path)) = vehicles.get_mut(vehicle) else {
                report.pruned_vehicles += 1;
                continue;
            };
            if let Some(mut route) = route {
                if route.route == Some(stand_entity) {
                    route.route = None;
                }
            }
            if let Some(mut path) = path {
                path.mark_obsolete();
            }
            report.detached_vehicles += 1;
        }
    }

    for request in doomed {
        // Already tagged, or despawned by the host in the meantime.
        if !matches!(lifecycle.get(request), Ok(false)) {
            continue;
        }
        commands.entity(request).insert(Deleted);
        report.removed_requests += 1;
    }

    activity.record_stand(report);
    if !report.is_empty() {
        debug!(
            "Rider control: stands cleared {} waiting, {} requests, {} taxis detached, {} stale entries",
            report.cleared_waiting_passengers,
            report.removed_requests,
            report.detached_vehicles,
            report.pruned_vehicles
        );
    }
}
