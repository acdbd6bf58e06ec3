//! Verbose summary logging.
//!
//! With `verbose_logging` on, one `info!` line per log interval summarises
//! the latest snapshot, followed by `debug!` breadcrumbs for residents
//! currently riding a taxi.

use bevy::prelude::*;

use crate::activity::RiderActivity;
use crate::constants::DEBUG_PASSENGER_DETAIL_MAX;
use crate::households::HouseholdLookup;
use crate::host::{CurrentVehicle, Resident, Taxi};
use crate::mark::IgnoreTaxiMark;
use crate::scheduler::RiderControlTimers;
use crate::settings::{RiderControlSettings, RiderControlTuning};
use crate::status::{RiderStatus, StatusSnapshot};

/// Single-line summary of a snapshot plus the latest work counters.
pub fn summary_line(
    snapshot: &StatusSnapshot,
    activity: &RiderActivity,
    settings: &RiderControlSettings,
) -> String {
    let t = &snapshot.taxis;
    let q = &snapshot.requests;
    let p = &snapshot.passengers;
    let r = &snapshot.residents;
    let taxi_month = snapshot.monthly.get(crate::host::TransportType::Taxi);
    format!(
        "TaxiSummary: taxis={}, transporting={}, boarding={}, returning={}, dispatched={}, \
         enRoute={}, parked={}, accident={}, fromOutside={}, disabled={}, withServiceDispatch={}, \
         requests[stand={}, customer={}, outside={}, none={}], \
         custSeekers(ignoreTaxi={}/{}), outSeekers(ignoreTaxi={}/{}), \
         passengers(ignoreTaxi={}/{}, total={}), \
         residents(ignoreTaxi={}/{}, marked={}), \
         commuters(ignoreTaxi={}/{}, exempt={}), tourists(ignoreTaxi={}/{}, exempt={}), \
         waitingTransport(total={}, taxiStand={}), \
         monthlyTaxi(citizen={}, tourist={}), \
         applied={}, skipped(commuters={}, tourists={}), \
         laneWaitCleared={}, standWaitCleared={}, \
         clearedStandPassengers={}, enabled={}",
        t.total,
        t.transporting,
        t.boarding,
        t.returning,
        t.dispatched,
        t.en_route,
        t.parked,
        t.accident,
        t.from_outside,
        t.disabled,
        t.with_dispatch_buffer,
        q.stand,
        q.customer,
        q.outside,
        q.none,
        q.customer_seeker_ignore_taxi,
        q.customer_seeker_resident,
        q.outside_seeker_ignore_taxi,
        q.outside_seeker_resident,
        p.ignore_taxi,
        p.has_resident,
        p.total,
        r.ignore_taxi,
        r.total,
        r.marked,
        r.commuters_ignore_taxi,
        r.commuters_total,
        settings.exempt_commuters,
        r.tourists_ignore_taxi,
        r.tourists_total,
        settings.exempt_tourists,
        r.waiting_transport,
        snapshot.waiting_at_stands,
        taxi_month.citizen,
        taxi_month.tourist,
        activity.applied,
        activity.skipped_commuters,
        activity.skipped_tourists,
        activity.cleared_lane_waiting,
        activity.cleared_stand_waiting,
        activity.cleared_stand_passengers,
        settings.enabled,
    )
}

/// Ask for a forced refresh when the snapshot the summary would print is
/// missing or older than `stale_after`. Returns whether one was requested.
pub fn request_if_stale(status: &mut RiderStatus, now: f64, stale_after: f64) -> bool {
    let stale = status.age_secs(now).map_or(true, |age| age > stale_after);
    if stale {
        status.request_refresh(true);
    }
    stale
}

/// Runs in the status phase on summary frames, ahead of the rebuild, so the
/// line printed in the report phase reflects the refreshed snapshot.
pub fn request_summary_refresh(
    settings: Res<RiderControlSettings>,
    tuning: Res<RiderControlTuning>,
    timers: Res<RiderControlTimers>,
    time: Res<Time<Real>>,
    mut status: ResMut<RiderStatus>,
) {
    if !settings.verbose_logging || !timers.log_due() {
        return;
    }
    request_if_stale(
        &mut status,
        time.elapsed_secs_f64(),
        tuning.log_stale_snapshot_secs,
    );
}

pub fn log_rider_summary(
    settings: Res<RiderControlSettings>,
    timers: Res<RiderControlTimers>,
    status: Res<RiderStatus>,
    activity: Res<RiderActivity>,
    riders: Query<(Entity, &Resident, &CurrentVehicle, Has<IgnoreTaxiMark>)>,
    taxis: Query<&Taxi>,
    households: HouseholdLookup,
) {
    if !settings.verbose_logging || !timers.log_due() {
        return;
    }

    info!(
        "Rider control {}",
        summary_line(status.snapshot(), &activity, &settings)
    );

    let mut in_taxi = 0usize;
    for (passenger, resident, current, marked) in &riders {
        let Ok(taxi) = taxis.get(current.vehicle) else {
            continue;
        };
        in_taxi += 1;
        if in_taxi > DEBUG_PASSENGER_DETAIL_MAX {
            continue;
        }
        let class = households.class_of(resident.citizen).unwrap_or_default();
        debug!(
            "Rider control TaxiPassengerNow: passenger={:?} vehicle={:?} taxiFlags={:?} \
             ignoreTaxi={} marked={} hhCommuter={} hhTourist={}",
            passenger,
            current.vehicle,
            taxi.state,
            resident.ignores_taxi(),
            marked,
            class.commuter,
            class.tourist,
        );
    }
    if in_taxi > 0 {
        debug!(
            "Rider control TaxiPassengerNow: totalResidentsInTaxi={} (examplesShown={}/{})",
            in_taxi,
            in_taxi.min(DEBUG_PASSENGER_DETAIL_MAX),
            DEBUG_PASSENGER_DETAIL_MAX
        );
    }
}

pub struct ReportPlugin;

impl Plugin for ReportPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                request_summary_refresh
                    .in_set(crate::RiderControlSet::Status)
                    .before(crate::status::refresh_status_snapshot),
                log_rider_summary.in_set(crate::RiderControlSet::Report),
            ),
        );
    }
}
