use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::households::HouseholdLookup;
use crate::host::{
    Deleted, DepotFlags, Household, HumanCurrentLane, InvolvedInAccident, ParkedCar, Passengers,
    Resident, ServiceDispatches, Taxi, TaxiFlags, TaxiRequest, TaxiRequestKind, TaxiStand, Temp,
    TransportDepot, TransportType, WaitingPassengers,
};
use crate::mark::IgnoreTaxiMark;
use crate::settings::RiderControlTuning;

use super::resource::RiderStatus;
use super::snapshot::{
    classify_taxi, FacilityCounts, HouseholdCounts, MonthlyPassengers, PassengerScan,
    RequestCounts, ResidentCounts, StatusSnapshot, TaxiCounts,
};
use super::statistics::PassengerStatistics;

type Live = (Without<Deleted>, Without<Temp>);

/// Every query a snapshot rebuild reads.
#[derive(SystemParam)]
pub struct StatusScan<'w, 's> {
    households: Query<'w, 's, Entity, (With<Household>, Without<Deleted>, Without<Temp>)>,
    classes: HouseholdLookup<'w, 's>,
    residents: Query<
        'w,
        's,
        (
            &'static Resident,
            Has<IgnoreTaxiMark>,
            Has<HumanCurrentLane>,
        ),
        Live,
    >,
    any_resident: Query<'w, 's, &'static Resident>,
    stands: Query<
        'w,
        's,
        Option<&'static WaitingPassengers>,
        (With<TaxiStand>, Without<Deleted>, Without<Temp>),
    >,
    requests: Query<'w, 's, &'static TaxiRequest, Live>,
    taxis: Query<
        'w,
        's,
        (
            &'static Taxi,
            Has<InvolvedInAccident>,
            Has<ParkedCar>,
            Option<&'static ServiceDispatches>,
            Option<&'static Passengers>,
        ),
        Live,
    >,
    depots: Query<'w, 's, &'static TransportDepot, Live>,
    statistics: Option<Res<'w, PassengerStatistics>>,
}

impl StatusScan<'_, '_> {
    pub fn collect(&self) -> StatusSnapshot {
        let (waiting_at_stands, facilities) = self.count_facilities();
        StatusSnapshot {
            households: self.count_households(),
            residents: self.count_residents(),
            waiting_at_stands,
            requests: self.count_requests(),
            taxis: self.count_taxis(),
            passengers: self.scan_passengers(),
            facilities,
            monthly: self.monthly_passengers(),
        }
    }

    fn count_households(&self) -> HouseholdCounts {
        let mut counts = HouseholdCounts::default();
        for household in &self.households {
            counts.total += 1;
            let Some(class) = self.classes.class_of_household(household) else {
                continue;
            };
            counts.commuter += u32::from(class.commuter);
            counts.tourist += u32::from(class.tourist);
            counts.homeless += u32::from(class.homeless);
            counts.moving_away += u32::from(class.moving_away);
        }
        counts
    }

    fn count_residents(&self) -> ResidentCounts {
        let mut counts = ResidentCounts::default();
        for (resident, marked, on_lane) in &self.residents {
            counts.total += 1;
            let ignores = resident.ignores_taxi();
            counts.ignore_taxi += u32::from(ignores);
            counts.marked += u32::from(marked);
            counts.waiting_transport += u32::from(on_lane && resident.is_waiting_transport());

            let Some(class) = self.classes.class_of(resident.citizen) else {
                continue;
            };
            counts.in_moving_away_household += u32::from(class.moving_away);
            if class.commuter {
                counts.commuters_total += 1;
                counts.commuters_ignore_taxi += u32::from(ignores);
            }
            if class.tourist {
                counts.tourists_total += 1;
                counts.tourists_ignore_taxi += u32::from(ignores);
            }
        }
        counts
    }

    /// Returns (seeker is a resident, that resident ignores taxis).
    fn seeker_state(&self, seeker: Option<Entity>) -> (bool, bool) {
        match seeker.and_then(|s| self.any_resident.get(s).ok()) {
            Some(resident) => (true, resident.ignores_taxi()),
            None => (false, false),
        }
    }

    fn count_requests(&self) -> RequestCounts {
        let mut counts = RequestCounts::default();
        for request in &self.requests {
            match request.kind {
                TaxiRequestKind::Stand => counts.stand += 1,
                TaxiRequestKind::Customer => {
                    counts.customer += 1;
                    let (is_resident, ignores) = self.seeker_state(request.seeker);
                    counts.customer_seeker_resident += u32::from(is_resident);
                    counts.customer_seeker_ignore_taxi += u32::from(ignores);
                }
                TaxiRequestKind::Outside => {
                    counts.outside += 1;
                    let (is_resident, ignores) = self.seeker_state(request.seeker);
                    counts.outside_seeker_resident += u32::from(is_resident);
                    counts.outside_seeker_ignore_taxi += u32::from(ignores);
                }
                TaxiRequestKind::None => counts.none += 1,
            }
        }
        counts
    }

    fn count_taxis(&self) -> TaxiCounts {
        let mut counts = TaxiCounts::default();
        for (taxi, accident, parked, dispatches, _) in &self.taxis {
            counts.count(classify_taxi(taxi.state, accident, parked));
            counts.from_outside += u32::from(taxi.state.contains(TaxiFlags::FROM_OUTSIDE));
            counts.disabled += u32::from(taxi.state.contains(TaxiFlags::DISABLED));
            counts.with_dispatch_buffer +=
                u32::from(dispatches.is_some_and(|d| !d.0.is_empty()));
        }
        counts
    }

    fn scan_passengers(&self) -> PassengerScan {
        let mut scan = PassengerScan::default();
        for passengers in self.taxis.iter().filter_map(|(.., p)| p) {
            for &passenger in &passengers.0 {
                scan.total += 1;
                let (is_resident, ignores) = self.seeker_state(Some(passenger));
                scan.has_resident += u32::from(is_resident);
                scan.ignore_taxi += u32::from(ignores);
            }
        }
        scan
    }

    /// Waiting-at-stand sum and facility totals.
    fn count_facilities(&self) -> (u32, FacilityCounts) {
        let mut facilities = FacilityCounts::default();
        let mut waiting = 0u32;
        for passengers in &self.stands {
            facilities.stands += 1;
            if let Some(p) = passengers {
                waiting = waiting.saturating_add(p.count);
            }
        }
        for depot in &self.depots {
            if depot.transport_type != TransportType::Taxi {
                continue;
            }
            facilities.taxi_depots += 1;
            facilities.taxi_depots_with_dispatch_center +=
                u32::from(depot.flags.contains(DepotFlags::HAS_DISPATCH_CENTER));
        }
        (waiting, facilities)
    }

    fn monthly_passengers(&self) -> MonthlyPassengers {
        match MonthlyPassengers::collect(self.statistics.as_deref()) {
            Ok((monthly, missing)) => {
                for err in missing {
                    warn!("Rider control: {}", err);
                }
                monthly
            }
            Err(err) => {
                debug!("Rider control: {}", err);
                MonthlyPassengers::default()
            }
        }
    }
}

pub fn retune_status_refresh(
    tuning: Res<RiderControlTuning>,
    mut status: ResMut<RiderStatus>,
) {
    status.set_min_refresh_secs(tuning.status_min_refresh_secs);
}

/// Rebuild the snapshot when a refresh is pending and allowed.
pub fn refresh_status_snapshot(
    time: Res<Time<Real>>,
    mut status: ResMut<RiderStatus>,
    scan: StatusScan,
) {
    let now = time.elapsed_secs_f64();
    if !status.should_refresh(now) {
        return;
    }
    status.store(scan.collect(), now);

    let snapshot = status.snapshot();
    debug!(
        "Rider control: status refreshed ({} residents, {} taxis, {} requests)",
        snapshot.residents.total,
        snapshot.taxis.total,
        snapshot.requests.stand + snapshot.requests.customer + snapshot.requests.outside
    );
}
