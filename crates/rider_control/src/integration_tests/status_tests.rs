use crate::host::{
    DepotFlags, InvolvedInAccident, ParkedCar, ResidentFlags, ServiceDispatches, TaxiFlags,
    TaxiRequestKind, TransportDepot, TransportType,
};
use crate::status::{PassengerCounts, PassengerStatistics, StatusLines};
use crate::test_harness::TestRiderCity;

/// Mark everyone, then take a forced snapshot.
fn refreshed(city: &mut TestRiderCity) {
    city.tick();
    city.status_mut().request_refresh(true);
    city.tick();
}

#[test]
fn snapshot_is_empty_until_requested() {
    let mut city = TestRiderCity::new();
    city.spawn_residents(3, None);
    city.tick_n(5);
    assert!(!city.status().has_snapshot());
    assert_eq!(city.status().snapshot().residents.total, 0);
}

#[test]
fn read_on_first_display_triggers_refresh() {
    let mut city = TestRiderCity::new();
    city.spawn_residents(3, None);
    let now = city.now();
    city.status_mut().auto_request_on_read(now);
    city.tick();
    assert!(city.status().has_snapshot());
    assert_eq!(city.status().snapshot().residents.total, 3);
}

#[test]
fn snapshot_counts_households_and_residents() {
    let mut city = TestRiderCity::new();
    let commuters = city.spawn_commuter_household();
    let tourists = city.spawn_tourist_household();
    let leaving = city.spawn_moving_away_household();
    let locals = city.spawn_household();
    city.spawn_residents(2, Some(commuters));
    city.spawn_residents(3, Some(tourists));
    city.spawn_residents(1, Some(leaving));
    city.spawn_residents(4, Some(locals));
    city.spawn_resident_with_flags(None, ResidentFlags::WAITING_TRANSPORT);

    refreshed(&mut city);

    let snapshot = city.status().snapshot();
    assert_eq!(snapshot.households.total, 4);
    assert_eq!(snapshot.households.commuter, 1);
    assert_eq!(snapshot.households.tourist, 1);
    assert_eq!(snapshot.households.moving_away, 1);
    assert_eq!(snapshot.residents.total, 11);
    assert_eq!(snapshot.residents.ignore_taxi, 11);
    assert_eq!(snapshot.residents.marked, 11);
    assert_eq!(snapshot.residents.commuters_total, 2);
    assert_eq!(snapshot.residents.commuters_ignore_taxi, 2);
    assert_eq!(snapshot.residents.tourists_total, 3);
    assert_eq!(snapshot.residents.in_moving_away_household, 1);
    assert_eq!(snapshot.residents.waiting_transport, 1);
}

#[test]
fn snapshot_classifies_taxis_and_requests() {
    let mut city = TestRiderCity::new();
    let crashed = city.spawn_taxi(TaxiFlags::TRANSPORTING);
    city.world_mut().entity_mut(crashed).insert(InvolvedInAccident);
    let parked = city.spawn_taxi(TaxiFlags::RETURNING);
    city.world_mut().entity_mut(parked).insert(ParkedCar);
    city.spawn_taxi(TaxiFlags::RETURNING | TaxiFlags::FROM_OUTSIDE);
    let busy = city.spawn_taxi(TaxiFlags::DISPATCHED);
    city.world_mut()
        .entity_mut(busy)
        .insert(ServiceDispatches(vec![crashed]));
    city.spawn_taxi(TaxiFlags::DISABLED);

    let rider = city.spawn_resident(None);
    let stand = city.spawn_stand(5);
    city.spawn_stand_request(stand);
    city.spawn_request(TaxiRequestKind::Customer, Some(rider));
    city.spawn_request(TaxiRequestKind::Customer, Some(stand));
    city.spawn_request(TaxiRequestKind::Outside, None);
    city.spawn_request(TaxiRequestKind::None, None);

    refreshed(&mut city);

    let snapshot = city.status().snapshot();
    let taxis = &snapshot.taxis;
    assert_eq!(taxis.total, 5);
    assert_eq!(taxis.accident, 1);
    assert_eq!(taxis.parked, 1);
    assert_eq!(taxis.returning, 1);
    assert_eq!(taxis.dispatched, 1);
    assert_eq!(taxis.en_route, 1);
    assert_eq!(taxis.from_outside, 1);
    assert_eq!(taxis.disabled, 1);
    assert_eq!(taxis.with_dispatch_buffer, 1);

    let requests = &snapshot.requests;
    assert_eq!(requests.stand, 1);
    assert_eq!(requests.customer, 2);
    assert_eq!(requests.customer_seeker_resident, 1);
    assert_eq!(requests.customer_seeker_ignore_taxi, 1);
    assert_eq!(requests.outside, 1);
    assert_eq!(requests.outside_seeker_resident, 0);
    assert_eq!(requests.none, 1);

    assert_eq!(snapshot.waiting_at_stands, 5);
    assert_eq!(snapshot.facilities.stands, 1);
}

#[test]
fn snapshot_scans_taxi_passengers() {
    let mut city = TestRiderCity::new();
    let taxi = city.spawn_taxi(TaxiFlags::TRANSPORTING);
    let rider = city.spawn_resident(None);
    city.board(rider, taxi);
    let stranger = city.world_mut().spawn_empty().id();
    city.board(stranger, taxi);

    refreshed(&mut city);

    let passengers = city.status().snapshot().passengers;
    assert_eq!(passengers.total, 2);
    assert_eq!(passengers.has_resident, 1);
    assert_eq!(passengers.ignore_taxi, 1);
}

#[test]
fn snapshot_counts_only_taxi_depots() {
    let mut city = TestRiderCity::new();
    city.world_mut().spawn(TransportDepot {
        transport_type: TransportType::Taxi,
        flags: DepotFlags::HAS_DISPATCH_CENTER,
    });
    city.world_mut().spawn(TransportDepot {
        transport_type: TransportType::Taxi,
        flags: DepotFlags::empty(),
    });
    city.world_mut().spawn(TransportDepot {
        transport_type: TransportType::Bus,
        flags: DepotFlags::HAS_DISPATCH_CENTER,
    });

    refreshed(&mut city);

    let facilities = city.status().snapshot().facilities;
    assert_eq!(facilities.taxi_depots, 2);
    assert_eq!(facilities.taxi_depots_with_dispatch_center, 1);
}

#[test]
fn monthly_passengers_come_from_host_statistics() {
    let mut stats = PassengerStatistics::default();
    for mode in TransportType::ALL {
        stats.record(mode, PassengerCounts::default());
    }
    stats.record(
        TransportType::Bus,
        PassengerCounts {
            citizen: 1500,
            tourist: 250,
        },
    );
    let mut city = TestRiderCity::new().with_statistics(stats);

    refreshed(&mut city);

    let monthly = city.status().snapshot().monthly;
    assert_eq!(monthly.get(TransportType::Bus).citizen, 1500);
    assert_eq!(monthly.total().tourist, 250);
}

#[test]
fn missing_statistics_leave_monthly_at_zero() {
    let mut city = TestRiderCity::new();
    city.spawn_residents(2, None);
    refreshed(&mut city);
    assert!(city.status().has_snapshot());
    assert_eq!(city.status().snapshot().monthly.total(), PassengerCounts::default());
    assert_eq!(city.status().snapshot().residents.total, 2);
}

#[test]
fn snapshot_age_grows_monotonically() {
    let mut city = TestRiderCity::new();
    refreshed(&mut city);

    let mut last = 0.0;
    for _ in 0..5 {
        city.advance_secs(2.0);
        let age = city.status().age_secs(city.now()).unwrap();
        assert!(age >= last);
        last = age;
    }
    assert!((last - 10.0).abs() < 1e-3);
    assert_eq!(city.status().age_text(city.now()), "10s");
}

#[test]
fn young_snapshot_ignores_unforced_requests() {
    let mut city = TestRiderCity::new();
    refreshed(&mut city);
    let stamped = city.status().refreshed_at();

    city.spawn_residents(2, None);
    city.status_mut().request_refresh(false);
    city.tick();
    assert_eq!(city.status().refreshed_at(), stamped);
    assert!(city.status().is_refresh_pending());

    city.advance_secs(240.0);
    assert_ne!(city.status().refreshed_at(), stamped);
    assert_eq!(city.status().snapshot().residents.total, 2);
}

#[test]
fn status_lines_render_after_refresh() {
    let mut city = TestRiderCity::new();
    city.spawn_residents(1200, None);
    refreshed(&mut city);

    let now = city.now();
    let activity = city.activity();
    let lines = StatusLines::new(city.status(), &activity, now);
    assert!(lines.is_ready());
    assert!(lines
        .coverage()
        .starts_with("Residents 1,200/1,200 | Marked 1,200"));
}
