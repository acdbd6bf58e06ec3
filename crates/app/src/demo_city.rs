//! A generated city standing in for the real host simulation.
//!
//! The population is spawned once at startup. After that, a few host systems
//! keep undoing the controller's work the way the real simulation does:
//! residents re-plan and hail taxis, stands ask for vehicles again,
//! households move out, and the monthly passenger statistics roll over.
//! Requests the controller tags [`Deleted`] are despawned at the end of
//! every frame.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use rider_control::host::{
    CommuterHousehold, CreatureLaneFlags, CurrentRoute, CurrentVehicle, Deleted, DepotFlags,
    HomelessHousehold, Household, HouseholdMember, HumanCurrentLane, MovingAway, Passengers,
    PathOwner, Resident, ResidentFlags, RideNeeder, RouteVehicles, ServiceDispatches, Taxi,
    TaxiFlags, TaxiRequest, TaxiRequestKind, TaxiStand, TaxiStandFlags, TouristHousehold,
    TransportDepot, TransportType, WaitingPassengers,
};
use rider_control::status::{PassengerCounts, PassengerStatistics};
use rider_control::{CityLoaded, RiderActivity, RiderControlSet, RiderStatus, StatusLines};

// ---------------------------------------------------------------------------
// Population
// ---------------------------------------------------------------------------

const SEED: u64 = 0x7a41_5eed;
const HOUSEHOLDS: usize = 4_000;
const MAX_HOUSEHOLD_SIZE: usize = 4;
const STANDS: usize = 40;
const TAXIS: usize = 300;

/// Residents nudged back towards taxis per hail wave.
const HAILS_PER_WAVE: usize = 60;
/// Stands re-asking for vehicles per stand wave.
const STANDS_PER_WAVE: usize = 10;

const HAIL_INTERVAL_SECS: f32 = 3.0;
const STAND_WAVE_SECS: f32 = 5.0;
const MOVE_OUT_SECS: f32 = 20.0;
const MONTH_SECS: f32 = 30.0;
const STATUS_PRINT_SECS: f32 = 10.0;

#[derive(Resource)]
pub struct DemoRng(StdRng);

/// Handles to everything the demo spawned. Residents, stands and taxis are
/// never despawned, so these stay valid for the whole run.
#[derive(Resource, Default)]
pub struct DemoCity {
    households: Vec<(Entity, Vec<Entity>)>,
    residents: Vec<Entity>,
    stands: Vec<Entity>,
    taxis: Vec<Entity>,
}

#[derive(Resource)]
pub struct DemoTimers {
    hail: Timer,
    stand: Timer,
    move_out: Timer,
    month: Timer,
    status: Timer,
}

impl Default for DemoTimers {
    fn default() -> Self {
        Self {
            hail: Timer::from_seconds(HAIL_INTERVAL_SECS, TimerMode::Repeating),
            stand: Timer::from_seconds(STAND_WAVE_SECS, TimerMode::Repeating),
            move_out: Timer::from_seconds(MOVE_OUT_SECS, TimerMode::Repeating),
            month: Timer::from_seconds(MONTH_SECS, TimerMode::Repeating),
            status: Timer::from_seconds(STATUS_PRINT_SECS, TimerMode::Repeating),
        }
    }
}

fn spawn_demo_city(
    mut commands: Commands,
    mut rng: ResMut<DemoRng>,
    mut loaded: EventWriter<CityLoaded>,
) {
    let rng = &mut rng.0;
    let mut city = DemoCity::default();

    for _ in 0..HOUSEHOLDS {
        let household = {
            let mut entity = commands.spawn(Household);
            match rng.gen_range(0..100) {
                0..=14 => {
                    entity.insert(CommuterHousehold);
                }
                15..=24 => {
                    entity.insert(TouristHousehold);
                }
                25..=29 => {
                    entity.insert(HomelessHousehold);
                }
                _ => {}
            }
            entity.id()
        };

        let size = rng.gen_range(1..=MAX_HOUSEHOLD_SIZE);
        let mut members = Vec::with_capacity(size);
        for _ in 0..size {
            let citizen = commands.spawn(HouseholdMember { household }).id();
            let resident = commands
                .spawn((
                    Resident::new(citizen),
                    HumanCurrentLane::default(),
                    PathOwner::default(),
                ))
                .id();
            members.push(resident);
        }
        city.residents.extend_from_slice(&members);
        city.households.push((household, members));
    }

    for _ in 0..STANDS {
        let stand = commands
            .spawn((
                TaxiStand {
                    flags: TaxiStandFlags::REQUIRE_VEHICLES,
                    taxi_request: None,
                },
                WaitingPassengers::default(),
                RouteVehicles::default(),
            ))
            .id();
        city.stands.push(stand);
    }

    commands.spawn(TransportDepot {
        transport_type: TransportType::Taxi,
        flags: DepotFlags::HAS_DISPATCH_CENTER,
    });

    for _ in 0..TAXIS {
        let state = match rng.gen_range(0..10) {
            0..=3 => TaxiFlags::empty(),
            4..=5 => TaxiFlags::DISPATCHED,
            6..=7 => TaxiFlags::TRANSPORTING,
            8 => TaxiFlags::RETURNING,
            _ => TaxiFlags::BOARDING,
        };
        let mut passengers = Vec::new();
        if state == TaxiFlags::TRANSPORTING {
            if let Some(&rider) = city.residents.choose(rng) {
                passengers.push(rider);
            }
        }
        let taxi = commands
            .spawn((
                Taxi { state },
                PathOwner::default(),
                CurrentRoute::default(),
                ServiceDispatches::default(),
                Passengers(passengers.clone()),
            ))
            .id();
        for rider in passengers {
            commands
                .entity(rider)
                .insert(CurrentVehicle { vehicle: taxi });
        }
        city.taxis.push(taxi);
    }

    info!(
        "Demo city: {} households, {} residents, {} stands, {} taxis",
        city.households.len(),
        city.residents.len(),
        city.stands.len(),
        city.taxis.len()
    );
    commands.insert_resource(city);
    loaded.send(CityLoaded);
}

// ---------------------------------------------------------------------------
// Host pressure
// ---------------------------------------------------------------------------

fn tick_demo_timers(time: Res<Time>, mut timers: ResMut<DemoTimers>) {
    let delta = time.delta();
    timers.hail.tick(delta);
    timers.stand.tick(delta);
    timers.move_out.tick(delta);
    timers.month.tick(delta);
    timers.status.tick(delta);
}

/// Residents re-plan their trips. Some drop the suppression bit, some walk to
/// a kerb and hail a taxi, some queue at a stand.
fn hail_taxis(
    timers: Res<DemoTimers>,
    city: Res<DemoCity>,
    mut rng: ResMut<DemoRng>,
    mut commands: Commands,
    mut residents: Query<(&mut Resident, &mut HumanCurrentLane)>,
) {
    if !timers.hail.just_finished() {
        return;
    }
    let rng = &mut rng.0;
    for &entity in city.residents.choose_multiple(rng, HAILS_PER_WAVE) {
        let Ok((mut resident, mut lane)) = residents.get_mut(entity) else {
            continue;
        };
        match rng.gen_range(0..3) {
            0 => resident.flags.remove(ResidentFlags::IGNORE_TAXI),
            1 => {
                let request = commands
                    .spawn(TaxiRequest {
                        kind: TaxiRequestKind::Customer,
                        seeker: Some(entity),
                    })
                    .id();
                commands.entity(entity).insert(RideNeeder {
                    ride_request: Some(request),
                });
                lane.flags = CreatureLaneFlags::TAXI_WAIT;
            }
            _ => {
                let Some(&stand) = city.stands.choose(rng) else {
                    continue;
                };
                resident.flags.insert(ResidentFlags::WAITING_TRANSPORT);
                lane.queue = Some(stand);
            }
        }
    }
}

/// Stands pile up demand, file their own request and get a taxi staged.
fn refill_stand_demand(
    timers: Res<DemoTimers>,
    city: Res<DemoCity>,
    mut rng: ResMut<DemoRng>,
    mut commands: Commands,
    mut stands: Query<(&mut TaxiStand, &mut WaitingPassengers, &mut RouteVehicles)>,
    mut routes: Query<&mut CurrentRoute, With<Taxi>>,
) {
    if !timers.stand.just_finished() {
        return;
    }
    let rng = &mut rng.0;
    for &entity in city.stands.choose_multiple(rng, STANDS_PER_WAVE) {
        let Ok((mut stand, mut waiting, mut staged)) = stands.get_mut(entity) else {
            continue;
        };
        waiting.count += rng.gen_range(1..=6);
        waiting.ongoing_accumulation += waiting.count;
        stand.flags.insert(TaxiStandFlags::REQUIRE_VEHICLES);
        if stand.taxi_request.is_none() {
            let request = commands
                .spawn(TaxiRequest {
                    kind: TaxiRequestKind::Stand,
                    seeker: Some(entity),
                })
                .id();
            stand.taxi_request = Some(request);
        }

        let Some(&taxi) = city.taxis.choose(rng) else {
            continue;
        };
        if let Ok(mut route) = routes.get_mut(taxi) {
            route.route = Some(entity);
            staged.0.push(taxi);
        }
    }
}

/// A regular household packs up. Its residents stop using public transport
/// until the controller's moving-away repair lets them back on.
fn move_out_household(
    timers: Res<DemoTimers>,
    city: Res<DemoCity>,
    mut rng: ResMut<DemoRng>,
    mut commands: Commands,
    households: Query<
        (),
        (
            Without<MovingAway>,
            Without<CommuterHousehold>,
            Without<TouristHousehold>,
        ),
    >,
    mut residents: Query<&mut Resident>,
) {
    if !timers.move_out.just_finished() {
        return;
    }
    let Some((household, members)) = city.households.choose(&mut rng.0) else {
        return;
    };
    if !households.contains(*household) {
        return;
    }
    commands.entity(*household).insert(MovingAway);
    for &member in members {
        if let Ok(mut resident) = residents.get_mut(member) {
            resident.flags.insert(ResidentFlags::IGNORE_TRANSPORT);
        }
    }
}

/// Month end: publish fresh passenger counts for every mode.
fn roll_monthly_statistics(
    timers: Res<DemoTimers>,
    mut rng: ResMut<DemoRng>,
    mut statistics: ResMut<PassengerStatistics>,
) {
    if !timers.month.just_finished() {
        return;
    }
    let rng = &mut rng.0;
    for mode in TransportType::ALL {
        let scale = match mode {
            TransportType::Taxi => 50,
            TransportType::Bus | TransportType::Subway => 20_000,
            _ => 4_000,
        };
        statistics.record(
            mode,
            PassengerCounts {
                citizen: rng.gen_range(0..scale),
                tourist: rng.gen_range(0..scale / 4),
            },
        );
    }
}

fn despawn_deleted(mut commands: Commands, deleted: Query<Entity, With<Deleted>>) {
    for entity in &deleted {
        commands.entity(entity).despawn();
    }
}

// ---------------------------------------------------------------------------
// Operator view
// ---------------------------------------------------------------------------

/// What the options page would show, printed to the log.
fn print_status(
    timers: Res<DemoTimers>,
    time: Res<Time<Real>>,
    activity: Res<RiderActivity>,
    mut status: ResMut<RiderStatus>,
) {
    if !timers.status.just_finished() {
        return;
    }
    let now = time.elapsed_secs_f64();
    status.auto_request_on_read(now);
    for line in StatusLines::new(&status, &activity, now).all() {
        info!("{line}");
    }
}

pub struct DemoCityPlugin;

impl Plugin for DemoCityPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(DemoRng(StdRng::seed_from_u64(SEED)))
            .init_resource::<DemoTimers>()
            .init_resource::<PassengerStatistics>()
            .add_systems(Startup, spawn_demo_city)
            .add_systems(
                Update,
                (
                    tick_demo_timers,
                    hail_taxis,
                    refill_stand_demand,
                    move_out_household,
                    roll_monthly_statistics,
                )
                    .chain()
                    .before(RiderControlSet::Timers),
            )
            .add_systems(Update, print_status.after(RiderControlSet::Report))
            .add_systems(Last, despawn_deleted);
    }
}
