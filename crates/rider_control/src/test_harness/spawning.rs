//! Host entity spawning for `TestRiderCity`.

use bevy::prelude::*;

use crate::host::{
    CommuterHousehold, CreatureLaneFlags, CurrentRoute, CurrentVehicle, Household,
    HouseholdMember, HumanCurrentLane, MovingAway, PathOwner, Passengers, Resident,
    ResidentFlags, RideNeeder, RouteVehicles, Taxi, TaxiFlags, TaxiRequest, TaxiRequestKind,
    TaxiStand, TaxiStandFlags, TouristHousehold, WaitingPassengers,
};

use super::TestRiderCity;

impl TestRiderCity {
    // -----------------------------------------------------------------------
    // Households and residents
    // -----------------------------------------------------------------------

    pub fn spawn_household(&mut self) -> Entity {
        self.app.world_mut().spawn(Household).id()
    }

    pub fn spawn_commuter_household(&mut self) -> Entity {
        self.app
            .world_mut()
            .spawn((Household, CommuterHousehold))
            .id()
    }

    pub fn spawn_tourist_household(&mut self) -> Entity {
        self.app
            .world_mut()
            .spawn((Household, TouristHousehold))
            .id()
    }

    pub fn spawn_moving_away_household(&mut self) -> Entity {
        self.app.world_mut().spawn((Household, MovingAway)).id()
    }

    /// A walking resident with a citizen record, optionally in a household.
    pub fn spawn_resident(&mut self, household: Option<Entity>) -> Entity {
        self.spawn_resident_with_flags(household, ResidentFlags::empty())
    }

    pub fn spawn_resident_with_flags(
        &mut self,
        household: Option<Entity>,
        flags: ResidentFlags,
    ) -> Entity {
        let world = self.app.world_mut();
        let citizen = match household {
            Some(household) => world.spawn(HouseholdMember { household }).id(),
            None => world.spawn_empty().id(),
        };
        let mut resident = Resident::new(citizen);
        resident.flags = flags;
        world
            .spawn((resident, HumanCurrentLane::default(), PathOwner::default()))
            .id()
    }

    pub fn spawn_residents(&mut self, n: usize, household: Option<Entity>) -> Vec<Entity> {
        (0..n).map(|_| self.spawn_resident(household)).collect()
    }

    /// Resident standing at a kerb waiting for a taxi pickup, with a pending
    /// ride request.
    pub fn spawn_taxi_lane_waiter(&mut self) -> Entity {
        let resident = self.spawn_resident(None);
        let request = self.spawn_request(TaxiRequestKind::Customer, Some(resident));
        let mut entity = self.app.world_mut().entity_mut(resident);
        entity.insert(RideNeeder {
            ride_request: Some(request),
        });
        if let Some(mut lane) = entity.get_mut::<HumanCurrentLane>() {
            lane.flags = CreatureLaneFlags::TAXI_WAIT;
        }
        resident
    }

    /// Resident waiting in the queue of `queue` (a stand, a boarding spot,
    /// or any other transit stop).
    pub fn spawn_queue_waiter(&mut self, queue: Entity) -> Entity {
        let resident = self.spawn_resident_with_flags(None, ResidentFlags::WAITING_TRANSPORT);
        if let Some(mut lane) = self
            .app
            .world_mut()
            .entity_mut(resident)
            .get_mut::<HumanCurrentLane>()
        {
            lane.queue = Some(queue);
        }
        resident
    }

    // -----------------------------------------------------------------------
    // Stands, requests and taxis
    // -----------------------------------------------------------------------

    /// A stand with `waiting` passengers that is asking for vehicles.
    pub fn spawn_stand(&mut self, waiting: u32) -> Entity {
        self.app
            .world_mut()
            .spawn((
                TaxiStand {
                    flags: TaxiStandFlags::REQUIRE_VEHICLES,
                    taxi_request: None,
                },
                WaitingPassengers {
                    count: waiting,
                    ongoing_accumulation: waiting * 10,
                    concluded_accumulation: 3,
                    success_accumulation: 2,
                    average_waiting_time: 45,
                },
                RouteVehicles::default(),
            ))
            .id()
    }

    pub fn spawn_request(&mut self, kind: TaxiRequestKind, seeker: Option<Entity>) -> Entity {
        self.app
            .world_mut()
            .spawn(TaxiRequest { kind, seeker })
            .id()
    }

    /// A stand request filed by `stand`, also held in the stand's own slot.
    pub fn spawn_stand_request(&mut self, stand: Entity) -> Entity {
        let request = self.spawn_request(TaxiRequestKind::Stand, Some(stand));
        if let Some(mut s) = self.app.world_mut().get_mut::<TaxiStand>(stand) {
            s.taxi_request = Some(request);
        }
        request
    }

    pub fn spawn_taxi(&mut self, state: TaxiFlags) -> Entity {
        self.app
            .world_mut()
            .spawn((
                Taxi { state },
                PathOwner::default(),
                CurrentRoute::default(),
                Passengers::default(),
            ))
            .id()
    }

    /// Park `vehicle` at `stand`: list it in the stand's vehicles and point
    /// its route at the stand.
    pub fn stage_vehicle(&mut self, stand: Entity, vehicle: Entity) {
        let world = self.app.world_mut();
        if let Some(mut route) = world.get_mut::<CurrentRoute>(vehicle) {
            route.route = Some(stand);
        }
        if let Some(mut staged) = world.get_mut::<RouteVehicles>(stand) {
            staged.0.push(vehicle);
            return;
        }
        world.entity_mut(stand).insert(RouteVehicles(vec![vehicle]));
    }

    /// Seat `resident` in `taxi`.
    pub fn board(&mut self, resident: Entity, taxi: Entity) {
        let world = self.app.world_mut();
        world
            .entity_mut(resident)
            .insert(CurrentVehicle { vehicle: taxi });
        if let Some(mut passengers) = world.get_mut::<Passengers>(taxi) {
            passengers.0.push(resident);
        }
    }

    pub fn despawn(&mut self, entity: Entity) {
        self.app.world_mut().despawn(entity);
    }
}
