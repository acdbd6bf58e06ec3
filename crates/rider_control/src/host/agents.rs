//! Residents, citizens and households as the host simulation stores them.

use bevy::prelude::*;

use super::flags::{CreatureLaneFlags, PathFlags, ResidentFlags};

// ---------------------------------------------------------------------------
// Resident (the "agent" the controller reasons about)
// ---------------------------------------------------------------------------

/// A simulated person walking the city.
///
/// `citizen` points at the long-lived citizen record, which in turn carries
/// the household membership. It is `None` for residents spawned without one.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Resident {
    pub flags: ResidentFlags,
    pub citizen: Option<Entity>,
}

impl Resident {
    pub fn new(citizen: Entity) -> Self {
        Self {
            flags: ResidentFlags::empty(),
            citizen: Some(citizen),
        }
    }

    pub fn ignores_taxi(&self) -> bool {
        self.flags.contains(ResidentFlags::IGNORE_TAXI)
    }

    pub fn is_waiting_transport(&self) -> bool {
        self.flags.contains(ResidentFlags::WAITING_TRANSPORT)
    }
}

/// Lives on the citizen entity, not on the resident.
#[derive(Component, Debug, Clone, Copy)]
pub struct HouseholdMember {
    pub household: Entity,
}

/// The lane a resident currently stands on, and the queue it has joined.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct HumanCurrentLane {
    pub flags: CreatureLaneFlags,
    pub queue: Option<Entity>,
}

#[derive(Component, Debug, Clone, Copy, Default)]
pub struct PathOwner {
    pub state: PathFlags,
}

impl PathOwner {
    /// Ask for a fresh path without flagging the old one as failed, so the
    /// host repaths normally instead of running its failure handling.
    pub fn mark_obsolete(&mut self) {
        self.state.remove(PathFlags::FAILED);
        self.state.insert(PathFlags::OBSOLETE);
    }
}

/// Present while a resident has asked for a ride; the host's ride system
/// turns it into a taxi request.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct RideNeeder {
    pub ride_request: Option<Entity>,
}

/// The vehicle a resident is currently sitting in.
#[derive(Component, Debug, Clone, Copy)]
pub struct CurrentVehicle {
    pub vehicle: Entity,
}

// ---------------------------------------------------------------------------
// Households
// ---------------------------------------------------------------------------

#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Household;

/// Household living outside the city whose members commute in.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct CommuterHousehold;

#[derive(Component, Debug, Clone, Copy, Default)]
pub struct TouristHousehold;

#[derive(Component, Debug, Clone, Copy, Default)]
pub struct HomelessHousehold;

/// Household that is leaving the city through an outside connection.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct MovingAway;
