//! Taxi stands, requests, vehicles and depots.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::flags::{DepotFlags, TaxiFlags, TaxiStandFlags};

// ---------------------------------------------------------------------------
// Transport types
// ---------------------------------------------------------------------------

/// Passenger transport modes the host keeps statistics for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransportType {
    Taxi,
    Bus,
    Tram,
    Train,
    Subway,
    Ship,
    Ferry,
    Airplane,
}

impl TransportType {
    pub const ALL: [TransportType; 8] = [
        TransportType::Taxi,
        TransportType::Bus,
        TransportType::Tram,
        TransportType::Train,
        TransportType::Subway,
        TransportType::Ship,
        TransportType::Ferry,
        TransportType::Airplane,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            TransportType::Taxi => "Taxi",
            TransportType::Bus => "Bus",
            TransportType::Tram => "Tram",
            TransportType::Train => "Train",
            TransportType::Subway => "Subway",
            TransportType::Ship => "Ship",
            TransportType::Ferry => "Ferry",
            TransportType::Airplane => "Air",
        }
    }
}

// ---------------------------------------------------------------------------
// Stands
// ---------------------------------------------------------------------------

/// A kerbside taxi stand. `taxi_request` is the stand's own outstanding
/// request for parked taxis, if any.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct TaxiStand {
    pub flags: TaxiStandFlags,
    pub taxi_request: Option<Entity>,
}

/// Demand accumulated at a stand. Unsigned so a count can never go negative.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WaitingPassengers {
    pub count: u32,
    pub ongoing_accumulation: u32,
    pub concluded_accumulation: u32,
    pub success_accumulation: u16,
    pub average_waiting_time: u16,
}

impl WaitingPassengers {
    pub fn is_clear(&self) -> bool {
        *self == Self::default()
    }
}

/// Vehicles staged on a stand's route.
#[derive(Component, Debug, Clone, Default)]
pub struct RouteVehicles(pub Vec<Entity>);

/// The route (stand) a vehicle is attached to.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct CurrentRoute {
    pub route: Option<Entity>,
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TaxiRequestKind {
    /// A stand asking for taxis to park at it.
    Stand,
    /// A resident asking for a ride.
    Customer,
    /// A traveller at an outside connection asking for a ride.
    Outside,
    #[default]
    None,
}

#[derive(Component, Debug, Clone, Copy, Default)]
pub struct TaxiRequest {
    pub kind: TaxiRequestKind,
    pub seeker: Option<Entity>,
}

// ---------------------------------------------------------------------------
// Vehicles
// ---------------------------------------------------------------------------

#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Taxi {
    pub state: TaxiFlags,
}

#[derive(Component, Debug, Clone, Copy, Default)]
pub struct ParkedCar;

#[derive(Component, Debug, Clone, Copy, Default)]
pub struct InvolvedInAccident;

/// Dispatch requests queued on a vehicle, oldest first.
#[derive(Component, Debug, Clone, Default)]
pub struct ServiceDispatches(pub Vec<Entity>);

/// Residents currently riding in a vehicle.
#[derive(Component, Debug, Clone, Default)]
pub struct Passengers(pub Vec<Entity>);

/// Queue target that boards into a specific vehicle.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct BoardingVehicle {
    pub vehicle: Option<Entity>,
}

/// Depot building that spawns and recalls vehicles of one transport type.
#[derive(Component, Debug, Clone, Copy)]
pub struct TransportDepot {
    pub transport_type: TransportType,
    pub flags: DepotFlags,
}
