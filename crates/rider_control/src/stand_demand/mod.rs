//! Stand demand neutralization.
//!
//! Taxi stands accumulate waiting passengers and ask the depot for taxis on
//! their own, even when nobody is allowed to take one. On every stand
//! interval this pass wipes stand demand, drops the stand's own taxi
//! requests and sends staged taxis off to repath.
//!
//! Requests are only tagged [`Deleted`](crate::host::Deleted); the host
//! despawns them. Stands and vehicles are never destroyed.

use bevy::prelude::*;

pub mod systems;
pub mod types;


pub use systems::{neutralize_stand_demand, StandVehicleQuery};
pub use types::StandNeutralization;

pub struct StandDemandPlugin;

impl Plugin for StandDemandPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<crate::activity::RiderActivity>()
            .add_systems(
                Update,
                neutralize_stand_demand.in_set(crate::RiderControlSet::StandDemand),
            );
    }
}
