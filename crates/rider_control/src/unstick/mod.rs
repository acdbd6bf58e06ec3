//! Release residents stuck waiting for a taxi that will never come.
//!
//! Suppression only affects new trips. Residents who chose a taxi before
//! they were marked may be standing on a taxi lane or sitting in a stand's
//! queue. Once per unstick interval every such resident gets its wait
//! cleared and its path marked obsolete so the host plans a new trip, which
//! will no longer include a taxi.

use bevy::prelude::*;

pub mod systems;
pub mod types;

mod tests;

pub use systems::{unstick_taxi_waiters, TaxiQueueLookup};
pub use types::{classify_wait_state, UnstickPass, WaitState};

pub struct UnstickPlugin;

impl Plugin for UnstickPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<crate::activity::RiderActivity>()
            .add_systems(
                Update,
                unstick_taxi_waiters.in_set(crate::RiderControlSet::Repair),
            );
    }
}
