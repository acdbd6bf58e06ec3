//! Operator status: a cached city-wide snapshot of how suppression is doing.
//!
//! Scanning every resident, request and taxi is too expensive to do every
//! frame, so the snapshot is only rebuilt on request. Readers call
//! [`RiderStatus::auto_request_on_read`] whenever they display it, which asks
//! for a refresh once the snapshot is older than
//! `RiderControlTuning::status_min_refresh_secs`. An explicit
//! [`RiderStatus::request_refresh`]`(true)` bypasses the minimum age.

use bevy::prelude::*;

pub mod lines;
pub mod resource;
pub mod snapshot;
pub mod statistics;
pub mod systems;


pub use lines::{format_age, format_thousands, StatusLines};
pub use resource::RiderStatus;
pub use snapshot::{
    classify_taxi, FacilityCounts, HouseholdCounts, MonthlyPassengers, PassengerScan,
    RequestCounts, ResidentCounts, StatusSnapshot, TaxiCounts, TaxiState,
};
pub use statistics::{AggregationError, PassengerCounts, PassengerStatistics};
pub use systems::{refresh_status_snapshot, retune_status_refresh, StatusScan};

pub struct StatusPlugin;

impl Plugin for StatusPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<crate::settings::RiderControlTuning>()
            .init_resource::<RiderStatus>()
            .add_systems(
                Update,
                (
                    retune_status_refresh.run_if(
                        resource_changed::<crate::settings::RiderControlTuning>,
                    ),
                    refresh_status_snapshot,
                )
                    .chain()
                    .in_set(crate::RiderControlSet::Status),
            );
    }
}
