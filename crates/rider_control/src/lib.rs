//! Runtime taxi-suppression controller for the city simulation.
//!
//! Keeps residents from choosing taxis, releases the ones already waiting
//! for one, and keeps taxi stands from generating demand of their own. Every
//! change is reversible: switching the controller off releases every
//! resident it marked, in bounded batches.
//!
//! # Update phases (`RiderControlSet`)
//!
//! ```text
//! Timers  →  Suppression  →  Repair  →  StandDemand  →  Status  →  Report
//! ```
//!
//! * **Timers** – advance the wall-clock intervals.
//! * **Suppression** – mark, reapply, or release residents.
//! * **Repair** – unstick taxi waiters, fix moving-away walkers.
//! * **StandDemand** – neutralize stand demand.
//! * **Status** – rebuild the operator snapshot when asked.
//! * **Report** – verbose summary logging.
//!
//! Every phase is skipped while `RiderControlSettings` is absent.

use bevy::prelude::*;

pub mod activity;
pub mod city_load;
pub mod constants;
pub mod host;
pub mod households;
pub mod mark;
pub mod moving_away;
pub mod report;
pub mod scheduler;
pub mod settings;
pub mod stand_demand;
pub mod status;
pub mod unstick;

#[cfg(test)]
mod integration_tests;
#[cfg(any(test, feature = "bench"))]
pub mod test_harness;

pub use activity::RiderActivity;
pub use city_load::CityLoaded;
pub use settings::{RiderControlSettings, RiderControlTuning};
pub use status::{RiderStatus, StatusLines};

/// Ordered phases of one controller frame in the `Update` schedule.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiderControlSet {
    Timers,
    Suppression,
    Repair,
    StandDemand,
    Status,
    Report,
}

impl RiderControlSet {
    pub const ALL: [RiderControlSet; 6] = [
        RiderControlSet::Timers,
        RiderControlSet::Suppression,
        RiderControlSet::Repair,
        RiderControlSet::StandDemand,
        RiderControlSet::Status,
        RiderControlSet::Report,
    ];
}

pub struct RiderControlPlugin;

impl Plugin for RiderControlPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                RiderControlSet::Timers,
                RiderControlSet::Suppression,
                RiderControlSet::Repair,
                RiderControlSet::StandDemand,
                RiderControlSet::Status,
                RiderControlSet::Report,
            )
                .chain(),
        );
        for set in RiderControlSet::ALL {
            app.configure_sets(
                Update,
                set.run_if(resource_exists::<RiderControlSettings>),
            );
        }

        app.init_resource::<RiderControlTuning>()
            .init_resource::<RiderActivity>();

        app.add_plugins((
            scheduler::SchedulerPlugin,
            city_load::CityLoadPlugin,
            mark::SuppressionPlugin,
            unstick::UnstickPlugin,
            moving_away::MovingAwayPlugin,
            stand_demand::StandDemandPlugin,
            status::StatusPlugin,
            report::ReportPlugin,
        ));
    }
}
