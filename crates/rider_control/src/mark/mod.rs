//! Taxi suppression: mark residents so the host's mode choice never picks a
//! taxi for them.
//!
//! ## Marking
//!
//! Every frame while the controller is enabled, up to
//! `RiderControlTuning::mark_batch_per_tick` unmarked residents get the
//! host's `IGNORE_TAXI` bit plus an [`IgnoreTaxiMark`] tag. Residents whose
//! household is exempt (commuter or tourist, per settings) are counted and
//! left alone; they do not use up the batch.
//!
//! A resident that already carried `IGNORE_TAXI` before the controller ever
//! touched it also gets [`PresetIgnoreTaxi`], so releasing the mark later
//! leaves the host's own choice in place.
//!
//! ## Reapplying
//!
//! The host clears `IGNORE_TAXI` on its own from time to time. Every enabled
//! frame, marked residents whose bit went missing get it back.
//!
//! ## Releasing
//!
//! While disabled, marked residents are released in batches of the same size
//! until none remain.

use bevy::prelude::*;

pub mod systems;
pub mod types;

mod tests;

pub use systems::{apply_suppression, reapply_suppression, release_suppression};
pub use types::{decide_mark, IgnoreTaxiMark, MarkDecision, PresetIgnoreTaxi};

// =============================================================================
// Plugin
// =============================================================================

pub struct SuppressionPlugin;

impl Plugin for SuppressionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<crate::settings::RiderControlTuning>()
            .init_resource::<crate::activity::RiderActivity>()
            .add_systems(
                Update,
                (apply_suppression, reapply_suppression, release_suppression)
                    .chain()
                    .in_set(crate::RiderControlSet::Suppression),
            );
    }
}
