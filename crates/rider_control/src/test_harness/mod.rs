//! # TestRiderCity: headless harness for the rider controller
//!
//! Wraps a bare `bevy::app::App` with `RiderControlPlugin` and a manually
//! stepped `Time<Real>`, so tests decide exactly how much wall-clock time
//! passes per frame.

mod queries;
mod spawning;

use bevy::app::App;
use bevy::prelude::*;

use crate::settings::{RiderControlSettings, RiderControlTuning};
use crate::status::PassengerStatistics;
use crate::RiderControlPlugin;

/// Wall-clock time one `tick()` advances.
pub const FRAME_SECS: f32 = 0.1;

/// A headless App running only the rider controller over host-shaped
/// entities spawned by the test.
pub struct TestRiderCity {
    app: App,
}

impl Default for TestRiderCity {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRiderCity {
    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    /// Default settings and tuning, no entities.
    pub fn new() -> Self {
        Self::with_tuning(RiderControlTuning::default())
    }

    /// Tuning must be in place before the plugin builds its timers.
    pub fn with_tuning(tuning: RiderControlTuning) -> Self {
        let mut app = App::new();
        app.insert_resource(Time::<Real>::default());
        app.insert_resource(tuning);
        app.insert_resource(RiderControlSettings::default());
        app.add_plugins(RiderControlPlugin);
        Self { app }
    }

    /// Default tuning with a different mark/unmark batch size.
    pub fn with_batch_cap(cap: usize) -> Self {
        Self::with_tuning(RiderControlTuning {
            mark_batch_per_tick: cap,
            ..Default::default()
        })
    }

    // -----------------------------------------------------------------------
    // Builder methods
    // -----------------------------------------------------------------------

    pub fn with_settings(mut self, settings: RiderControlSettings) -> Self {
        self.app.insert_resource(settings);
        self
    }

    /// Simulate a host that has not registered settings yet.
    pub fn without_settings(mut self) -> Self {
        self.app.world_mut().remove_resource::<RiderControlSettings>();
        self
    }

    pub fn with_statistics(mut self, statistics: PassengerStatistics) -> Self {
        self.app.insert_resource(statistics);
        self
    }
}
