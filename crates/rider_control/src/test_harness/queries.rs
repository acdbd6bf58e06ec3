//! Query and frame-stepping methods for `TestRiderCity`.

use std::time::Duration;

use bevy::prelude::*;

use crate::activity::RiderActivity;
use crate::city_load::CityLoaded;
use crate::host::{Deleted, Resident};
use crate::mark::{IgnoreTaxiMark, PresetIgnoreTaxi};
use crate::settings::RiderControlSettings;
use crate::status::RiderStatus;

use super::{TestRiderCity, FRAME_SECS};

impl TestRiderCity {
    // -----------------------------------------------------------------------
    // Frames
    // -----------------------------------------------------------------------

    /// One frame of `FRAME_SECS` wall-clock time.
    pub fn tick(&mut self) {
        self.advance_secs(FRAME_SECS);
    }

    pub fn tick_n(&mut self, n: u32) {
        for _ in 0..n {
            self.tick();
        }
    }

    /// One frame whose wall-clock delta is `secs`.
    pub fn advance_secs(&mut self, secs: f32) {
        self.app
            .world_mut()
            .resource_mut::<Time<Real>>()
            .advance_by(Duration::from_secs_f32(secs));
        self.app.update();
    }

    /// Wall-clock seconds since the harness started.
    pub fn now(&self) -> f64 {
        self.app.world().resource::<Time<Real>>().elapsed_secs_f64()
    }

    pub fn send_city_loaded(&mut self) {
        self.app.world_mut().send_event(CityLoaded);
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn world(&self) -> &World {
        self.app.world()
    }

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    pub fn get<T: Component>(&self, entity: Entity) -> Option<&T> {
        self.app.world().get::<T>(entity)
    }

    pub fn get_mut<T: Component>(&mut self, entity: Entity) -> Option<Mut<'_, T>> {
        self.app.world_mut().get_mut::<T>(entity)
    }

    pub fn resident(&self, entity: Entity) -> Resident {
        self.get::<Resident>(entity)
            .copied()
            .unwrap_or_else(|| panic!("{entity:?} is not a resident"))
    }

    pub fn is_marked(&self, entity: Entity) -> bool {
        self.get::<IgnoreTaxiMark>(entity).is_some()
    }

    pub fn is_preset(&self, entity: Entity) -> bool {
        self.get::<PresetIgnoreTaxi>(entity).is_some()
    }

    pub fn is_deleted(&self, entity: Entity) -> bool {
        self.get::<Deleted>(entity).is_some()
    }

    pub fn marked_count(&mut self) -> usize {
        let world = self.app.world_mut();
        world
            .query_filtered::<(), With<IgnoreTaxiMark>>()
            .iter(world)
            .count()
    }

    /// Residents carrying the host's `IGNORE_TAXI` bit, marked or not.
    pub fn ignore_taxi_count(&mut self) -> usize {
        let world = self.app.world_mut();
        world
            .query::<&Resident>()
            .iter(world)
            .filter(|r| r.ignores_taxi())
            .count()
    }

    pub fn settings_mut(&mut self) -> Mut<'_, RiderControlSettings> {
        self.app
            .world_mut()
            .resource_mut::<RiderControlSettings>()
    }

    pub fn activity(&self) -> RiderActivity {
        *self.app.world().resource::<RiderActivity>()
    }

    pub fn status(&self) -> &RiderStatus {
        self.app.world().resource::<RiderStatus>()
    }

    pub fn status_mut(&mut self) -> Mut<'_, RiderStatus> {
        self.app.world_mut().resource_mut::<RiderStatus>()
    }
}
