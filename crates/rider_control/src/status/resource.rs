use bevy::prelude::*;

use crate::constants::STATUS_MIN_REFRESH_SECS;
use crate::settings::RiderControlTuning;

use super::lines::format_age;
use super::snapshot::StatusSnapshot;

/// Cached snapshot plus the refresh handshake.
///
/// Times are `Time<Real>::elapsed_secs_f64()` values, i.e. wall-clock
/// seconds since startup.
#[derive(Resource, Debug, Clone)]
pub struct RiderStatus {
    snapshot: StatusSnapshot,
    refreshed_at: Option<f64>,
    refresh_requested: bool,
    force_refresh: bool,
    min_refresh_secs: f64,
}

impl RiderStatus {
    pub fn new(min_refresh_secs: f64) -> Self {
        Self {
            snapshot: StatusSnapshot::default(),
            refreshed_at: None,
            refresh_requested: false,
            force_refresh: false,
            min_refresh_secs,
        }
    }

    pub fn snapshot(&self) -> &StatusSnapshot {
        &self.snapshot
    }

    pub fn has_snapshot(&self) -> bool {
        self.refreshed_at.is_some()
    }

    pub fn refreshed_at(&self) -> Option<f64> {
        self.refreshed_at
    }

    pub fn is_refresh_pending(&self) -> bool {
        self.refresh_requested
    }

    /// `None` until the first refresh. Never negative.
    pub fn age_secs(&self, now: f64) -> Option<f64> {
        self.refreshed_at.map(|at| (now - at).max(0.0))
    }

    /// "12s", "3m 5s", "2h 4m", or "n/a" before the first refresh.
    pub fn age_text(&self, now: f64) -> String {
        match self.age_secs(now) {
            Some(age) => format_age(age),
            None => "n/a".to_string(),
        }
    }

    /// Ask for a rebuild on the next status pass. A forced request ignores
    /// the minimum snapshot age.
    pub fn request_refresh(&mut self, force: bool) {
        self.refresh_requested = true;
        if force {
            self.force_refresh = true;
        }
    }

    /// Called by anything that displays the snapshot. Requests a normal
    /// refresh when there is no snapshot or it has reached the minimum age.
    pub fn auto_request_on_read(&mut self, now: f64) {
        match self.age_secs(now) {
            None => self.refresh_requested = true,
            Some(age) if age >= self.min_refresh_secs => self.refresh_requested = true,
            Some(_) => {}
        }
    }

    /// A pending non-forced request against a young snapshot stays pending.
    pub fn should_refresh(&self, now: f64) -> bool {
        if !self.refresh_requested {
            return false;
        }
        if self.force_refresh {
            return true;
        }
        self.age_secs(now)
            .map_or(true, |age| age >= self.min_refresh_secs)
    }

    pub fn set_min_refresh_secs(&mut self, secs: f64) {
        self.min_refresh_secs = secs;
    }

    pub fn store(&mut self, snapshot: StatusSnapshot, now: f64) {
        self.snapshot = snapshot;
        self.refreshed_at = Some(now);
        self.refresh_requested = false;
        self.force_refresh = false;
    }

    /// Forget the snapshot and any pending request.
    pub fn reset(&mut self) {
        *self = Self::new(self.min_refresh_secs);
    }
}

impl FromWorld for RiderStatus {
    fn from_world(world: &mut World) -> Self {
        let min = world
            .get_resource::<RiderControlTuning>()
            .map_or(STATUS_MIN_REFRESH_SECS, |t| t.status_min_refresh_secs);
        Self::new(min)
    }
}
