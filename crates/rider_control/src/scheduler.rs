//! Interval timers for the periodic controller passes.
//!
//! All timers advance on `Time<Real>`, i.e. unscaled wall-clock time, so the
//! unstick/stand passes keep running while the simulation is paused and the
//! player is changing options.

use std::time::Duration;

use bevy::prelude::*;

use crate::settings::RiderControlTuning;

#[derive(Resource, Debug, Clone)]
pub struct RiderControlTimers {
    pub unstick: Timer,
    pub stand: Timer,
    pub moving_away: Timer,
    pub log: Timer,
}

impl RiderControlTimers {
    pub fn from_tuning(tuning: &RiderControlTuning) -> Self {
        Self {
            unstick: Timer::from_seconds(tuning.unstick_interval_secs, TimerMode::Repeating),
            stand: Timer::from_seconds(tuning.stand_interval_secs, TimerMode::Repeating),
            moving_away: Timer::from_seconds(
                tuning.moving_away_interval_secs,
                TimerMode::Repeating,
            ),
            log: Timer::from_seconds(tuning.log_interval_secs, TimerMode::Repeating),
        }
    }

    /// Take new interval lengths from `tuning`. Time already elapsed in each
    /// interval is kept.
    pub fn retune(&mut self, tuning: &RiderControlTuning) {
        self.unstick
            .set_duration(Duration::from_secs_f32(tuning.unstick_interval_secs));
        self.stand
            .set_duration(Duration::from_secs_f32(tuning.stand_interval_secs));
        self.moving_away
            .set_duration(Duration::from_secs_f32(tuning.moving_away_interval_secs));
        self.log
            .set_duration(Duration::from_secs_f32(tuning.log_interval_secs));
    }

    pub fn tick(&mut self, delta: Duration) {
        self.unstick.tick(delta);
        self.stand.tick(delta);
        self.moving_away.tick(delta);
        self.log.tick(delta);
    }

    pub fn unstick_due(&self) -> bool {
        self.unstick.just_finished()
    }

    pub fn stand_due(&self) -> bool {
        self.stand.just_finished()
    }

    pub fn moving_away_due(&self) -> bool {
        self.moving_away.just_finished()
    }

    pub fn log_due(&self) -> bool {
        self.log.just_finished()
    }

    /// Restart every interval from zero (new city loaded).
    pub fn reset(&mut self) {
        self.unstick.reset();
        self.stand.reset();
        self.moving_away.reset();
        self.log.reset();
    }
}

impl FromWorld for RiderControlTimers {
    fn from_world(world: &mut World) -> Self {
        let tuning = world
            .get_resource::<RiderControlTuning>()
            .cloned()
            .unwrap_or_default();
        Self::from_tuning(&tuning)
    }
}

pub fn retune_rider_timers(
    tuning: Res<RiderControlTuning>,
    mut timers: ResMut<RiderControlTimers>,
) {
    timers.retune(&tuning);
}

/// Advance every interval by this frame's wall-clock delta.
pub fn tick_rider_timers(time: Res<Time<Real>>, mut timers: ResMut<RiderControlTimers>) {
    timers.tick(time.delta());
}

pub struct SchedulerPlugin;

impl Plugin for SchedulerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RiderControlTuning>()
            .init_resource::<RiderControlTimers>()
            .add_systems(
                Update,
                (
                    retune_rider_timers.run_if(resource_changed::<RiderControlTuning>),
                    tick_rider_timers,
                )
                    .chain()
                    .in_set(crate::RiderControlSet::Timers),
            );
    }
}
