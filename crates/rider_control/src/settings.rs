//! Operator-facing configuration and internal tuning knobs.
//!
//! `RiderControlSettings` is what the options menu edits. The controller reads
//! it every frame; when the resource is absent (no city loaded, settings not
//! registered yet) every controller system is skipped.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::constants::*;

// =============================================================================
// Settings
// =============================================================================

#[derive(Resource, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiderControlSettings {
    /// Master switch. When off, previously suppressed residents are released
    /// in batches and nothing else runs except status and the moving-away fix.
    pub enabled: bool,
    /// Leave residents of commuter households alone.
    pub exempt_commuters: bool,
    /// Leave residents of tourist households alone.
    pub exempt_tourists: bool,
    /// Periodically wipe stand demand and detach taxis staged at stands.
    pub neutralize_stand_demand: bool,
    /// Emit a summary line every log interval.
    pub verbose_logging: bool,
    /// Let moving-away residents use public transport again.
    pub fix_moving_away_walkers: bool,
}

impl Default for RiderControlSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            exempt_commuters: false,
            exempt_tourists: false,
            neutralize_stand_demand: true,
            verbose_logging: false,
            fix_moving_away_walkers: true,
        }
    }
}

impl RiderControlSettings {
    /// Toggle the master switch the way the options menu does: switching off
    /// also switches off stand neutralization and exempts every household
    /// class, so re-enabling starts from the least intrusive configuration.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.neutralize_stand_demand = false;
            self.exempt_commuters = true;
            self.exempt_tourists = true;
        }
    }

    /// Stand neutralization only runs under the master switch.
    pub fn stand_neutralization_active(&self) -> bool {
        self.enabled && self.neutralize_stand_demand
    }
}

// =============================================================================
// Tuning
// =============================================================================

/// Batch size and intervals. Not exposed in the options menu; tests and
/// benches shrink these to exercise multi-tick behaviour quickly.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct RiderControlTuning {
    /// Maximum residents marked or unmarked per frame.
    pub mark_batch_per_tick: usize,
    pub unstick_interval_secs: f32,
    pub stand_interval_secs: f32,
    pub moving_away_interval_secs: f32,
    pub log_interval_secs: f32,
    /// Minimum snapshot age before a non-forced refresh is honoured.
    pub status_min_refresh_secs: f64,
    /// Snapshot age beyond which the verbose logger forces a refresh.
    pub log_stale_snapshot_secs: f64,
}

impl Default for RiderControlTuning {
    fn default() -> Self {
        Self {
            mark_batch_per_tick: MARK_BATCH_PER_TICK,
            unstick_interval_secs: UNSTICK_INTERVAL_SECS,
            stand_interval_secs: STAND_INTERVAL_SECS,
            moving_away_interval_secs: MOVING_AWAY_INTERVAL_SECS,
            log_interval_secs: LOG_INTERVAL_SECS,
            status_min_refresh_secs: STATUS_MIN_REFRESH_SECS,
            log_stale_snapshot_secs: LOG_STALE_SNAPSHOT_SECS,
        }
    }
}
