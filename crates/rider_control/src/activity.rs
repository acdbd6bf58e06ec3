//! Work counters from the most recent controller passes.

use bevy::prelude::*;

use crate::stand_demand::StandNeutralization;
use crate::unstick::UnstickPass;

/// What the controller did lately.
///
/// Suppression counters describe the current frame. Unstick, stand and
/// moving-away counters describe the last time that pass actually ran, so
/// they stay readable between intervals.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RiderActivity {
    pub applied: u32,
    pub skipped_commuters: u32,
    pub skipped_tourists: u32,
    pub reapplied: u32,
    pub unmarked: u32,

    pub cleared_lane_waiting: u32,
    pub cleared_stand_waiting: u32,
    pub cleared_ride_needs: u32,

    pub cleared_stand_passengers: u32,
    pub removed_stand_requests: u32,
    pub detached_vehicles: u32,

    pub moving_away_cleared: u32,
}

impl RiderActivity {
    pub fn record_unstick(&mut self, pass: UnstickPass) {
        self.cleared_lane_waiting = pass.cleared_lane_waiting;
        self.cleared_stand_waiting = pass.cleared_stand_waiting;
        self.cleared_ride_needs = pass.cleared_ride_needs;
    }

    pub fn record_stand(&mut self, report: StandNeutralization) {
        self.cleared_stand_passengers = report.cleared_waiting_passengers;
        self.removed_stand_requests = report.removed_requests;
        self.detached_vehicles = report.detached_vehicles;
    }

    pub fn skipped_total(&self) -> u32 {
        self.skipped_commuters + self.skipped_tourists
    }

    /// False until any pass has changed something.
    pub fn has_activity(&self) -> bool {
        *self != Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_activity() {
        assert!(!RiderActivity::default().has_activity());
    }

    #[test]
    fn test_record_unstick_overwrites_previous_pass() {
        let mut activity = RiderActivity::default();
        activity.record_unstick(UnstickPass {
            cleared_lane_waiting: 4,
            cleared_stand_waiting: 2,
            cleared_ride_needs: 1,
        });
        activity.record_unstick(UnstickPass {
            cleared_lane_waiting: 1,
            ..Default::default()
        });
        assert_eq!(activity.cleared_lane_waiting, 1);
        assert_eq!(activity.cleared_stand_waiting, 0);
        assert!(activity.has_activity());
    }

    #[test]
    fn test_skipped_total_sums_both_classes() {
        let activity = RiderActivity {
            skipped_commuters: 3,
            skipped_tourists: 5,
            ..Default::default()
        };
        assert_eq!(activity.skipped_total(), 8);
    }
}
