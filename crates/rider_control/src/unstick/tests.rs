//! Unit tests for wait classification.

#[cfg(test)]
mod tests {
    use bevy::prelude::Entity;

    use crate::host::{CreatureLaneFlags, HumanCurrentLane, Resident, ResidentFlags};
    use crate::unstick::types::*;

    fn queue() -> Entity {
        Entity::from_raw(42)
    }

    fn waiting_resident() -> Resident {
        let mut r = Resident::default();
        r.flags.insert(ResidentFlags::WAITING_TRANSPORT);
        r
    }

    #[test]
    fn test_plain_walker_is_idle() {
        let lane = HumanCurrentLane::default();
        assert_eq!(
            classify_wait_state(&Resident::default(), &lane, |_| true),
            WaitState::Idle
        );
    }

    #[test]
    fn test_taxi_lane_requires_both_lane_bits() {
        let mut lane = HumanCurrentLane::default();
        lane.flags.insert(CreatureLaneFlags::TAXI);
        assert_eq!(
            classify_wait_state(&Resident::default(), &lane, |_| false),
            WaitState::Idle
        );
        lane.flags.insert(CreatureLaneFlags::PARKING_SPACE);
        assert_eq!(
            classify_wait_state(&Resident::default(), &lane, |_| false),
            WaitState::OnTaxiLane
        );
    }

    #[test]
    fn test_queue_wait_needs_taxi_queue() {
        let lane = HumanCurrentLane {
            flags: CreatureLaneFlags::empty(),
            queue: Some(queue()),
        };
        assert_eq!(
            classify_wait_state(&waiting_resident(), &lane, |_| false),
            WaitState::Idle,
            "bus queue is left alone"
        );
        assert_eq!(
            classify_wait_state(&waiting_resident(), &lane, |q| q == queue()),
            WaitState::InTaxiQueue
        );
    }

    #[test]
    fn test_queue_wait_needs_waiting_flag() {
        let lane = HumanCurrentLane {
            flags: CreatureLaneFlags::empty(),
            queue: Some(queue()),
        };
        assert_eq!(
            classify_wait_state(&Resident::default(), &lane, |_| true),
            WaitState::Idle
        );
    }

    #[test]
    fn test_lane_wait_takes_priority_over_queue_wait() {
        let lane = HumanCurrentLane {
            flags: CreatureLaneFlags::TAXI_WAIT,
            queue: Some(queue()),
        };
        assert_eq!(
            classify_wait_state(&waiting_resident(), &lane, |_| true),
            WaitState::OnTaxiLane
        );
    }
}
