use bevy::prelude::*;

use crate::host::{CreatureLaneFlags, HumanCurrentLane, Resident};

/// How a resident is waiting on a taxi, if at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitState {
    Idle,
    /// Standing on a lane flagged as a taxi pickup spot.
    OnTaxiLane,
    /// Marked as waiting for transport in the queue of a stand or taxi.
    InTaxiQueue,
}

/// Classify a resident's wait. Lane waiting wins over queue waiting.
///
/// `is_taxi_queue` reports whether a queue entity is a taxi stand or a
/// boarding spot whose vehicle is a taxi.
pub fn classify_wait_state(
    resident: &Resident,
    lane: &HumanCurrentLane,
    is_taxi_queue: impl Fn(Entity) -> bool,
) -> WaitState {
    if lane.flags.contains(CreatureLaneFlags::TAXI_WAIT) {
        return WaitState::OnTaxiLane;
    }
    if resident.is_waiting_transport() && lane.queue.is_some_and(&is_taxi_queue) {
        return WaitState::InTaxiQueue;
    }
    WaitState::Idle
}

/// Counts from one unstick pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnstickPass {
    pub cleared_lane_waiting: u32,
    pub cleared_stand_waiting: u32,
    pub cleared_ride_needs: u32,
}

impl UnstickPass {
    pub fn total(&self) -> u32 {
        self.cleared_lane_waiting + self.cleared_stand_waiting
    }
}
