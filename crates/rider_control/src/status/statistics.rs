//! Monthly passenger counts per transport mode, as published by the host.

use std::fmt;

use bevy::prelude::*;

use crate::host::TransportType;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassengerCounts {
    pub citizen: u32,
    pub tourist: u32,
}

impl PassengerCounts {
    pub fn total(&self) -> u32 {
        self.citizen.saturating_add(self.tourist)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregationError {
    /// The host never registered a statistics source.
    SourceUnavailable,
    /// The source exists but has not aggregated a month yet.
    NotReady,
    /// No statistic is tracked for this mode.
    MissingStatistic(TransportType),
}

impl fmt::Display for AggregationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceUnavailable => write!(f, "passenger statistics are not available"),
            Self::NotReady => write!(f, "passenger statistics have not been aggregated yet"),
            Self::MissingStatistic(mode) => {
                write!(f, "no passenger statistic for {}", mode.label())
            }
        }
    }
}

impl std::error::Error for AggregationError {}

/// Host-owned monthly statistics. The host records each mode it tracks and
/// flips `ready` once the first month has been aggregated.
#[derive(Resource, Debug, Clone, Default)]
pub struct PassengerStatistics {
    ready: bool,
    monthly: [Option<PassengerCounts>; TransportType::ALL.len()],
}

impl PassengerStatistics {
    pub fn record(&mut self, mode: TransportType, counts: PassengerCounts) {
        self.monthly[mode.index()] = Some(counts);
        self.ready = true;
    }

    pub fn set_ready(&mut self, ready: bool) {
        self.ready = ready;
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn monthly(&self, mode: TransportType) -> Result<PassengerCounts, AggregationError> {
        if !self.ready {
            return Err(AggregationError::NotReady);
        }
        self.monthly[mode.index()].ok_or(AggregationError::MissingStatistic(mode))
    }
}
