//! The counts making up one status snapshot.

use crate::host::{TaxiFlags, TransportType};

use super::statistics::{AggregationError, PassengerCounts, PassengerStatistics};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HouseholdCounts {
    pub total: u32,
    pub commuter: u32,
    pub tourist: u32,
    pub homeless: u32,
    pub moving_away: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResidentCounts {
    pub total: u32,
    pub ignore_taxi: u32,
    pub marked: u32,
    pub commuters_total: u32,
    pub commuters_ignore_taxi: u32,
    pub tourists_total: u32,
    pub tourists_ignore_taxi: u32,
    pub in_moving_away_household: u32,
    pub waiting_transport: u32,
}

/// Requests by kind, plus whether Customer/Outside seekers are residents and
/// whether those residents are suppressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestCounts {
    pub stand: u32,
    pub customer: u32,
    pub outside: u32,
    pub none: u32,
    pub customer_seeker_resident: u32,
    pub customer_seeker_ignore_taxi: u32,
    pub outside_seeker_resident: u32,
    pub outside_seeker_ignore_taxi: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaxiCounts {
    pub total: u32,
    pub accident: u32,
    pub parked: u32,
    pub returning: u32,
    pub dispatched: u32,
    pub boarding: u32,
    pub transporting: u32,
    pub en_route: u32,
    pub from_outside: u32,
    pub disabled: u32,
    pub with_dispatch_buffer: u32,
}

impl TaxiCounts {
    pub fn count(&mut self, state: TaxiState) {
        self.total += 1;
        let bucket = match state {
            TaxiState::Accident => &mut self.accident,
            TaxiState::Parked => &mut self.parked,
            TaxiState::Returning => &mut self.returning,
            TaxiState::Dispatched => &mut self.dispatched,
            TaxiState::Boarding => &mut self.boarding,
            TaxiState::Transporting => &mut self.transporting,
            TaxiState::EnRoute => &mut self.en_route,
        };
        *bucket += 1;
    }
}

/// Passenger buffers across all taxis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassengerScan {
    pub total: u32,
    pub has_resident: u32,
    pub ignore_taxi: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FacilityCounts {
    pub stands: u32,
    pub taxi_depots: u32,
    pub taxi_depots_with_dispatch_center: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonthlyPassengers {
    pub by_mode: [PassengerCounts; TransportType::ALL.len()],
}

impl MonthlyPassengers {
    pub fn get(&self, mode: TransportType) -> PassengerCounts {
        self.by_mode[mode.index()]
    }

    pub fn total(&self) -> PassengerCounts {
        self.by_mode
            .iter()
            .fold(PassengerCounts::default(), |acc, c| PassengerCounts {
                citizen: acc.citizen.saturating_add(c.citizen),
                tourist: acc.tourist.saturating_add(c.tourist),
            })
    }

    /// Read every mode from the host statistics.
    ///
    /// A missing or unready source fails the whole read. A mode without a
    /// statistic is reported in the returned list and left at zero.
    pub fn collect(
        source: Option<&PassengerStatistics>,
    ) -> Result<(Self, Vec<AggregationError>), AggregationError> {
        let source = source.ok_or(AggregationError::SourceUnavailable)?;
        if !source.is_ready() {
            return Err(AggregationError::NotReady);
        }
        let mut monthly = Self::default();
        let mut missing = Vec::new();
        for mode in TransportType::ALL {
            match source.monthly(mode) {
                Ok(counts) => monthly.by_mode[mode.index()] = counts,
                Err(err) => missing.push(err),
            }
        }
        Ok((monthly, missing))
    }
}

/// Everything the status rows show.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusSnapshot {
    pub households: HouseholdCounts,
    pub residents: ResidentCounts,
    pub waiting_at_stands: u32,
    pub requests: RequestCounts,
    pub taxis: TaxiCounts,
    pub passengers: PassengerScan,
    pub facilities: FacilityCounts,
    pub monthly: MonthlyPassengers,
}

// =============================================================================
// Taxi state
// =============================================================================

/// A taxi lands in exactly one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaxiState {
    Accident,
    Parked,
    Returning,
    Dispatched,
    Boarding,
    Transporting,
    EnRoute,
}

/// Priority: accident, parked, returning, dispatched, boarding, transporting,
/// and everything else is en route.
pub fn classify_taxi(flags: TaxiFlags, in_accident: bool, parked: bool) -> TaxiState {
    if in_accident {
        TaxiState::Accident
    } else if parked {
        TaxiState::Parked
    } else if flags.contains(TaxiFlags::RETURNING) {
        TaxiState::Returning
    } else if flags.contains(TaxiFlags::DISPATCHED) {
        TaxiState::Dispatched
    } else if flags.contains(TaxiFlags::BOARDING) {
        TaxiState::Boarding
    } else if flags.contains(TaxiFlags::TRANSPORTING) {
        TaxiState::Transporting
    } else {
        TaxiState::EnRoute
    }
}
