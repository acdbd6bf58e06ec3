/// What one stand pass did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandNeutralization {
    /// Sum of the waiting counts that were reset.
    pub cleared_waiting_passengers: u32,
    /// Requests newly tagged for deletion.
    pub removed_requests: u32,
    /// Staged vehicles sent off to repath.
    pub detached_vehicles: u32,
    /// Staged entries whose vehicle no longer existed.
    pub pruned_vehicles: u32,
}

impl StandNeutralization {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
