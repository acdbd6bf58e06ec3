use bevy::prelude::*;

use crate::households::HouseholdClass;
use crate::host::Resident;
use crate::settings::RiderControlSettings;

/// Set on every resident whose `IGNORE_TAXI` bit is owned by the controller.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct IgnoreTaxiMark;

/// The resident already ignored taxis when it was marked; releasing the mark
/// must not clear the bit.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct PresetIgnoreTaxi;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkDecision {
    SkipCommuter,
    SkipTourist,
    Mark { preset: bool },
}

/// Decide what to do with an unmarked resident.
///
/// A resident whose household cannot be resolved is never exempt. Commuter
/// takes priority over tourist when a household carries both tags.
pub fn decide_mark(
    resident: &Resident,
    household: Option<HouseholdClass>,
    settings: &RiderControlSettings,
) -> MarkDecision {
    if let Some(class) = household {
        if settings.exempt_commuters && class.commuter {
            return MarkDecision::SkipCommuter;
        }
        if settings.exempt_tourists && class.tourist {
            return MarkDecision::SkipTourist;
        }
    }
    MarkDecision::Mark {
        preset: resident.ignores_taxi(),
    }
}
