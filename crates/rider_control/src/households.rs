//! Resident → citizen → household resolution.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::host::{
    CommuterHousehold, HomelessHousehold, HouseholdMember, MovingAway, TouristHousehold,
};

/// Classification tags present on a household entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HouseholdClass {
    pub commuter: bool,
    pub tourist: bool,
    pub homeless: bool,
    pub moving_away: bool,
}

/// Read-only lookup from a resident's citizen reference to its household
/// classification.
#[derive(SystemParam)]
pub struct HouseholdLookup<'w, 's> {
    members: Query<'w, 's, &'static HouseholdMember>,
    classes: Query<
        'w,
        's,
        (
            Has<CommuterHousehold>,
            Has<TouristHousehold>,
            Has<HomelessHousehold>,
            Has<MovingAway>,
        ),
    >,
}

impl HouseholdLookup<'_, '_> {
    /// Household entity of a citizen, if the citizen still exists and
    /// belongs to one.
    pub fn household_of(&self, citizen: Option<Entity>) -> Option<Entity> {
        let citizen = citizen?;
        self.members.get(citizen).ok().map(|m| m.household)
    }

    /// `None` when the chain is broken anywhere: no citizen, citizen gone,
    /// no membership, or household gone.
    pub fn class_of(&self, citizen: Option<Entity>) -> Option<HouseholdClass> {
        let household = self.household_of(citizen)?;
        self.class_of_household(household)
    }

    pub fn class_of_household(&self, household: Entity) -> Option<HouseholdClass> {
        let (commuter, tourist, homeless, moving_away) = self.classes.get(household).ok()?;
        Some(HouseholdClass {
            commuter,
            tourist,
            homeless,
            moving_away,
        })
    }
}
