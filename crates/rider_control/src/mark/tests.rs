//! Unit tests for the suppression decision.

#[cfg(test)]
mod tests {
    use bevy::prelude::Entity;

    use crate::households::HouseholdClass;
    use crate::host::{Resident, ResidentFlags};
    use crate::mark::types::*;
    use crate::settings::RiderControlSettings;

    fn resident() -> Resident {
        Resident::new(Entity::from_raw(7))
    }

    fn commuter() -> Option<HouseholdClass> {
        Some(HouseholdClass {
            commuter: true,
            ..Default::default()
        })
    }

    fn tourist() -> Option<HouseholdClass> {
        Some(HouseholdClass {
            tourist: true,
            ..Default::default()
        })
    }

    #[test]
    fn test_default_settings_mark_everyone() {
        let settings = RiderControlSettings::default();
        for class in [None, commuter(), tourist()] {
            assert_eq!(
                decide_mark(&resident(), class, &settings),
                MarkDecision::Mark { preset: false }
            );
        }
    }

    #[test]
    fn test_exempt_commuters_skips_commuter_household() {
        let settings = RiderControlSettings {
            exempt_commuters: true,
            ..Default::default()
        };
        assert_eq!(
            decide_mark(&resident(), commuter(), &settings),
            MarkDecision::SkipCommuter
        );
        assert_eq!(
            decide_mark(&resident(), tourist(), &settings),
            MarkDecision::Mark { preset: false }
        );
    }

    #[test]
    fn test_exempt_tourists_skips_tourist_household() {
        let settings = RiderControlSettings {
            exempt_tourists: true,
            ..Default::default()
        };
        assert_eq!(
            decide_mark(&resident(), tourist(), &settings),
            MarkDecision::SkipTourist
        );
    }

    #[test]
    fn test_commuter_wins_when_household_has_both_tags() {
        let settings = RiderControlSettings {
            exempt_commuters: true,
            exempt_tourists: true,
            ..Default::default()
        };
        let both = Some(HouseholdClass {
            commuter: true,
            tourist: true,
            ..Default::default()
        });
        assert_eq!(
            decide_mark(&resident(), both, &settings),
            MarkDecision::SkipCommuter
        );
    }

    #[test]
    fn test_unresolved_household_is_never_exempt() {
        let settings = RiderControlSettings {
            exempt_commuters: true,
            exempt_tourists: true,
            ..Default::default()
        };
        assert_eq!(
            decide_mark(&resident(), None, &settings),
            MarkDecision::Mark { preset: false }
        );
    }

    #[test]
    fn test_existing_ignore_taxi_is_recorded_as_preset() {
        let mut r = resident();
        r.flags.insert(ResidentFlags::IGNORE_TAXI);
        assert_eq!(
            decide_mark(&r, None, &RiderControlSettings::default()),
            MarkDecision::Mark { preset: true }
        );
    }
}
