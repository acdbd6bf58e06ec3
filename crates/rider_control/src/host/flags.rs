//! Bit sets carried by host components.
//!
//! The host stores these as plain integers; the newtypes keep the controller
//! from mixing a lane bit into a resident bit by accident.

macro_rules! flag_set {
    (
        $(#[$meta:meta])*
        $name:ident: $repr:ty {
            $( $(#[$fmeta:meta])* $flag:ident = $bit:expr; )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct $name(pub $repr);

        impl $name {
            $( $(#[$fmeta])* pub const $flag: Self = Self($bit); )*

            pub const fn empty() -> Self {
                Self(0)
            }

            pub const fn bits(self) -> $repr {
                self.0
            }

            pub const fn is_empty(self) -> bool {
                self.0 == 0
            }

            /// True when every bit of `other` is set in `self`.
            pub const fn contains(self, other: Self) -> bool {
                self.0 & other.0 == other.0
            }

            pub const fn intersects(self, other: Self) -> bool {
                self.0 & other.0 != 0
            }

            pub fn insert(&mut self, other: Self) {
                self.0 |= other.0;
            }

            pub fn remove(&mut self, other: Self) {
                self.0 &= !other.0;
            }

            pub fn set(&mut self, other: Self, value: bool) {
                if value {
                    self.insert(other);
                } else {
                    self.remove(other);
                }
            }
        }

        impl std::ops::BitOr for $name {
            type Output = Self;

            fn bitor(self, rhs: Self) -> Self {
                Self(self.0 | rhs.0)
            }
        }
    };
}

flag_set! {
    /// Per-resident travel preferences and posture.
    ResidentFlags: u32 {
        /// Taxi is excluded from route selection.
        IGNORE_TAXI = 1 << 0;
        /// All public transport is excluded from route selection.
        IGNORE_TRANSPORT = 1 << 1;
        /// Standing in a queue for some transport vehicle.
        WAITING_TRANSPORT = 1 << 2;
    }
}

flag_set! {
    /// Flags on the lane a pedestrian currently occupies.
    CreatureLaneFlags: u32 {
        PARKING_SPACE = 1 << 0;
        TAXI = 1 << 1;
    }
}

impl CreatureLaneFlags {
    /// Both bits together mean "parked at the kerb waiting for a taxi pickup".
    pub const TAXI_WAIT: Self = Self(Self::PARKING_SPACE.0 | Self::TAXI.0);
}

flag_set! {
    /// Path state of anything that owns a path (residents and vehicles).
    PathFlags: u16 {
        PENDING = 1 << 0;
        FAILED = 1 << 1;
        /// The path must be recomputed on the next pathfinding pass.
        OBSOLETE = 1 << 2;
    }
}

flag_set! {
    TaxiStandFlags: u16 {
        /// The stand is asking the dispatcher for more parked taxis.
        REQUIRE_VEHICLES = 1 << 0;
    }
}

flag_set! {
    /// Taxi vehicle state. Several bits can be set at once; status reporting
    /// classifies by priority.
    TaxiFlags: u32 {
        RETURNING = 1 << 0;
        DISPATCHED = 1 << 1;
        BOARDING = 1 << 2;
        TRANSPORTING = 1 << 3;
        FROM_OUTSIDE = 1 << 4;
        DISABLED = 1 << 5;
    }
}

flag_set! {
    DepotFlags: u16 {
        HAS_DISPATCH_CENTER = 1 << 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_requires_every_bit() {
        let lane = CreatureLaneFlags::TAXI;
        assert!(!lane.contains(CreatureLaneFlags::TAXI_WAIT));
        assert!(lane.intersects(CreatureLaneFlags::TAXI_WAIT));
        let both = CreatureLaneFlags::TAXI | CreatureLaneFlags::PARKING_SPACE;
        assert!(both.contains(CreatureLaneFlags::TAXI_WAIT));
    }

    #[test]
    fn test_insert_and_remove_leave_other_bits() {
        let mut flags = ResidentFlags::WAITING_TRANSPORT;
        flags.insert(ResidentFlags::IGNORE_TAXI);
        assert!(flags.contains(ResidentFlags::IGNORE_TAXI));
        flags.remove(ResidentFlags::IGNORE_TAXI);
        assert_eq!(flags, ResidentFlags::WAITING_TRANSPORT);
    }

    #[test]
    fn test_set_toggles() {
        let mut flags = TaxiStandFlags::empty();
        flags.set(TaxiStandFlags::REQUIRE_VEHICLES, true);
        assert!(!flags.is_empty());
        flags.set(TaxiStandFlags::REQUIRE_VEHICLES, false);
        assert!(flags.is_empty());
    }
}
