//! Passenger composition by age category.

use serde::{Deserialize, Serialize};

/// Number of passengers in each age category.
///
/// Sums and ratios are computed in `u64` so no combination of counts can
/// overflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PassengerCounts {
    /// Adult passengers.
    pub adults: u32,
    /// Child passengers.
    pub children: u32,
    /// Infant passengers, each travelling on an adult's lap.
    pub infants: u32,
}

impl PassengerCounts {
    /// Creates a passenger composition.
    #[must_use]
    pub const fn new(adults: u32, children: u32, infants: u32) -> Self {
        Self {
            adults,
            children,
            infants,
        }
    }

    /// Returns the total number of travellers.
    #[must_use]
    pub fn total(self) -> u64 {
        u64::from(self.adults) + u64::from(self.children) + u64::from(self.infants)
    }

    /// Returns whether the party includes any children.
    #[must_use]
    pub const fn has_children(self) -> bool {
        self.children > 0
    }

    /// Returns whether the party includes any infants.
    #[must_use]
    pub const fn has_infants(self) -> bool {
        self.infants > 0
    }
}
