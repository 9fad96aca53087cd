//! Reward points balance and affordability
use serde::{Deserialize, Serialize};
use std::fmt;

/// Points granted to every account at signup.
pub const SIGNUP_GRANT: PointsBalance = PointsBalance(100);

/// A user's reward points balance.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct PointsBalance(pub u32);

impl PointsBalance {
    #[must_use]
    pub const fn points(self) -> u32 {
        self.0
    }

    /// Whether the balance covers a price. This is the single gate for
    /// the store's purchase affordance.
    #[must_use]
    pub const fn can_afford(self, price: u32) -> bool {
        self.0 >= price
    }
}

impl fmt::Display for PointsBalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn affordability_is_balance_vs_price() {
        let balance = PointsBalance(100);
        assert!(balance.can_afford(90));
        assert!(balance.can_afford(100));
        assert!(!balance.can_afford(101));
    }

    #[test]
    fn signup_grant_covers_the_cheapest_tier() {
        assert_eq!(SIGNUP_GRANT.points(), 100);
        assert!(SIGNUP_GRANT.can_afford(30));
    }
}
