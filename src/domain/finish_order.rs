//! Ordered first/second/third horse numbers.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Horse numbers in finishing (or picked) order.
///
/// Used both for the actual outcome of a race and for a trifecta pick. On
/// the wire the three fields are flattened into the enclosing record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct FinishOrder {
    /// Horse number finishing first.
    pub first: u32,
    /// Horse number finishing second.
    pub second: u32,
    /// Horse number finishing third.
    pub third: u32,
}

impl FinishOrder {
    /// Creates a finish order from three horse numbers.
    #[must_use]
    pub const fn new(first: u32, second: u32, third: u32) -> Self {
        Self {
            first,
            second,
            third,
        }
    }

    /// Returns `true` when all three horse numbers are positive and
    /// pairwise distinct.
    #[must_use]
    pub const fn is_well_formed(&self) -> bool {
        self.first > 0
            && self.second > 0
            && self.third > 0
            && self.first != self.second
            && self.first != self.third
            && self.second != self.third
    }
}

impl fmt::Display for FinishOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.first, self.second, self.third)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_dashes() {
        assert_eq!(FinishOrder::new(7, 9, 1).to_string(), "7-9-1");
    }

    #[test]
    fn well_formed_requires_distinct_positive_numbers() {
        assert!(FinishOrder::new(3, 5, 2).is_well_formed());
        assert!(!FinishOrder::new(3, 3, 2).is_well_formed());
        assert!(!FinishOrder::new(3, 5, 3).is_well_formed());
        assert!(!FinishOrder::new(0, 5, 2).is_well_formed());
    }

    #[test]
    fn order_matters_for_equality() {
        assert_ne!(FinishOrder::new(1, 2, 3), FinishOrder::new(2, 1, 3));
    }
}
