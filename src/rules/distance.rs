//! Distance resolution per card type.
//!
//! Numbered cards fix the travel distance of a piece standing on them;
//! jokers let the mover choose any distance in `{1, 2, 3, 4}`. The
//! resolver is a pure, total function over the closed [`CardType`] set;
//! unknown card types never reach it, they are rejected at the parsing
//! boundary.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{CardType, MAX_DISTANCE};
use crate::error::RuleViolation;

/// How far a card lets its occupant travel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistanceRule {
    /// The move must cover exactly this many cells.
    Exact(u8),
    /// The mover picks any distance in `1..=4`.
    Chosen,
}

impl DistanceRule {
    /// Whether `distance` satisfies this rule.
    #[must_use]
    pub fn allows(self, distance: u8) -> bool {
        match self {
            DistanceRule::Exact(required) => distance == required,
            DistanceRule::Chosen => (1..=MAX_DISTANCE).contains(&distance),
        }
    }

    /// The set of acceptable distances, smallest first.
    #[must_use]
    pub fn candidates(self) -> SmallVec<[u8; 4]> {
        match self {
            DistanceRule::Exact(required) => SmallVec::from_slice(&[required]),
            DistanceRule::Chosen => SmallVec::from_slice(&[1, 2, 3, 4]),
        }
    }
}

/// Resolve the distance rule for a card type.
#[must_use]
pub fn distance_rule(card_type: CardType) -> DistanceRule {
    match card_type {
        CardType::Ace => DistanceRule::Exact(1),
        CardType::Two => DistanceRule::Exact(2),
        CardType::Three => DistanceRule::Exact(3),
        CardType::Four => DistanceRule::Exact(4),
        CardType::RedJoker | CardType::BlackJoker => DistanceRule::Chosen,
    }
}

/// Check a declared distance against the card granting it.
pub fn check_distance(card_type: CardType, distance: u8) -> Result<(), RuleViolation> {
    if distance_rule(card_type).allows(distance) {
        Ok(())
    } else {
        Err(RuleViolation::IllegalDistance {
            card_type,
            distance,
        })
    }
}
