//! Card types and the cells they occupy.
//!
//! A deck is a standard deck stripped down to the low ranks: four aces,
//! four twos, four threes, two fours, and both jokers. Sixteen cards,
//! exactly filling the 4×4 board. Numbered cards fix the travel distance
//! of a piece standing on them; jokers leave the distance to the mover.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::error::InputError;

/// The closed set of card types in play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    Ace,
    Two,
    Three,
    Four,
    RedJoker,
    BlackJoker,
}

impl CardType {
    /// Every card type, in deck order.
    pub const ALL: [CardType; 6] = [
        CardType::Ace,
        CardType::Two,
        CardType::Three,
        CardType::Four,
        CardType::RedJoker,
        CardType::BlackJoker,
    ];

    /// How many copies of this type a deck contains.
    #[must_use]
    pub const fn multiplicity(self) -> usize {
        match self {
            CardType::Ace | CardType::Two | CardType::Three => 4,
            CardType::Four => 2,
            CardType::RedJoker | CardType::BlackJoker => 1,
        }
    }

    /// Whether the mover chooses this card's travel distance.
    #[must_use]
    pub const fn is_wild(self) -> bool {
        matches!(self, CardType::RedJoker | CardType::BlackJoker)
    }

    /// Parse a card type from its display name.
    ///
    /// This is the boundary where `UnknownCardType` arises; inside the
    /// crate the enum is closed and every match is total.
    pub fn parse(name: &str) -> Result<Self, InputError> {
        match name {
            "ace" => Ok(CardType::Ace),
            "two" => Ok(CardType::Two),
            "three" => Ok(CardType::Three),
            "four" => Ok(CardType::Four),
            "red-joker" => Ok(CardType::RedJoker),
            "black-joker" => Ok(CardType::BlackJoker),
            _ => Err(InputError::UnknownCardType {
                name: name.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CardType::Ace => "ace",
            CardType::Two => "two",
            CardType::Three => "three",
            CardType::Four => "four",
            CardType::RedJoker => "red-joker",
            CardType::BlackJoker => "black-joker",
        };
        write!(f, "{}", name)
    }
}

/// One cell of the board.
///
/// `occupant` is an auxiliary flag kept in sync with the authoritative
/// player-position list; the consistency auditor flags any divergence.
/// A collapsed card never has an occupant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub card_type: CardType,
    pub collapsed: bool,
    pub occupant: Option<PlayerId>,
}

impl Card {
    /// A fresh face-up, unoccupied card.
    #[must_use]
    pub const fn new(card_type: CardType) -> Self {
        Self {
            card_type,
            collapsed: false,
            occupant: None,
        }
    }

    /// Whether a piece may stand on or pass through this cell.
    #[must_use]
    pub const fn is_passable(self) -> bool {
        !self.collapsed
    }
}
