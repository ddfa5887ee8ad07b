//! The 4×4 card grid.
//!
//! The board is a fixed array of [`Card`]s with bounds-checked access.
//! Adjacency wraps at both axes; the wraparound arithmetic itself lives
//! in [`Position`](super::position::Position). The board never mutates
//! itself; collapse and occupancy changes come from the move executor.

use serde::{Deserialize, Serialize};

use super::card::{Card, CardType};
use super::player::PlayerId;
use super::position::{Position, BOARD_SIZE};
use crate::error::StateInconsistency;

const SIZE: usize = BOARD_SIZE as usize;

/// A fixed 4×4 grid of cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Card; SIZE]; SIZE],
}

impl Board {
    /// Build a board from 16 card types, row-major.
    #[must_use]
    pub fn from_cards(cards: [CardType; 16]) -> Self {
        let mut cells = [[Card::new(CardType::Ace); SIZE]; SIZE];
        for (i, card_type) in cards.into_iter().enumerate() {
            cells[i / SIZE][i % SIZE] = Card::new(card_type);
        }
        Self { cells }
    }

    /// The card at `position`, or `None` if the position is out of range.
    ///
    /// Positions built through the checked constructors are always in
    /// range, but positions arriving via deserialized snapshots may not
    /// be, so lookups stay total.
    #[must_use]
    pub fn card_at(&self, position: Position) -> Option<&Card> {
        if position.in_bounds() {
            Some(&self.cells[position.row as usize][position.col as usize])
        } else {
            None
        }
    }

    /// Mutable access to the card at `position`.
    pub fn card_at_mut(&mut self, position: Position) -> Option<&mut Card> {
        if position.in_bounds() {
            Some(&mut self.cells[position.row as usize][position.col as usize])
        } else {
            None
        }
    }

    /// Iterate over `(position, card)` pairs, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Card)> {
        Position::all().map(move |p| {
            (p, &self.cells[p.row as usize][p.col as usize])
        })
    }

    /// Number of collapsed cells.
    #[must_use]
    pub fn collapsed_count(&self) -> usize {
        self.iter().filter(|(_, c)| c.collapsed).count()
    }

    /// Position of the single card of the given joker type.
    ///
    /// Returns `None` for numbered types, which appear more than once.
    #[must_use]
    pub fn joker_position(&self, joker: CardType) -> Option<Position> {
        if !joker.is_wild() {
            return None;
        }
        self.iter()
            .find(|(_, c)| c.card_type == joker)
            .map(|(p, _)| p)
    }

    /// The player recorded on this cell's occupant flag, if any.
    #[must_use]
    pub fn occupant_at(&self, position: Position) -> Option<PlayerId> {
        self.card_at(position).and_then(|c| c.occupant)
    }

    /// Verify the deck composition invariant: the board holds exactly the
    /// standard 16-card deal, one joker of each color included.
    pub fn validate_composition(&self) -> Result<(), StateInconsistency> {
        for card_type in CardType::ALL {
            let count = self
                .iter()
                .filter(|(_, c)| c.card_type == card_type)
                .count();
            if count != card_type.multiplicity() {
                return Err(StateInconsistency::BadComposition {
                    card_type,
                    expected: card_type.multiplicity(),
                    found: count,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::standard_deck;

    #[test]
    fn test_from_cards_row_major() {
        let board = Board::from_cards(standard_deck());
        // standard_deck is unshuffled: aces first
        assert_eq!(
            board.card_at(Position::new(0, 0)).unwrap().card_type,
            CardType::Ace
        );
        assert_eq!(board.iter().count(), 16);
    }

    #[test]
    fn test_card_at_bounds() {
        let board = Board::from_cards(standard_deck());
        assert!(board.card_at(Position::new(3, 3)).is_some());
        assert!(board.card_at(Position { row: 4, col: 0 }).is_none());
        assert!(board.card_at(Position { row: 0, col: 9 }).is_none());
    }

    #[test]
    fn test_collapsed_count() {
        let mut board = Board::from_cards(standard_deck());
        assert_eq!(board.collapsed_count(), 0);

        board.card_at_mut(Position::new(1, 1)).unwrap().collapsed = true;
        board.card_at_mut(Position::new(2, 0)).unwrap().collapsed = true;
        assert_eq!(board.collapsed_count(), 2);
    }

    #[test]
    fn test_joker_positions() {
        let board = Board::from_cards(standard_deck());
        let red = board.joker_position(CardType::RedJoker).unwrap();
        let black = board.joker_position(CardType::BlackJoker).unwrap();
        assert_ne!(red, black);
        assert_eq!(board.joker_position(CardType::Ace), None);
    }

    #[test]
    fn test_validate_composition_ok() {
        let board = Board::from_cards(standard_deck());
        assert!(board.validate_composition().is_ok());
    }

    #[test]
    fn test_validate_composition_rejects_extra_joker() {
        let mut cards = standard_deck();
        // Overwrite an ace with a second red joker
        cards[0] = CardType::RedJoker;
        let board = Board::from_cards(cards);

        let err = board.validate_composition().unwrap_err();
        assert!(matches!(err, StateInconsistency::BadComposition { .. }));
    }

    #[test]
    fn test_board_serialization() {
        let board = Board::from_cards(standard_deck());
        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, back);
    }
}
