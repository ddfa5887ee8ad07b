//! Board dealing and player placement.
//!
//! The engine core accepts a pre-built board and two placed players; it
//! never shuffles or deals itself. This module is the collaborator that
//! produces such inputs: the standard 16-card deck, a seeded shuffle
//! onto the 4×4 grid, and placement of the players on their joker
//! cells. Embedding applications, tests, and benches all start here.

use crate::core::{Board, CardType, GameRng, GameState};

/// The standard deck, unshuffled: four aces, four twos, four threes,
/// two fours, one joker of each color.
#[must_use]
pub fn standard_deck() -> [CardType; 16] {
    let mut cards = [CardType::Ace; 16];
    let mut index = 0;
    for card_type in CardType::ALL {
        for _ in 0..card_type.multiplicity() {
            cards[index] = card_type;
            index += 1;
        }
    }
    cards
}

/// Builder for a ready-to-play game.
///
/// ```
/// use cardgrid::setup::GameSetup;
/// use cardgrid::core::GameStatus;
///
/// let state = GameSetup::new().seed(42).deal();
/// assert_eq!(state.status(), GameStatus::Playing);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct GameSetup {
    seed: u64,
}

impl GameSetup {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed for the shuffle. Same seed, same board.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Shuffle the deck onto the board and place player 0 on the red
    /// joker, player 1 on the black joker.
    #[must_use]
    pub fn deal(self) -> GameState {
        let mut cards = standard_deck();
        let mut rng = GameRng::new(self.seed);
        rng.shuffle(&mut cards);

        let board = Board::from_cards(cards);
        let red = board
            .joker_position(CardType::RedJoker)
            .expect("standard deck contains the red joker");
        let black = board
            .joker_position(CardType::BlackJoker)
            .expect("standard deck contains the black joker");

        GameState::with_players(board, red, black)
            .expect("a freshly dealt board admits both placements")
    }
}
