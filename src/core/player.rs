//! Player identification and the two-player roster.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::card::CardType;
use super::position::Position;

/// Identifier for one of the two players, 0 or 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a player ID, asserting it is 0 or 1.
    #[must_use]
    pub fn new(id: u8) -> Self {
        assert!(id < 2, "player id must be 0 or 1");
        Self(id)
    }

    /// Raw 0-based index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }

    /// Both player IDs.
    pub fn both() -> impl Iterator<Item = PlayerId> {
        [PlayerId(0), PlayerId(1)].into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// One player's piece: where it stands and the cell it began on.
///
/// `position` is `None` until the player has been placed during setup.
/// The recorded position is the authoritative occupancy source; board
/// occupant flags mirror it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub position: Option<Position>,
    pub starting_card: CardType,
}

impl Player {
    /// An unplaced player.
    #[must_use]
    pub const fn unplaced(id: PlayerId, starting_card: CardType) -> Self {
        Self {
            id,
            position: None,
            starting_card,
        }
    }
}

/// Fixed two-slot roster indexed by [`PlayerId`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Players {
    data: [Player; 2],
}

impl Players {
    /// Build a roster from both players, in ID order.
    ///
    /// Panics if the players' IDs are not 0 and 1 respectively.
    #[must_use]
    pub fn new(first: Player, second: Player) -> Self {
        assert!(
            first.id == PlayerId(0) && second.id == PlayerId(1),
            "roster slots must match player ids"
        );
        Self {
            data: [first, second],
        }
    }

    /// Iterate over both players.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.data.iter()
    }

    /// The player standing on `position`, if any.
    #[must_use]
    pub fn occupant_of(&self, position: Position) -> Option<PlayerId> {
        self.data
            .iter()
            .find(|p| p.position == Some(position))
            .map(|p| p.id)
    }
}

impl Index<PlayerId> for Players {
    type Output = Player;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl IndexMut<PlayerId> for Players {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Players {
        Players::new(
            Player::unplaced(PlayerId(0), CardType::RedJoker),
            Player::unplaced(PlayerId(1), CardType::BlackJoker),
        )
    }

    #[test]
    fn test_player_id_basics() {
        assert_eq!(PlayerId::new(0).index(), 0);
        assert_eq!(PlayerId::new(1).opponent(), PlayerId::new(0));
        assert_eq!(PlayerId::new(0).opponent(), PlayerId::new(1));
        assert_eq!(format!("{}", PlayerId::new(1)), "Player 1");
    }

    #[test]
    #[should_panic(expected = "player id must be 0 or 1")]
    fn test_player_id_out_of_range() {
        let _ = PlayerId::new(2);
    }

    #[test]
    fn test_both() {
        let ids: Vec<_> = PlayerId::both().collect();
        assert_eq!(ids, vec![PlayerId(0), PlayerId(1)]);
    }

    #[test]
    fn test_roster_indexing() {
        let mut players = roster();
        assert_eq!(players[PlayerId(0)].starting_card, CardType::RedJoker);

        players[PlayerId(1)].position = Some(Position::new(2, 2));
        assert_eq!(players[PlayerId(1)].position, Some(Position::new(2, 2)));
    }

    #[test]
    fn test_occupant_of() {
        let mut players = roster();
        assert_eq!(players.occupant_of(Position::new(0, 0)), None);

        players[PlayerId(0)].position = Some(Position::new(0, 0));
        assert_eq!(players.occupant_of(Position::new(0, 0)), Some(PlayerId(0)));
        assert_eq!(players.occupant_of(Position::new(1, 1)), None);
    }

    #[test]
    #[should_panic(expected = "roster slots must match player ids")]
    fn test_roster_slot_mismatch() {
        let _ = Players::new(
            Player::unplaced(PlayerId(1), CardType::RedJoker),
            Player::unplaced(PlayerId(0), CardType::BlackJoker),
        );
    }
}
