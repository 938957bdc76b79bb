use crate::card::{DestinationCard, TransportationHand};
use crate::definition::GameDefinition;
use crate::error::MoveResult;
use crate::mover::Mover;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identity of a player, used as a key for hands, train pieces and connection ownership.
#[derive(
    Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub struct PlayerId(pub(crate) usize);

impl PlayerId {
    /// Position of the player in the turn order, starting at 0.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Everything the game tracks about one player.
///
/// Handed out as a shared borrow only: it can be changed by going through a [`Mover`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlayerState {
    hand: TransportationHand,
    destination_cards: Vec<DestinationCard>,
    /// The number of train pieces the player has left.
    /// This is the currency used, alongside transportation cards, to build connections.
    trains_remaining: u16,
}

impl PlayerState {
    pub(crate) fn new(trains: u16) -> Self {
        Self {
            hand: TransportationHand::new(),
            destination_cards: Vec::new(),
            trains_remaining: trains,
        }
    }

    #[inline]
    pub fn hand(&self) -> &TransportationHand {
        &self.hand
    }

    #[inline]
    pub fn destination_cards(&self) -> &[DestinationCard] {
        &self.destination_cards
    }

    #[inline]
    pub fn trains_remaining(&self) -> u16 {
        self.trains_remaining
    }

    /// What every other player can know about this one.
    pub fn public_state(&self) -> PublicPlayerState {
        PublicPlayerState {
            num_transportation_cards: self.hand.total(),
            num_destination_cards: self.destination_cards.len(),
            trains_remaining: self.trains_remaining,
        }
    }

    pub(crate) fn hand_mut(&mut self) -> &mut TransportationHand {
        &mut self.hand
    }

    pub(crate) fn add_destination_cards(
        &mut self,
        destination_cards: impl IntoIterator<Item = DestinationCard>,
    ) {
        self.destination_cards.extend(destination_cards);
    }

    pub(crate) fn use_trains(&mut self, num_trains: u16) {
        self.trains_remaining = self.trains_remaining.saturating_sub(num_trains);
    }
}

/// Information about a player's state that is visible to all players.
///
/// Colors of the cards in hand and the destination cards themselves stay private.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct PublicPlayerState {
    pub num_transportation_cards: u16,
    pub num_destination_cards: usize,
    pub trains_remaining: u16,
}

/// Decision logic for one seat at the table, either a human front-end or an AI.
pub trait Player {
    /// Short human-readable description, used in logs.
    fn description(&self) -> String;

    /// Called once, before the first turn of the game.
    fn initialize(&mut self, _definition: &GameDefinition, _num_players: usize) {}

    /// Plays one full turn through `mover`.
    ///
    /// Must only return `Ok` once [`Mover::turn_completed`] reads true.
    fn execute_move(&mut self, mover: &mut Mover<'_>) -> MoveResult;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::CardColor;

    #[test]
    fn player_id_display_is_one_based() {
        assert_eq!(PlayerId(0).to_string(), "Player 1");
        assert_eq!(PlayerId(4).to_string(), "Player 5");
        assert_eq!(PlayerId(3).index(), 3);
    }

    #[test]
    fn new_player_state() {
        let mut player_state = PlayerState::new(45);

        assert_eq!(player_state.trains_remaining(), 45);
        assert_eq!(player_state.hand().total(), 0);
        assert!(player_state.destination_cards().is_empty());

        player_state.hand_mut().add(CardColor::Red);
        player_state.use_trains(6);
        player_state.add_destination_cards([DestinationCard::new("Denver", "El Paso", 4)]);

        assert_eq!(player_state.trains_remaining(), 39);
        assert_eq!(player_state.hand().count(CardColor::Red), 1);
        assert_eq!(player_state.destination_cards().len(), 1);
    }

    #[test]
    fn public_state_only_has_counts() {
        let mut player_state = PlayerState::new(45);
        player_state.hand_mut().add(CardColor::Red);
        player_state.hand_mut().add(CardColor::Any);
        player_state.use_trains(3);
        player_state.add_destination_cards([DestinationCard::new("Denver", "El Paso", 4)]);

        assert_eq!(
            player_state.public_state(),
            PublicPlayerState {
                num_transportation_cards: 2,
                num_destination_cards: 1,
                trains_remaining: 42,
            }
        );
    }
}
