use crate::card::{CardColor, CardDealer, NUM_INITIAL_TRANSPORTATION_CARDS};
use crate::definition::{DefinitionError, GameDefinition};
use crate::map::MapData;
use crate::player::{PlayerId, PlayerState, PublicPlayerState};

use rand::rngs::StdRng;
use std::fmt;
use tracing::info;

/// The shared state of one game: the map, the decks, and every player's belongings.
///
/// Everything is readable by anyone, but can only be changed through a [`crate::mover::Mover`].
#[derive(Debug)]
pub struct GameState {
    map: MapData,
    card_dealer: CardDealer,
    players: Vec<PlayerState>,
    is_first_turn: bool,
}

impl GameState {
    /// Sets up a game of `num_players` on the given board.
    ///
    /// Every player receives their train pieces and four transportation cards,
    /// and the game starts on its first turn.
    ///
    /// # Example
    /// ```
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    /// use ticket_to_ride_mover::definition::GameDefinition;
    /// use ticket_to_ride_mover::game_state::GameState;
    ///
    /// let state = GameState::new(&GameDefinition::united_states(), 3, StdRng::seed_from_u64(3)).unwrap();
    ///
    /// assert_eq!(state.num_players(), 3);
    /// assert!(state.is_first_turn());
    /// assert_eq!(state.remaining_destination_cards(), 30);
    /// ```
    pub fn new(
        definition: &GameDefinition,
        num_players: usize,
        rng: StdRng,
    ) -> Result<Self, DefinitionError> {
        definition.validate_for(num_players)?;

        let map = definition.build_map()?;
        let card_dealer = CardDealer::new(definition.destination_cards.clone(), rng);
        let mut state = Self::from_parts(
            map,
            card_dealer,
            num_players,
            definition.initial_trains_per_player,
        );

        for player in &mut state.players {
            for card in state
                .card_dealer
                .draw_from_pile_many(NUM_INITIAL_TRANSPORTATION_CARDS)
            {
                player.hand_mut().add(card);
            }
        }

        info!(
            num_players,
            num_connections = state.map.connections().len(),
            "Set up a new game."
        );

        Ok(state)
    }

    /// Assembles a game on its first turn, where players have empty hands.
    pub(crate) fn from_parts(
        map: MapData,
        card_dealer: CardDealer,
        num_players: usize,
        trains_per_player: u16,
    ) -> Self {
        Self {
            map,
            card_dealer,
            players: (0..num_players)
                .map(|_| PlayerState::new(trains_per_player))
                .collect(),
            is_first_turn: true,
        }
    }

    #[inline]
    pub fn map(&self) -> &MapData {
        &self.map
    }

    #[inline]
    pub fn card_dealer(&self) -> &CardDealer {
        &self.card_dealer
    }

    #[inline]
    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    /// Every player, in turn order.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        (0..self.players.len()).map(PlayerId)
    }

    pub fn player(&self, player: PlayerId) -> Option<&PlayerState> {
        self.players.get(player.0)
    }

    /// Whether this is the first turn of the game, where players may only draw destination cards.
    #[inline]
    pub fn is_first_turn(&self) -> bool {
        self.is_first_turn
    }

    #[inline]
    pub fn remaining_destination_cards(&self) -> usize {
        self.card_dealer.remaining_destination_cards()
    }

    #[inline]
    pub fn remaining_transportation_cards(&self) -> usize {
        self.card_dealer.remaining_transportation_cards()
    }

    #[inline]
    pub fn face_up_cards(&self) -> &[Option<CardColor>] {
        self.card_dealer.face_up_cards()
    }

    /// Transportation cards in the dealer's piles and in every hand.
    pub fn total_transportation_cards(&self) -> usize {
        self.card_dealer.num_transportation_cards()
            + self
                .players
                .iter()
                .map(|player| player.hand().total() as usize)
                .sum::<usize>()
    }

    /// Destination cards in the deck and in every player's hand.
    pub fn total_destination_cards(&self) -> usize {
        self.card_dealer.remaining_destination_cards()
            + self
                .players
                .iter()
                .map(|player| player.destination_cards().len())
                .sum::<usize>()
    }

    /// The game from the perspective of `player`: public information about everyone,
    /// and private information about `player` only.
    /// Only called with a player that was checked to be part of the game.
    pub(crate) fn view(&self, player: PlayerId) -> GameView<'_> {
        GameView {
            state: self,
            player,
        }
    }

    pub(crate) fn set_first_turn(&mut self, is_first_turn: bool) {
        self.is_first_turn = is_first_turn;
    }

    /// Only called with a player that was checked to be part of the game.
    pub(crate) fn player_state(&self, player: PlayerId) -> &PlayerState {
        &self.players[player.0]
    }

    /// Only called with a player that was checked to be part of the game.
    pub(crate) fn player_mut(&mut self, player: PlayerId) -> &mut PlayerState {
        &mut self.players[player.0]
    }

    pub(crate) fn map_mut(&mut self) -> &mut MapData {
        &mut self.map
    }

    pub(crate) fn card_dealer_mut(&mut self) -> &mut CardDealer {
        &mut self.card_dealer
    }
}

/// What a player can see of the game while playing their turn, handed out by [`crate::mover::Mover::state`].
///
/// The draw pile, the destination deck and the hands of other players stay hidden:
///
/// ```compile_fail
/// fn peek(mover: &ticket_to_ride_mover::mover::Mover<'_>) {
///     mover.state().card_dealer();
/// }
/// ```
#[derive(Clone, Copy)]
pub struct GameView<'s> {
    state: &'s GameState,
    player: PlayerId,
}

impl<'s> GameView<'s> {
    /// The player whose perspective this is.
    #[inline]
    pub fn player(&self) -> PlayerId {
        self.player
    }

    #[inline]
    pub fn map(&self) -> &'s MapData {
        &self.state.map
    }

    #[inline]
    pub fn face_up_cards(&self) -> &'s [Option<CardColor>] {
        self.state.card_dealer.face_up_cards()
    }

    #[inline]
    pub fn remaining_transportation_cards(&self) -> usize {
        self.state.remaining_transportation_cards()
    }

    #[inline]
    pub fn discarded_transportation_cards(&self) -> usize {
        self.state.card_dealer.discarded_transportation_cards()
    }

    #[inline]
    pub fn remaining_destination_cards(&self) -> usize {
        self.state.remaining_destination_cards()
    }

    #[inline]
    pub fn num_players(&self) -> usize {
        self.state.num_players()
    }

    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        self.state.player_ids()
    }

    #[inline]
    pub fn is_first_turn(&self) -> bool {
        self.state.is_first_turn()
    }

    /// Hand, destination cards and train pieces of the viewing player.
    pub fn own_state(&self) -> &'s PlayerState {
        self.state.player_state(self.player)
    }

    /// Card counts and train pieces of any player, the viewing one included.
    pub fn public_state(&self, player: PlayerId) -> Option<PublicPlayerState> {
        self.state.player(player).map(PlayerState::public_state)
    }
}

impl fmt::Debug for GameView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameView")
            .field("player", &self.player)
            .field("is_first_turn", &self.is_first_turn())
            .field("face_up_cards", &self.face_up_cards())
            .field("own_state", self.own_state())
            .field(
                "public_states",
                &self
                    .player_ids()
                    .filter_map(|player| self.public_state(player))
                    .collect::<Vec<_>>(),
            )
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn united_states(num_players: usize) -> GameState {
        GameState::new(
            &GameDefinition::united_states(),
            num_players,
            StdRng::seed_from_u64(11),
        )
        .unwrap()
    }

    #[test]
    fn new_game_deals_initial_hands() {
        let state = united_states(4);

        assert_eq!(state.num_players(), 4);
        assert_eq!(
            state.player_ids().collect::<Vec<_>>(),
            vec![PlayerId(0), PlayerId(1), PlayerId(2), PlayerId(3)]
        );
        for player in state.player_ids() {
            let player_state = state.player(player).unwrap();
            assert_eq!(player_state.hand().total(), 4);
            assert_eq!(player_state.trains_remaining(), 45);
            assert!(player_state.destination_cards().is_empty());
        }

        assert_eq!(state.remaining_transportation_cards(), 110 - 5 - 16);
        assert_eq!(state.total_transportation_cards(), 110);
        assert_eq!(state.total_destination_cards(), 30);
        assert!(state.is_first_turn());
        assert!(state.player(PlayerId(4)).is_none());
    }

    #[test]
    fn new_game_with_invalid_player_count() {
        assert!(matches!(
            GameState::new(&GameDefinition::united_states(), 6, StdRng::seed_from_u64(0)),
            Err(DefinitionError::InvalidNumPlayers(6))
        ));
    }

    #[test]
    fn first_turn_flag() {
        let mut state = united_states(2);

        state.set_first_turn(false);
        assert!(!state.is_first_turn());
    }

    #[test]
    fn new_game_map_is_unclaimed() {
        let state = united_states(5);

        assert_eq!(state.map().connections().len(), 100);
        assert!(state
            .map()
            .connections()
            .iter()
            .all(|connection| connection.owner().is_none()));
    }
}
