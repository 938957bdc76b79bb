use crate::card::{CardColor, DestinationCard, DRAW_PILE_SLOT};
use crate::error::{IllegalMove, MoveResult};
use crate::game_state::{GameState, GameView};
use crate::map::{Connection, ConnectionId};
use crate::player::{PlayerId, PlayerState};
use crate::selection::DestinationCardSelection;
use crate::turn::{MoveFamily, PlayerAction, TurnActions, TurnCompleted, TurnProgress};

use std::fmt;
use tracing::{debug, info};

/// At most this many destination cards are reported as drawable, see [`Mover::num_destination_cards_drawable`].
const MAX_DESTINATION_CARDS_DRAWABLE: usize = 2;

/// Validates and performs every move of one player during one turn.
///
/// A fresh `Mover` is created for every turn. Each kind of move has a `can_*` predicate, useful to
/// present the available options or to explore moves in an AI, and a method executing it which fails
/// with an [`IllegalMove`] exactly when the predicate is false. A rejected move changes nothing.
///
/// Dropping a `Mover` while destination cards are waiting to be selected puts them back on top of the
/// destination deck, as if they were never drawn.
///
/// # Example
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use ticket_to_ride_mover::definition::GameDefinition;
/// use ticket_to_ride_mover::game_state::GameState;
/// use ticket_to_ride_mover::mover::Mover;
///
/// let mut state = GameState::new(&GameDefinition::united_states(), 2, StdRng::seed_from_u64(5)).unwrap();
/// let player = state.player_ids().next().unwrap();
/// let mut mover = Mover::new(&mut state, player).unwrap();
///
/// // On the first turn, only destination cards can be drawn, and at least two must be kept.
/// assert!(!mover.can_draw_transportation_card(5));
/// assert_eq!(mover.num_destination_cards_drawable(), 2);
///
/// let mut selection = mover.begin_destination_card_draw().unwrap();
/// let options = selection.options().to_vec();
/// assert!(!selection.can_select(&options[..1]));
/// selection.select(&options[..2]).unwrap();
///
/// assert!(mover.turn_completed().get());
/// ```
pub struct Mover<'a> {
    state: &'a mut GameState,
    player: PlayerId,
    progress: TurnProgress,
    /// Set when the first transportation card of the turn was a face-up wild card.
    drew_face_up_wild_card: bool,
    turn_completed: TurnCompleted,
    turn_actions: TurnActions,
}

impl<'a> Mover<'a> {
    /// Starts the turn of `player`.
    pub fn new(state: &'a mut GameState, player: PlayerId) -> MoveResult<Self> {
        if state.player(player).is_none() {
            return Err(IllegalMove::new(format!(
                "{} is not part of this game.",
                player
            )));
        }

        Ok(Self {
            state,
            player,
            progress: TurnProgress::NotStarted,
            drew_face_up_wild_card: false,
            turn_completed: TurnCompleted::default(),
            turn_actions: TurnActions::default(),
        })
    }

    /// The player whose turn it is.
    #[inline]
    pub fn player(&self) -> PlayerId {
        self.player
    }

    /// What the player can see of the game: everything public, and their own cards.
    #[inline]
    pub fn state(&self) -> GameView<'_> {
        self.state.view(self.player)
    }

    /// Read-only view of the acting player's hand, destination cards and train pieces.
    pub fn player_state(&self) -> &PlayerState {
        self.state.player_state(self.player)
    }

    /// Which move was started this turn, and how far along it is.
    #[inline]
    pub fn progress(&self) -> &TurnProgress {
        &self.progress
    }

    /// Actions taken so far this turn, with their public descriptions.
    #[inline]
    pub fn turn_actions(&self) -> &TurnActions {
        &self.turn_actions
    }

    /// Signal that becomes true once the turn is over, and stays true.
    ///
    /// Clone it to keep observing the turn after handing the mover to a player.
    #[inline]
    pub fn turn_completed(&self) -> &TurnCompleted {
        &self.turn_completed
    }

    /// How many destination cards can be drawn: 2 if at least two are left in the deck,
    /// 1 if only one is left, and 0 if none are left or if a move was already started this turn.
    ///
    /// Even though this reports at most 2, a draw offers up to three cards.
    pub fn num_destination_cards_drawable(&self) -> usize {
        if self.progress != TurnProgress::NotStarted {
            return 0;
        }

        self.state
            .remaining_destination_cards()
            .min(MAX_DESTINATION_CARDS_DRAWABLE)
    }

    fn check_destination_card_draw(&self) -> MoveResult {
        self.check_no_move_started("draw destination cards")?;

        if self.state.remaining_destination_cards() == 0 {
            return Err(IllegalMove::new("There are no destination cards left to draw."));
        }

        Ok(())
    }

    /// Draws up to three destination cards, and returns the selection through which the player
    /// decides which ones to keep. The turn is only completed once the selection is made.
    pub fn begin_destination_card_draw(&mut self) -> MoveResult<DestinationCardSelection<'_, 'a>> {
        self.log_rejection(self.check_destination_card_draw())?;

        let offered = self.state.card_dealer_mut().draw_destination_cards();
        let description = format!(
            "{} drew {} destination cards.",
            self.player,
            offered.len()
        );
        self.record_action(PlayerAction::DrewDestinationCards, description);
        self.progress = TurnProgress::DestinationDrawPending { offered };

        DestinationCardSelection::new(self).ok_or_else(|| {
            IllegalMove::new("Destination cards were drawn, but cannot be selected.")
        })
    }

    /// Gives back the selection of destination cards drawn earlier this turn, if they were not selected yet.
    pub fn destination_card_selection(&mut self) -> Option<DestinationCardSelection<'_, 'a>> {
        DestinationCardSelection::new(self)
    }

    fn check_transportation_card_draw(&self, slot: usize) -> MoveResult<CardColor> {
        if self.state.is_first_turn() {
            return Err(IllegalMove::new(
                "Cannot draw transportation cards on the first turn of the game.",
            ));
        }

        match self.progress {
            TurnProgress::NotStarted | TurnProgress::TransportationDrawing => {}
            TurnProgress::Completed(MoveFamily::TransportationCardDraw) => {
                return Err(
                    if self.drew_face_up_wild_card {
                        IllegalMove::new(
                            "Cannot draw another transportation card after drawing a face-up wild card.",
                        )
                    } else {
                        IllegalMove::new("Cannot draw more than two transportation cards per turn.")
                    },
                );
            }
            _ => self.check_no_move_started("draw a transportation card")?,
        }

        if slot > DRAW_PILE_SLOT {
            return Err(IllegalMove::new(format!(
                "Transportation cards can only be drawn from slots 0 to {}, not {}.",
                DRAW_PILE_SLOT, slot
            )));
        }

        self.state
            .card_dealer()
            .peek_transportation_card(slot)
            .ok_or_else(|| {
                if slot == DRAW_PILE_SLOT {
                    IllegalMove::new("There are no transportation cards left in the draw pile.")
                } else {
                    IllegalMove::new(format!("There is no face-up card in slot {}.", slot))
                }
            })
    }

    /// Whether the card at `slot` can be drawn: slots 0 to 4 are the face-up cards, and slot 5 is
    /// the top of the draw pile.
    pub fn can_draw_transportation_card(&self, slot: usize) -> bool {
        self.check_transportation_card_draw(slot).is_ok()
    }

    /// Draws the card at `slot` into the player's hand, and returns its color.
    ///
    /// A face-up wild card ends the turn on its own. Otherwise, the turn ends after a second draw,
    /// or right away if no card is left to draw.
    pub fn draw_transportation_card(&mut self, slot: usize) -> MoveResult<CardColor> {
        self.log_rejection(self.check_transportation_card_draw(slot))?;

        let (card, redealt) = self
            .state
            .card_dealer_mut()
            .draw_transportation_card(slot)
            .ok_or_else(|| IllegalMove::new(format!("There is no card in slot {}.", slot)))?;
        self.state.player_mut(self.player).hand_mut().add(card);

        let is_face_up = slot != DRAW_PILE_SLOT;
        let (action, description) = if is_face_up && card.is_wild() {
            (
                PlayerAction::DrewFaceUpWildCard,
                format!("{} drew a wild card from the face-up cards.", self.player),
            )
        } else if is_face_up {
            (
                PlayerAction::DrewFaceUpCard,
                format!("{} drew a {} card from the face-up cards.", self.player, card),
            )
        } else {
            (
                PlayerAction::DrewFromDrawPile,
                format!("{} drew a card from the draw pile.", self.player),
            )
        };
        if redealt {
            debug!(player = %self.player, "Face-up cards were redealt after a draw.");
        }
        self.record_action(action, description);

        let is_turn_over = self.progress == TurnProgress::TransportationDrawing
            || action == PlayerAction::DrewFaceUpWildCard
            || !self.state.card_dealer().has_transportation_cards();
        if action == PlayerAction::DrewFaceUpWildCard && self.progress == TurnProgress::NotStarted {
            self.drew_face_up_wild_card = true;
        }
        if is_turn_over {
            self.complete_turn(MoveFamily::TransportationCardDraw);
        } else {
            self.progress = TurnProgress::TransportationDrawing;
        }

        Ok(card)
    }

    fn check_connection_build(
        &self,
        connection: ConnectionId,
        cards: &[CardColor],
    ) -> MoveResult<&Connection> {
        if self.state.is_first_turn() {
            return Err(IllegalMove::new(
                "Cannot build a connection on the first turn of the game.",
            ));
        }
        self.check_no_move_started("build a connection")?;

        let connection = self.state.map().check_claimable(
            connection,
            cards,
            self.player,
            self.state.num_players(),
        )?;

        let player_state = self.player_state();
        if let Some((color, num_requested, num_held)) = player_state.hand().missing(cards) {
            return Err(IllegalMove::new(format!(
                "Cannot build a connection using {} {} cards, whilst having only {}.",
                num_requested, color, num_held
            )));
        }

        if player_state.trains_remaining() < connection.num_segments() as u16 {
            return Err(IllegalMove::new(format!(
                "Cannot build a connection of length {} with only {} train pieces left.",
                connection.num_segments(),
                player_state.trains_remaining()
            )));
        }

        Ok(connection)
    }

    /// Whether `connection` can be built using exactly `cards` from the player's hand.
    pub fn can_build_connection(&self, connection: ConnectionId, cards: &[CardColor]) -> bool {
        self.check_connection_build(connection, cards).is_ok()
    }

    /// Claims `connection` for the player, spending `cards` and as many train pieces as the connection
    /// has segments. This completes the turn.
    pub fn build_connection(&mut self, connection: ConnectionId, cards: &[CardColor]) -> MoveResult {
        let (num_segments, description) = {
            let connection = self.log_rejection(self.check_connection_build(connection, cards))?;
            (
                connection.num_segments(),
                format!(
                    "{} built the connection between {} and {} ({} {}).",
                    self.player,
                    connection.start(),
                    connection.end(),
                    connection.num_segments(),
                    connection.color()
                ),
            )
        };

        self.state.map_mut().claim(connection, self.player);
        let player_state = self.state.player_mut(self.player);
        player_state.hand_mut().remove(cards);
        player_state.use_trains(num_segments as u16);
        self.state
            .card_dealer_mut()
            .discard_transportation_cards(cards.iter().copied());

        self.record_action(PlayerAction::BuiltConnection, description);
        self.complete_turn(MoveFamily::ConnectionBuild);

        Ok(())
    }

    /// Hands over the log of this turn, leaving an empty one behind.
    pub(crate) fn take_turn_actions(&mut self) -> TurnActions {
        std::mem::take(&mut self.turn_actions)
    }

    /// Keeps `kept` and returns the rest of the offered cards to the bottom of the deck.
    /// Only called by a selection that validated `kept` against the pending draw.
    pub(crate) fn finish_destination_card_draw(
        &mut self,
        kept: Vec<DestinationCard>,
        returned: Vec<DestinationCard>,
    ) {
        let description = format!(
            "{} kept {} destination cards.",
            self.player,
            kept.len()
        );

        self.state
            .player_mut(self.player)
            .add_destination_cards(kept);
        self.state
            .card_dealer_mut()
            .return_destination_cards_to_bottom(returned);

        self.record_action(PlayerAction::SelectedDestinationCards, description);
        self.complete_turn(MoveFamily::DestinationCardDraw);
    }

    fn check_no_move_started(&self, attempted_move: &str) -> MoveResult {
        match self.progress {
            TurnProgress::NotStarted => Ok(()),
            TurnProgress::Completed(_) => Err(IllegalMove::new(format!(
                "Cannot {} after the turn is over.",
                attempted_move
            ))),
            _ => Err(IllegalMove::new(format!(
                "Cannot {} after having started another move this turn.",
                attempted_move
            ))),
        }
    }

    fn record_action(&mut self, action: PlayerAction, description: String) {
        info!(player = %self.player, ?action, "{}", description);
        self.turn_actions.push(action, description);
    }

    fn complete_turn(&mut self, move_family: MoveFamily) {
        self.progress = TurnProgress::Completed(move_family);
        self.turn_completed.mark_completed();
        info!(player = %self.player, %move_family, "Turn completed.");
    }

    pub(crate) fn log_rejection<T>(&self, result: MoveResult<T>) -> MoveResult<T> {
        if let Err(e) = &result {
            debug!(player = %self.player, reason = e.reason(), "Rejected an illegal move.");
        }
        result
    }
}

// The game state is left out: it holds the hands of the other players.
impl fmt::Debug for Mover<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mover")
            .field("player", &self.player)
            .field("progress", &self.progress)
            .field("turn_completed", &self.turn_completed.get())
            .field("turn_actions", &self.turn_actions)
            .finish_non_exhaustive()
    }
}

impl Drop for Mover<'_> {
    fn drop(&mut self) {
        if let TurnProgress::DestinationDrawPending { offered } =
            std::mem::replace(&mut self.progress, TurnProgress::NotStarted)
        {
            debug!(
                player = %self.player,
                num_cards = offered.len(),
                "Abandoned a destination card draw, putting the cards back on top of the deck."
            );
            self.state
                .card_dealer_mut()
                .restore_destination_cards_to_top(offered.into_iter());
        }
    }
}
