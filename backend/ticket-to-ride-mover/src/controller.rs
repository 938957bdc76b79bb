use crate::definition::{DefinitionError, GameDefinition};
use crate::error::IllegalMove;
use crate::game_state::GameState;
use crate::mover::Mover;
use crate::player::{Player, PlayerId};
use crate::turn::{TurnActions, TurnProgress};

use rand::rngs::StdRng;
use thiserror::Error;
use tracing::{info, warn};

/// Why a turn could not be played.
#[derive(Debug, Error)]
pub enum ControllerError {
    #[error(transparent)]
    Definition(#[from] DefinitionError),
    #[error(transparent)]
    IllegalMove(#[from] IllegalMove),
    #[error("{0} returned before completing their turn.")]
    TurnNotCompleted(PlayerId),
    #[error("{0} stopped after drawing a single transportation card, and lost the rest of their turn.")]
    TurnForfeited(PlayerId),
}

/// Sequences turns: gives a fresh [`Mover`] to each player in turn, and moves on once their turn is over.
///
/// The whole first round of the game (every player's first turn) is played as the first turn,
/// where only destination cards can be drawn.
///
/// # Example
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use ticket_to_ride_mover::controller::GameController;
/// use ticket_to_ride_mover::definition::GameDefinition;
/// use ticket_to_ride_mover::player::Player;
/// use ticket_to_ride_mover::random_player::RandomPlayer;
///
/// let players: Vec<Box<dyn Player>> = vec![Box::new(RandomPlayer::new(1)), Box::new(RandomPlayer::new(2))];
/// let mut controller =
///     GameController::new(&GameDefinition::united_states(), players, StdRng::seed_from_u64(3)).unwrap();
///
/// controller.play_rounds(3).unwrap();
///
/// assert_eq!(controller.turn(), 6);
/// assert!(!controller.state().is_first_turn());
/// ```
pub struct GameController {
    state: GameState,
    players: Vec<Box<dyn Player>>,
    /// Incremented every time a player finishes their turn.
    turn: usize,
    /// Actions taken by each player during the last turn they played.
    last_turn_actions: Vec<TurnActions>,
}

impl GameController {
    /// Sets up a game with one seat per entry of `players`, in turn order.
    pub fn new(
        definition: &GameDefinition,
        mut players: Vec<Box<dyn Player>>,
        rng: StdRng,
    ) -> Result<Self, ControllerError> {
        let state = GameState::new(definition, players.len(), rng)?;

        for player in &mut players {
            player.initialize(definition, state.num_players());
        }

        info!(
            players = ?players.iter().map(|player| player.description()).collect::<Vec<_>>(),
            "Seated players."
        );

        Ok(Self {
            last_turn_actions: vec![TurnActions::default(); players.len()],
            state,
            players,
            turn: 0,
        })
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Number of turns completed so far.
    #[inline]
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// The player whose turn is next.
    pub fn current_player(&self) -> PlayerId {
        PlayerId(self.turn % self.players.len())
    }

    /// What `player` did during the last turn they played.
    pub fn last_turn_actions(&self, player: PlayerId) -> Option<&TurnActions> {
        self.last_turn_actions.get(player.index())
    }

    /// Lets the current player play their turn.
    ///
    /// A completed turn stands, even if the player then attempted another move.
    /// If nothing was changed, the error is returned and the same player is up next: destination
    /// cards they drew without selecting are put back on the deck. A player that stops after a
    /// single transportation card cannot give it back, so their turn is over and
    /// [`ControllerError::TurnForfeited`] is returned.
    pub fn play_turn(&mut self) -> Result<PlayerId, ControllerError> {
        let player = self.current_player();

        let (outcome, progress, turn_completed, turn_actions) = {
            let mut mover = Mover::new(&mut self.state, player)?;
            let outcome = self.players[player.index()].execute_move(&mut mover);

            (
                outcome,
                mover.progress().clone(),
                mover.turn_completed().clone(),
                mover.take_turn_actions(),
            )
        };

        if turn_completed.get() {
            if let Err(e) = outcome {
                warn!(%player, reason = e.reason(), "Player attempted a move after their turn was over.");
            }
            self.end_turn(player, turn_actions);
            return Ok(player);
        }

        if progress == TurnProgress::TransportationDrawing {
            warn!(%player, "Player stopped after a single transportation card, forfeiting their turn.");
            self.end_turn(player, turn_actions);
            return Err(ControllerError::TurnForfeited(player));
        }

        match outcome {
            Err(e) => {
                warn!(%player, reason = e.reason(), "Player failed to play their turn.");
                Err(e.into())
            }
            Ok(()) => {
                warn!(%player, "Player returned before completing their turn.");
                Err(ControllerError::TurnNotCompleted(player))
            }
        }
    }

    fn end_turn(&mut self, player: PlayerId, turn_actions: TurnActions) {
        info!(%player, turn = self.turn, actions = ?turn_actions.description, "Turn over.");
        self.last_turn_actions[player.index()] = turn_actions;
        self.turn += 1;

        if self.state.is_first_turn() && self.turn % self.players.len() == 0 {
            self.state.set_first_turn(false);
            info!("First round over.");
        }
    }

    /// Plays `num_rounds` full rounds, where every player plays one turn.
    /// Stops at the first turn that is not played in full.
    pub fn play_rounds(&mut self, num_rounds: usize) -> Result<(), ControllerError> {
        for _ in 0..num_rounds * self.players.len() {
            self.play_turn()?;
        }

        Ok(())
    }
}
