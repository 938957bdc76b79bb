use crate::card::{DestinationCard, NUM_DRAWN_DESTINATION_CARDS};

use serde::Serialize;
use smallvec::SmallVec;
use std::cell::Cell;
use std::rc::Rc;
use strum_macros::Display;

/// The three mutually exclusive things a player can do on their turn.
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MoveFamily {
    DestinationCardDraw,
    TransportationCardDraw,
    ConnectionBuild,
}

/// Where a turn is at.
///
/// ```text
/// NotStarted -> DestinationDrawPending -> Completed
/// NotStarted -> TransportationDrawing  -> Completed
/// NotStarted -> Completed
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum TurnProgress {
    NotStarted,
    /// Destination cards were drawn, and the player still has to select which ones to keep.
    DestinationDrawPending {
        offered: SmallVec<[DestinationCard; NUM_DRAWN_DESTINATION_CARDS]>,
    },
    /// One transportation card was drawn, and it was not a face-up wild card.
    TransportationDrawing,
    Completed(MoveFamily),
}

impl TurnProgress {
    /// The move family started this turn, if any.
    pub fn move_family(&self) -> Option<MoveFamily> {
        match self {
            TurnProgress::NotStarted => None,
            TurnProgress::DestinationDrawPending { .. } => Some(MoveFamily::DestinationCardDraw),
            TurnProgress::TransportationDrawing => Some(MoveFamily::TransportationCardDraw),
            TurnProgress::Completed(family) => Some(*family),
        }
    }

    #[inline]
    pub fn is_completed(&self) -> bool {
        matches!(self, TurnProgress::Completed(_))
    }
}

/// Represents all the actions that a player can take.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum PlayerAction {
    /// The first and only player action per turn.
    BuiltConnection,
    /// The first and only player action per turn.
    DrewFaceUpWildCard,
    /// The first or second of two player actions per turn.
    DrewFaceUpCard,
    /// The first or second of two player actions per turn.
    DrewFromDrawPile,
    /// The first action of two player actions per turn.
    /// Must be followed by [`PlayerAction::SelectedDestinationCards`].
    DrewDestinationCards,
    /// The second action of two player actions per turn.
    SelectedDestinationCards,
}

/// Keeps track of actions taken during a given turn.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TurnActions {
    /// For a given turn, a player can take at most two actions.
    pub actions: SmallVec<[PlayerAction; 2]>,
    /// Human-readable description of the corresponding action that was taken by the player.
    /// This is shared with other players, so no private information is in it.
    pub description: SmallVec<[String; 2]>,
}

impl TurnActions {
    pub(crate) fn push(&mut self, action: PlayerAction, description: String) {
        self.actions.push(action);
        self.description.push(description);
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

/// Read-only signal that a turn is over.
///
/// Clones share the same underlying flag, so a controller can keep a handle while the
/// player drives the turn. It goes from `false` to `true` once, and never back.
#[derive(Clone, Debug, Default)]
pub struct TurnCompleted {
    completed: Rc<Cell<bool>>,
}

impl TurnCompleted {
    #[inline]
    pub fn get(&self) -> bool {
        self.completed.get()
    }

    pub(crate) fn mark_completed(&self) {
        self.completed.set(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turn_completed_is_shared_and_monotonic() {
        let signal = TurnCompleted::default();
        let handle = signal.clone();
        assert!(!handle.get());

        signal.mark_completed();
        assert!(handle.get());

        signal.mark_completed();
        assert!(handle.get());
    }

    #[test]
    fn move_family_of_progress() {
        assert_eq!(TurnProgress::NotStarted.move_family(), None);
        assert_eq!(
            TurnProgress::TransportationDrawing.move_family(),
            Some(MoveFamily::TransportationCardDraw)
        );
        assert_eq!(
            TurnProgress::DestinationDrawPending {
                offered: SmallVec::new()
            }
            .move_family(),
            Some(MoveFamily::DestinationCardDraw)
        );
        assert!(TurnProgress::Completed(MoveFamily::ConnectionBuild).is_completed());
        assert!(!TurnProgress::TransportationDrawing.is_completed());
    }

    #[test]
    fn turn_actions_log() {
        let mut turn_actions = TurnActions::default();
        assert!(turn_actions.is_empty());

        turn_actions.push(
            PlayerAction::DrewFromDrawPile,
            String::from("Player 1 drew a card from the draw pile."),
        );

        assert_eq!(turn_actions.actions.as_slice(), &[PlayerAction::DrewFromDrawPile]);
        assert_eq!(turn_actions.description.len(), 1);
        assert_eq!(MoveFamily::ConnectionBuild.to_string(), "connection_build");
    }
}
