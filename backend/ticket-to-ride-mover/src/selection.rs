use crate::card::{DestinationCard, NUM_DRAWN_DESTINATION_CARDS};
use crate::error::{IllegalMove, MoveResult};
use crate::mover::Mover;
use crate::turn::TurnProgress;

use smallvec::SmallVec;
use std::collections::HashSet;

/// Second half of a destination card draw: choosing which of the drawn cards to keep.
///
/// The options are copied when the selection is created, so nothing a player does with them can
/// change what was actually drawn. Selecting completes the turn of the owning [`Mover`].
#[derive(Debug)]
pub struct DestinationCardSelection<'m, 'a> {
    mover: &'m mut Mover<'a>,
    options: SmallVec<[DestinationCard; NUM_DRAWN_DESTINATION_CARDS]>,
}

impl<'m, 'a> DestinationCardSelection<'m, 'a> {
    /// Only exists while the mover has drawn destination cards that were not selected yet.
    pub(crate) fn new(mover: &'m mut Mover<'a>) -> Option<Self> {
        let options = match mover.progress() {
            TurnProgress::DestinationDrawPending { offered } => offered.clone(),
            _ => return None,
        };

        Some(Self { mover, options })
    }

    /// The destination cards that were drawn: normally three, but fewer if the deck ran low.
    #[inline]
    pub fn options(&self) -> &[DestinationCard] {
        &self.options
    }

    fn check_selection<'c>(
        &self,
        cards: &'c [DestinationCard],
    ) -> MoveResult<HashSet<&'c DestinationCard>> {
        if !matches!(
            self.mover.progress(),
            TurnProgress::DestinationDrawPending { .. }
        ) {
            return Err(IllegalMove::new(
                "The destination cards drawn this turn were already selected.",
            ));
        }

        let cards_to_keep: HashSet<_> = cards.iter().collect();

        if cards_to_keep.is_empty() {
            return Err(IllegalMove::new("At least one destination card must be kept."));
        }

        if let Some(card) = cards.iter().find(|card| !self.options.contains(card)) {
            return Err(IllegalMove::new(format!(
                "Cannot keep the destination card between {} and {}, which was not offered.",
                card.start(),
                card.end()
            )));
        }

        if self.mover.state().is_first_turn() && cards_to_keep.len() < 2 {
            return Err(IllegalMove::new(
                "At least two destination cards must be kept on the first turn of the game.",
            ));
        }

        Ok(cards_to_keep)
    }

    /// Whether `cards` can be kept. Duplicates are ignored.
    pub fn can_select(&self, cards: &[DestinationCard]) -> bool {
        self.check_selection(cards).is_ok()
    }

    /// Keeps `cards`, returns the other options to the bottom of the destination deck in the order
    /// they were drawn, and completes the turn.
    pub fn select(&mut self, cards: &[DestinationCard]) -> MoveResult {
        let cards_to_keep = self.mover.log_rejection(self.check_selection(cards))?;

        let (kept, returned): (Vec<_>, Vec<_>) = self
            .options
            .iter()
            .cloned()
            .partition(|card| cards_to_keep.contains(card));

        self.mover.finish_destination_card_draw(kept, returned);

        Ok(())
    }
}
