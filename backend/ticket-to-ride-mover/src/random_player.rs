use crate::card::{CardColor, TransportationHand, DRAW_PILE_SLOT};
use crate::error::{IllegalMove, MoveResult};
use crate::map::{Connection, ConnectionId};
use crate::mover::Mover;
use crate::player::Player;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::iter::repeat;
use std::slice;
use tracing::debug;

/// One of the moves a player can start a turn with.
#[derive(Clone, Debug, PartialEq)]
enum Candidate {
    BuildConnection(ConnectionId, Vec<CardColor>),
    DrawTransportationCards,
    DrawDestinationCards,
}

/// An AI that picks uniformly among the legal moves of its turn.
///
/// Only ever uses the `can_*` predicates of the [`Mover`] to find out what is legal.
#[derive(Debug)]
pub struct RandomPlayer {
    seed: u64,
    rng: StdRng,
}

impl RandomPlayer {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn candidates(mover: &Mover<'_>) -> Vec<Candidate> {
        let hand = mover.player_state().hand();
        let mut candidates: Vec<_> = mover
            .state()
            .map()
            .connections()
            .iter()
            .filter_map(|connection| {
                let cards = cards_for(connection, hand)?;
                mover
                    .can_build_connection(connection.id(), &cards)
                    .then(|| Candidate::BuildConnection(connection.id(), cards))
            })
            .collect();

        if (0..=DRAW_PILE_SLOT).any(|slot| mover.can_draw_transportation_card(slot)) {
            candidates.push(Candidate::DrawTransportationCards);
        }

        if mover.num_destination_cards_drawable() > 0 {
            candidates.push(Candidate::DrawDestinationCards);
        }

        candidates
    }

    fn draw_transportation_cards(&mut self, mover: &mut Mover<'_>) -> MoveResult {
        while !mover.turn_completed().get() {
            let slots: Vec<_> = (0..=DRAW_PILE_SLOT)
                .filter(|slot| mover.can_draw_transportation_card(*slot))
                .collect();
            let slot = slots.choose(&mut self.rng).copied().ok_or_else(|| {
                IllegalMove::new("No transportation card is left to draw.")
            })?;

            mover.draw_transportation_card(slot)?;
        }

        Ok(())
    }

    fn draw_destination_cards(&mut self, mover: &mut Mover<'_>) -> MoveResult {
        let is_first_turn = mover.state().is_first_turn();
        let mut selection = mover.begin_destination_card_draw()?;
        let options = selection.options();

        let min_to_keep = if is_first_turn { 2 } else { 1 };
        let num_to_keep = self
            .rng
            .gen_range(min_to_keep.min(options.len())..=options.len());
        let cards_to_keep: Vec<_> = options
            .choose_multiple(&mut self.rng, num_to_keep)
            .cloned()
            .collect();

        selection.select(&cards_to_keep)
    }
}

impl Player for RandomPlayer {
    fn description(&self) -> String {
        format!("Random player (seed {})", self.seed)
    }

    fn execute_move(&mut self, mover: &mut Mover<'_>) -> MoveResult {
        let candidates = Self::candidates(mover);
        let candidate = candidates
            .choose(&mut self.rng)
            .cloned()
            .ok_or_else(|| IllegalMove::new(format!("{} has no legal move left.", mover.player())))?;

        debug!(player = %mover.player(), ?candidate, "Random player picked a move.");

        match candidate {
            Candidate::BuildConnection(connection, cards) => {
                mover.build_connection(connection, &cards)
            }
            Candidate::DrawTransportationCards => self.draw_transportation_cards(mover),
            Candidate::DrawDestinationCards => self.draw_destination_cards(mover),
        }
    }
}

/// Cards from `hand` that could build `connection`: as many cards of one color as possible,
/// topped up with wild cards.
fn cards_for(connection: &Connection, hand: &TransportationHand) -> Option<Vec<CardColor>> {
    let needed = connection.num_segments() as u16;
    let num_wild_cards = hand.count(CardColor::Any);

    let connection_color = connection.color();
    let colors = if connection_color.is_wild() {
        &CardColor::CONCRETE[..]
    } else {
        slice::from_ref(&connection_color)
    };

    let best_color = colors
        .iter()
        .copied()
        .filter(|color| hand.count(*color) + num_wild_cards >= needed)
        .max_by_key(|color| hand.count(*color));

    match best_color {
        Some(color) => {
            let num_colored_cards = hand.count(color).min(needed);
            Some(
                repeat(color)
                    .take(num_colored_cards as usize)
                    .chain(repeat(CardColor::Any).take((needed - num_colored_cards) as usize))
                    .collect(),
            )
        }
        None if num_wild_cards >= needed => Some(vec![CardColor::Any; needed as usize]),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::CardColor::*;
    use crate::map::MapData;
    use crate::mover::tests::{game_state, DENVER_KANSAS_CITY_BLACK, OMAHA_CHICAGO_GREY};
    use crate::player::PlayerId;
    use crate::turn::MoveFamily;

    fn hand(cards: &[CardColor]) -> TransportationHand {
        let mut hand = TransportationHand::new();
        for card in cards {
            hand.add(*card);
        }
        hand
    }

    fn connection(map: &MapData, id: ConnectionId) -> &Connection {
        map.connection(id).unwrap()
    }

    #[test]
    fn cards_for_colored_connection() {
        let state = game_state(3, false);
        let black = connection(state.map(), DENVER_KANSAS_CITY_BLACK);

        assert_eq!(
            cards_for(black, &hand(&[Black, Black, Any, Any, Red])),
            Some(vec![Black, Black, Any, Any])
        );
        assert_eq!(cards_for(black, &hand(&[Black, Any, Red, Red])), None);
        assert_eq!(cards_for(black, &hand(&[Any; 4])), Some(vec![Any; 4]));
    }

    #[test]
    fn cards_for_grey_connection() {
        let state = game_state(3, false);
        let grey = connection(state.map(), OMAHA_CHICAGO_GREY);

        assert_eq!(
            cards_for(grey, &hand(&[Blue, Red, Red, Any])),
            Some(vec![Red, Red, Any])
        );
        assert_eq!(cards_for(grey, &hand(&[Blue, Red, Green])), None);
    }

    #[test]
    fn first_turn_keeps_at_least_two_destination_cards() {
        for seed in 0..20 {
            let mut state = game_state(3, true);
            let mut mover = Mover::new(&mut state, PlayerId(0)).unwrap();

            RandomPlayer::new(seed).execute_move(&mut mover).unwrap();

            assert!(mover.turn_completed().get());
            assert!(mover.player_state().destination_cards().len() >= 2);
        }
    }

    #[test]
    fn random_player_completes_its_turn() {
        let mut families = Vec::new();
        for seed in 0..60 {
            let mut state = game_state(3, false);
            let mut mover = Mover::new(&mut state, PlayerId(0)).unwrap();

            RandomPlayer::new(seed).execute_move(&mut mover).unwrap();

            assert!(mover.turn_completed().get());
            families.extend(mover.progress().move_family());
        }

        assert!(families.contains(&MoveFamily::ConnectionBuild));
        assert!(families.contains(&MoveFamily::TransportationCardDraw));
        assert!(families.contains(&MoveFamily::DestinationCardDraw));
    }

    #[test]
    fn description_includes_seed() {
        assert_eq!(RandomPlayer::new(7).description(), "Random player (seed 7)");
    }
}
