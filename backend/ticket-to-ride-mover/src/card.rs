use array_init::array_init;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::repeat;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};
use tracing::trace;

/// Number of transportation cards openly displayed at a time.
pub const NUM_FACE_UP_CARDS: usize = 5;
/// Slot used to draw the top card of the transportation draw pile, right after the face-up slots.
pub const DRAW_PILE_SLOT: usize = NUM_FACE_UP_CARDS;
/// At most this many destination cards are offered by a single draw.
pub const NUM_DRAWN_DESTINATION_CARDS: usize = 3;
/// Every player starts the game with this many transportation cards.
pub const NUM_INITIAL_TRANSPORTATION_CARDS: usize = 4;

const NUM_WILD_CARDS: usize = 14;
const NUM_NON_WILD_CARDS: usize = 12;
const WILD_CARD_LIMIT: usize = 3;
// Bounds redeals when the few cards left keep producing three wild cards face-up.
const MAX_FACE_UP_REDEALS: usize = 8;

/// Represents the different colors of transportation cards, and the color requirement of a connection.
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    EnumIter,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CardColor {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Black,
    White,
    /// The wildcard.
    /// As a card, it matches any color. As a connection color, any single color is accepted.
    Any,
}

impl CardColor {
    /// Every color but the wildcard.
    pub const CONCRETE: [CardColor; 8] = [
        CardColor::Red,
        CardColor::Orange,
        CardColor::Yellow,
        CardColor::Green,
        CardColor::Blue,
        CardColor::Purple,
        CardColor::Black,
        CardColor::White,
    ];

    /// Whether the current color is wild, i.e. matches with any color.
    ///
    /// # Examples:
    /// ```
    /// use ticket_to_ride_mover::card::CardColor;
    ///
    /// let color = CardColor::Black;
    /// assert!(!color.is_wild());
    ///
    /// let wild_color = CardColor::Any;
    /// assert!(wild_color.is_wild());
    /// ```
    #[inline]
    pub fn is_wild(&self) -> bool {
        *self == CardColor::Any
    }

    /// The opposite of `is_wild`.
    #[inline]
    pub fn is_not_wild(&self) -> bool {
        !self.is_wild()
    }
}

/// Encapsulates information about a destination card.
///
/// The two destinations are interchangeable: `Boston - Miami` and `Miami - Boston` are the same card.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DestinationCard {
    /// Names of the two destinations that must be connected to fulfill the card.
    start: String,
    end: String,
    /// How many points are granted once this card is fulfilled.
    points: u8,
}

impl DestinationCard {
    pub fn new(start: impl Into<String>, end: impl Into<String>, points: u8) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            points,
        }
    }

    #[inline]
    pub fn start(&self) -> &str {
        &self.start
    }

    #[inline]
    pub fn end(&self) -> &str {
        &self.end
    }

    #[inline]
    pub fn points(&self) -> u8 {
        self.points
    }

    fn sorted_endpoints(&self) -> (&str, &str) {
        if self.start <= self.end {
            (&self.start, &self.end)
        } else {
            (&self.end, &self.start)
        }
    }
}

impl PartialEq for DestinationCard {
    fn eq(&self, other: &Self) -> bool {
        self.points == other.points && self.sorted_endpoints() == other.sorted_endpoints()
    }
}

impl Eq for DestinationCard {}

impl Hash for DestinationCard {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sorted_endpoints().hash(state);
        self.points.hash(state);
    }
}

/// How many transportation cards of each color a player holds.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct TransportationHand {
    cards: HashMap<CardColor, u16>,
}

impl Default for TransportationHand {
    fn default() -> Self {
        Self::new()
    }
}

impl TransportationHand {
    /// An empty hand, with an entry of zero for every color.
    pub fn new() -> Self {
        Self {
            cards: HashMap::from_iter(CardColor::iter().map(|color| (color, 0))),
        }
    }

    #[inline]
    pub fn count(&self, color: CardColor) -> u16 {
        self.cards.get(&color).copied().unwrap_or(0)
    }

    /// Total number of cards in the hand.
    pub fn total(&self) -> u16 {
        self.cards.values().sum()
    }

    /// Iterates over every color, in declaration order, with its count.
    pub fn iter(&self) -> impl Iterator<Item = (CardColor, u16)> + '_ {
        CardColor::iter().map(move |color| (color, self.count(color)))
    }

    pub(crate) fn add(&mut self, color: CardColor) {
        *self.cards.entry(color).or_insert(0) += 1;
    }

    /// The first color (in declaration order) for which `cards` asks for more than the hand holds,
    /// alongside how many were requested and how many are held.
    pub fn missing(&self, cards: &[CardColor]) -> Option<(CardColor, u16, u16)> {
        let requested = count_per_color(cards);

        CardColor::iter().find_map(|color| {
            let num_requested = requested.get(&color).copied().unwrap_or(0);
            let num_held = self.count(color);
            (num_requested > num_held).then(|| (color, num_requested, num_held))
        })
    }

    /// Per-color multiset containment of `cards` in the hand.
    ///
    /// # Example
    /// ```
    /// use ticket_to_ride_mover::card::{CardColor, TransportationHand};
    ///
    /// let hand = TransportationHand::new();
    /// assert!(hand.contains(&[]));
    /// assert!(!hand.contains(&[CardColor::Red]));
    /// ```
    pub fn contains(&self, cards: &[CardColor]) -> bool {
        self.missing(cards).is_none()
    }

    /// Removes all of `cards` from the hand, or nothing if the hand does not contain them all.
    pub(crate) fn remove(&mut self, cards: &[CardColor]) -> bool {
        if !self.contains(cards) {
            return false;
        }

        for card in cards {
            if let Some(count) = self.cards.get_mut(card) {
                *count -= 1;
            }
        }

        true
    }
}

fn count_per_color(cards: &[CardColor]) -> HashMap<CardColor, u16> {
    let mut counts = HashMap::new();
    for card in cards {
        *counts.entry(*card).or_insert(0) += 1;
    }
    counts
}

/// Entity in charge of dealing as well as shuffling destination and transportation cards.
///
/// The top of the draw pile is the end of `draw_pile`, and the top of the destination deck is the
/// back of `destination_deck`.
pub struct CardDealer {
    face_up_cards: [Option<CardColor>; NUM_FACE_UP_CARDS],
    draw_pile: Vec<CardColor>,
    discard_pile: Vec<CardColor>,
    destination_deck: VecDeque<DestinationCard>,
    rng: StdRng,
}

impl CardDealer {
    /// Creates a new `CardDealer` with all decks shuffled using `rng`, and in a valid state.
    /// This means that the face-up cards do not exceed the limit number of wild cards (3).
    ///
    /// # Example
    /// ```
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    /// use ticket_to_ride_mover::card::{CardDealer, DestinationCard};
    ///
    /// let card_dealer = CardDealer::new(
    ///     vec![DestinationCard::new("Boston", "Miami", 12)],
    ///     StdRng::seed_from_u64(7),
    /// );
    ///
    /// assert_eq!(card_dealer.remaining_destination_cards(), 1);
    /// assert_eq!(card_dealer.remaining_transportation_cards(), 110 - 5);
    /// ```
    pub fn new(destination_cards: Vec<DestinationCard>, rng: StdRng) -> Self {
        let mut all_transportation_cards = Vec::with_capacity(
            NUM_WILD_CARDS + NUM_NON_WILD_CARDS * CardColor::CONCRETE.len(),
        );

        for color in CardColor::iter() {
            let num_cards_per_color = if color.is_wild() {
                NUM_WILD_CARDS
            } else {
                NUM_NON_WILD_CARDS
            };
            all_transportation_cards.extend(repeat(color).take(num_cards_per_color));
        }

        Self::with_decks(all_transportation_cards, destination_cards, rng)
    }

    /// Creates a `CardDealer` from the given cards, shuffling both decks with `rng`
    /// before dealing the face-up cards.
    pub fn with_decks(
        mut transportation_cards: Vec<CardColor>,
        mut destination_cards: Vec<DestinationCard>,
        mut rng: StdRng,
    ) -> Self {
        transportation_cards.shuffle(&mut rng);
        destination_cards.shuffle(&mut rng);

        let mut card_dealer = Self {
            face_up_cards: [None; NUM_FACE_UP_CARDS],
            draw_pile: transportation_cards,
            discard_pile: Vec::new(),
            destination_deck: VecDeque::from(destination_cards),
            rng,
        };

        card_dealer.face_up_cards = array_init(|_| card_dealer.draw_pile.pop());
        card_dealer.maybe_redeal_face_up_cards();

        card_dealer
    }

    /// Creates a `CardDealer` with decks laid out exactly as given, without any shuffling or redealing.
    ///
    /// The last element of `draw_pile` is its top, and the first element of `destination_deck` is its top.
    #[cfg(test)]
    pub(crate) fn stacked(
        face_up_cards: [Option<CardColor>; NUM_FACE_UP_CARDS],
        draw_pile: Vec<CardColor>,
        destination_deck: Vec<DestinationCard>,
        rng: StdRng,
    ) -> Self {
        Self {
            face_up_cards,
            draw_pile,
            discard_pile: Vec::new(),
            destination_deck: destination_deck.into_iter().rev().collect(),
            rng,
        }
    }

    /// The face-up cards. A slot is `None` when it was emptied and nothing was left to refill it.
    #[inline]
    pub fn face_up_cards(&self) -> &[Option<CardColor>] {
        &self.face_up_cards
    }

    /// Number of cards in the transportation draw pile.
    #[inline]
    pub fn remaining_transportation_cards(&self) -> usize {
        self.draw_pile.len()
    }

    #[inline]
    pub fn discarded_transportation_cards(&self) -> usize {
        self.discard_pile.len()
    }

    #[inline]
    pub fn remaining_destination_cards(&self) -> usize {
        self.destination_deck.len()
    }

    /// The card that drawing from `slot` would yield, if any.
    /// Slots `0..5` are the face-up cards, and [`DRAW_PILE_SLOT`] is the top of the draw pile.
    pub(crate) fn peek_transportation_card(&self, slot: usize) -> Option<CardColor> {
        match slot {
            DRAW_PILE_SLOT => self.draw_pile.last().copied(),
            _ => self.face_up_cards.get(slot).copied().flatten(),
        }
    }

    /// Whether any transportation card is left to draw, face-up or from the pile.
    pub fn has_transportation_cards(&self) -> bool {
        !self.draw_pile.is_empty() || self.face_up_cards.iter().any(Option::is_some)
    }

    /// Draws the transportation card at `slot`.
    ///
    /// A face-up slot is replaced with the top of the draw pile, or left empty if the pile is exhausted.
    /// Based on the replacement card, the face-up cards may need to be redealt.
    ///
    /// Returns the drawn card alongside whether the face-up cards were redealt,
    /// or `None` if there is no card at that slot.
    pub(crate) fn draw_transportation_card(&mut self, slot: usize) -> Option<(CardColor, bool)> {
        if slot == DRAW_PILE_SLOT {
            return self.draw_from_pile().map(|card| (card, false));
        }

        let card = self.face_up_cards.get(slot).copied().flatten()?;
        self.face_up_cards[slot] = self.draw_from_pile();

        Some((card, self.maybe_redeal_face_up_cards()))
    }

    /// Draws up to `num_cards` transportation cards from the pile, stopping early if it runs out.
    pub(crate) fn draw_from_pile_many(&mut self, num_cards: usize) -> Vec<CardColor> {
        (0..num_cards).map_while(|_| self.draw_from_pile()).collect()
    }

    /// Draws up to three destination cards from the top of the destination deck, top card first.
    pub(crate) fn draw_destination_cards(
        &mut self,
    ) -> SmallVec<[DestinationCard; NUM_DRAWN_DESTINATION_CARDS]> {
        let mut drawn_destination_cards = SmallVec::new();

        for _ in 0..NUM_DRAWN_DESTINATION_CARDS {
            match self.destination_deck.pop_back() {
                Some(destination_card) => drawn_destination_cards.push(destination_card),
                None => break,
            }
        }

        drawn_destination_cards
    }

    /// Adds the given destination cards to the bottom of the destination deck.
    /// The first card given ends up closest to the top.
    pub(crate) fn return_destination_cards_to_bottom(
        &mut self,
        destination_cards: impl IntoIterator<Item = DestinationCard>,
    ) {
        for destination_card in destination_cards {
            self.destination_deck.push_front(destination_card);
        }
    }

    /// Puts back cards obtained from [`CardDealer::draw_destination_cards`] so that the deck is
    /// exactly as it was before the draw.
    pub(crate) fn restore_destination_cards_to_top(
        &mut self,
        destination_cards: impl DoubleEndedIterator<Item = DestinationCard>,
    ) {
        for destination_card in destination_cards.rev() {
            self.destination_deck.push_back(destination_card);
        }
    }

    /// Adds the given transportation cards to the discard pile.
    ///
    /// If the draw pile is empty, the discard pile is shuffled and becomes the new draw pile.
    pub(crate) fn discard_transportation_cards(&mut self, cards: impl IntoIterator<Item = CardColor>) {
        self.discard_pile.extend(cards);

        self.maybe_swap_discard_pile();
    }

    fn draw_from_pile(&mut self) -> Option<CardColor> {
        let card = self.draw_pile.pop()?;
        self.maybe_swap_discard_pile();

        Some(card)
    }

    fn maybe_swap_discard_pile(&mut self) {
        if !self.draw_pile.is_empty() || self.discard_pile.is_empty() {
            return;
        }

        self.discard_pile.shuffle(&mut self.rng);
        std::mem::swap(&mut self.draw_pile, &mut self.discard_pile);

        trace!(
            num_cards = self.draw_pile.len(),
            "Reshuffled the discard pile into a new draw pile."
        );
    }

    fn should_redeal_face_up_cards(&self) -> bool {
        let num_wild_face_up_cards = self
            .face_up_cards
            .iter()
            .flatten()
            .filter(|card| card.is_wild())
            .count();

        // If there is less than 3 wild cards face-up, then we should not redeal.
        if num_wild_face_up_cards < WILD_CARD_LIMIT {
            return false;
        }

        // Otherwise, redeal as long as there is at least 3 non-wild cards anywhere.
        let num_non_wild_cards = self
            .face_up_cards
            .iter()
            .flatten()
            .chain(&self.draw_pile)
            .chain(&self.discard_pile)
            .filter(|card| card.is_not_wild())
            .count();

        num_non_wild_cards >= WILD_CARD_LIMIT
    }

    fn maybe_redeal_face_up_cards(&mut self) -> bool {
        let mut redealt = false;

        for _ in 0..MAX_FACE_UP_REDEALS {
            if !self.should_redeal_face_up_cards() {
                break;
            }

            let face_up_cards: SmallVec<[CardColor; NUM_FACE_UP_CARDS]> =
                self.face_up_cards.iter_mut().filter_map(Option::take).collect();
            self.discard_transportation_cards(face_up_cards);

            for slot in 0..NUM_FACE_UP_CARDS {
                self.face_up_cards[slot] = self.draw_from_pile();
            }

            trace!(face_up_cards = ?self.face_up_cards, "Redealt the face-up cards.");
            redealt = true;
        }

        redealt
    }

    /// Total number of transportation cards held by the dealer, face-up cards included.
    pub fn num_transportation_cards(&self) -> usize {
        self.draw_pile.len()
            + self.discard_pile.len()
            + self.face_up_cards.iter().flatten().count()
    }
}

// Only sizes are shown: the order of the draw pile and the destination deck is hidden information.
impl fmt::Debug for CardDealer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardDealer")
            .field("face_up_cards", &self.face_up_cards)
            .field("remaining_transportation_cards", &self.draw_pile.len())
            .field("discarded_transportation_cards", &self.discard_pile.len())
            .field("remaining_destination_cards", &self.destination_deck.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use CardColor::*;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn destination_cards() -> Vec<DestinationCard> {
        vec![
            DestinationCard::new("Boston", "Miami", 12),
            DestinationCard::new("Calgary", "Phoenix", 13),
            DestinationCard::new("Denver", "El Paso", 4),
            DestinationCard::new("Seattle", "New York", 22),
        ]
    }

    #[test]
    fn debug_hides_deck_order() {
        let card_dealer = CardDealer::stacked(
            [Some(Red), Some(Any), None, None, None],
            vec![White, Purple],
            destination_cards(),
            rng(),
        );

        let debug = format!("{:?}", card_dealer);
        assert_eq!(
            debug,
            "CardDealer { face_up_cards: [Some(Red), Some(Any), None, None, None], \
             remaining_transportation_cards: 2, discarded_transportation_cards: 0, \
             remaining_destination_cards: 4, .. }"
        );
        assert!(!debug.contains("Purple"));
        assert!(!debug.contains("Boston"));
    }

    #[test]
    fn card_color_serialization() {
        assert_eq!(Any.to_string(), "any");
        assert_eq!(serde_json::to_string(&Purple).unwrap(), "\"purple\"");
        assert_eq!(serde_json::from_str::<CardColor>("\"any\"").unwrap(), Any);
        assert_eq!(CardColor::iter().count(), 9);
        assert!(CardColor::CONCRETE.iter().all(CardColor::is_not_wild));
    }

    #[test]
    fn destination_card_is_unordered() {
        let card = DestinationCard::new("Boston", "Miami", 12);

        assert_eq!(card, DestinationCard::new("Miami", "Boston", 12));
        assert_ne!(card, DestinationCard::new("Boston", "Miami", 11));
        assert_ne!(card, DestinationCard::new("Boston", "Montreal", 12));

        let set: std::collections::HashSet<_> = [
            card.clone(),
            DestinationCard::new("Miami", "Boston", 12),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn hand_add_contains_remove() {
        let mut hand = TransportationHand::new();
        for card in [Red, Red, Any, Blue] {
            hand.add(card);
        }

        assert_eq!(hand.count(Red), 2);
        assert_eq!(hand.count(Green), 0);
        assert_eq!(hand.total(), 4);
        assert!(hand.contains(&[Red, Any, Red]));
        assert!(!hand.contains(&[Red, Red, Red]));
        assert_eq!(hand.missing(&[Blue, Red, Red, Red]), Some((Red, 3, 2)));

        assert!(!hand.remove(&[Red, Green]));
        assert_eq!(hand.total(), 4);

        assert!(hand.remove(&[Red, Any]));
        assert_eq!(hand.count(Red), 1);
        assert_eq!(hand.count(Any), 0);
        assert_eq!(hand.total(), 2);
        assert_eq!(hand.iter().count(), 9);
    }

    #[test]
    fn new_card_dealer_has_all_cards() {
        let card_dealer = CardDealer::new(destination_cards(), rng());

        assert_eq!(card_dealer.num_transportation_cards(), 110);
        assert_eq!(card_dealer.remaining_destination_cards(), 4);
        assert!(card_dealer.face_up_cards().iter().all(Option::is_some));
        assert!(
            card_dealer
                .face_up_cards()
                .iter()
                .flatten()
                .filter(|card| card.is_wild())
                .count()
                < WILD_CARD_LIMIT
        );
    }

    #[test]
    fn same_seed_deals_same_cards() {
        let a = CardDealer::new(destination_cards(), rng());
        let b = CardDealer::new(destination_cards(), rng());

        assert_eq!(a.face_up_cards(), b.face_up_cards());
        assert_eq!(a.draw_pile, b.draw_pile);
        assert_eq!(a.destination_deck, b.destination_deck);
    }

    #[test]
    fn draw_face_up_card_refills_slot() {
        let mut card_dealer = CardDealer::stacked(
            [Some(Red), Some(Blue), Some(Green), Some(Black), Some(White)],
            vec![Orange, Yellow],
            Vec::new(),
            rng(),
        );

        assert_eq!(card_dealer.draw_transportation_card(1), Some((Blue, false)));
        assert_eq!(card_dealer.face_up_cards()[1], Some(Yellow));
        assert_eq!(card_dealer.remaining_transportation_cards(), 1);
    }

    #[test]
    fn draw_face_up_card_with_empty_pile_leaves_slot_empty() {
        let mut card_dealer =
            CardDealer::stacked([Some(Red), None, None, None, None], Vec::new(), Vec::new(), rng());

        assert_eq!(card_dealer.draw_transportation_card(0), Some((Red, false)));
        assert_eq!(card_dealer.face_up_cards()[0], None);
        assert!(!card_dealer.has_transportation_cards());
        assert_eq!(card_dealer.draw_transportation_card(0), None);
        assert_eq!(card_dealer.draw_transportation_card(DRAW_PILE_SLOT), None);
    }

    #[test]
    fn draw_out_of_bounds_slot() {
        let mut card_dealer = CardDealer::new(destination_cards(), rng());

        assert_eq!(card_dealer.peek_transportation_card(6), None);
        assert_eq!(card_dealer.draw_transportation_card(6), None);
        assert_eq!(card_dealer.num_transportation_cards(), 110);
    }

    #[test]
    fn draw_from_pile_swaps_discard_pile_when_empty() {
        let mut card_dealer = CardDealer::stacked(
            [Some(Red), Some(Blue), Some(Green), Some(Black), Some(White)],
            vec![Orange],
            Vec::new(),
            rng(),
        );
        card_dealer.discard_transportation_cards([Purple, Purple]);
        assert_eq!(card_dealer.discarded_transportation_cards(), 2);

        assert_eq!(card_dealer.peek_transportation_card(DRAW_PILE_SLOT), Some(Orange));
        assert_eq!(
            card_dealer.draw_transportation_card(DRAW_PILE_SLOT),
            Some((Orange, false))
        );
        assert_eq!(card_dealer.remaining_transportation_cards(), 2);
        assert_eq!(card_dealer.discarded_transportation_cards(), 0);
    }

    #[test]
    fn three_face_up_wilds_are_redealt() {
        let mut card_dealer = CardDealer::stacked(
            [Some(Any), Some(Any), Some(Red), Some(Blue), Some(Green)],
            vec![Black, White, Orange, Yellow, Purple, Any],
            Vec::new(),
            rng(),
        );

        // The replacement for slot 2 is the third wild card.
        let (card, redealt) = card_dealer.draw_transportation_card(2).unwrap();

        assert_eq!(card, Red);
        assert!(redealt);
        assert_eq!(card_dealer.face_up_cards().iter().flatten().count(), 5);
        assert_eq!(card_dealer.num_transportation_cards(), 10);
    }

    #[test]
    fn three_face_up_wilds_without_enough_non_wilds_are_kept() {
        let mut card_dealer = CardDealer::stacked(
            [Some(Any), Some(Any), Some(Red), None, None],
            vec![Any],
            Vec::new(),
            rng(),
        );

        assert_eq!(card_dealer.draw_transportation_card(2), Some((Red, false)));
        assert_eq!(
            card_dealer.face_up_cards(),
            &[Some(Any), Some(Any), Some(Any), None, None]
        );
    }

    #[test]
    fn destination_cards_drawn_from_top_and_returned_to_bottom() {
        let mut card_dealer =
            CardDealer::stacked([None; 5], Vec::new(), destination_cards(), rng());

        let drawn = card_dealer.draw_destination_cards();
        assert_eq!(drawn.as_slice(), &destination_cards()[..3]);
        assert_eq!(card_dealer.remaining_destination_cards(), 1);

        card_dealer.return_destination_cards_to_bottom(drawn.into_iter().skip(1));
        assert_eq!(card_dealer.remaining_destination_cards(), 3);

        let drawn = card_dealer.draw_destination_cards();
        assert_eq!(
            drawn.as_slice(),
            &[
                destination_cards()[3].clone(),
                destination_cards()[1].clone(),
                destination_cards()[2].clone(),
            ]
        );
    }

    #[test]
    fn destination_draw_with_few_cards_left() {
        let mut card_dealer = CardDealer::stacked(
            [None; 5],
            Vec::new(),
            destination_cards()[..1].to_vec(),
            rng(),
        );

        assert_eq!(card_dealer.draw_destination_cards().len(), 1);
        assert!(card_dealer.draw_destination_cards().is_empty());
    }

    #[test]
    fn restored_destination_cards_are_back_on_top() {
        let mut card_dealer =
            CardDealer::stacked([None; 5], Vec::new(), destination_cards(), rng());

        let drawn = card_dealer.draw_destination_cards();
        card_dealer.restore_destination_cards_to_top(drawn.into_iter());

        assert_eq!(
            card_dealer.destination_deck,
            CardDealer::stacked([None; 5], Vec::new(), destination_cards(), rng()).destination_deck
        );
    }

    #[test]
    fn initial_hand_from_pile() {
        let mut card_dealer = CardDealer::stacked(
            [None; 5],
            vec![Red, Blue, Any],
            Vec::new(),
            rng(),
        );

        assert_eq!(
            card_dealer.draw_from_pile_many(NUM_INITIAL_TRANSPORTATION_CARDS),
            vec![Any, Blue, Red]
        );
    }
}
