use crate::card::CardColor;
use crate::error::{IllegalMove, MoveResult};
use crate::player::PlayerId;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A named stop on the map.
///
/// Two destinations with the same name are the same destination: the display position is
/// ignored for equality and hashing.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Destination {
    name: String,
    /// Number between 0 and 1: where to display the destination horizontally (0 is the far left).
    x: f64,
    /// Number between 0 and 1: where to display the destination vertically (0 is the top).
    y: f64,
}

impl Destination {
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }
}

impl PartialEq for Destination {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Destination {}

impl Hash for Destination {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Identifies a [`Connection`] within one [`MapData`].
#[derive(
    Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub struct ConnectionId(usize);

impl ConnectionId {
    /// Wraps a raw index. Ids that do not point into the map are rejected by every move.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One track between two adjacent destinations.
///
/// There can be multiple "parallel" connections between the same two destinations; each is a
/// separate `Connection` with its own color and owner.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Connection {
    id: ConnectionId,
    /// Start and end are interchangeable: a connection has no direction.
    start: Destination,
    end: Destination,
    /// The `Any` color means that any single color of cards matches.
    color: CardColor,
    /// Analogous to the number of transportation cards and train pieces needed to build it.
    num_segments: u8,
    /// By whom this connection is claimed, if any. Never changes once set.
    owner: Option<PlayerId>,
}

impl Connection {
    #[inline]
    pub fn id(&self) -> ConnectionId {
        self.id
    }

    #[inline]
    pub fn start(&self) -> &Destination {
        &self.start
    }

    #[inline]
    pub fn end(&self) -> &Destination {
        &self.end
    }

    #[inline]
    pub fn color(&self) -> CardColor {
        self.color
    }

    #[inline]
    pub fn num_segments(&self) -> u8 {
        self.num_segments
    }

    #[inline]
    pub fn owner(&self) -> Option<PlayerId> {
        self.owner
    }

    /// Whether this connection links `a` and `b`, in either direction.
    pub fn connects(&self, a: &Destination, b: &Destination) -> bool {
        (self.start == *a && self.end == *b) || (self.start == *b && self.end == *a)
    }

    /// Whether `other` is a different connection between the same pair of destinations.
    pub fn is_parallel_to(&self, other: &Connection) -> bool {
        self.id != other.id && self.connects(&other.start, &other.end)
    }

    /// Whether `destination` is one of the two endpoints.
    pub fn touches(&self, destination: &Destination) -> bool {
        self.start == *destination || self.end == *destination
    }
}

/// The authoritative state of the map for one game.
///
/// Topology never changes; only connection owners are set as players build.
#[derive(Clone, Debug, PartialEq)]
pub struct MapData {
    destinations: Vec<Destination>,
    connections: Vec<Connection>,
}

impl MapData {
    /// Creates a map where every connection is unclaimed.
    ///
    /// Connections are given ids in the order they are provided.
    ///
    /// # Example
    /// ```
    /// use ticket_to_ride_mover::card::CardColor;
    /// use ticket_to_ride_mover::map::{Destination, MapData};
    ///
    /// let denver = Destination::new("Denver", 0.34, 0.39);
    /// let omaha = Destination::new("Omaha", 0.5, 0.32);
    /// let map = MapData::new(
    ///     vec![denver.clone(), omaha.clone()],
    ///     vec![(denver.clone(), omaha.clone(), CardColor::Purple, 4)],
    /// );
    ///
    /// assert_eq!(map.connections().len(), 1);
    /// assert_eq!(map.connections_to_or_from(&denver).count(), 1);
    /// ```
    pub fn new(
        destinations: Vec<Destination>,
        connections: impl IntoIterator<Item = (Destination, Destination, CardColor, u8)>,
    ) -> Self {
        let connections = connections
            .into_iter()
            .enumerate()
            .map(|(index, (start, end, color, num_segments))| Connection {
                id: ConnectionId(index),
                start,
                end,
                color,
                num_segments,
                owner: None,
            })
            .collect();

        Self {
            destinations,
            connections,
        }
    }

    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    pub fn destination(&self, name: &str) -> Option<&Destination> {
        self.destinations
            .iter()
            .find(|destination| destination.name() == name)
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn connection(&self, id: ConnectionId) -> Option<&Connection> {
        self.connections.get(id.0)
    }

    /// All connections that have `destination` as either endpoint.
    pub fn connections_to_or_from<'a>(
        &'a self,
        destination: &'a Destination,
    ) -> impl Iterator<Item = &'a Connection> + 'a {
        self.connections
            .iter()
            .filter(move |connection| connection.touches(destination))
    }

    /// The other connections sharing the same two destinations as `id`.
    ///
    /// Computed from the connection table on every call.
    pub fn parallel_connections(&self, id: ConnectionId) -> impl Iterator<Item = &Connection> {
        let connection = self.connection(id);
        self.connections.iter().filter(move |other| {
            connection.map_or(false, |connection| connection.is_parallel_to(other))
        })
    }

    pub fn connections_owned_by(&self, player: PlayerId) -> impl Iterator<Item = &Connection> {
        self.connections
            .iter()
            .filter(move |connection| connection.owner == Some(player))
    }

    /// Verifies everything the map knows about a claim of `id` by `player`:
    /// the connection exists and is free, no parallel connection forbids it,
    /// and `cards` has the right size and colors.
    ///
    /// Returns the authoritative connection on success.
    /// Whether the player actually holds the cards, or has enough trains, is not checked here.
    pub(crate) fn check_claimable(
        &self,
        id: ConnectionId,
        cards: &[CardColor],
        player: PlayerId,
        num_players: usize,
    ) -> MoveResult<&Connection> {
        let connection = self.connection(id).ok_or_else(|| {
            IllegalMove::new(format!("The selected connection ({}) does not exist.", id))
        })?;
        let (start, end) = (&connection.start, &connection.end);

        if connection.owner.is_some() {
            return Err(IllegalMove::new(format!(
                "The selected connection between {} and {} is already claimed.",
                start, end
            )));
        }

        for parallel_connection in self.parallel_connections(id) {
            match parallel_connection.owner {
                Some(owner) if owner == player => {
                    return Err(IllegalMove::new(format!(
                        "Cannot claim more than one connection between {} and {}.",
                        start, end
                    )));
                }
                // With two players, only one of the parallel connections can ever be claimed.
                Some(_) if num_players == 2 => {
                    return Err(IllegalMove::new(format!(
                        "Another connection is already claimed by someone else between {} and {}.",
                        start, end
                    )));
                }
                _ => {}
            }
        }

        if cards.len() != connection.num_segments as usize {
            return Err(IllegalMove::new(format!(
                "A connection between {} and {} needs {} cards, but {} were provided.",
                start,
                end,
                connection.num_segments,
                cards.len()
            )));
        }

        // All non-wild cards must share one color. If every card is wild, that color is `Any`.
        let mut common_color = CardColor::Any;
        for card in cards {
            if card.is_wild() {
                continue;
            }

            if common_color.is_wild() {
                common_color = *card;
            } else if common_color != *card {
                return Err(IllegalMove::new(format!(
                    "Cannot claim a connection with {} and {} cards.",
                    common_color, card
                )));
            }
        }

        if common_color.is_not_wild()
            && connection.color.is_not_wild()
            && connection.color != common_color
        {
            return Err(IllegalMove::new(format!(
                "Cannot claim a connection of color {} with {} cards.",
                connection.color, common_color
            )));
        }

        Ok(connection)
    }

    /// Marks `id` as owned by `player`. Callers must have gone through [`MapData::check_claimable`].
    pub(crate) fn claim(&mut self, id: ConnectionId, player: PlayerId) {
        if let Some(connection) = self.connections.get_mut(id.0) {
            debug_assert!(connection.owner.is_none());
            connection.owner = Some(player);
        }
    }
}
