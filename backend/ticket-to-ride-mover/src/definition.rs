use crate::card::{CardColor, DestinationCard, NUM_DRAWN_DESTINATION_CARDS};
use crate::map::{Destination, MapData};
use crate::united_states;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::ops::RangeInclusive;
use thiserror::Error;

/// Every player starts the game with 45 train pieces, unless configured otherwise.
pub const DEFAULT_INITIAL_TRAINS_PER_PLAYER: u16 = 45;
/// How many players can sit at the table.
pub const NUM_PLAYERS: RangeInclusive<usize> = 2..=5;

/// Why a [`GameDefinition`] cannot be used to set up a game.
#[derive(Debug, Error)]
pub enum DefinitionError {
    #[error("Could not parse the game definition: {0}")]
    Json(#[from] serde_json::Error),
    #[error("A game definition needs at least one destination.")]
    NoDestinations,
    #[error("The destination {0} is defined more than once.")]
    DuplicateDestination(String),
    #[error("The destination {0} is referenced, but never defined.")]
    UnknownDestination(String),
    #[error("The connection between {start} and {end} must have at least one segment.")]
    NoSegments { start: String, end: String },
    #[error("A game with {num_players} players needs at least {needed} destination cards, but only {available} are defined.")]
    NotEnoughDestinationCards {
        num_players: usize,
        needed: usize,
        available: usize,
    },
    #[error("A game must have between 2 and 5 players, not {0}.")]
    InvalidNumPlayers(usize),
}

/// A connection as written in a game definition, referring to destinations by name.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ConnectionDefinition {
    pub start: String,
    pub end: String,
    pub color: CardColor,
    pub num_segments: u8,
}

/// Everything needed to set up a game: the board and the destination tickets.
///
/// # Example
/// ```
/// use ticket_to_ride_mover::definition::GameDefinition;
///
/// let definition = GameDefinition::from_json(r#"{
///     "destinations": [
///         { "name": "Denver", "x": 0.34, "y": 0.45 },
///         { "name": "Omaha", "x": 0.5, "y": 0.36 }
///     ],
///     "connections": [
///         { "start": "Denver", "end": "Omaha", "color": "purple", "num_segments": 4 }
///     ],
///     "destination_cards": []
/// }"#).unwrap();
///
/// assert_eq!(definition.initial_trains_per_player, 45);
/// assert_eq!(definition.build_map().unwrap().connections().len(), 1);
/// ```
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct GameDefinition {
    #[serde(default = "default_initial_trains_per_player")]
    pub initial_trains_per_player: u16,
    pub destinations: Vec<Destination>,
    pub connections: Vec<ConnectionDefinition>,
    pub destination_cards: Vec<DestinationCard>,
}

fn default_initial_trains_per_player() -> u16 {
    DEFAULT_INITIAL_TRAINS_PER_PLAYER
}

impl GameDefinition {
    /// The classic North-American board: 36 cities, 100 connections, 30 destination tickets.
    pub fn united_states() -> Self {
        united_states::definition()
    }

    /// Parses and validates a definition.
    pub fn from_json(json: &str) -> Result<Self, DefinitionError> {
        let definition: Self = serde_json::from_str(json)?;
        definition.validate()?;

        Ok(definition)
    }

    /// Checks that the board itself is consistent: destinations are unique, and every
    /// connection and destination card refers to a defined destination.
    pub fn validate(&self) -> Result<(), DefinitionError> {
        if self.destinations.is_empty() {
            return Err(DefinitionError::NoDestinations);
        }

        let mut names = HashSet::with_capacity(self.destinations.len());
        for destination in &self.destinations {
            if !names.insert(destination.name()) {
                return Err(DefinitionError::DuplicateDestination(
                    destination.name().to_owned(),
                ));
            }
        }

        for connection in &self.connections {
            for name in [&connection.start, &connection.end] {
                if !names.contains(name.as_str()) {
                    return Err(DefinitionError::UnknownDestination(name.clone()));
                }
            }

            if connection.num_segments == 0 {
                return Err(DefinitionError::NoSegments {
                    start: connection.start.clone(),
                    end: connection.end.clone(),
                });
            }
        }

        for card in &self.destination_cards {
            for name in [card.start(), card.end()] {
                if !names.contains(name) {
                    return Err(DefinitionError::UnknownDestination(name.to_owned()));
                }
            }
        }

        Ok(())
    }

    /// On top of [`GameDefinition::validate`], checks that a game with `num_players` can start:
    /// the player count is supported, and every player can draw destination cards on their first turn.
    pub fn validate_for(&self, num_players: usize) -> Result<(), DefinitionError> {
        if !NUM_PLAYERS.contains(&num_players) {
            return Err(DefinitionError::InvalidNumPlayers(num_players));
        }

        self.validate()?;

        let needed = NUM_DRAWN_DESTINATION_CARDS * num_players;
        if self.destination_cards.len() < needed {
            return Err(DefinitionError::NotEnoughDestinationCards {
                num_players,
                needed,
                available: self.destination_cards.len(),
            });
        }

        Ok(())
    }

    /// Resolves connection endpoints to destinations, and creates an unclaimed map.
    pub fn build_map(&self) -> Result<MapData, DefinitionError> {
        let find_destination = |name: &str| {
            self.destinations
                .iter()
                .find(|destination| destination.name() == name)
                .cloned()
                .ok_or_else(|| DefinitionError::UnknownDestination(name.to_owned()))
        };

        let connections = self
            .connections
            .iter()
            .map(|connection| -> Result<_, DefinitionError> {
                Ok((
                    find_destination(&connection.start)?,
                    find_destination(&connection.end)?,
                    connection.color,
                    connection.num_segments,
                ))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(MapData::new(self.destinations.clone(), connections))
    }
}
