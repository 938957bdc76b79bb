//! The classic North-American board.

use crate::card::{CardColor, CardColor::*, DestinationCard};
use crate::definition::{ConnectionDefinition, GameDefinition, DEFAULT_INITIAL_TRAINS_PER_PLAYER};
use crate::map::Destination;

/// Name and display position of every city.
const CITIES: [(&str, f64, f64); 36] = [
    ("Atlanta", 0.74, 0.60),
    ("Boston", 0.95, 0.16),
    ("Calgary", 0.20, 0.08),
    ("Charleston", 0.85, 0.62),
    ("Chicago", 0.66, 0.33),
    ("Dallas", 0.49, 0.72),
    ("Denver", 0.34, 0.45),
    ("Duluth", 0.55, 0.23),
    ("El Paso", 0.32, 0.74),
    ("Helena", 0.30, 0.25),
    ("Houston", 0.52, 0.80),
    ("Kansas City", 0.52, 0.45),
    ("Las Vegas", 0.14, 0.57),
    ("Little Rock", 0.57, 0.60),
    ("Los Angeles", 0.07, 0.66),
    ("Miami", 0.90, 0.90),
    ("Montreal", 0.87, 0.08),
    ("Nashville", 0.70, 0.50),
    ("New Orleans", 0.62, 0.80),
    ("New York", 0.88, 0.30),
    ("Oklahoma City", 0.47, 0.58),
    ("Omaha", 0.50, 0.36),
    ("Phoenix", 0.19, 0.68),
    ("Pittsburgh", 0.80, 0.35),
    ("Portland", 0.04, 0.25),
    ("Raleigh", 0.82, 0.52),
    ("Saint Louis", 0.58, 0.45),
    ("Salt Lake City", 0.21, 0.40),
    ("San Francisco", 0.02, 0.48),
    ("Santa Fe", 0.33, 0.59),
    ("Sault St. Marie", 0.67, 0.16),
    ("Seattle", 0.06, 0.17),
    ("Toronto", 0.79, 0.20),
    ("Vancouver", 0.07, 0.10),
    ("Washington", 0.89, 0.42),
    ("Winnipeg", 0.42, 0.09),
];

/// Every pair of adjacent cities, with the length and the colors of the (possibly parallel) connections.
const CONNECTIONS: [(&str, &str, u8, &[CardColor]); 78] = [
    ("Atlanta", "Charleston", 2, &[Any]),
    ("Atlanta", "Miami", 5, &[Blue]),
    ("Atlanta", "Nashville", 1, &[Any]),
    ("Atlanta", "New Orleans", 5, &[Orange, Yellow]),
    ("Atlanta", "Raleigh", 2, &[Any, Any]),
    ("Boston", "Montreal", 2, &[Any, Any]),
    ("Boston", "New York", 2, &[Yellow, Red]),
    ("Calgary", "Helena", 4, &[Any]),
    ("Calgary", "Seattle", 4, &[Any]),
    ("Calgary", "Vancouver", 3, &[Any]),
    ("Calgary", "Winnipeg", 6, &[White]),
    ("Charleston", "Miami", 4, &[Purple]),
    ("Charleston", "Raleigh", 2, &[Any]),
    ("Chicago", "Duluth", 3, &[Red]),
    ("Chicago", "Omaha", 4, &[Blue]),
    ("Chicago", "Pittsburgh", 3, &[Black, Orange]),
    ("Chicago", "Saint Louis", 2, &[Green, White]),
    ("Chicago", "Toronto", 4, &[White]),
    ("Dallas", "El Paso", 4, &[Red]),
    ("Dallas", "Houston", 1, &[Any, Any]),
    ("Dallas", "Little Rock", 2, &[Any]),
    ("Dallas", "Oklahoma City", 2, &[Any, Any]),
    ("Denver", "Helena", 4, &[Green]),
    ("Denver", "Kansas City", 4, &[Black, Orange]),
    ("Denver", "Oklahoma City", 4, &[Red]),
    ("Denver", "Omaha", 4, &[Purple]),
    ("Denver", "Phoenix", 5, &[White]),
    ("Denver", "Salt Lake City", 3, &[Red, Yellow]),
    ("Denver", "Santa Fe", 2, &[Any]),
    ("Duluth", "Helena", 6, &[Orange]),
    ("Duluth", "Omaha", 2, &[Any, Any]),
    ("Duluth", "Sault St. Marie", 3, &[Any]),
    ("Duluth", "Toronto", 6, &[Purple]),
    ("Duluth", "Winnipeg", 4, &[Black]),
    ("El Paso", "Houston", 6, &[Green]),
    ("El Paso", "Los Angeles", 6, &[Black]),
    ("El Paso", "Oklahoma City", 5, &[Yellow]),
    ("El Paso", "Phoenix", 3, &[Any]),
    ("El Paso", "Santa Fe", 2, &[Any]),
    ("Helena", "Omaha", 5, &[Red]),
    ("Helena", "Salt Lake City", 3, &[Purple]),
    ("Helena", "Seattle", 6, &[Yellow]),
    ("Helena", "Winnipeg", 4, &[Blue]),
    ("Houston", "New Orleans", 2, &[Any]),
    ("Kansas City", "Saint Louis", 2, &[Blue, Purple]),
    ("Kansas City", "Oklahoma City", 2, &[Any, Any]),
    ("Kansas City", "Omaha", 1, &[Any, Any]),
    ("Las Vegas", "Los Angeles", 2, &[Any]),
    ("Las Vegas", "Salt Lake City", 3, &[Orange]),
    ("Little Rock", "Nashville", 3, &[White]),
    ("Little Rock", "New Orleans", 3, &[Any]),
    ("Little Rock", "Oklahoma City", 2, &[Any]),
    ("Little Rock", "Saint Louis", 2, &[Any]),
    ("Los Angeles", "Phoenix", 3, &[Any]),
    ("Los Angeles", "San Francisco", 3, &[Purple, Yellow]),
    ("Miami", "New Orleans", 6, &[Red]),
    ("Montreal", "New York", 3, &[Blue]),
    ("Montreal", "Sault St. Marie", 5, &[Black]),
    ("Montreal", "Toronto", 3, &[Any]),
    ("Nashville", "Pittsburgh", 4, &[Yellow]),
    ("Nashville", "Raleigh", 3, &[Black]),
    ("Nashville", "Saint Louis", 2, &[Any]),
    ("New York", "Pittsburgh", 2, &[Green, White]),
    ("New York", "Washington", 2, &[Black, Orange]),
    ("Oklahoma City", "Santa Fe", 3, &[Blue]),
    ("Phoenix", "Santa Fe", 3, &[Any]),
    ("Pittsburgh", "Raleigh", 2, &[Any]),
    ("Pittsburgh", "Saint Louis", 5, &[Green]),
    ("Pittsburgh", "Toronto", 2, &[Any]),
    ("Pittsburgh", "Washington", 2, &[Any]),
    ("Portland", "Salt Lake City", 6, &[Blue]),
    ("Portland", "San Francisco", 5, &[Green, Purple]),
    ("Raleigh", "Washington", 2, &[Any, Any]),
    ("Salt Lake City", "San Francisco", 5, &[Orange, White]),
    ("Sault St. Marie", "Toronto", 2, &[Any]),
    ("Sault St. Marie", "Winnipeg", 6, &[Any]),
    ("Seattle", "Portland", 1, &[Any, Any]),
    ("Seattle", "Vancouver", 1, &[Any, Any]),
];

const DESTINATION_CARDS: [(&str, &str, u8); 30] = [
    ("Boston", "Miami", 12),
    ("Calgary", "Phoenix", 13),
    ("Calgary", "Salt Lake City", 7),
    ("Chicago", "New Orleans", 7),
    ("Chicago", "Santa Fe", 9),
    ("Dallas", "New York", 11),
    ("Denver", "El Paso", 4),
    ("Denver", "Pittsburgh", 11),
    ("Duluth", "El Paso", 10),
    ("Duluth", "Houston", 8),
    ("Helena", "Los Angeles", 8),
    ("Kansas City", "Houston", 5),
    ("Los Angeles", "Chicago", 16),
    ("Los Angeles", "Miami", 20),
    ("Los Angeles", "New York", 21),
    ("Montreal", "Atlanta", 9),
    ("Montreal", "New Orleans", 13),
    ("New York", "Atlanta", 6),
    ("Portland", "Nashville", 17),
    ("Portland", "Phoenix", 11),
    ("San Francisco", "Atlanta", 17),
    ("Sault St. Marie", "Nashville", 8),
    ("Sault St. Marie", "Oklahoma City", 9),
    ("Seattle", "Los Angeles", 9),
    ("Seattle", "New York", 22),
    ("Toronto", "Miami", 10),
    ("Vancouver", "Montreal", 20),
    ("Vancouver", "Santa Fe", 13),
    ("Winnipeg", "Houston", 12),
    ("Winnipeg", "Little Rock", 11),
];

pub(crate) fn definition() -> GameDefinition {
    let destinations = CITIES
        .iter()
        .map(|(name, x, y)| Destination::new(*name, *x, *y))
        .collect();

    let connections = CONNECTIONS
        .iter()
        .flat_map(|(start, end, num_segments, colors)| {
            colors.iter().map(move |color| ConnectionDefinition {
                start: start.to_string(),
                end: end.to_string(),
                color: *color,
                num_segments: *num_segments,
            })
        })
        .collect();

    let destination_cards = DESTINATION_CARDS
        .iter()
        .map(|(start, end, points)| DestinationCard::new(*start, *end, *points))
        .collect();

    GameDefinition {
        initial_trains_per_player: DEFAULT_INITIAL_TRAINS_PER_PLAYER,
        destinations,
        connections,
        destination_cards,
    }
}
