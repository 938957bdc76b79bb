//! Turn validation and move execution for a Ticket to Ride game.
//!
//! A [`controller::GameController`] hands a fresh [`mover::Mover`] to each [`player::Player`] in turn.
//! The mover is the only way to change the [`game_state::GameState`]: it checks every move against
//! the rules, applies legal ones atomically, and reports illegal ones as [`error::IllegalMove`].

pub mod card;
pub mod controller;
pub mod definition;
pub mod error;
pub mod game_state;
pub mod map;
pub mod mover;
pub mod player;
pub mod random_player;
pub mod selection;
pub mod turn;
mod united_states;
