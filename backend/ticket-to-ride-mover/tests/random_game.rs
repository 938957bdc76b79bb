//! Plays whole games of random players on the United States board, checking after every turn
//! that nothing is created, lost, or taken back.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use ticket_to_ride_mover::controller::{ControllerError, GameController};
use ticket_to_ride_mover::definition::GameDefinition;
use ticket_to_ride_mover::game_state::GameState;
use ticket_to_ride_mover::player::{Player, PlayerId};
use ticket_to_ride_mover::random_player::RandomPlayer;

const NUM_ROUNDS: usize = 25;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn new_game(num_players: usize, seed: u64) -> GameController {
    let players = (0..num_players as u64)
        .map(|i| Box::new(RandomPlayer::new(seed * 10 + i)) as Box<dyn Player>)
        .collect();

    GameController::new(
        &GameDefinition::united_states(),
        players,
        StdRng::seed_from_u64(seed),
    )
    .unwrap()
}

fn owners(state: &GameState) -> Vec<Option<PlayerId>> {
    state
        .map()
        .connections()
        .iter()
        .map(|connection| connection.owner())
        .collect()
}

fn check_invariants(state: &GameState, initial_trains: u16) {
    assert_eq!(state.total_transportation_cards(), 110);
    assert_eq!(state.total_destination_cards(), 30);

    for player in state.player_ids() {
        let trains_used: u16 = state
            .map()
            .connections_owned_by(player)
            .map(|connection| connection.num_segments() as u16)
            .sum();
        assert_eq!(
            state.player(player).unwrap().trains_remaining() + trains_used,
            initial_trains
        );
    }

    for connection in state.map().connections() {
        let parallel_owners: Vec<_> = state
            .map()
            .parallel_connections(connection.id())
            .filter_map(|parallel| parallel.owner())
            .collect();

        if let Some(owner) = connection.owner() {
            assert!(!parallel_owners.contains(&owner));
            if state.num_players() == 2 {
                assert!(parallel_owners.is_empty());
            }
        }
    }
}

/// Plays until the rounds are over, or until a player is left without any legal move.
fn play(controller: &mut GameController) -> usize {
    let initial_trains = GameDefinition::united_states().initial_trains_per_player;
    let mut num_turns = 0;

    for _ in 0..NUM_ROUNDS * controller.state().num_players() {
        let owners_before = owners(controller.state());

        match controller.play_turn() {
            Ok(_) => num_turns += 1,
            Err(ControllerError::IllegalMove(e)) if e.reason().ends_with("has no legal move left.") => {
                break;
            }
            Err(e) => panic!("Unexpected error: {}", e),
        }

        let owners_after = owners(controller.state());
        let num_new_owners = owners_before
            .iter()
            .zip(&owners_after)
            .filter(|(before, after)| {
                if before.is_some() {
                    assert_eq!(before, after);
                }
                before.is_none() && after.is_some()
            })
            .count();
        assert!(num_new_owners <= 1);

        check_invariants(controller.state(), initial_trains);
    }

    num_turns
}

#[test]
fn random_games_keep_invariants() {
    init_tracing();

    for num_players in 2..=5 {
        for seed in 0..3 {
            let mut controller = new_game(num_players, seed);
            let num_turns = play(&mut controller);

            assert!(num_turns >= num_players);
            assert!(!controller.state().is_first_turn());
        }
    }
}

#[test]
fn every_player_keeps_destination_cards_in_the_first_round() {
    init_tracing();
    let mut controller = new_game(5, 42);

    controller.play_rounds(1).unwrap();

    let mut seen = HashSet::new();
    for player in controller.state().player_ids() {
        let destination_cards = controller.state().player(player).unwrap().destination_cards();
        assert!(destination_cards.len() >= 2);
        for card in destination_cards {
            assert!(seen.insert(card.clone()));
        }
    }
}

#[test]
fn same_seeds_play_the_same_game() {
    init_tracing();
    let mut a = new_game(3, 7);
    let mut b = new_game(3, 7);

    a.play_rounds(10).unwrap();
    b.play_rounds(10).unwrap();

    assert_eq!(owners(a.state()), owners(b.state()));
    for player in a.state().player_ids() {
        assert_eq!(
            a.last_turn_actions(player).unwrap(),
            b.last_turn_actions(player).unwrap()
        );
        assert_eq!(a.state().player(player), b.state().player(player));
    }
}
