use nineseat_engine::errors::GameError;
use nineseat_engine::game::{Game, Phase, MAX_PLAYERS};
use nineseat_engine::rules::Blinds;

fn new_game() -> Game {
    Game::new(Blinds::default(), Some(42))
}

#[test]
fn a_new_table_is_empty_and_waiting() {
    let game = new_game();
    assert_eq!(game.phase(), Phase::Waiting);
    assert_eq!(game.seed(), 42);
    assert_eq!(game.pot(), 0);
    assert_eq!(game.seats().len(), MAX_PLAYERS);
    assert!(game.seats().iter().all(|s| !s.is_occupied()));
    assert_eq!(game.dealer_seat(), None);
    assert_eq!(game.current_action_seat(), None);
}

#[test]
fn usernames_are_unique() {
    let mut game = new_game();
    game.add_player("alice").expect("register ok");
    assert_eq!(
        game.add_player("alice").unwrap_err(),
        GameError::DuplicatePlayer("alice".to_string())
    );
    // case-sensitive: a different capitalization is a different player
    game.add_player("Alice").expect("register ok");
}

#[test]
fn seating_rejects_bad_requests() {
    let mut game = new_game();
    game.add_player("alice").unwrap();
    game.add_player("bob").unwrap();

    assert_eq!(
        game.add_player_to_seat("alice", 100, MAX_PLAYERS).unwrap_err(),
        GameError::SeatOutOfRange(MAX_PLAYERS)
    );
    assert_eq!(
        game.add_player_to_seat("mallory", 100, 0).unwrap_err(),
        GameError::UnknownPlayer("mallory".to_string())
    );

    game.add_player_to_seat("alice", 100, 0).unwrap();
    assert_eq!(
        game.add_player_to_seat("bob", 100, 0).unwrap_err(),
        GameError::SeatOccupied(0)
    );
    assert_eq!(
        game.add_player_to_seat("alice", 100, 1).unwrap_err(),
        GameError::AlreadySeated("alice".to_string())
    );
}

#[test]
fn removing_a_player_clears_the_seat() {
    let mut game = new_game();
    game.add_player("alice").unwrap();
    game.add_player_to_seat("alice", 250, 4).unwrap();
    assert_eq!(game.seat_of("alice"), Some(4));

    game.remove_player_from_seat("alice").unwrap();
    assert_eq!(game.seat_of("alice"), None);
    assert!(!game.seats()[4].is_occupied());
    assert_eq!(game.seats()[4].chips(), 0);

    assert_eq!(
        game.remove_player_from_seat("alice").unwrap_err(),
        GameError::PlayerNotSeated("alice".to_string())
    );
}

#[test]
fn blind_structure_is_validated() {
    let mut game = new_game();
    assert_eq!(game.set_blinds(2, 2).unwrap_err(), GameError::BlindsOutOfOrder);
    assert_eq!(game.set_blinds(3, 2).unwrap_err(), GameError::BlindsOutOfOrder);
    assert_eq!(game.set_blinds(0, 2).unwrap_err(), GameError::BlindsZero);

    game.set_blinds(5, 10).unwrap();
    assert_eq!(game.blinds(), Blinds { small: 5, big: 10 });
}

#[test]
fn seat_chips_can_be_overridden() {
    let mut game = new_game();
    game.add_player("alice").unwrap();
    game.add_player_to_seat("alice", 100, 0).unwrap();

    game.set_seat_chips("alice", 555).unwrap();
    assert_eq!(game.seats()[0].chips(), 555);

    assert_eq!(
        game.set_seat_chips("bob", 1).unwrap_err(),
        GameError::PlayerNotSeated("bob".to_string())
    );
}

#[test]
fn starting_needs_two_seated_players() {
    let mut game = new_game();
    assert_eq!(game.start_hand().unwrap_err(), GameError::NotEnoughPlayers);

    game.add_player("alice").unwrap();
    game.add_player_to_seat("alice", 100, 0).unwrap();
    assert_eq!(game.start_hand().unwrap_err(), GameError::NotEnoughPlayers);

    game.add_player("bob").unwrap();
    game.add_player_to_seat("bob", 100, 1).unwrap();
    game.start_hand().expect("start ok");
    assert_eq!(game.phase(), Phase::Preflop);
}

#[test]
fn starting_twice_is_rejected() {
    let mut game = new_game();
    game.add_player("alice").unwrap();
    game.add_player("bob").unwrap();
    game.add_player_to_seat("alice", 100, 0).unwrap();
    game.add_player_to_seat("bob", 100, 1).unwrap();
    game.start_hand().unwrap();

    assert_eq!(
        game.start_hand().unwrap_err(),
        GameError::InvalidPhase(Phase::Preflop)
    );
}

#[test]
fn seat_shuffle_only_between_hands() {
    let mut game = new_game();
    for (name, seat) in [("alice", 0), ("bob", 1), ("carol", 2)] {
        game.add_player(name).unwrap();
        game.add_player_to_seat(name, 100, seat).unwrap();
    }

    game.shuffle_seats().expect("shuffle ok");
    let seated: Vec<&str> = game
        .seats()
        .iter()
        .filter_map(|s| s.username())
        .collect();
    assert_eq!(seated.len(), 3);

    game.start_hand().unwrap();
    assert_eq!(
        game.shuffle_seats().unwrap_err(),
        GameError::InvalidPhase(Phase::Preflop)
    );
}
