use nineseat_engine::errors::GameError;
use nineseat_engine::game::{Game, Phase};
use nineseat_engine::rules::Blinds;

fn table_of(names_and_seats: &[(&str, usize)], chips: u32) -> Game {
    let mut game = Game::new(Blinds::default(), Some(42));
    for (name, seat) in names_and_seats {
        game.add_player(name).unwrap();
        game.add_player_to_seat(name, chips, *seat).unwrap();
    }
    game
}

// With the cursor starting at seat 0 and advancing at least once, the first
// hand's dealer is the next occupied seat after 0.

#[test]
fn four_handed_blinds_and_positions() {
    let mut game = table_of(&[("a", 0), ("b", 1), ("c", 2), ("d", 3)], 100);
    game.start_hand().expect("start ok");

    assert_eq!(game.dealer_seat(), Some(1));
    // blinds post in the two seats after the dealer
    assert_eq!(game.seats()[2].chips(), 99);
    assert_eq!(game.seats()[2].last_bet(), 1);
    assert_eq!(game.seats()[3].chips(), 98);
    assert_eq!(game.seats()[3].last_bet(), 2);
    // big blind closes the round, the seat after it opens the action
    assert_eq!(game.last_action_seat(), Some(3));
    assert_eq!(game.current_action_seat(), Some(0));

    assert_eq!(game.pot(), 3);
    assert_eq!(game.current_bet(), 2);
    assert_eq!(game.phase(), Phase::Preflop);
    assert_eq!(game.active_players(), 4);
    assert!(game
        .seats()
        .iter()
        .filter(|s| s.is_occupied())
        .all(|s| s.hole_cards().len() == 2 && !s.folded()));
    assert!(game.community_cards().is_empty());
}

#[test]
fn heads_up_dealer_posts_small_and_acts_first() {
    let mut game = table_of(&[("a", 0), ("b", 1)], 100);
    game.start_hand().expect("start ok");

    // dealer is seat 1; heads-up it posts the small blind and opens
    assert_eq!(game.dealer_seat(), Some(1));
    assert_eq!(game.seats()[1].chips(), 99);
    assert_eq!(game.seats()[0].chips(), 98);
    assert_eq!(game.last_action_seat(), Some(0));
    assert_eq!(game.current_action_seat(), Some(1));
    assert_eq!(game.pot(), 3);
    assert_eq!(game.current_bet(), 2);
}

#[test]
fn blind_posting_requires_affordable_stacks() {
    // seat 0 will be the heads-up big blind but holds a single chip
    let mut game = table_of(&[("a", 0), ("b", 1)], 100);
    game.set_seat_chips("a", 1).unwrap();

    let err = game.start_hand().unwrap_err();
    assert_eq!(err, GameError::InsufficientChips { amount: 2, stack: 1 });

    // validation precedes mutation: the table is exactly as it was
    assert_eq!(game.phase(), Phase::Waiting);
    assert_eq!(game.pot(), 0);
    assert_eq!(game.seats()[0].chips(), 1);
    assert_eq!(game.seats()[1].chips(), 100);
    assert!(game.seats().iter().all(|s| s.hole_cards().is_empty()));
    assert_eq!(game.dealer_seat(), None);
}

#[test]
fn hole_cards_are_unique_across_seats() {
    let mut game = table_of(&[("a", 0), ("b", 3), ("c", 7)], 100);
    game.start_hand().expect("start ok");

    let mut seen = std::collections::HashSet::new();
    for seat in game.seats().iter().filter(|s| s.is_occupied()) {
        for card in seat.hole_cards() {
            assert!(seen.insert(*card), "duplicate card dealt");
        }
    }
    assert_eq!(seen.len(), 6);
}

#[test]
fn dealer_advances_one_occupied_seat_per_hand() {
    let mut game = table_of(&[("a", 0), ("b", 1), ("c", 2)], 100);

    game.start_hand().unwrap();
    assert_eq!(game.dealer_seat(), Some(1));
    // three-handed the dealer opens the action
    assert_eq!(game.current_action_seat(), Some(1));

    // fold the hand out to get back to Waiting
    game.fold("b").unwrap();
    game.fold("c").unwrap();
    assert_eq!(game.phase(), Phase::Waiting);

    game.start_hand().unwrap();
    assert_eq!(game.dealer_seat(), Some(2));

    game.fold("c").unwrap();
    game.fold("a").unwrap();
    game.start_hand().unwrap();
    assert_eq!(game.dealer_seat(), Some(0));
}
