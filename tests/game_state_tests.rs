use monty_hall::{ChoiceRejection, GamePhase, GameState, MontyHallError, Strategy};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_second_initial_choice_is_rejected() {
    let mut game = GameState::new(3).unwrap();

    assert!(game.make_initial_choice(0).is_ok());
    let err = game.make_initial_choice(1).unwrap_err();

    assert_eq!(
        err,
        MontyHallError::InvalidChoice {
            door: 1,
            reason: ChoiceRejection::AlreadyChosen
        }
    );
    assert_eq!(game.player_choice(), Some(0));
}

#[test]
fn test_initial_choice_out_of_range_leaves_state_unchanged() {
    let mut game = GameState::new(4).unwrap();

    assert!(game.make_initial_choice(4).is_err());
    assert_eq!(game.player_choice(), None);
    assert_eq!(game.phase(), GamePhase::Created);

    // The game is still usable after the rejection
    assert!(game.make_initial_choice(3).is_ok());
}

#[test]
fn test_reveal_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(42);

    // Picking the prize door is the only case where the reveal uses randomness
    for _ in 0..50 {
        let mut game = GameState::with_prize_door(5, 2).unwrap();
        game.make_initial_choice(2).unwrap();

        let first = game.reveal_by_host_with_rng(&mut rng).to_vec();
        let second = game.reveal_by_host_with_rng(&mut rng).to_vec();
        let third = game.reveal_by_host().to_vec();

        assert_eq!(first, second);
        assert_eq!(first, third);
        assert_eq!(first.len(), 3);
    }
}

#[test]
fn test_three_door_reveal_leaves_two_doors() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..100 {
        let mut game = GameState::with_rng(3, &mut rng).unwrap();
        game.make_initial_choice(0).unwrap();
        game.reveal_by_host_with_rng(&mut rng);

        let available = game.available_doors();
        assert_eq!(available.len(), 2);
        assert!(available.contains(&0));
        assert!(available.contains(&game.prize_door()));

        for &opened in game.revealed_doors() {
            assert_ne!(opened, game.prize_door());
            assert_ne!(opened, 0);
        }
    }
}

#[test]
fn test_many_doors_reveal_all_but_two() {
    let mut game = GameState::with_prize_door(10, 7).unwrap();
    game.make_initial_choice(3).unwrap();
    game.reveal_by_host();

    assert_eq!(game.available_doors(), vec![3, 7]);
    assert_eq!(game.switch_options(), vec![7]);
    assert_eq!(game.revealed_doors().len(), 8);
}

#[test]
fn test_final_choice_cannot_pick_opened_door() {
    let mut game = GameState::with_prize_door(4, 1).unwrap();
    game.make_initial_choice(0).unwrap();
    game.reveal_by_host();
    assert_eq!(game.revealed_doors(), &[2, 3]);

    let err = game.make_final_choice(3).unwrap_err();
    assert_eq!(
        err,
        MontyHallError::InvalidChoice {
            door: 3,
            reason: ChoiceRejection::Revealed
        }
    );
    assert!(!game.is_completed());
    assert_eq!(game.phase(), GamePhase::Revealed);
}

#[test]
fn test_switching_from_wrong_pick_wins() {
    let mut game = GameState::with_prize_door(3, 1).unwrap();
    game.make_initial_choice(0).unwrap();
    game.reveal_by_host();

    assert!(!game.did_player_win());
    game.make_final_choice(1).unwrap();

    assert!(game.is_completed());
    assert!(game.did_player_win());
    assert_eq!(game.strategy_played(), Some(Strategy::Switch));
}

#[test]
fn test_staying_on_right_pick_wins() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut game = GameState::with_prize_door(3, 1).unwrap();
    game.make_initial_choice(1).unwrap();
    game.reveal_by_host_with_rng(&mut rng);

    let other = game.switch_options();
    assert_eq!(other.len(), 1);
    assert_ne!(other[0], 1);

    game.make_final_choice(1).unwrap();
    assert!(game.did_player_win());
    assert_eq!(game.strategy_played(), Some(Strategy::Stay));
}

#[test]
fn test_invalid_door_counts() {
    for doors in 0..3 {
        assert_eq!(
            GameState::new(doors).unwrap_err(),
            MontyHallError::InvalidDoorCount(doors)
        );
    }
    assert!(GameState::new(3).is_ok());
    assert!(GameState::new(100).is_ok());
}
