use monty_hall::{monty_hall_trial, monty_hall_trial_with_rng, play_trial, HostReveal, Strategy};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_switching_wins_after_wrong_guess() {
    let mut rng = StdRng::seed_from_u64(1);

    assert!(play_trial(3, Strategy::Switch, 1, 0, &mut rng));
    assert!(!play_trial(3, Strategy::Stay, 1, 0, &mut rng));
}

#[test]
fn test_staying_wins_after_right_guess() {
    let mut rng = StdRng::seed_from_u64(2);

    for _ in 0..100 {
        assert!(play_trial(3, Strategy::Stay, 1, 1, &mut rng));
        assert!(!play_trial(3, Strategy::Switch, 1, 1, &mut rng));
    }
}

#[test]
fn test_exactly_one_strategy_wins_with_three_doors() {
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..5_000 {
        let prize = rng.gen_range(0..3);
        let choice = rng.gen_range(0..3);

        // One shared host reveal for both strategies
        let reveal = HostReveal::compute(3, prize, choice, &mut rng);
        let switched_to: Vec<usize> = reveal.switch_options(choice).collect();
        assert_eq!(switched_to.len(), 1);

        let stay_win = choice == prize;
        let switch_win = switched_to[0] == prize;
        assert!(stay_win ^ switch_win, "prize {} choice {}", prize, choice);

        // The stateless trial agrees with the shared reveal
        assert_eq!(play_trial(3, Strategy::Stay, prize, choice, &mut rng), stay_win);
        assert_eq!(
            play_trial(3, Strategy::Switch, prize, choice, &mut rng),
            switch_win
        );
    }
}

#[test]
fn test_reveal_never_opens_prize_or_pick() {
    let mut rng = StdRng::seed_from_u64(4);

    for doors in 3..12 {
        for _ in 0..200 {
            let prize = rng.gen_range(0..doors);
            let choice = rng.gen_range(0..doors);
            let reveal = HostReveal::compute(doors, prize, choice, &mut rng);

            assert_eq!(reveal.closed().len(), 2);
            assert_eq!(reveal.opened().len(), doors - 2);
            assert!(!reveal.is_opened(prize));
            assert!(!reveal.is_opened(choice));
        }
    }
}

#[test]
fn test_oracle_with_thread_rng() {
    let games = 30_000;
    let switch_wins = (0..games)
        .filter(|_| monty_hall_trial(Strategy::Switch, 3))
        .count();
    let stay_wins = (0..games)
        .filter(|_| monty_hall_trial(Strategy::Stay, 3))
        .count();

    let switch_rate = switch_wins as f64 / games as f64;
    let stay_rate = stay_wins as f64 / games as f64;
    assert!((switch_rate - 2.0 / 3.0).abs() < 0.02, "switch {}", switch_rate);
    assert!((stay_rate - 1.0 / 3.0).abs() < 0.02, "stay {}", stay_rate);
}

#[test]
fn test_oracle_with_many_doors() {
    let mut rng = StdRng::seed_from_u64(10);
    let games = 20_000;
    let switch_wins = (0..games)
        .filter(|_| monty_hall_trial_with_rng(Strategy::Switch, 10, &mut rng))
        .count();

    let rate = switch_wins as f64 / games as f64;
    assert!((rate - 0.9).abs() < 0.02, "switch rate {}", rate);
}
