use minesweeper::{
    get_neighbor_fields, Board, GameConfig, Game, MineSet, RevealOutcome, RevealedState,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn config_strategy() -> impl Strategy<Value = GameConfig> {
    (1usize..=16).prop_flat_map(|size| {
        (0..size * size).prop_map(move |mine_count| GameConfig { size, mine_count })
    })
}

fn true_count(size: usize, mine_locations: &MineSet, row: usize, col: usize) -> u8 {
    get_neighbor_fields(size, row, col)
        .iter()
        .filter(|coords| mine_locations.contains(coords))
        .count() as u8
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn generated_board_matches_its_mines(config in config_strategy(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let (board, mine_locations) = Board::generate(&config, &mut rng).unwrap();
        prop_assert_eq!(config.mine_count, mine_locations.len());
        for row in 0..config.size {
            for col in 0..config.size {
                let field_type = board.field_type(row, col).unwrap();
                if mine_locations.contains(&(row, col)) {
                    prop_assert!(field_type.is_mine());
                } else {
                    prop_assert_eq!(
                        Some(true_count(config.size, &mine_locations, row, col)),
                        field_type.adjacent_mines()
                    );
                }
            }
        }
    }

    #[test]
    fn cascade_never_reveals_mines(
        config in config_strategy(),
        seed in any::<u64>(),
        target in (0usize..16, 0usize..16),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = Game::with_rng(config, &mut rng).unwrap();
        let (row, col) = (target.0 % config.size, target.1 % config.size);
        let is_mine = game.mine_locations().contains(&(row, col));

        let outcome = game.reveal_cell(row, col).unwrap();
        if is_mine {
            prop_assert_eq!(RevealOutcome::MineHit, outcome);
            prop_assert_eq!(1, game.revealed_count());
        } else {
            for mine in game.mine_locations().iter() {
                prop_assert_eq!(Ok(false), game.is_revealed(mine.0, mine.1));
            }
        }
    }

    #[test]
    fn win_exactly_when_all_safe_fields_are_revealed(
        config in config_strategy(),
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let (board, mine_locations) = Board::generate(&config, &mut rng).unwrap();
        let mut revealed_state = RevealedState::for_board(&board);
        let number_of_safe_fields = config.size * config.size - config.mine_count;

        for row in 0..config.size {
            for col in 0..config.size {
                if mine_locations.contains(&(row, col)) {
                    continue;
                }
                let outcome = minesweeper::reveal(&board, &mut revealed_state, row, col).unwrap();
                let all_revealed = revealed_state.revealed_count() == number_of_safe_fields;
                match outcome {
                    RevealOutcome::Win => prop_assert!(all_revealed),
                    RevealOutcome::Continue(revealed_fields) => {
                        prop_assert!(!all_revealed);
                        prop_assert!(!revealed_fields.is_empty());
                    }
                    RevealOutcome::AlreadyRevealed => (),
                    RevealOutcome::MineHit => prop_assert!(false, "safe field reported as mine"),
                }
            }
        }
        prop_assert!(minesweeper::is_cleared(&board, &revealed_state));
        prop_assert_eq!(number_of_safe_fields, revealed_state.revealed_count());
    }
}

#[test]
fn five_by_five_mine_hit() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut game = Game::with_rng(GameConfig::new(5, 5).unwrap(), &mut rng).unwrap();
    let mine_locations: Vec<_> = game.mine_locations().iter().copied().collect();
    assert_eq!(5, mine_locations.len());
    let (row, col) = mine_locations[0];
    assert_eq!(RevealOutcome::MineHit, game.reveal_cell(row, col).unwrap());
    assert_eq!(1, game.revealed_count());
    assert!(game.is_lost());
}

#[test]
fn three_by_three_cascade() {
    let mine_locations: MineSet = [(0, 0)].iter().copied().collect();
    let mut game = Game::with_mines(3, mine_locations).unwrap();
    assert_eq!(RevealOutcome::Win, game.reveal_cell(2, 2).unwrap());
    for (row, col) in [(0, 1), (0, 2), (1, 0), (1, 1), (1, 2), (2, 0), (2, 1), (2, 2)] {
        assert_eq!(Ok(true), game.is_revealed(row, col));
    }
    assert_eq!(Ok(false), game.is_revealed(0, 0));
}
