//! End-to-end scenarios through the public API

use rand::SeedableRng;
use rand::rngs::StdRng;
use wordswap::config::{Difficulty, GameConfig};
use wordswap::core::{AnswerGrid, Coord, GridTopology, PlayGrid, PuzzleError, WordLength};
use wordswap::game::{Game, LatestBoard, Outcome};
use wordswap::generator::{Puzzle, PuzzleGenerator};

const CART_ROWS: [&str; 4] = ["cart", "u.u.", "toes", "e.s."];

fn game_from(play: &[&str], unresolved: &[Coord], budget: u32) -> Game {
    Game::new(
        Puzzle {
            topology: GridTopology::lookup(4).unwrap(),
            words: ["cart", "toes", "cute", "rues"].map(String::from).to_vec(),
            answer: AnswerGrid::from_rows(&CART_ROWS).unwrap(),
            play: PlayGrid::from_rows(play).unwrap(),
            unresolved: unresolved.iter().copied().collect(),
            scramble_swaps: 1,
        },
        budget,
    )
}

fn letters(grid_cells: impl Iterator<Item = Option<char>>) -> Vec<char> {
    let mut letters: Vec<char> = grid_cells.flatten().collect();
    letters.sort_unstable();
    letters
}

#[test]
fn four_letter_words_fill_the_grid() {
    let config = GameConfig::from_raw(4, "easy", 15).unwrap();
    let generator = PuzzleGenerator::new(config);
    let mut rng = StdRng::seed_from_u64(42);

    let puzzle = generator
        .generate(&["cart", "toes", "cute", "rues"], &mut rng)
        .unwrap();

    assert_eq!(puzzle.words, vec!["cart", "toes", "cute", "rues"]);
    assert_eq!(puzzle.answer.to_string(), "CART\nU.U.\nTOES\nE.S.");

    let topology = generator.topology();
    for constraint in topology.constraints() {
        let a = puzzle.words[constraint.slot_a].as_bytes()[constraint.pos_a];
        let b = puzzle.words[constraint.slot_b].as_bytes()[constraint.pos_b];
        assert_eq!(a, b, "{constraint:?}");

        let (cell_a, cell_b) = topology.constraint_cells(constraint);
        assert_eq!(cell_a, cell_b);
    }
}

#[test]
fn running_out_of_swaps_loses() {
    // Row 0 rotated by one; swapping columns 0 and 2 never lands a letter home
    let unresolved: Vec<Coord> = (0..4).map(|col| Coord::new(0, col)).collect();
    let mut game = game_from(&["artc", "u.u.", "toes", "e.s."], &unresolved, 15);
    let mut board = LatestBoard::default();
    game.start(&mut board);

    let (a, b) = (Coord::new(0, 0), Coord::new(0, 2));
    for i in 1..=15 {
        let report = game.swap(a, b, &mut board).unwrap();
        assert!(report.resolved.is_empty());
        assert_eq!(report.remaining_swaps, 15 - i);
    }

    assert_eq!(game.outcome(), Outcome::Lost);
    assert_eq!(game.state().unresolved().len(), 4);
    assert_eq!(board.0.as_ref().map(|b| b.outcome), Some(Outcome::Lost));

    assert_eq!(game.swap(a, b, &mut board), Err(PuzzleError::GameOver));
    assert_eq!(game.remaining_swaps(), 0);
}

#[test]
fn difficulty_is_validated_up_front() {
    let hard = GameConfig::from_raw(5, "hard", 15).unwrap();
    assert_eq!(hard.difficulty, Difficulty::Hard);
    assert_eq!(hard.scramble_swaps(), 10);

    let err = GameConfig::from_raw(5, "brutal", 15).unwrap_err();
    assert_eq!(err, PuzzleError::UnrecognizedDifficulty("brutal".into()));
    assert!(err.is_config_error());
    assert!(!err.is_retryable());

    assert_eq!(
        GameConfig::from_raw(8, "easy", 15),
        Err(PuzzleError::InvalidWordLength(8))
    );
}

#[test]
fn final_resolving_swap_wins() {
    let (a, b) = (Coord::new(0, 0), Coord::new(2, 3));
    let mut game = game_from(&["sart", "u.u.", "toec", "e.s."], &[a, b], 15);
    let mut board = LatestBoard::default();
    game.start(&mut board);
    assert_eq!(game.outcome(), Outcome::InProgress);

    let report = game.swap(a, b, &mut board).unwrap();
    assert_eq!(report.outcome, Outcome::Won);
    assert_eq!(report.remaining_swaps, 14);
    assert_eq!(report.resolved.len(), 2);
    assert_eq!(game.swaps_used(), 1);
    assert!(game.play().matches(game.answer()));
}

#[test]
fn generated_puzzles_keep_their_letters() {
    let pools: [(usize, &[&str]); 4] = [
        (3, &["cat", "toe", "cot", "tie"]),
        (4, &["cart", "toes", "cute", "rues"]),
        (5, &["heady", "ample", "tread", "heart", "apple", "yield"]),
        (
            7,
            &["tension", "arrival", "sponsor", "towards", "silicon", "nuclear"],
        ),
    ];

    for (length, pool) in pools {
        for difficulty in ["easy", "medium", "hard"] {
            let config = GameConfig::from_raw(length, difficulty, 15).unwrap();
            let generator = PuzzleGenerator::new(config);
            let mut rng = StdRng::seed_from_u64(length as u64);
            let puzzle = generator.generate(pool, &mut rng).unwrap();

            let answer = &puzzle.answer;
            let play = &puzzle.play;
            assert_eq!(answer.size(), WordLength::new(length).unwrap().get());
            assert!(puzzle.scramble_swaps <= config.scramble_swaps());

            // Scrambling only moves letters around
            assert_eq!(answer.occupied(), play.occupied());
            assert_eq!(
                letters(answer.occupied().into_iter().map(|c| answer.get(c))),
                letters(play.occupied().into_iter().map(|c| play.get(c)))
            );

            // Every unresolved cell is occupied and currently wrong
            for coord in puzzle.unresolved.sorted() {
                assert!(answer.get(coord).is_some());
                assert_ne!(play.get(coord), answer.get(coord));
            }
        }
    }
}
