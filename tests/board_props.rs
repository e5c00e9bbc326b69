use fivetwelve::{Board, Direction, EventKind, EventLog};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

/// Textbook 2048 line collapse toward index 0.
fn collapse(line: &[u32]) -> Vec<u32> {
    let mut out = Vec::with_capacity(line.len());
    let mut pending: Option<u32> = None;
    for &v in line.iter().filter(|v| **v != 0) {
        match pending {
            Some(p) if p == v => {
                out.push(p + v);
                pending = None;
            }
            Some(p) => {
                out.push(p);
                pending = Some(v);
            }
            None => pending = Some(v),
        }
    }
    out.extend(pending);
    out.resize(line.len(), 0);
    out
}

fn random_board(seed: u64, rows: usize, cols: usize) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let grid: Vec<Vec<u32>> = (0..rows)
        .map(|_| {
            (0..cols)
                .map(|_| match rng.random_range(0..5) {
                    0 | 1 => 0,
                    n => 1 << n,
                })
                .collect()
        })
        .collect();
    Board::from_grid(&grid).unwrap()
}

fn tile_line() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(prop_oneof![Just(0u32), Just(2), Just(4), Just(8)], 1..7)
}

fn any_direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Up),
        Just(Direction::Down),
        Just(Direction::Left),
        Just(Direction::Right),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn left_matches_line_collapse(line in tile_line()) {
        let mut board = Board::from_grid(&[line.clone()]).unwrap();
        board.left();
        prop_assert_eq!(board.to_grid(), vec![collapse(&line)]);
    }

    #[test]
    fn right_matches_reversed_collapse(line in tile_line()) {
        let mut board = Board::from_grid(&[line.clone()]).unwrap();
        board.right();
        let mut reversed = line.clone();
        reversed.reverse();
        let mut expected = collapse(&reversed);
        expected.reverse();
        prop_assert_eq!(board.to_grid(), vec![expected]);
    }

    #[test]
    fn up_and_down_match_column_collapse(line in tile_line()) {
        let column: Vec<Vec<u32>> = line.iter().map(|v| vec![*v]).collect();

        let mut board = Board::from_grid(&column).unwrap();
        board.up();
        let up: Vec<u32> = board.to_grid().into_iter().map(|row| row[0]).collect();
        prop_assert_eq!(up, collapse(&line));

        let mut board = Board::from_grid(&column).unwrap();
        board.down();
        let down: Vec<u32> = board.to_grid().into_iter().map(|row| row[0]).collect();
        let mut reversed = line.clone();
        reversed.reverse();
        let mut expected = collapse(&reversed);
        expected.reverse();
        prop_assert_eq!(down, expected);
    }

    #[test]
    fn moves_conserve_score(seed in any::<u64>(), dir in any_direction()) {
        let mut board = random_board(seed, 4, 4);
        let before = board.score();
        board.shift(dir);
        prop_assert_eq!(board.score(), before);
        let summed: u64 = board.to_grid().iter().flatten().map(|v| u64::from(*v)).sum();
        prop_assert_eq!(board.score(), summed);
    }

    #[test]
    fn tile_positions_match_cells(seed in any::<u64>(), dirs in prop::collection::vec(any_direction(), 1..12)) {
        let mut board = random_board(seed, 4, 5);
        let mut rng = SmallRng::seed_from_u64(seed);
        for dir in dirs {
            board.shift(dir);
            if board.has_empty() {
                board.place_tile(&mut rng, None).unwrap();
            }
            for tile in board.tiles() {
                let held = board.get(tile.position()).unwrap().unwrap();
                prop_assert_eq!(held.id(), tile.id());
            }
        }
    }

    #[test]
    fn grid_roundtrip(seed in any::<u64>(), rows in 1..6usize, cols in 1..6usize) {
        let board = random_board(seed, rows, cols);
        let grid = board.to_grid();
        let copy = Board::from_grid(&grid).unwrap();
        prop_assert_eq!(copy.to_grid(), grid);
        prop_assert_eq!(copy.score(), board.score());
    }

    #[test]
    fn spawn_adds_exactly_one_tile(seed in any::<u64>()) {
        let mut board = random_board(seed, 4, 4);
        prop_assume!(board.has_empty());
        let before = board.to_grid();
        let mut rng = SmallRng::seed_from_u64(seed ^ 0x5eed);
        let pos = board.place_tile(&mut rng, None).unwrap();
        let after = board.to_grid();

        let mut changed = 0;
        for (r, (old, new)) in before.iter().zip(after.iter()).enumerate() {
            for (c, (a, b)) in old.iter().zip(new.iter()).enumerate() {
                if a != b {
                    changed += 1;
                    prop_assert_eq!(*a, 0);
                    prop_assert!(*b == 2 || *b == 4);
                    prop_assert_eq!((r as i32, c as i32), (pos.x, pos.y));
                }
            }
        }
        prop_assert_eq!(changed, 1);
    }

    #[test]
    fn each_merge_removes_one_tile(seed in any::<u64>(), dir in any_direction()) {
        let mut board = random_board(seed, 4, 4);
        let log = EventLog::new();
        board.subscribe(log.clone());
        let before = board.tiles().count();
        board.shift(dir);
        let removed = log
            .events()
            .iter()
            .filter(|e| e.kind == EventKind::Removed)
            .count();
        prop_assert_eq!(board.tiles().count() + removed, before);
        prop_assert!(log.events().iter().all(|e| e.kind != EventKind::Created));
    }
}
