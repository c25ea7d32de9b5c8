use npuzzle::board::Board;
use npuzzle::io::parse_board;
use npuzzle::search::eval::{linear_conflict, manhattan_distance, misplaced_tiles, Heuristic};

use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn all_heuristics_are_zero_on_the_goal() {
    let b = Board::goal(3).unwrap();
    assert_eq!(misplaced_tiles(&b), 0);
    assert_eq!(manhattan_distance(&b), 0);
    assert_eq!(linear_conflict(&b), 0);
}

#[test]
fn misplaced_counts_offgoal_tiles_only() {
    // Only the 8 is out of place; the blank never counts.
    let b = parse_board("1 2 3 4 5 6 7 X 8").unwrap();
    assert_eq!(misplaced_tiles(&b), 1);

    let b = parse_board("X 2 3 1 5 6 4 7 8").unwrap();
    assert_eq!(misplaced_tiles(&b), 4);
}

#[test]
fn manhattan_known_values() {
    let b = parse_board("1 2 3 4 5 6 7 X 8").unwrap();
    assert_eq!(manhattan_distance(&b), 1);

    // 1, 4, 7, 8 are each one cell from home.
    let b = parse_board("X 2 3 1 5 6 4 7 8").unwrap();
    assert_eq!(manhattan_distance(&b), 4);
}

#[test]
fn linear_conflict_equals_manhattan_without_conflicts() {
    let b = parse_board("X 2 3 1 5 6 4 7 8").unwrap();
    assert_eq!(linear_conflict(&b), manhattan_distance(&b));
}

#[test]
fn linear_conflict_detects_reversed_row_pair() {
    // 2 and 1 both sit in their goal row with goal columns reversed.
    let b = parse_board("2 1 3 4 5 6 7 8 X").unwrap();
    assert_eq!(manhattan_distance(&b), 2);
    assert_eq!(linear_conflict(&b), 4);
}

#[test]
fn linear_conflict_detects_reversed_column_pair() {
    // 5 and 2 both sit in their goal column with goal rows reversed.
    let b = parse_board("1 5 3 4 X 6 7 2 8").unwrap();
    assert_eq!(manhattan_distance(&b), 4);
    assert_eq!(linear_conflict(&b), 6);
}

#[test]
fn linear_conflict_counts_every_reversed_pair() {
    // Column 1 holds 8, 5, 2 top to bottom: three reversed pairs, +6.
    let b = parse_board("1 8 3 4 5 6 7 2 X").unwrap();
    assert_eq!(manhattan_distance(&b), 4);
    assert_eq!(linear_conflict(&b), 10);
}

#[test]
fn linear_conflict_dominates_manhattan() {
    let mut rng = SmallRng::seed_from_u64(1234);
    for _ in 0..50 {
        let mut b = Board::goal(4).unwrap();
        b.scramble(30, &mut rng);
        let md = manhattan_distance(&b);
        let lc = linear_conflict(&b);
        assert!(lc >= md, "linear conflict {lc} below manhattan {md}:\n{b}");
    }
}

#[test]
fn selector_dispatches_to_the_right_function() {
    let b = parse_board("2 1 3 4 5 6 7 8 X").unwrap();
    assert_eq!(Heuristic::MisplacedTiles.evaluate(&b), misplaced_tiles(&b));
    assert_eq!(Heuristic::Manhattan.evaluate(&b), manhattan_distance(&b));
    assert_eq!(Heuristic::LinearConflict.evaluate(&b), linear_conflict(&b));
}
