use npuzzle::board::{Board, Direction, DIRECTIONS};

use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn goal_board_is_goal() {
    let b = Board::goal(3).unwrap();
    assert!(b.is_goal());
    assert_eq!(b.blank(), (2, 2));
    assert_eq!(b.fingerprint(), "1,2,3,4,5,6,7,8,0,");
}

#[test]
fn one_move_off_is_not_goal() {
    let mut b = Board::goal(3).unwrap();
    assert!(b.move_blank(Direction::Left));
    assert!(!b.is_goal());
}

#[test]
fn move_then_opposite_restores_fingerprint() {
    let mut b = Board::goal(4).unwrap();
    let mut rng = SmallRng::seed_from_u64(7);
    b.scramble(25, &mut rng);
    for dir in DIRECTIONS {
        let before = b.fingerprint();
        if b.move_blank(dir) {
            assert_ne!(b.fingerprint(), before, "move {dir} did not change the grid");
            assert!(b.move_blank(dir.opposite()));
            assert_eq!(b.fingerprint(), before, "undo of {dir} did not restore the grid");
        } else {
            assert_eq!(b.fingerprint(), before, "failed move {dir} mutated the grid");
        }
    }
}

#[test]
fn edge_moves_fail_without_mutation() {
    // Blank starts in the bottom-right corner of the goal board.
    let mut b = Board::goal(3).unwrap();
    let before = b.fingerprint();
    assert!(!b.move_blank(Direction::Down));
    assert!(!b.move_blank(Direction::Right));
    assert_eq!(b.fingerprint(), before);
    assert_eq!(b.blank(), (2, 2));
}

#[test]
fn clone_is_independent() {
    let b = Board::goal(3).unwrap();
    let mut c = b.clone();
    assert!(c.move_blank(Direction::Up));
    assert!(b.is_goal(), "moving the clone mutated the original");
    assert_ne!(b.fingerprint(), c.fingerprint());
}

#[test]
fn fingerprint_equality_matches_cell_equality() {
    let a = npuzzle::io::parse_board("1 2 3 4 5 6 7 X 8").unwrap();
    let b = npuzzle::io::parse_board("1 2 3\n4 5 6\n7 x 8").unwrap();
    assert_eq!(a.fingerprint(), b.fingerprint());
    let c = npuzzle::io::parse_board("1 2 3 4 5 6 X 7 8").unwrap();
    assert_ne!(a.fingerprint(), c.fingerprint());
}

#[test]
fn solvability_parity_odd_dimension() {
    assert!(Board::goal(3).unwrap().is_solvable());
    // Last two tiles swapped: one inversion, unsolvable on a 3x3.
    let swapped = npuzzle::io::parse_board("1 2 3 4 5 6 8 7 X").unwrap();
    assert!(!swapped.is_solvable());
}

#[test]
fn solvability_parity_even_dimension() {
    assert!(Board::goal(4).unwrap().is_solvable());
    let swapped =
        npuzzle::io::parse_board("1 2 3 4 5 6 7 8 9 10 11 12 13 15 14 X").unwrap();
    assert!(!swapped.is_solvable());
}

#[test]
fn scramble_preserves_solvability() {
    let mut rng = SmallRng::seed_from_u64(99);
    for steps in [1usize, 10, 50] {
        let mut b = Board::goal(3).unwrap();
        b.scramble(steps, &mut rng);
        assert!(b.is_solvable(), "scramble of {steps} steps broke parity");
    }
}

#[test]
fn apply_moves_replays_a_path() {
    let mut b = Board::goal(3).unwrap();
    let path = [Direction::Up, Direction::Left, Direction::Down];
    assert!(b.apply_moves(&path));
    let reverse: Vec<_> = path.iter().rev().map(|d| d.opposite()).collect();
    assert!(b.apply_moves(&reverse));
    assert!(b.is_goal());
}
