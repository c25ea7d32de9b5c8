use rand::Rng;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Cell value reserved for the blank.
pub const BLANK: u8 = 0;

/// Largest supported dimension; tile labels must fit in a u8.
pub const MAX_DIM: usize = 15;

/// A direction names where the blank moves; the adjacent tile slides the
/// opposite way.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

pub const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("board dimension {0} is too small (minimum 2)")]
    DimensionTooSmall(usize),
    #[error("board dimension {0} exceeds the supported maximum of {MAX_DIM}")]
    DimensionTooLarge(usize),
    #[error("expected {expected} cells, got {found}")]
    WrongCellCount { expected: usize, found: usize },
    #[error("cell value {0} is out of range for this board")]
    ValueOutOfRange(u8),
    #[error("cell value {0} appears more than once")]
    DuplicateValue(u8),
}

/// N x N sliding-tile grid. Row-major flat storage with the blank's
/// coordinate cached so moves never scan for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<u8>,
    blank_row: usize,
    blank_col: usize,
}

impl Board {
    /// The solved board: tiles 1..N^2-1 in order, blank in the last cell.
    pub fn goal(size: usize) -> Result<Self, BoardError> {
        check_dimension(size)?;
        let n2 = size * size;
        let mut cells: Vec<u8> = (1..n2 as u8).collect();
        cells.push(BLANK);
        Ok(Self {
            size,
            cells,
            blank_row: size - 1,
            blank_col: size - 1,
        })
    }

    /// Builds a board from row-major cell values, validating that every tile
    /// label 1..N^2-1 and the blank each appear exactly once.
    pub fn from_tiles(size: usize, cells: Vec<u8>) -> Result<Self, BoardError> {
        check_dimension(size)?;
        let n2 = size * size;
        if cells.len() != n2 {
            return Err(BoardError::WrongCellCount {
                expected: n2,
                found: cells.len(),
            });
        }
        let mut seen = vec![false; n2];
        for &v in &cells {
            if (v as usize) >= n2 {
                return Err(BoardError::ValueOutOfRange(v));
            }
            if seen[v as usize] {
                return Err(BoardError::DuplicateValue(v));
            }
            seen[v as usize] = true;
        }
        let blank = cells.iter().position(|&v| v == BLANK).unwrap_or(0);
        Ok(Self {
            size,
            cells,
            blank_row: blank / size,
            blank_col: blank % size,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row * self.size + col]
    }

    pub fn blank(&self) -> (usize, usize) {
        (self.blank_row, self.blank_col)
    }

    /// Slides the blank one cell. Returns false without mutating when the
    /// blank is already at the edge in that direction. A successful move
    /// followed by its opposite restores the prior grid exactly, which both
    /// search strategies rely on for backtracking.
    pub fn move_blank(&mut self, dir: Direction) -> bool {
        let (dr, dc) = dir.offset();
        let nr = self.blank_row as isize + dr;
        let nc = self.blank_col as isize + dc;
        if nr < 0 || nc < 0 || nr >= self.size as isize || nc >= self.size as isize {
            return false;
        }
        let (nr, nc) = (nr as usize, nc as usize);
        self.cells[self.blank_row * self.size + self.blank_col] = self.cells[nr * self.size + nc];
        self.cells[nr * self.size + nc] = BLANK;
        self.blank_row = nr;
        self.blank_col = nc;
        true
    }

    /// Applies a whole move sequence; stops and reports false on the first
    /// move that fails.
    pub fn apply_moves(&mut self, moves: &[Direction]) -> bool {
        moves.iter().all(|&m| self.move_blank(m))
    }

    pub fn is_goal(&self) -> bool {
        let last = self.size * self.size - 1;
        self.cells[last] == BLANK
            && self.cells[..last]
                .iter()
                .enumerate()
                .all(|(i, &v)| v as usize == i + 1)
    }

    /// Canonical row-major encoding used as a visited-state key. Equality
    /// only, never ordering.
    pub fn fingerprint(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() * 3);
        for &v in &self.cells {
            out.push_str(&v.to_string());
            out.push(',');
        }
        out
    }

    /// Parity test: a board is reachable from the goal iff the inversion
    /// count is even (odd N), or the inversion count plus the blank's row
    /// index is odd (even N).
    pub fn is_solvable(&self) -> bool {
        let inversions: usize = self
            .cells
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v != BLANK)
            .map(|(i, &v)| {
                self.cells[i + 1..]
                    .iter()
                    .filter(|&&w| w != BLANK && w < v)
                    .count()
            })
            .sum();
        if self.size % 2 == 1 {
            inversions % 2 == 0
        } else {
            (inversions + self.blank_row) % 2 == 1
        }
    }

    /// Random walk of `steps` successful moves, never undoing the previous
    /// one. Preserves solvability by construction.
    pub fn scramble<R: Rng>(&mut self, steps: usize, rng: &mut R) {
        let mut last: Option<Direction> = None;
        let mut done = 0;
        while done < steps {
            let dir = DIRECTIONS[rng.gen_range(0..4)];
            if last == Some(dir.opposite()) {
                continue;
            }
            if self.move_blank(dir) {
                last = Some(dir);
                done += 1;
            }
        }
    }
}

fn check_dimension(size: usize) -> Result<(), BoardError> {
    if size < 2 {
        return Err(BoardError::DimensionTooSmall(size));
    }
    if size > MAX_DIM {
        return Err(BoardError::DimensionTooLarge(size));
    }
    Ok(())
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                if col > 0 {
                    write!(f, " ")?;
                }
                let v = self.get(row, col);
                if v == BLANK {
                    write!(f, "{:>2}", "X")?;
                } else {
                    write!(f, "{v:>2}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
