use log::debug;
use serde::Serialize;

use crate::board::{Board, Direction, DIRECTIONS};

/// Depth cap carried over from the reference solver.
pub const DEFAULT_MAX_DEPTH: u32 = 35;

#[derive(Debug, Clone, Copy)]
pub struct IddfsParams {
    /// Largest depth limit the outer loop will try.
    pub max_depth: u32,
}

impl Default for IddfsParams {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct IddfsResult {
    /// Move sequence to the goal, or None when every limit up to the cap
    /// failed.
    pub moves: Option<Vec<Direction>>,
    /// Nodes visited across all depth limits.
    pub nodes: u64,
}

/// Iterative-deepening depth-first searcher. Works on one board mutated in
/// place, undoing each move on backtrack; no frontier, no visited set. The
/// only pruning is refusing to immediately reverse the previous move.
#[derive(Default)]
pub struct DeepeningSearcher {
    moves: Vec<Direction>,
    nodes: u64,
}

impl DeepeningSearcher {
    pub fn search(&mut self, board: &Board, params: IddfsParams) -> IddfsResult {
        self.moves.clear();
        self.nodes = 0;
        let mut board = board.clone();
        for limit in 0..=params.max_depth {
            debug!("iddfs: depth limit {limit}");
            if self.depth_limited(&mut board, limit, 0, None) {
                return IddfsResult {
                    moves: Some(self.moves.clone()),
                    nodes: self.nodes,
                };
            }
        }
        IddfsResult {
            moves: None,
            nodes: self.nodes,
        }
    }

    fn depth_limited(
        &mut self,
        board: &mut Board,
        limit: u32,
        depth: u32,
        last: Option<Direction>,
    ) -> bool {
        self.nodes += 1;
        if board.is_goal() {
            return true;
        }
        if depth == limit {
            return false;
        }
        for dir in DIRECTIONS {
            if last == Some(dir.opposite()) {
                continue;
            }
            if !board.move_blank(dir) {
                continue;
            }
            self.moves.push(dir);
            if self.depth_limited(board, limit, depth + 1, Some(dir)) {
                return true;
            }
            self.moves.pop();
            board.move_blank(dir.opposite());
        }
        false
    }
}
