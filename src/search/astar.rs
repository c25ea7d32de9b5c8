use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};
use std::rc::Rc;

use log::debug;
use serde::Serialize;

use crate::board::{Board, Direction, DIRECTIONS};
use crate::search::eval::{misplaced_tiles, Heuristic};

#[derive(Debug, Clone, Copy)]
pub struct SearchParams {
    /// Heuristic used to score the root node.
    pub heuristic: Heuristic,
    /// When true, generated children are rescored with the cheap
    /// misplaced-tiles count no matter which heuristic scored the root.
    /// This mirrors the reference solver; set false to carry the configured
    /// heuristic through the whole run.
    pub cheap_child_estimates: bool,
    /// Optional cap on expansions; the search gives up once it is reached.
    pub max_expansions: Option<u64>,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            heuristic: Heuristic::Manhattan,
            cheap_child_estimates: true,
            max_expansions: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    /// Move sequence from the initial board to the goal, or None when the
    /// frontier emptied (or the expansion cap was hit) without success.
    pub moves: Option<Vec<Direction>>,
    pub cost: u32,
    pub expanded: u64,
    pub max_depth: u32,
}

/// Frontier node. Immutable once enqueued; owns its board clone, shares the
/// parent chain for path reconstruction.
struct Node {
    board: Board,
    g: u32,
    h: u32,
    f: u32,
    parent: Option<Rc<Node>>,
    step: Option<Direction>,
}

/// Heap wrapper: smallest f wins, ties prefer larger g so deeper nodes with
/// less estimate in their total come out first.
struct Open(Rc<Node>);

impl Ord for Open {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .0
            .f
            .cmp(&self.0.f)
            .then_with(|| self.0.g.cmp(&other.0.g))
    }
}

impl PartialOrd for Open {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Open {
    fn eq(&self, other: &Self) -> bool {
        self.0.f == other.0.f && self.0.g == other.0.g
    }
}

impl Eq for Open {}

/// Best-first (A*) searcher. Counters are per-run accumulators, reset at the
/// top of every search and reported in the result.
#[derive(Default)]
pub struct Searcher {
    expanded: u64,
    max_depth: u32,
}

impl Searcher {
    pub fn search(&mut self, board: &Board, params: SearchParams) -> SearchResult {
        self.expanded = 0;
        self.max_depth = 0;

        let mut open = BinaryHeap::new();
        let mut closed: HashSet<String> = HashSet::new();

        let h = params.heuristic.evaluate(board);
        open.push(Open(Rc::new(Node {
            board: board.clone(),
            g: 0,
            h,
            f: h,
            parent: None,
            step: None,
        })));

        while let Some(Open(node)) = open.pop() {
            self.expanded += 1;
            self.max_depth = self.max_depth.max(node.g);
            if self.expanded % 10_000 == 0 {
                debug!(
                    "astar: expanded {} nodes, frontier {}, depth {}",
                    self.expanded,
                    open.len(),
                    node.g
                );
            }

            if node.board.is_goal() {
                return SearchResult {
                    moves: Some(reconstruct_path(&node)),
                    cost: node.g,
                    expanded: self.expanded,
                    max_depth: self.max_depth,
                };
            }

            if let Some(cap) = params.max_expansions {
                if self.expanded >= cap {
                    debug!("astar: expansion cap {cap} reached");
                    break;
                }
            }

            // A fingerprint already closed can still be popped here (stale
            // duplicates queued earlier are expanded again); only children
            // are filtered against the closed set, as in the reference.
            closed.insert(node.board.fingerprint());

            for dir in DIRECTIONS {
                let mut child = node.board.clone();
                if !child.move_blank(dir) {
                    continue;
                }
                if closed.contains(&child.fingerprint()) {
                    continue;
                }
                let h = if params.cheap_child_estimates {
                    misplaced_tiles(&child)
                } else {
                    params.heuristic.evaluate(&child)
                };
                let g = node.g + 1;
                open.push(Open(Rc::new(Node {
                    board: child,
                    g,
                    h,
                    f: g + h,
                    parent: Some(Rc::clone(&node)),
                    step: Some(dir),
                })));
            }
        }

        SearchResult {
            moves: None,
            cost: 0,
            expanded: self.expanded,
            max_depth: self.max_depth,
        }
    }
}

/// Walks parent links from the goal node back to the root, then reverses.
fn reconstruct_path(goal: &Rc<Node>) -> Vec<Direction> {
    let mut moves = Vec::new();
    let mut cur = goal;
    while let Some(parent) = &cur.parent {
        if let Some(step) = cur.step {
            moves.push(step);
        }
        cur = parent;
    }
    moves.reverse();
    moves
}
