use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use npuzzle::board::{Board, Direction};
use npuzzle::io::parse_board;
use npuzzle::search::astar::{SearchParams, Searcher};
use npuzzle::search::eval::Heuristic;
use npuzzle::search::iddfs::{DeepeningSearcher, IddfsParams, DEFAULT_MAX_DEPTH};

#[derive(Parser, Debug)]
#[command(version, about = "Solve sliding-tile puzzles with A* or iterative deepening", long_about = None)]
struct Args {
    /// Puzzle file: N*N whitespace-separated tiles, row-major, X for the blank
    puzzle: PathBuf,

    /// Search strategy: 'astar' or 'iddfs'
    #[arg(long, default_value = "astar")]
    strategy: String,

    /// A* heuristic: 'misplaced', 'manhattan', or 'linear-conflict'
    #[arg(long, default_value = "manhattan")]
    heuristic: String,

    /// Rescore A* children with the configured heuristic instead of the
    /// cheap misplaced-tiles count
    #[arg(long)]
    rescore_children: bool,

    /// Give up A* after this many expansions
    #[arg(long)]
    max_expansions: Option<u64>,

    /// Depth cap for iterative deepening
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: u32,

    /// Search even if the parity check says the board is unsolvable
    #[arg(long)]
    force: bool,

    /// Emit the result as JSON
    #[arg(long)]
    json: bool,
}

fn parse_heuristic(s: &str) -> Result<Heuristic> {
    match s.to_lowercase().as_str() {
        "misplaced" | "misplaced-tiles" => Ok(Heuristic::MisplacedTiles),
        "manhattan" => Ok(Heuristic::Manhattan),
        "linear" | "linear-conflict" => Ok(Heuristic::LinearConflict),
        _ => bail!("Invalid heuristic: use 'misplaced', 'manhattan', or 'linear-conflict'"),
    }
}

fn format_moves(moves: &[Direction]) -> String {
    let labels: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
    format!("[{}]", labels.join(", "))
}

fn print_solved(board: &Board, moves: &[Direction]) {
    let mut solved = board.clone();
    solved.apply_moves(moves);
    println!("{solved}");
}

fn run_astar(args: &Args, board: &Board) -> Result<()> {
    let heuristic = parse_heuristic(&args.heuristic)?;
    let params = SearchParams {
        heuristic,
        cheap_child_estimates: !args.rescore_children,
        max_expansions: args.max_expansions,
    };
    let mut searcher = Searcher::default();
    let start = Instant::now();
    let result = searcher.search(board, params);
    info!(
        "astar: {} expansions in {:.2}s",
        result.expanded,
        start.elapsed().as_secs_f32()
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        if result.moves.is_none() {
            std::process::exit(1);
        }
        return Ok(());
    }
    match &result.moves {
        Some(moves) => {
            println!("Puzzle solved with A* using {heuristic}!");
            print_solved(board, moves);
            println!("Moves: {}", format_moves(moves));
            println!("Path cost: {}", result.cost);
            println!("Maximum depth reached: {}", result.max_depth);
            println!("States expanded: {}", result.expanded);
            Ok(())
        }
        None => bail!("no solution found after {} expansions", result.expanded),
    }
}

fn run_iddfs(args: &Args, board: &Board) -> Result<()> {
    let params = IddfsParams {
        max_depth: args.max_depth,
    };
    let mut searcher = DeepeningSearcher::default();
    let start = Instant::now();
    let result = searcher.search(board, params);
    info!(
        "iddfs: {} nodes in {:.2}s",
        result.nodes,
        start.elapsed().as_secs_f32()
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        if result.moves.is_none() {
            std::process::exit(1);
        }
        return Ok(());
    }
    match &result.moves {
        Some(moves) => {
            println!("Puzzle solved with IDDFS!");
            print_solved(board, moves);
            println!("Moves: {}", format_moves(moves));
            println!("Path cost: {}", moves.len());
            println!("Nodes visited: {}", result.nodes);
            Ok(())
        }
        None => bail!(
            "no solution found within depth {} ({} nodes visited)",
            args.max_depth,
            result.nodes
        ),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let text = fs::read_to_string(&args.puzzle)
        .with_context(|| format!("reading {}", args.puzzle.display()))?;
    let board = parse_board(&text)?;

    println!("Initial puzzle:\n{board}");

    if !board.is_solvable() && !args.force {
        bail!("board fails the parity check and cannot be solved (pass --force to search anyway)");
    }

    match args.strategy.as_str() {
        "astar" => run_astar(&args, &board),
        "iddfs" => run_iddfs(&args, &board),
        _ => bail!("Invalid strategy: use 'astar' or 'iddfs'"),
    }
}
