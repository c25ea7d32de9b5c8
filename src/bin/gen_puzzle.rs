use anyhow::Result;
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use npuzzle::board::Board;

#[derive(Parser, Debug)]
#[command(name = "gen_puzzle", about = "Generate a solvable sliding-tile puzzle")]
struct Args {
    /// Board dimension N (N x N grid)
    #[arg(value_name = "SIZE", default_value_t = 3)]
    size: usize,

    /// Number of random moves to scramble with
    #[arg(long, default_value_t = 20)]
    steps: usize,

    /// RNG seed for reproducible boards
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    let mut board = Board::goal(args.size)?;
    board.scramble(args.steps, &mut rng);
    print!("{board}");
    Ok(())
}
