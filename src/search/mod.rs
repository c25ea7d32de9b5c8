pub mod astar;
pub mod eval;
pub mod iddfs;
