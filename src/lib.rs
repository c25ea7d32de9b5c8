pub mod board;
pub mod io;
pub mod search;
