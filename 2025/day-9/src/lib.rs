pub mod compress;
pub mod error;
pub mod fill;
pub mod grid;
pub mod parser;
pub mod part1;
pub mod part2;
pub mod polygon;
