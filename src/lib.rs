#[macro_use]
extern crate pest_derive;

pub mod attacks;
pub mod board;
pub mod board_string;
pub mod generation;
pub mod symmetry;
pub mod validity;
