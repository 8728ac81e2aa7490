pub use board::*;
pub use errors::*;
pub use moves::*;
pub use strategy::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod errors;
mod moves;
mod strategy;
mod visualization;
