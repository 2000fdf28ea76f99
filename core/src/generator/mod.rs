use crate::*;
pub use random::*;

mod random;

/// Strategy for choosing where the mines go on a fresh board.
pub trait MineGenerator {
    fn generate(self, config: &BoardConfig) -> Vec<Coord2>;
}
