/// Enums for the kinds of pieces that have a move graph.
pub mod piece;
/// Squares on a chessboard, addressed by row and column.
pub mod square;
/// Misc utility constants, such as board dimensions and movement deltas.
pub mod utils;

pub use piece::*;
pub use square::*;
pub use utils::*;

/// Re-exports all the things you'll need.
pub mod prelude {
    pub use crate::piece::*;
    pub use crate::square::*;
    pub use crate::utils::*;
}
