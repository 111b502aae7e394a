pub use types::*;

/// Generation of the squares a single piece can reach from a single square.
pub mod geometry;
/// The precomputed move graph for every piece, and lookups into it.
///
/// You probably want to look here.
pub mod graph;

pub use geometry::*;
pub use graph::*;

/// Re-exports all the things you'll need.
pub mod prelude {
    pub use crate::geometry::*;
    pub use crate::graph::*;
    pub use crate::utils::*;
}
