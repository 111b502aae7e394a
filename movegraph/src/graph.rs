use std::sync::LazyLock;

use log::{debug, trace};

use super::{generate, PieceKind, Square, BOARD_SIZE, MAX_DESTINATIONS};

/// An alias for an [`arrayvec::ArrayVec`] containing at most [`MAX_DESTINATIONS`] squares.
pub type Destinations = arrayvec::ArrayVec<Square, MAX_DESTINATIONS>;

/// Destinations for every origin square of a single [`PieceKind`], indexed by [`Square::index`].
type DestinationTable = [Destinations; Square::COUNT];

/// The process-wide [`MoveGraph`], built on first access.
pub static MOVE_GRAPH: LazyLock<MoveGraph> = LazyLock::new(MoveGraph::build);

/// Fetches the process-wide [`MoveGraph`], building it if this is the first call.
pub fn move_graph() -> &'static MoveGraph {
    &MOVE_GRAPH
}

/// Builds a new [`MoveGraph`]. Alias for [`MoveGraph::build`].
pub fn build() -> MoveGraph {
    MoveGraph::build()
}

/// Fetches the destinations of `kind` from `origin` in `graph`. Alias for [`MoveGraph::lookup`].
pub fn lookup(graph: &MoveGraph, kind: PieceKind, origin: Square) -> &[Square] {
    graph.lookup(kind, origin)
}

/// Precomputed pseudo-legal moves for every [`PieceKind`] from every square.
///
/// "Pseudo-legal" means the geometry of a piece's movement is all that is considered:
/// there are no other pieces on this board, so nothing blocks, nothing is captured, and nobody is in check.
///
/// A [`MoveGraph`] is built all at once and cannot be modified afterwards,
/// so a single instance can be shared freely between threads.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct MoveGraph {
    tables: [Box<DestinationTable>; PieceKind::COUNT],
}

impl MoveGraph {
    /// Constructs a new [`MoveGraph`]. Alias for [`MoveGraph::build`].
    pub fn new() -> Self {
        Self::build()
    }

    /// Builds the tables for every [`PieceKind`] by generating the moves from each of its origin squares.
    ///
    /// Pawns are only given moves from rows they could actually stand on and move from
    /// (see [`PieceKind::origin_rows`]); every other origin is left empty.
    pub fn build() -> Self {
        let tables = PieceKind::all().map(Self::build_table);
        let graph = Self { tables };

        for kind in PieceKind::iter() {
            debug!("built {} edges for {kind}", graph.edge_count(kind));
        }

        graph
    }

    fn build_table(kind: PieceKind) -> Box<DestinationTable> {
        let mut table: Box<DestinationTable> =
            Box::new(std::array::from_fn(|_| Destinations::new()));

        for row in kind.origin_rows() {
            for col in 0..BOARD_SIZE {
                let origin = Square::new(row, col);
                if let Some(index) = origin.index() {
                    table[index] = generate(kind, origin);
                }
            }
        }

        table
    }

    /// Fetches every square a piece of `kind` can reach from `origin`.
    ///
    /// Yields an empty slice if `origin` is off the board, or is a square the piece can never move from.
    ///
    /// # Example
    /// ```
    /// # use movegraph::*;
    /// let graph = MoveGraph::new();
    /// let moves = graph.lookup(PieceKind::King, Square::new(7, 7));
    /// assert_eq!(moves, &[Square::new(6, 7), Square::new(6, 6), Square::new(7, 6)]);
    ///
    /// assert!(graph.lookup(PieceKind::King, Square::new(8, 8)).is_empty());
    /// ```
    pub fn lookup(&self, kind: PieceKind, origin: Square) -> &[Square] {
        match origin.index() {
            Some(index) => &self.tables[kind][index],
            None => &[],
        }
    }

    /// Fetches every square the piece identified by `selector` can reach from `origin`.
    ///
    /// This is meant for unvalidated input, such as a number typed in by a user:
    /// a `selector` outside of `[1,7]` is not an error, it just has no moves.
    ///
    /// # Example
    /// ```
    /// # use movegraph::*;
    /// let graph = MoveGraph::new();
    /// assert_eq!(graph.lookup_selector(1, Square::new(0, 0)).len(), 2);
    /// assert!(graph.lookup_selector(8, Square::new(0, 0)).is_empty());
    /// ```
    pub fn lookup_selector(&self, selector: i64, origin: Square) -> &[Square] {
        match PieceKind::from_selector(selector) {
            Ok(kind) => self.lookup(kind, origin),
            Err(err) => {
                trace!("no moves for {origin}: {err}");
                &[]
            }
        }
    }

    /// Returns `true` if a piece of `kind` can move from `from` to `to`.
    pub fn contains(&self, kind: PieceKind, from: Square, to: Square) -> bool {
        self.lookup(kind, from).contains(&to)
    }

    /// An iterator over every `(origin, destination)` pair for `kind`, in row-major order of origin.
    pub fn edges(&self, kind: PieceKind) -> impl Iterator<Item = (Square, Square)> + '_ {
        Square::iter().flat_map(move |from| {
            self.lookup(kind, from)
                .iter()
                .map(move |to| (from, *to))
        })
    }

    /// Total number of moves available to `kind`, across all origin squares.
    pub fn edge_count(&self, kind: PieceKind) -> usize {
        self.tables[kind].iter().map(Destinations::len).sum()
    }
}

impl Default for MoveGraph {
    fn default() -> Self {
        Self::build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_counts() {
        let graph = MoveGraph::new();
        assert_eq!(graph.edge_count(PieceKind::Knight), 336);
        assert_eq!(graph.edge_count(PieceKind::Rook), 64 * 14);
        assert_eq!(graph.edge_count(PieceKind::Bishop), 560);
        assert_eq!(graph.edge_count(PieceKind::Queen), 64 * 14 + 560);
        assert_eq!(graph.edge_count(PieceKind::King), 420);
    }

    #[test]
    fn test_pawn_edge_counts() {
        let graph = MoveGraph::new();
        // Per row: 8 pushes and 14 captures, plus 8 double pushes from the starting row
        let expected = 7 * (8 + 14) + 8;
        assert_eq!(graph.edge_count(PieceKind::WhitePawn), expected);
        assert_eq!(graph.edge_count(PieceKind::BlackPawn), expected);
    }

    #[test]
    fn test_edges_agree_with_lookup() {
        let graph = MoveGraph::new();
        for kind in PieceKind::iter() {
            assert_eq!(graph.edges(kind).count(), graph.edge_count(kind));
            for (from, to) in graph.edges(kind) {
                assert!(graph.contains(kind, from, to));
            }
        }
    }

    #[test]
    fn test_shared_graph_matches_fresh_graph() {
        assert_eq!(move_graph(), &build());
        assert!(std::ptr::eq(move_graph(), move_graph()));
    }
}
