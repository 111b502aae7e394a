use std::fmt;

use colored::Colorize;
use movegraph::{MoveGraph, PieceKind, Square, BOARD_SIZE};

use crate::config::{DARK_SQUARE, HIGHLIGHT, LIGHT_SQUARE, ORIGIN};

/// A printable board with a piece on `origin` and every square it can reach marked.
///
/// Marks are always drawn as characters, so the board still reads correctly when colors are disabled.
///
/// ```text
///     0 1 2 3 4 5 6 7
///   0 . . . . . . . .
///   1 . . . . . . . .
///   2 . . . . . . . .
///   3 . . . . . . . .
///   4 . . . . . . . .
///   5 . X . . . . . .
///   6 . . X . . . . .
///   7 N . . . . . . .
/// ```
pub struct BoardView<'a> {
    piece: Option<PieceKind>,
    origin: Square,
    destinations: &'a [Square],
}

impl<'a> BoardView<'a> {
    /// Creates a new [`BoardView`].
    ///
    /// If `piece` is `None` (such as for an unknown selector), the origin is drawn as `?`.
    pub fn new(piece: Option<PieceKind>, origin: Square, destinations: &'a [Square]) -> Self {
        Self {
            piece,
            origin,
            destinations,
        }
    }

    fn cell(&self, square: Square) -> String {
        let background = if square.is_light() {
            LIGHT_SQUARE
        } else {
            DARK_SQUARE
        };

        let (mark, background) = if square == self.origin {
            let mark = self.piece.map(|piece| piece.char()).unwrap_or('?');
            (mark, ORIGIN)
        } else if self.destinations.contains(&square) {
            ('X', HIGHLIGHT)
        } else {
            ('.', background)
        };

        format!(" {mark}").black().on_color(background).to_string()
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..BOARD_SIZE {
            write!(f, " {col}")?;
        }
        writeln!(f)?;

        for row in 0..BOARD_SIZE {
            write!(f, "  {row}")?;
            for col in 0..BOARD_SIZE {
                write!(f, "{}", self.cell(Square::new(row, col)))?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// A printable board showing how many moves `kind` has from each square.
pub struct TableView<'a> {
    graph: &'a MoveGraph,
    kind: PieceKind,
}

impl<'a> TableView<'a> {
    /// Creates a new [`TableView`].
    pub fn new(graph: &'a MoveGraph, kind: PieceKind) -> Self {
        Self { graph, kind }
    }
}

impl fmt::Display for TableView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Moves per square for the {}:", self.kind)?;
        write!(f, "   ")?;
        for col in 0..BOARD_SIZE {
            write!(f, " {col:>2}")?;
        }
        writeln!(f)?;

        for row in 0..BOARD_SIZE {
            write!(f, "  {row}")?;
            for col in 0..BOARD_SIZE {
                let count = self.graph.lookup(self.kind, Square::new(row, col)).len();
                write!(f, " {count:>2}")?;
            }
            writeln!(f)?;
        }

        write!(f, "Total: {}", self.graph.edge_count(self.kind))
    }
}

/// Formats `destinations` as a space-separated list, like `2,1 1,2`.
pub fn format_destinations(destinations: &[Square]) -> String {
    destinations
        .iter()
        .map(Square::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(s: impl ToString) -> String {
        colored::control::set_override(false);
        s.to_string()
    }

    #[test]
    fn test_knight_in_the_corner() {
        let graph = MoveGraph::new();
        let origin = Square::new(7, 0);
        let moves = graph.lookup(PieceKind::Knight, origin);

        assert_eq!(
            plain(BoardView::new(Some(PieceKind::Knight), origin, moves)),
            "    0 1 2 3 4 5 6 7
  0 . . . . . . . .
  1 . . . . . . . .
  2 . . . . . . . .
  3 . . . . . . . .
  4 . . . . . . . .
  5 . X . . . . . .
  6 . . X . . . . .
  7 N . . . . . . .
"
        );
    }

    #[test]
    fn test_unknown_piece_marks_origin_only() {
        let board = plain(BoardView::new(None, Square::new(0, 0), &[]));
        assert_eq!(board.matches('?').count(), 1);
        assert_eq!(board.matches('X').count(), 0);
    }

    #[test]
    fn test_table_view_counts() {
        let graph = MoveGraph::new();
        let table = plain(TableView::new(&graph, PieceKind::Rook));
        assert!(table.lines().skip(2).take(8).all(|line| line.matches("14").count() == 8));
        assert!(table.ends_with("Total: 896"));
    }

    #[test]
    fn test_format_destinations() {
        let graph = MoveGraph::new();
        let moves = graph.lookup(PieceKind::Knight, Square::new(0, 0));
        assert_eq!(format_destinations(moves), "2,1 1,2");
        assert_eq!(format_destinations(&[]), "");
    }
}
