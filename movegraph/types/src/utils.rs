/// Number of rows (and columns) on the board.
pub const BOARD_SIZE: i8 = 8;

/// Upper bound on the number of destinations any piece can have from a single square.
///
/// A Queen on one of the four central squares reaches 27 squares (14 along its rank and file,
/// 13 along its diagonals), so 28 always suffices.
pub const MAX_DESTINATIONS: usize = 28;

/// Row from which a White Pawn may push forward by two.
///
/// Rows grow downward, so White starts near the bottom of the board and moves "up".
pub const WHITE_PAWN_START_ROW: i8 = 6;

/// Row from which a Black Pawn may push forward by two.
pub const BLACK_PAWN_START_ROW: i8 = 1;

/// Deltas for the movement of the Knight, as `(row, col)` pairs.
pub const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

/// Deltas for the movement of the King, as `(row, col)` pairs.
///
/// Starts straight down and winds counter-clockwise around the origin.
pub const KING_DELTAS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// Column deltas for the diagonal (capturing) moves of a Pawn.
pub const PAWN_CAPTURE_COLS: [i8; 2] = [-1, 1];
