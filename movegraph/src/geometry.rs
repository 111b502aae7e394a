use super::{
    Color, Destinations, PieceKind, Square, BOARD_SIZE, KING_DELTAS, KNIGHT_DELTAS,
    PAWN_CAPTURE_COLS,
};

/// Generates every square a piece of `kind` at `origin` can reach in a single move, ignoring all other pieces.
///
/// Candidates that fall off the board are silently dropped, as is everything when `origin` itself is off the board.
/// The order of the yielded squares is stable, but carries no meaning.
///
/// # Example
/// ```
/// # use movegraph::*;
/// let moves = generate(PieceKind::Knight, Square::new(0, 0));
/// assert_eq!(moves.as_slice(), &[Square::new(2, 1), Square::new(1, 2)]);
/// ```
pub fn generate(kind: PieceKind, origin: Square) -> Destinations {
    let mut moves = Destinations::new();

    if !origin.is_valid() {
        return moves;
    }

    match kind {
        PieceKind::Knight => leaper_moves(origin, &KNIGHT_DELTAS, &mut moves),
        PieceKind::King => leaper_moves(origin, &KING_DELTAS, &mut moves),
        PieceKind::Rook => orthogonal_moves(origin, &mut moves),
        PieceKind::Bishop => diagonal_moves(origin, &mut moves),
        PieceKind::Queen => {
            orthogonal_moves(origin, &mut moves);
            diagonal_moves(origin, &mut moves);
        }
        PieceKind::WhitePawn => pawn_moves(origin, Color::White, &mut moves),
        PieceKind::BlackPawn => pawn_moves(origin, Color::Black, &mut moves),
    }

    moves
}

/// Appends `candidate` to `moves` if it lies on the board.
fn push_if_valid(moves: &mut Destinations, candidate: Square) {
    if candidate.is_valid() {
        moves.push(candidate);
    }
}

/// Moves for the "Leaper" pieces, which jump a fixed distance away.
///
/// In standard chess, the Leapers are the King and Knight.
fn leaper_moves(origin: Square, deltas: &[(i8, i8)], moves: &mut Destinations) {
    for (dr, dc) in deltas {
        push_if_valid(moves, origin.offset(*dr, *dc));
    }
}

/// Every other square on the rank and file of `origin`, alternating between the file and the rank.
fn orthogonal_moves(origin: Square, moves: &mut Destinations) {
    for i in 0..BOARD_SIZE {
        if i != origin.row() {
            push_if_valid(moves, Square::new(i, origin.col()));
        }
        if i != origin.col() {
            push_if_valid(moves, Square::new(origin.row(), i));
        }
    }
}

/// Every square on both diagonals through `origin`, walking from the furthest "up" to the furthest "down".
fn diagonal_moves(origin: Square, moves: &mut Destinations) {
    for i in -(BOARD_SIZE - 1)..BOARD_SIZE {
        if i == 0 {
            continue;
        }
        push_if_valid(moves, origin.offset(i, i));
        push_if_valid(moves, origin.offset(i, -i));
    }
}

/// A single push forward (two from the starting row), followed by both diagonal captures.
///
/// Captures are always included, since nothing about occupancy is known here.
fn pawn_moves(origin: Square, color: Color, moves: &mut Destinations) {
    let forward = color.forward();

    push_if_valid(moves, origin.offset(forward, 0));
    if origin.row() == color.pawn_start_row() {
        push_if_valid(moves, origin.offset(forward * 2, 0));
    }

    for dc in PAWN_CAPTURE_COLS {
        push_if_valid(moves, origin.offset(forward, dc));
    }
}
