use std::{collections::HashSet, sync::Arc, thread};

use movegraph::{build, lookup, move_graph, MoveGraph, PieceKind, Square};

fn set_of(squares: &[Square]) -> HashSet<Square> {
    squares.iter().copied().collect()
}

fn set_from(pairs: &[(i8, i8)]) -> HashSet<Square> {
    pairs.iter().copied().map(Square::from).collect()
}

#[test]
fn test_off_board_origins_are_empty() {
    let graph = build();
    let off_board = [
        (-1, 0),
        (0, -1),
        (8, 0),
        (0, 8),
        (8, 8),
        (-5, 12),
        (i8::MIN, i8::MAX),
    ];

    for kind in PieceKind::iter() {
        for (row, col) in off_board {
            assert!(
                lookup(&graph, kind, Square::new(row, col)).is_empty(),
                "{kind} at ({row}, {col}) should have no moves"
            );
        }
    }
}

#[test]
fn test_every_destination_is_on_the_board() {
    let graph = build();
    for kind in PieceKind::iter() {
        for origin in Square::iter() {
            for to in graph.lookup(kind, origin) {
                assert!(to.is_valid(), "{kind} at {origin} reaches {to:?}");
                assert_ne!(*to, origin, "{kind} at {origin} reaches its own square");
            }
        }
    }
}

#[test]
fn test_knight_in_the_corner() {
    let graph = build();
    let moves = graph.lookup(PieceKind::Knight, Square::new(0, 0));
    assert_eq!(moves.len(), 2);
    assert_eq!(set_of(moves), set_from(&[(2, 1), (1, 2)]));
}

#[test]
fn test_rook_sees_its_rank_and_file() {
    let graph = build();
    let origin = Square::new(3, 3);
    let moves = graph.lookup(PieceKind::Rook, origin);

    assert_eq!(moves.len(), 14);
    assert!(!moves.contains(&origin));
    assert!(moves.iter().all(|sq| sq.row() == 3 || sq.col() == 3));
}

#[test]
fn test_bishop_in_the_corner() {
    let graph = build();
    let moves = graph.lookup(PieceKind::Bishop, Square::new(0, 0));
    let diagonal = (1..8i8).map(|i| (i, i)).collect::<Vec<_>>();

    assert_eq!(moves.len(), 7);
    assert_eq!(set_of(moves), set_from(&diagonal));
}

#[test]
fn test_king_in_the_corner() {
    let graph = build();
    let moves = graph.lookup(PieceKind::King, Square::new(7, 7));
    assert_eq!(moves.len(), 3);
    assert_eq!(set_of(moves), set_from(&[(6, 7), (6, 6), (7, 6)]));
}

#[test]
fn test_white_pawn_on_starting_row() {
    let graph = build();
    let moves = set_of(graph.lookup(PieceKind::WhitePawn, Square::new(6, 3)));
    assert_eq!(moves, set_from(&[(5, 3), (4, 3), (5, 2), (5, 4)]));
}

#[test]
fn test_white_pawn_about_to_promote() {
    let graph = build();
    let moves = set_of(graph.lookup(PieceKind::WhitePawn, Square::new(1, 3)));
    assert_eq!(moves, set_from(&[(0, 3), (0, 2), (0, 4)]));
    assert!(!moves.contains(&Square::new(-1, 3)));
}

#[test]
fn test_black_pawn_on_starting_row() {
    let graph = build();
    let moves = set_of(graph.lookup(PieceKind::BlackPawn, Square::new(1, 3)));
    assert_eq!(moves, set_from(&[(2, 3), (3, 3), (2, 2), (2, 4)]));
}

#[test]
fn test_pawns_never_move_off_their_last_row() {
    let graph = build();
    for col in 0..8 {
        assert!(graph.lookup(PieceKind::WhitePawn, Square::new(0, col)).is_empty());
        assert!(graph.lookup(PieceKind::BlackPawn, Square::new(7, col)).is_empty());
    }
}

#[test]
fn test_pawns_only_move_forward() {
    let graph = build();
    for origin in Square::iter() {
        for to in graph.lookup(PieceKind::WhitePawn, origin) {
            assert!(to.row() < origin.row());
        }
        for to in graph.lookup(PieceKind::BlackPawn, origin) {
            assert!(to.row() > origin.row());
        }
    }
}

#[test]
fn test_unknown_selectors_are_empty() {
    let graph = build();
    for selector in [i64::MIN, -1, 0, 8, 9, 100] {
        for origin in Square::iter() {
            assert!(graph.lookup_selector(selector, origin).is_empty());
        }
    }
}

#[test]
fn test_selectors_match_kinds() {
    let graph = build();
    for kind in PieceKind::iter() {
        for origin in Square::iter() {
            assert_eq!(
                graph.lookup_selector(kind.selector() as i64, origin),
                graph.lookup(kind, origin)
            );
        }
    }
}

#[test]
fn test_queen_is_rook_plus_bishop() {
    let graph = build();
    for origin in Square::iter() {
        let mut expected = set_of(graph.lookup(PieceKind::Rook, origin));
        expected.extend(graph.lookup(PieceKind::Bishop, origin));
        assert_eq!(set_of(graph.lookup(PieceKind::Queen, origin)), expected);
    }
}

#[test]
fn test_symmetric_pieces_have_symmetric_graphs() {
    let graph = build();
    for kind in PieceKind::iter().filter(|kind| !kind.is_pawn()) {
        for (from, to) in graph.edges(kind) {
            assert!(graph.contains(kind, to, from), "{kind}: {from} -> {to} is one-way");
        }
    }
}

#[test]
fn test_building_is_deterministic() {
    assert_eq!(build(), build());
    assert_eq!(MoveGraph::new(), MoveGraph::default());
}

#[test]
fn test_graph_is_shareable_across_threads() {
    let graph = Arc::new(build());

    let handles = PieceKind::iter()
        .map(|kind| {
            let graph = Arc::clone(&graph);
            thread::spawn(move || {
                Square::iter()
                    .map(|origin| graph.lookup(kind, origin).to_vec())
                    .collect::<Vec<_>>()
            })
        })
        .collect::<Vec<_>>();

    for (kind, handle) in PieceKind::iter().zip(handles) {
        let from_thread = handle.join().unwrap();
        for (origin, moves) in Square::iter().zip(from_thread) {
            assert_eq!(moves, move_graph().lookup(kind, origin));
        }
    }
}
