use macroquad::prelude::*;

use movegraph::{move_graph, PieceKind, Square, BOARD_SIZE};

/// Keys for selecting each piece, in selector order.
const PIECE_KEYS: [KeyCode; PieceKind::COUNT] = [
    KeyCode::Key1,
    KeyCode::Key2,
    KeyCode::Key3,
    KeyCode::Key4,
    KeyCode::Key5,
    KeyCode::Key6,
    KeyCode::Key7,
];

fn draw_centered_text(text: &str, x: f32, y: f32, font_size: f32, color: Color) {
    let center = get_text_center(text, None, font_size as u16, 1.0, 0.0);
    draw_text(text, x - center.x, y - center.y, font_size, color);
}

fn parse_args() -> PieceKind {
    std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(PieceKind::Knight)
}

/// Converts a mouse position to the square underneath it, if it is over the board.
fn mouse_to_square(
    mouse_x: f32,
    mouse_y: f32,
    start_x: f32,
    start_y: f32,
    size: f32,
) -> Option<Square> {
    let col = ((mouse_x - start_x) / size).floor();
    let row = ((mouse_y - start_y) / size).floor();
    let in_range = |n: f32| (0.0..BOARD_SIZE as f32).contains(&n);

    if in_range(row) && in_range(col) {
        Square::checked(row as i8, col as i8)
    } else {
        None
    }
}

#[macroquad::main("Move Graph Viewer")]
async fn main() {
    env_logger::init();

    let graph = move_graph();
    let mut kind = parse_args();
    let mut origin: Option<Square> = None;

    loop {
        // Compute all necessary coordinates and values
        let (center_x, center_y) = (screen_width() / 2., screen_height() / 2.);
        let square_size = screen_height().min(screen_width()) / 12.0;
        let start_x = center_x - (square_size * 4.0);
        let start_y = center_y - (square_size * 4.0);
        let text_size = square_size / 2.0;

        // Switch pieces with the number keys
        for (key, candidate) in PIECE_KEYS.into_iter().zip(PieceKind::iter()) {
            if is_key_pressed(key) {
                kind = candidate;
                log::info!("selected {kind}");
            }
        }

        // If the mouse is clicked, move the piece to the square clicked
        if is_mouse_button_pressed(MouseButton::Left) {
            let (mouse_x, mouse_y) = mouse_position();
            origin = mouse_to_square(mouse_x, mouse_y, start_x, start_y, square_size);
        }

        let destinations = origin
            .map(|origin| graph.lookup(kind, origin))
            .unwrap_or_default();

        // Reset the canvas
        clear_background(GRAY);

        // Draw a chessboard, rows growing downward
        for square in Square::iter() {
            let x = start_x + square.col() as f32 * square_size;
            let y = start_y + square.row() as f32 * square_size;
            let text_color = if square.is_light() { BLACK } else { WHITE };

            let color = if Some(square) == origin {
                SKYBLUE
            } else if destinations.contains(&square) {
                if square.is_light() {
                    GREEN
                } else {
                    DARKGREEN
                }
            } else if square.is_light() {
                BEIGE
            } else {
                DARKBROWN
            };

            draw_rectangle(x, y, square_size, square_size, color);
            draw_text(
                square.to_string().as_str(),
                x + text_size / 4.0,
                y + text_size,
                text_size / 1.5,
                text_color,
            );

            if Some(square) == origin {
                draw_centered_text(
                    &kind.char().to_string(),
                    x + square_size / 2.0,
                    y + square_size / 2.0,
                    text_size * 1.5,
                    BLACK,
                );
            }
        }

        let title = format!("{} ({}): {} moves", kind, kind.selector(), destinations.len());
        draw_centered_text(&title, center_x, start_y / 2.0, text_size * 1.5, WHITE);
        draw_centered_text(
            "Press 1-7 to choose a piece, click a square to place it",
            center_x,
            start_y + square_size * 8.0 + start_y / 2.0,
            text_size,
            WHITE,
        );

        next_frame().await;
    }
}
