use clap::Parser;
use colored::Color;
use movegraph::Square;

/// Banner printed when the explorer starts up.
pub const BANNER: &str = r"
  __  __                   ____                 _
 |  \/  | _____   _____   / ___|_ __ __ _ _ __ | |__
 | |\/| |/ _ \ \ / / _ \ | |  _| '__/ _` | '_ \| '_ \
 | |  | | (_) \ V /  __/ | |_| | | | (_| | |_) | | | |
 |_|  |_|\___/ \_/ \___|  \____|_|  \__,_| .__/|_| |_|
                                         |_|
";

/// Color of the [`BANNER`].
pub const BANNER_COLOR: Color = Color::Yellow;

/// Prompt for choosing a piece.
pub const PIECE_PROMPT: &str = "Enter your choice (or 'exit' to quit): ";

/// Prompt for choosing the square a piece stands on.
pub const SQUARE_PROMPT: &str = "Enter the position of the piece (row col): ";

/// Prompt for the column, after the row was entered on its own.
pub const COL_PROMPT: &str = "Enter the column of the piece: ";

/// Background of a light square on the rendered board.
pub const LIGHT_SQUARE: Color = Color::TrueColor {
    r: 240,
    g: 217,
    b: 181,
};

/// Background of a dark square on the rendered board.
pub const DARK_SQUARE: Color = Color::TrueColor {
    r: 181,
    g: 136,
    b: 99,
};

/// Background of a square the selected piece can move to.
pub const HIGHLIGHT: Color = Color::Green;

/// Background of the square the selected piece stands on.
pub const ORIGIN: Color = Color::Blue;

/// Explore the squares each chess piece can reach in a single move.
///
/// Without arguments, an interactive prompt is started.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Piece to query, as a number between 1 and 7 or a name such as `knight` or `white-pawn`
    #[arg(short, long, requires = "square")]
    pub piece: Option<String>,

    /// Square the piece stands on, as `row,col`
    #[arg(short, long, requires = "piece", allow_hyphen_values = true)]
    pub square: Option<Square>,

    /// Disable colored output
    #[arg(long)]
    pub plain: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_shot_query_args() {
        let cli = Cli::try_parse_from(["explorer", "--piece", "queen", "--square", "3,4"]).unwrap();
        assert_eq!(cli.piece.as_deref(), Some("queen"));
        assert_eq!(cli.square, Some(Square::new(3, 4)));
        assert!(!cli.plain);

        let cli = Cli::try_parse_from(["explorer", "-p", "9", "-s", "-1,0", "--plain"]).unwrap();
        assert_eq!(cli.square, Some(Square::new(-1, 0)));
        assert!(cli.plain);
    }

    #[test]
    fn test_piece_and_square_go_together() {
        assert!(Cli::try_parse_from(["explorer", "--piece", "queen"]).is_err());
        assert!(Cli::try_parse_from(["explorer", "--square", "3,4"]).is_err());
        assert!(Cli::try_parse_from(["explorer", "--square", "e4", "--piece", "1"]).is_err());

        let cli = Cli::try_parse_from(["explorer"]).unwrap();
        assert!(cli.piece.is_none() && cli.square.is_none());
    }
}
