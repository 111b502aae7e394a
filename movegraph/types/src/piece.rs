use std::{
    fmt,
    ops::{Index, RangeInclusive},
    str::FromStr,
};

use anyhow::{bail, Result};

use super::{BLACK_PAWN_START_ROW, BOARD_SIZE, WHITE_PAWN_START_ROW};

/// Represents the color of a Pawn, which decides the direction it travels.
///
/// White traditionally moves first, and therefore [`Color`] defaults to [`Color::White`].
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[repr(u8)]
pub enum Color {
    #[default]
    White,
    Black,
}

impl Color {
    /// Returns the row delta of a single step "forward" for this [`Color`].
    ///
    /// Rows grow downward, so White travels toward row `0` and Black toward row `7`.
    ///
    /// # Example
    /// ```
    /// # use types::Color;
    /// assert_eq!(Color::White.forward(), -1);
    /// assert_eq!(Color::Black.forward(), 1);
    /// ```
    pub const fn forward(&self) -> i8 {
        match self {
            Self::White => -1,
            Self::Black => 1,
        }
    }

    /// The row from which a Pawn of this [`Color`] may push forward by two.
    pub const fn pawn_start_row(&self) -> i8 {
        match self {
            Self::White => WHITE_PAWN_START_ROW,
            Self::Black => BLACK_PAWN_START_ROW,
        }
    }
}

/// Represents the kind of piece whose moves can be looked up in a move graph.
///
/// Pawns are the only pieces whose movement depends on their color, so each color of Pawn is its own kind.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum PieceKind {
    Knight,
    Rook,
    Bishop,
    Queen,
    King,
    WhitePawn,
    BlackPawn,
}

impl PieceKind {
    /// Number of piece variants.
    pub const COUNT: usize = 7;

    /// An array of all 7 [`PieceKind`]s, in selector order.
    ///
    /// In the order: `Knight`, `Rook`, `Bishop`, `Queen`, `King`, `WhitePawn`, `BlackPawn`.
    pub const fn all() -> [Self; Self::COUNT] {
        use PieceKind::*;
        [Knight, Rook, Bishop, Queen, King, WhitePawn, BlackPawn]
    }

    /// An iterator over all [`PieceKind`]s, starting with Knight.
    pub fn iter() -> impl Iterator<Item = Self> {
        Self::all().into_iter()
    }

    /// Creates a new [`PieceKind`] from the numeric selector used by front-ends.
    ///
    /// `selector` must be `[1,7]`: `1` is a Knight, `7` is a Black Pawn.
    ///
    /// # Example
    /// ```
    /// # use types::PieceKind;
    /// let queen = PieceKind::from_selector(4);
    /// assert!(queen.is_ok());
    /// assert_eq!(queen.unwrap(), PieceKind::Queen);
    ///
    /// assert!(PieceKind::from_selector(0).is_err());
    /// assert!(PieceKind::from_selector(8).is_err());
    /// ```
    pub fn from_selector(selector: i64) -> Result<Self> {
        match selector {
            1 => Ok(Self::Knight),
            2 => Ok(Self::Rook),
            3 => Ok(Self::Bishop),
            4 => Ok(Self::Queen),
            5 => Ok(Self::King),
            6 => Ok(Self::WhitePawn),
            7 => Ok(Self::BlackPawn),
            _ => bail!(
                "Invalid selector for PieceKind: Selector must be between [1,7]. Got {selector}."
            ),
        }
    }

    /// Fetches the numeric selector of this [`PieceKind`].
    ///
    /// Will always be `[1,7]`.
    ///
    /// # Example
    /// ```
    /// # use types::PieceKind;
    /// assert_eq!(PieceKind::Knight.selector(), 1);
    /// assert_eq!(PieceKind::BlackPawn.selector(), 7);
    /// ```
    pub const fn selector(&self) -> u8 {
        *self as u8 + 1
    }

    /// Returns this [`PieceKind`] as a `usize`.
    ///
    /// Useful for indexing into lists. Will always be `[0,6]`.
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// Fetches a human-readable name for this [`PieceKind`].
    ///
    /// # Example
    /// ```
    /// # use types::PieceKind;
    /// assert_eq!(PieceKind::WhitePawn.name(), "white pawn");
    /// ```
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Knight => "knight",
            Self::Rook => "rook",
            Self::Bishop => "bishop",
            Self::Queen => "queen",
            Self::King => "king",
            Self::WhitePawn => "white pawn",
            Self::BlackPawn => "black pawn",
        }
    }

    /// Converts this [`PieceKind`] to a character, in the style of algebraic notation.
    ///
    /// Pawns are `P`, and are uppercase when White and lowercase when Black.
    ///
    /// # Example
    /// ```
    /// # use types::PieceKind;
    /// assert_eq!(PieceKind::Knight.char(), 'N');
    /// assert_eq!(PieceKind::BlackPawn.char(), 'p');
    /// ```
    pub const fn char(&self) -> char {
        match self {
            Self::Knight => 'N',
            Self::Rook => 'R',
            Self::Bishop => 'B',
            Self::Queen => 'Q',
            Self::King => 'K',
            Self::WhitePawn => 'P',
            Self::BlackPawn => 'p',
        }
    }

    /// Fetches the [`Color`] of this [`PieceKind`], if it is a Pawn.
    pub const fn pawn_color(&self) -> Option<Color> {
        match self {
            Self::WhitePawn => Some(Color::White),
            Self::BlackPawn => Some(Color::Black),
            _ => None,
        }
    }

    /// Returns `true` if this [`PieceKind`] is a Pawn of either color.
    pub const fn is_pawn(&self) -> bool {
        self.pawn_color().is_some()
    }

    /// The rows a piece of this kind can start a move from.
    ///
    /// A Pawn can never stand on the row it would step off of, so those rows have no moves.
    ///
    /// # Example
    /// ```
    /// # use types::PieceKind;
    /// assert_eq!(PieceKind::Rook.origin_rows(), 0..=7);
    /// assert_eq!(PieceKind::WhitePawn.origin_rows(), 1..=7);
    /// assert_eq!(PieceKind::BlackPawn.origin_rows(), 0..=6);
    /// ```
    pub const fn origin_rows(&self) -> RangeInclusive<i8> {
        match self.pawn_color() {
            Some(Color::White) => 1..=BOARD_SIZE - 1,
            Some(Color::Black) => 0..=BOARD_SIZE - 2,
            None => 0..=BOARD_SIZE - 1,
        }
    }
}

impl<T> Index<PieceKind> for [T; PieceKind::COUNT] {
    type Output = T;
    /// [`PieceKind`] can be used to index into a list of seven elements.
    fn index(&self, index: PieceKind) -> &Self::Output {
        &self[index.index()]
    }
}

impl TryFrom<i64> for PieceKind {
    type Error = anyhow::Error;
    /// Alias for [`PieceKind::from_selector`].
    fn try_from(selector: i64) -> Result<Self, Self::Error> {
        Self::from_selector(selector)
    }
}

impl FromStr for PieceKind {
    type Err = anyhow::Error;
    /// Parses either a selector (`"1"` through `"7"`) or a name such as `"queen"` or `"black-pawn"`.
    ///
    /// Names are case-insensitive and ignore spaces, dashes, and underscores.
    ///
    /// # Example
    /// ```
    /// # use types::PieceKind;
    /// assert_eq!("2".parse::<PieceKind>().unwrap(), PieceKind::Rook);
    /// assert_eq!("White_Pawn".parse::<PieceKind>().unwrap(), PieceKind::WhitePawn);
    /// assert!("dragon".parse::<PieceKind>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(selector) = s.parse::<i64>() {
            return Self::from_selector(selector);
        }

        let normalized = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "knight" => Ok(Self::Knight),
            "rook" => Ok(Self::Rook),
            "bishop" => Ok(Self::Bishop),
            "queen" => Ok(Self::Queen),
            "king" => Ok(Self::King),
            "whitepawn" => Ok(Self::WhitePawn),
            "blackpawn" => Ok(Self::BlackPawn),
            _ => bail!("Invalid str for PieceKind: Got {s:?}."),
        }
    }
}

impl fmt::Display for PieceKind {
    /// By default, a [`PieceKind`] displays as its human-readable name.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl fmt::Debug for PieceKind {
    /// Debug formatting displays a [`PieceKind`] as its name and selector.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{self}\" ({})", self.selector())
    }
}
