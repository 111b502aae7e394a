use std::{fmt, str::FromStr};

use anyhow::{bail, Context, Result};

use super::BOARD_SIZE;

/// Represents a square on the board as a `(row, col)` pair.
///
/// Rows grow downward and columns grow rightward, both starting at `0`.
/// A [`Square`] is not guaranteed to lie on the board; use [`Square::is_valid`] to check.
/// This is what allows candidate destinations to be computed first and filtered afterwards.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: i8,
    col: i8,
}

impl Square {
    /// Number of valid squares on the board.
    pub const COUNT: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

    /// Creates a new [`Square`] without checking whether it is on the board.
    ///
    /// # Example
    /// ```
    /// # use types::Square;
    /// let off_board = Square::new(-1, 9);
    /// assert!(!off_board.is_valid());
    /// ```
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Creates a new [`Square`], yielding `None` if it does not lie on the board.
    ///
    /// # Example
    /// ```
    /// # use types::Square;
    /// assert_eq!(Square::checked(3, 4), Some(Square::new(3, 4)));
    /// assert_eq!(Square::checked(8, 0), None);
    /// ```
    pub const fn checked(row: i8, col: i8) -> Option<Self> {
        let square = Self::new(row, col);
        if square.is_valid() {
            Some(square)
        } else {
            None
        }
    }

    /// Creates a new [`Square`] from arbitrary integers, saturating each at the bounds of `i8`.
    ///
    /// Anything that saturates was already far off the board, so validity is preserved.
    ///
    /// # Example
    /// ```
    /// # use types::Square;
    /// assert_eq!(Square::saturating(3, 4), Square::new(3, 4));
    /// assert_eq!(Square::saturating(200, -1000), Square::new(i8::MAX, i8::MIN));
    /// ```
    pub fn saturating(row: i64, col: i64) -> Self {
        let clamp = |x: i64| x.clamp(i8::MIN.into(), i8::MAX.into()) as i8;
        Self::new(clamp(row), clamp(col))
    }

    /// Creates a [`Square`] from a row-major index in `[0,63]`.
    ///
    /// # Example
    /// ```
    /// # use types::Square;
    /// assert_eq!(Square::from_index(10), Some(Square::new(1, 2)));
    /// assert_eq!(Square::from_index(64), None);
    /// ```
    pub const fn from_index(index: usize) -> Option<Self> {
        if index >= Self::COUNT {
            return None;
        }

        let size = BOARD_SIZE as usize;
        Some(Self::new((index / size) as i8, (index % size) as i8))
    }

    /// An iterator over all 64 valid squares, in row-major order starting at `(0, 0)`.
    pub fn iter() -> impl Iterator<Item = Self> {
        (0..Self::COUNT).filter_map(Self::from_index)
    }

    /// Fetches the row of this [`Square`].
    pub const fn row(&self) -> i8 {
        self.row
    }

    /// Fetches the column of this [`Square`].
    pub const fn col(&self) -> i8 {
        self.col
    }

    /// Returns `true` if this [`Square`] lies on the board, meaning both its row and column are in `[0,7]`.
    ///
    /// # Example
    /// ```
    /// # use types::Square;
    /// assert!(Square::new(0, 0).is_valid());
    /// assert!(Square::new(7, 7).is_valid());
    /// assert!(!Square::new(7, 8).is_valid());
    /// assert!(!Square::new(-1, 0).is_valid());
    /// ```
    pub const fn is_valid(&self) -> bool {
        self.row >= 0 && self.row < BOARD_SIZE && self.col >= 0 && self.col < BOARD_SIZE
    }

    /// Returns this [`Square`] as a row-major `usize`, if it lies on the board.
    ///
    /// Useful for indexing into lists of [`Square::COUNT`] elements.
    ///
    /// # Example
    /// ```
    /// # use types::Square;
    /// assert_eq!(Square::new(1, 2).index(), Some(10));
    /// assert_eq!(Square::new(1, -2).index(), None);
    /// ```
    pub const fn index(&self) -> Option<usize> {
        if self.is_valid() {
            Some(self.row as usize * BOARD_SIZE as usize + self.col as usize)
        } else {
            None
        }
    }

    /// Shifts this [`Square`] by the provided deltas, without checking whether the result is on the board.
    ///
    /// Saturates at the bounds of `i8`, which are far off the board anyway.
    pub const fn offset(&self, drow: i8, dcol: i8) -> Self {
        Self::new(self.row.saturating_add(drow), self.col.saturating_add(dcol))
    }

    /// Shifts this [`Square`] by the provided deltas, yielding `None` if the result is off the board.
    ///
    /// # Example
    /// ```
    /// # use types::Square;
    /// let corner = Square::new(0, 0);
    /// assert_eq!(corner.checked_offset(2, 1), Some(Square::new(2, 1)));
    /// assert_eq!(corner.checked_offset(-1, 0), None);
    /// ```
    pub const fn checked_offset(&self, drow: i8, dcol: i8) -> Option<Self> {
        let shifted = self.offset(drow, dcol);
        if shifted.is_valid() {
            Some(shifted)
        } else {
            None
        }
    }

    /// Returns `true` if this [`Square`] is a light square. `(0, 0)` is light.
    pub const fn is_light(&self) -> bool {
        (self.row as i16 + self.col as i16) % 2 == 0
    }
}

impl From<(i8, i8)> for Square {
    fn from((row, col): (i8, i8)) -> Self {
        Self::new(row, col)
    }
}

impl From<Square> for (i8, i8) {
    fn from(square: Square) -> Self {
        (square.row, square.col)
    }
}

impl FromStr for Square {
    type Err = anyhow::Error;
    /// Parses a `row,col` or `row col` pair.
    ///
    /// Off-board pairs parse just fine; only malformed text is an error.
    /// Numbers too large for a [`Square`] saturate, see [`Square::saturating`].
    ///
    /// # Example
    /// ```
    /// # use types::Square;
    /// assert_eq!("3,4".parse::<Square>().unwrap(), Square::new(3, 4));
    /// assert_eq!(" 3   4 ".parse::<Square>().unwrap(), Square::new(3, 4));
    /// assert_eq!("9,-1".parse::<Square>().unwrap(), Square::new(9, -1));
    /// assert!("e4".parse::<Square>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s
            .split(|c: char| c == ',' || c.is_ascii_whitespace())
            .filter(|part| !part.is_empty());

        let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
            bail!("Invalid str for Square: Expected `row,col` or `row col`. Got {s:?}");
        };

        let row = row
            .parse::<i64>()
            .with_context(|| format!("Invalid row for Square: {row:?}"))?;
        let col = col
            .parse::<i64>()
            .with_context(|| format!("Invalid col for Square: {col:?}"))?;

        Ok(Self::saturating(row, col))
    }
}

impl fmt::Display for Square {
    /// A [`Square`] displays as its canonical `row,col` form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validity_matches_bounds() {
        for row in -3..11 {
            for col in -3..11 {
                let expected = (0..8).contains(&row) && (0..8).contains(&col);
                assert_eq!(Square::new(row, col).is_valid(), expected, "({row}, {col})");
            }
        }
    }

    #[test]
    fn test_iter_covers_board_in_order() {
        let squares = Square::iter().collect::<Vec<_>>();
        assert_eq!(squares.len(), Square::COUNT);
        assert_eq!(squares.first(), Some(&Square::new(0, 0)));
        assert_eq!(squares.last(), Some(&Square::new(7, 7)));

        for (i, square) in squares.iter().enumerate() {
            assert_eq!(square.index(), Some(i));
        }
    }

    #[test]
    fn test_display_parses_back() {
        for square in Square::iter() {
            assert_eq!(square.to_string().parse::<Square>().unwrap(), square);
        }
    }

    #[test]
    fn test_malformed_square_strs() {
        for s in ["", "3", "3,4,5", "a,b", "3;4", "1.5,2"] {
            assert!(s.parse::<Square>().is_err(), "{s:?} should not parse");
        }
    }

    #[test]
    fn test_huge_coordinates_are_off_board() {
        let square = "200 0".parse::<Square>().unwrap();
        assert_eq!(square, Square::new(i8::MAX, 0));
        assert!(!square.is_valid());

        let square = "-99999999999,3".parse::<Square>().unwrap();
        assert_eq!(square, Square::new(i8::MIN, 3));
        assert!(!square.is_valid());
    }

    #[test]
    fn test_offset_saturates() {
        let far = Square::new(i8::MAX, i8::MIN).offset(1, -1);
        assert_eq!(far, Square::new(i8::MAX, i8::MIN));
        assert!(!far.is_valid());
    }

    #[test]
    fn test_light_squares() {
        assert!(Square::new(0, 0).is_light());
        assert!(!Square::new(0, 1).is_light());
        assert!(Square::new(7, 7).is_light());
    }
}
