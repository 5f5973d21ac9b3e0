use derive_more::{Display, Error};
use shakmaty as sm;
use std::{fmt, str::FromStr};

/// A square on the chess board.
///
/// Squares are numbered rank by rank starting at `a1`, so that `a1` is 0, `h1` is 7 and `h8` is 63.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(u8)]
#[rustfmt::skip]
pub enum Square {
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
}

impl Square {
    /// Every square in ascending order.
    #[rustfmt::skip]
    pub const ALL: [Square; 64] = {
        use Square::*;
        [
            A1, B1, C1, D1, E1, F1, G1, H1,
            A2, B2, C2, D2, E2, F2, G2, H2,
            A3, B3, C3, D3, E3, F3, G3, H3,
            A4, B4, C4, D4, E4, F4, G4, H4,
            A5, B5, C5, D5, E5, F5, G5, H5,
            A6, B6, C6, D6, E6, F6, G6, H6,
            A7, B7, C7, D7, E7, F7, G7, H7,
            A8, B8, C8, D8, E8, F8, G8, H8,
        ]
    };

    /// Constructs [`Square`] from its index, if within `0..64`.
    #[inline(always)]
    pub fn from_index(i: u8) -> Option<Self> {
        Self::ALL.get(usize::from(i)).copied()
    }

    /// Constructs [`Square`] from a pair of file and rank, both in `0..8`.
    #[inline(always)]
    pub fn from_coords(file: u8, rank: u8) -> Option<Self> {
        if file < 8 && rank < 8 {
            Self::from_index(rank * 8 + file)
        } else {
            None
        }
    }

    /// This square's index.
    #[inline(always)]
    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// This square's file, where `a` is 0.
    #[inline(always)]
    pub fn file(&self) -> u8 {
        self.index() & 0b111
    }

    /// This square's rank, where `1` is 0.
    #[inline(always)]
    pub fn rank(&self) -> u8 {
        self.index() >> 3
    }

    /// The square seen from the opposite side of the board.
    #[inline(always)]
    pub fn rotate(&self) -> Self {
        Self::ALL[usize::from(63 - self.index())]
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", char::from(b'a' + self.file()), self.rank() + 1)
    }
}

/// The reason why parsing [`Square`] failed.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[display(fmt = "failed to parse square")]
pub struct ParseSquareError;

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.as_bytes() {
            &[f @ b'a'..=b'h', r @ b'1'..=b'8'] => {
                Square::from_coords(f - b'a', r - b'1').ok_or(ParseSquareError)
            }

            _ => Err(ParseSquareError),
        }
    }
}

#[doc(hidden)]
impl From<sm::Square> for Square {
    fn from(s: sm::Square) -> Self {
        Square::ALL[usize::from(s as u8)]
    }
}

#[doc(hidden)]
impl From<Square> for sm::Square {
    fn from(s: Square) -> Self {
        sm::Square::ALL[usize::from(s.index())]
    }
}
