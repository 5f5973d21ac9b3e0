use crate::chess::{Color, Role};
use derive_more::Constructor;
use shakmaty as sm;
use std::fmt::{self, Formatter, Write};

/// A chess [piece][`Role`] of a certain [`Color`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Constructor)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Piece {
    pub color: Color,
    pub role: Role,
}

/// Prints the piece as in FEN, uppercase for white and lowercase for black.
impl fmt::Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let c = match self.role {
            Role::Pawn => 'p',
            Role::Knight => 'n',
            Role::Bishop => 'b',
            Role::Rook => 'r',
            Role::Queen => 'q',
            Role::King => 'k',
        };

        match self.color {
            Color::White => f.write_char(c.to_ascii_uppercase()),
            Color::Black => f.write_char(c),
        }
    }
}

#[doc(hidden)]
impl From<sm::Piece> for Piece {
    fn from(p: sm::Piece) -> Self {
        Piece::new(p.color.into(), p.role.into())
    }
}

#[doc(hidden)]
impl From<Piece> for sm::Piece {
    fn from(p: Piece) -> Self {
        sm::Piece {
            color: p.color.into(),
            role: p.role.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn piece_has_an_equivalent_shakmaty_representation(p: Piece) {
        assert_eq!(Piece::from(sm::Piece::from(p)), p);
    }

    #[proptest]
    fn piece_is_printed_as_in_fen(p: Piece) {
        assert_eq!(p.to_string(), sm::Piece::from(p).char().to_string());
    }
}
