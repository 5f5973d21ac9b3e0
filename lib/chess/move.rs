use crate::chess::{Role, Square};
use bitflags::bitflags;
use derive_more::{Display, Error};
use shakmaty as sm;
use std::fmt;

bitflags! {
    /// Characteristics of a [`Move`] in the context of the position it is played in.
    #[derive(Default)]
    pub struct MoveKind: u8 {
        const CAPTURE =     0b00000001;
        const CASTLE =      0b00000010;
        const EN_PASSANT =  0b00000100;
    }
}

/// A legal chess move, as validated by the rules of the game.
///
/// Castling is expressed as the king's move, the rook's move is implied.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Move(pub Square, pub Square, pub Option<Role>, pub MoveKind);

impl Move {
    /// A move that neither captures, castles, nor promotes.
    pub fn quiet(whence: Square, whither: Square) -> Self {
        Move(whence, whither, None, MoveKind::empty())
    }

    /// The source [`Square`].
    pub fn whence(&self) -> Square {
        self.0
    }

    /// The destination [`Square`].
    pub fn whither(&self) -> Square {
        self.1
    }

    /// The [`Role`] the pawn is promoted to, if any.
    pub fn promotion(&self) -> Option<Role> {
        self.2
    }

    /// The [`MoveKind`] flags.
    pub fn kind(&self) -> MoveKind {
        self.3
    }

    /// Whether this move captures a piece, including en passant.
    pub fn is_capture(&self) -> bool {
        self.kind().intersects(MoveKind::CAPTURE | MoveKind::EN_PASSANT)
    }

    /// Whether this is a castling move.
    pub fn is_castling(&self) -> bool {
        self.kind().contains(MoveKind::CASTLE)
    }

    /// Whether this is an en passant capture.
    pub fn is_en_passant(&self) -> bool {
        self.kind().contains(MoveKind::EN_PASSANT)
    }

    /// Whether this is a promotion.
    pub fn is_promotion(&self) -> bool {
        self.promotion().is_some()
    }
}

/// Prints the move in [pure coordinate notation].
///
/// [pure coordinate notation]: https://www.chessprogramming.org/Algebraic_Chess_Notation#Pure_coordinate_notation
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.whence(), self.whither())?;

        if let Some(r) = self.promotion() {
            write!(f, "{}", r)?;
        }

        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}, {:?})", self, self.kind())
    }
}

/// The reason why a [`sm::Move`] has no physical counterpart.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "move `{}` is not supported", _0)]
pub struct UnsupportedMove(#[error(not(source))] pub String);

#[doc(hidden)]
impl TryFrom<sm::Move> for Move {
    type Error = UnsupportedMove;

    fn try_from(m: sm::Move) -> Result<Self, Self::Error> {
        match m {
            sm::Move::Normal {
                from,
                capture,
                to,
                promotion,
                ..
            } => {
                let kind = match capture {
                    Some(_) => MoveKind::CAPTURE,
                    None => MoveKind::empty(),
                };

                Ok(Move(from.into(), to.into(), promotion.map(Role::from), kind))
            }

            sm::Move::EnPassant { from, to } => Ok(Move(
                from.into(),
                to.into(),
                None,
                MoveKind::EN_PASSANT,
            )),

            sm::Move::Castle { king, rook } => {
                let king = Square::from(king);
                let rook = Square::from(rook);

                let file = if rook > king { 6 } else { 2 };
                match Square::from_coords(file, king.rank()) {
                    Some(whither) => Ok(Move(king, whither, None, MoveKind::CASTLE)),
                    None => Err(UnsupportedMove(format!("{:?}", m))),
                }
            }

            m => Err(UnsupportedMove(format!("{:?}", m))),
        }
    }
}
