use crate::chess::{Piece, Square};
use derive_more::{Display, Error};
use shakmaty as sm;
use std::{fmt, ops::Index};

#[cfg(test)]
use proptest::{prelude::*, sample::Selector};

/// The reason why a physical [`Board`] could not carry out an action.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum Collision {
    #[display(fmt = "there is no piece on `{}`", _0)]
    Vacant(#[error(not(source))] Square),

    #[display(fmt = "square `{}` is already occupied", _0)]
    Occupied(#[error(not(source))] Square),
}

/// The placement of pieces on a physical board.
///
/// Unlike a chess position, this carries no notion of turn or move history,
/// it only knows which piece stands on which square.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Board(
    #[cfg_attr(test, strategy((0..64usize, any::<Selector>()).prop_map(|(plies, selector)| {
        let mut chess = sm::Chess::default();
        for _ in 0..plies {
            match selector.try_select(sm::Position::legal_moves(&chess)) {
                Some(m) => sm::Position::play_unchecked(&mut chess, &m),
                None => break,
            }
        }

        Board::from(sm::Position::board(&chess)).0
    }).no_shrink()))]
    [Option<Piece>; 64],
);

impl Board {
    /// A board without any pieces.
    pub fn empty() -> Self {
        Board([None; 64])
    }

    /// The [`Piece`] on a given [`Square`], if any.
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.0[usize::from(sq.index())]
    }

    /// Places a [`Piece`] on a vacant [`Square`].
    pub fn put(&mut self, sq: Square, p: Piece) -> Result<(), Collision> {
        match self.piece_at(sq) {
            Some(_) => Err(Collision::Occupied(sq)),
            None => {
                self.0[usize::from(sq.index())] = Some(p);
                Ok(())
            }
        }
    }

    /// Lifts the [`Piece`] off a [`Square`].
    pub fn take(&mut self, sq: Square) -> Result<Piece, Collision> {
        self.0[usize::from(sq.index())]
            .take()
            .ok_or(Collision::Vacant(sq))
    }

    /// Moves the [`Piece`] on one [`Square`] to another that is vacant.
    pub fn shift(&mut self, whence: Square, whither: Square) -> Result<Piece, Collision> {
        if self.piece_at(whither).is_some() {
            return Err(Collision::Occupied(whither));
        }

        let p = self.take(whence)?;
        self.put(whither, p)?;
        Ok(p)
    }

    /// An iterator over the occupied squares.
    pub fn iter(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::ALL
            .into_iter()
            .filter_map(|sq| Some((sq, self.piece_at(sq)?)))
    }
}

/// The starting position.
impl Default for Board {
    fn default() -> Self {
        Board::from(&sm::Board::default())
    }
}

impl Index<Square> for Board {
    type Output = Option<Piece>;

    fn index(&self, sq: Square) -> &Self::Output {
        &self.0[usize::from(sq.index())]
    }
}

/// Prints the placement field of the FEN.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            let mut gap = 0;

            for file in 0..8 {
                match Square::from_coords(file, rank).and_then(|sq| self.piece_at(sq)) {
                    None => gap += 1,
                    Some(p) => {
                        if gap > 0 {
                            write!(f, "{}", gap)?;
                            gap = 0;
                        }

                        write!(f, "{}", p)?;
                    }
                }
            }

            if gap > 0 {
                write!(f, "{}", gap)?;
            }

            if rank > 0 {
                f.write_str("/")?;
            }
        }

        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

#[doc(hidden)]
impl From<&sm::Board> for Board {
    fn from(b: &sm::Board) -> Self {
        let mut board = Board::empty();

        for sq in Square::ALL {
            board.0[usize::from(sq.index())] = b.piece_at(sq.into()).map(Piece::from);
        }

        board
    }
}
