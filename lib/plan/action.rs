use crate::chess::{Board, Collision, Piece, Square};
use arrayvec::ArrayVec;
use derive_more::{Deref, Display, IntoIterator};
use std::fmt;

/// The most actions a single chess move decomposes into, a promotion with capture.
pub const MAX_ACTIONS_PER_MOVE: usize = 4;

/// An atomic physical instruction for the actuator.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Action {
    /// Move a piece from one square to another.
    #[display(fmt = "{}-{}", whence, whither)]
    Relocate { whence: Square, whither: Square },

    /// Lift a piece off the board into the holding area.
    #[display(fmt = "{}x{}", piece, at)]
    Remove { at: Square, piece: Piece },

    /// Bring a piece from the holding area onto the board.
    #[display(fmt = "{}@{}", piece, at)]
    Place { at: Square, piece: Piece },
}

impl Action {
    /// The square this action puts a piece down at, if any.
    pub fn destination(&self) -> Option<Square> {
        match *self {
            Action::Relocate { whither, .. } => Some(whither),
            Action::Remove { .. } => None,
            Action::Place { at, .. } => Some(at),
        }
    }

    /// Carries out this action on a physical [`Board`].
    pub fn perform(&self, board: &mut Board) -> Result<(), Collision> {
        match *self {
            Action::Relocate { whence, whither } => board.shift(whence, whither).map(drop),
            Action::Remove { at, .. } => board.take(at).map(drop),
            Action::Place { at, piece } => board.put(at, piece),
        }
    }
}

/// The ordered [`Action`]s that carry out a single chess move.
#[derive(Debug, Default, Clone, Eq, PartialEq, Hash, Deref, IntoIterator)]
pub struct ActionSequence(
    #[into_iterator(owned, ref)] pub(crate) ArrayVec<Action, MAX_ACTIONS_PER_MOVE>,
);

impl fmt::Display for ActionSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, a) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }

            write!(f, "{}", a)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::{Color, Role};
    use test_strategy::proptest;

    #[proptest]
    fn relocate_shifts_piece(p: Piece, whence: Square, #[filter(#whence != #whither)] whither: Square) {
        let mut board = Board::empty();
        board.put(whence, p)?;

        Action::Relocate { whence, whither }.perform(&mut board)?;
        assert_eq!(board[whence], None);
        assert_eq!(board[whither], Some(p));
    }

    #[proptest]
    fn remove_vacates_square(p: Piece, at: Square) {
        let mut board = Board::empty();
        board.put(at, p)?;

        Action::Remove { at, piece: p }.perform(&mut board)?;
        assert_eq!(board, Board::empty());
    }

    #[proptest]
    fn place_fails_on_occupied_square(p: Piece, q: Piece, at: Square) {
        let mut board = Board::empty();
        board.put(at, p)?;

        assert_eq!(
            Action::Place { at, piece: q }.perform(&mut board),
            Err(Collision::Occupied(at))
        );
    }

    #[proptest]
    fn only_remove_has_no_destination(at: Square, piece: Piece) {
        assert_eq!(Action::Remove { at, piece }.destination(), None);
        assert_eq!(Action::Place { at, piece }.destination(), Some(at));
    }

    #[test]
    fn action_sequence_is_printed_in_order() {
        let pawn = Piece::new(Color::Black, Role::Pawn);
        let actions = ActionSequence(ArrayVec::from_iter([
            Action::Remove { at: Square::D5, piece: pawn },
            Action::Relocate { whence: Square::E4, whither: Square::D5 },
        ]));

        assert_eq!(actions.to_string(), "pxd5 e4-d5");
        assert_eq!(actions.len(), 2);
    }
}
