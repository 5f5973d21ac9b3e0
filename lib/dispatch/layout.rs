use crate::chess::{Color, Piece, Role, Square};
use crate::plan::Action;
use serde::{Deserialize, Serialize};

/// Where pieces lifted off the board are kept.
///
/// The holding area lies outside the board, so it is addressed by negative coordinates.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(deny_unknown_fields, rename_all = "lowercase")]
pub enum Holding {
    /// A single coordinate for every piece.
    Shared(i64),

    /// One slot per kind of piece.
    ///
    /// White pieces go to slots -1 through -6, black pieces to slots -7 through -12,
    /// in the order rook, bishop, knight, queen, king, pawn.
    Sorted,
}

impl Default for Holding {
    fn default() -> Self {
        Holding::Shared(-1)
    }
}

impl Holding {
    /// The coordinate in the holding area reserved for a [`Piece`].
    pub fn slot(&self, piece: Piece) -> i64 {
        match *self {
            Holding::Shared(sentinel) => sentinel,
            Holding::Sorted => {
                let offset = match piece.role {
                    Role::Rook => 1,
                    Role::Bishop => 2,
                    Role::Knight => 3,
                    Role::Queen => 4,
                    Role::King => 5,
                    Role::Pawn => 6,
                };

                match piece.color {
                    Color::White => -offset,
                    Color::Black => -offset - 6,
                }
            }
        }
    }
}

/// Maps [`Action`]s to the coordinates understood by the actuator.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(deny_unknown_fields, default)]
pub struct Layout {
    /// Where pieces lifted off the board are kept.
    pub holding: Holding,

    /// The side of the board the actuator faces it from.
    pub perspective: Color,
}

impl Layout {
    /// The coordinate of a [`Square`] as seen by the actuator.
    pub fn square(&self, sq: Square) -> i64 {
        match self.perspective {
            Color::White => sq.index().into(),
            Color::Black => sq.rotate().index().into(),
        }
    }

    /// The coordinate of the holding slot for a [`Piece`] as seen by the actuator.
    ///
    /// Facing the board from black's side swaps the white and black slots.
    pub fn holding(&self, piece: Piece) -> i64 {
        match self.perspective {
            Color::White => self.holding.slot(piece),
            Color::Black => self.holding.slot(Piece::new(!piece.color, piece.role)),
        }
    }

    /// The pair of coordinates the piece is picked up from and put down at.
    pub fn coordinates(&self, action: &Action) -> (i64, i64) {
        match *action {
            Action::Relocate { whence, whither } => (self.square(whence), self.square(whither)),
            Action::Remove { at, piece } => (self.square(at), self.holding(piece)),
            Action::Place { at, piece } => (self.holding(piece), self.square(at)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use test_strategy::proptest;

    #[proptest]
    fn shared_holding_uses_the_same_slot_for_every_piece(s: i64, p: Piece) {
        assert_eq!(Holding::Shared(s).slot(p), s);
    }

    #[test]
    fn sorted_holding_has_a_distinct_negative_slot_per_piece() {
        let mut slots = HashSet::new();

        for color in [Color::White, Color::Black] {
            for role in [Role::Pawn, Role::Knight, Role::Bishop, Role::Rook, Role::Queen, Role::King] {
                let slot = Holding::Sorted.slot(Piece::new(color, role));
                assert!((-12..=-1).contains(&slot));
                assert!(slots.insert(slot));
            }
        }
    }

    #[test]
    fn sorted_holding_matches_firmware_numbering() {
        assert_eq!(Holding::Sorted.slot(Piece::new(Color::White, Role::Rook)), -1);
        assert_eq!(Holding::Sorted.slot(Piece::new(Color::White, Role::Pawn)), -6);
        assert_eq!(Holding::Sorted.slot(Piece::new(Color::Black, Role::Queen)), -10);
        assert_eq!(Holding::Sorted.slot(Piece::new(Color::Black, Role::Pawn)), -12);
    }

    #[proptest]
    fn white_perspective_uses_square_index(sq: Square, h: Holding) {
        let layout = Layout { holding: h, perspective: Color::White };
        assert_eq!(layout.square(sq), i64::from(sq.index()));
    }

    #[proptest]
    fn black_perspective_rotates_the_board(sq: Square, h: Holding) {
        let layout = Layout { holding: h, perspective: Color::Black };
        assert_eq!(layout.square(sq), 63 - i64::from(sq.index()));
    }

    #[proptest]
    fn black_perspective_swaps_sorted_holding_slots(p: Piece) {
        let white = Layout { holding: Holding::Sorted, perspective: Color::White };
        let black = Layout { holding: Holding::Sorted, perspective: Color::Black };
        assert_eq!(black.holding(p), white.holding(Piece::new(!p.color, p.role)));
    }

    #[proptest]
    fn remove_and_place_are_mirror_images(l: Layout, at: Square, piece: Piece) {
        let (a, b) = l.coordinates(&Action::Remove { at, piece });
        assert_eq!(l.coordinates(&Action::Place { at, piece }), (b, a));
    }

    #[test]
    fn layout_is_deserializable() {
        assert_eq!(
            ron::de::from_str("(holding: sorted, perspective: black)"),
            Ok(Layout { holding: Holding::Sorted, perspective: Color::Black })
        );

        assert_eq!(ron::de::from_str("()"), Ok(Layout::default()));
        assert_eq!(
            ron::de::from_str("(holding: shared(-20))"),
            Ok(Layout { holding: Holding::Shared(-20), perspective: Color::White })
        );
    }
}
