use crate::chess::{Board, Collision, Move, Piece, Role, Square};
use crate::plan::{Action, ActionSequence};
use arrayvec::ArrayVec;
use derive_more::{Display, Error};
use tracing::{debug, instrument};

/// The reason why a [`Move`] could not be decomposed in the context of a [`Board`].
///
/// This always means the board is out of sync with the game.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum IllegalMoveContext {
    #[display(fmt = "there is no piece to move on `{}`", _0)]
    NoPieceToMove(#[error(not(source))] Square),

    #[display(fmt = "there is no piece to capture on `{}`", _0)]
    NoPieceToCapture(#[error(not(source))] Square),

    #[display(fmt = "square `{}` is obstructed", _0)]
    Obstructed(#[error(not(source))] Square),
}

/// Decomposes a legal [`Move`] into the [`Action`]s that carry it out on the physical board.
///
/// The board must reflect the position before the move is played.
/// Captured pieces are always removed before anything is put down on their square.
#[instrument(level = "trace", err, ret)]
pub fn decompose(m: Move, board: &Board) -> Result<ActionSequence, IllegalMoveContext> {
    use IllegalMoveContext::*;

    let (whence, whither) = (m.whence(), m.whither());
    let piece = board[whence].ok_or(NoPieceToMove(whence))?;
    let mut actions = ArrayVec::new();

    if m.is_castling() {
        let (rook_whence, rook_whither) = if whither > whence {
            (Square::from_coords(7, whence.rank()), whither.file().checked_sub(1))
        } else {
            (Square::from_coords(0, whence.rank()), Some(whither.file() + 1))
        };

        let rook_whence = rook_whence.ok_or(NoPieceToMove(whence))?;
        let rook_whither = rook_whither
            .and_then(|f| Square::from_coords(f, whence.rank()))
            .ok_or(Obstructed(whither))?;

        if board[rook_whence] != Some(Piece::new(piece.color, Role::Rook)) {
            return Err(NoPieceToMove(rook_whence));
        }

        actions.push(Action::Relocate { whence, whither });
        actions.push(Action::Relocate {
            whence: rook_whence,
            whither: rook_whither,
        });
    } else {
        if m.is_capture() {
            let at = if m.is_en_passant() {
                Square::from_coords(whither.file(), whence.rank()).ok_or(NoPieceToCapture(whither))?
            } else {
                whither
            };

            let captured = board[at]
                .filter(|p| p.color != piece.color)
                .ok_or(NoPieceToCapture(at))?;
            actions.push(Action::Remove {
                at,
                piece: captured,
            });
        }

        actions.push(Action::Relocate { whence, whither });

        if let Some(role) = m.promotion() {
            actions.push(Action::Remove { at: whither, piece });
            actions.push(Action::Place {
                at: whither,
                piece: Piece::new(piece.color, role),
            });
        }
    }

    let mut scratch = *board;
    for a in &actions {
        a.perform(&mut scratch).map_err(|c| match c {
            Collision::Vacant(sq) => NoPieceToMove(sq),
            Collision::Occupied(sq) => Obstructed(sq),
        })?;
    }

    debug!(%m, actions = actions.len());
    Ok(ActionSequence(actions))
}
